use docket_types::Point;

/// How a finished path is painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaintStyle {
    #[default]
    Stroke,
    Fill,
    FillThenStroke,
}

impl PaintStyle {
    /// The PDF path-painting operator for this style.
    pub fn operator(self) -> &'static str {
        match self {
            PaintStyle::Stroke => "S",
            PaintStyle::Fill => "f",
            PaintStyle::FillThenStroke => "B",
        }
    }
}

/// One segment (or the final paint) of a vector path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    CurveTo { c1: Point, c2: Point, end: Point },
    Paint(PaintStyle),
}

impl PathOp {
    /// The point the pen rests at after this op, if it moves the pen.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathOp::MoveTo(p) | PathOp::LineTo(p) => Some(p),
            PathOp::CurveTo { end, .. } => Some(end),
            PathOp::Paint(_) => None,
        }
    }

    /// Applies `f` to every coordinate carried by this op.
    pub fn map_points(self, mut f: impl FnMut(Point) -> Point) -> PathOp {
        match self {
            PathOp::MoveTo(p) => PathOp::MoveTo(f(p)),
            PathOp::LineTo(p) => PathOp::LineTo(f(p)),
            PathOp::CurveTo { c1, c2, end } => PathOp::CurveTo {
                c1: f(c1),
                c2: f(c2),
                end: f(end),
            },
            paint @ PathOp::Paint(_) => paint,
        }
    }
}

/// Orientation of the y axis a path is emitted in.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum YAxis {
    /// Layout coordinates: origin at the top-left, y grows downwards.
    #[default]
    TopDown,
    /// PDF content-stream coordinates: every y becomes `page_height - y`.
    BottomUp { page_height: f32 },
}

impl YAxis {
    pub fn apply(self, p: Point) -> Point {
        match self {
            YAxis::TopDown => p,
            YAxis::BottomUp { page_height } => Point::new(p.x, page_height - p.y),
        }
    }
}
