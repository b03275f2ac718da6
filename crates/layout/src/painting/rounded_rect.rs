use super::path::{PaintStyle, PathOp, YAxis};
use crate::ConfigurationError;
use docket_types::{Point, Rect};

/// Control-point distance, as a fraction of the radius, for a cubic Bézier
/// approximating a quarter circle.
pub const QUARTER_ARC_KAPPA: f32 = 4.0 / 3.0 * (std::f32::consts::SQRT_2 - 1.0);

/// A rectangle with four identical quarter-circle corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radius: f32,
    pub style: PaintStyle,
}

impl RoundedRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32, radius: f32, style: PaintStyle) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            radius,
            style,
        }
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        let Rect { width, height, .. } = self.rect;
        if !self.rect.is_finite() || !self.radius.is_finite() {
            return Err(ConfigurationError::InvalidGeometry(format!(
                "rounded rectangle has non-finite geometry: {:?}, radius {}",
                self.rect, self.radius
            )));
        }
        if width < 0.0 || height < 0.0 {
            return Err(ConfigurationError::InvalidGeometry(format!(
                "rounded rectangle has negative size {width} x {height}"
            )));
        }
        if self.radius < 0.0 {
            return Err(ConfigurationError::InvalidGeometry(format!(
                "corner radius {} is negative",
                self.radius
            )));
        }
        if 2.0 * self.radius > width.min(height) {
            return Err(ConfigurationError::InvalidGeometry(format!(
                "corner radius {} does not fit a {width} x {height} rectangle",
                self.radius
            )));
        }
        Ok(())
    }
}

/// Builds the closed outline of a rounded rectangle.
///
/// The path starts at `(x + r, y)` and runs clockwise on the page: top edge
/// left to right, right edge downwards, bottom edge right to left, left edge
/// upwards, with a Bézier corner after each edge. It ends back on the start
/// point, followed by a single `Paint` op.
pub fn build_rounded_rect(shape: &RoundedRect, axis: YAxis) -> Result<Vec<PathOp>, ConfigurationError> {
    shape.validate()?;

    let Rect { x, y, width: w, height: h } = shape.rect;
    let r = shape.radius;
    let k = r * QUARTER_ARC_KAPPA;
    let p = |px: f32, py: f32| axis.apply(Point::new(px, py));
    let curve = |c1: (f32, f32), c2: (f32, f32), end: (f32, f32)| PathOp::CurveTo {
        c1: p(c1.0, c1.1),
        c2: p(c2.0, c2.1),
        end: p(end.0, end.1),
    };

    let (left, right, top, bottom) = (x, x + w, y, y + h);

    Ok(vec![
        PathOp::MoveTo(p(left + r, top)),
        // top edge, top-right corner
        PathOp::LineTo(p(right - r, top)),
        curve((right - r + k, top), (right, top + r - k), (right, top + r)),
        // right edge, bottom-right corner
        PathOp::LineTo(p(right, bottom - r)),
        curve((right, bottom - r + k), (right - r + k, bottom), (right - r, bottom)),
        // bottom edge, bottom-left corner
        PathOp::LineTo(p(left + r, bottom)),
        curve((left + r - k, bottom), (left, bottom - r + k), (left, bottom - r)),
        // left edge, top-left corner
        PathOp::LineTo(p(left, top + r)),
        curve((left, top + r - k), (left + r - k, top), (left + r, top)),
        PathOp::Paint(shape.style),
    ])
}
