use crate::painting::path::PathOp;
use crate::surface::{Cell, CellAdvance, ImageHandle, PageSurface};
use crate::LayoutError;
use docket_types::{Alignment, BorderSides, Color, Point};

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCell {
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub text: String,
    pub border: BorderSides,
    pub align: Alignment,
    pub fill: bool,
    pub bold: bool,
    pub fill_color: Color,
}

impl RecordedCell {
    pub fn is_header(&self) -> bool {
        self.bold && self.border == BorderSides::ALL
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    BeginPage(usize),
    Cell(RecordedCell),
    LineBreak(f32),
    Line { page: usize, from: Point, to: Point },
    Path(Vec<PathOp>),
    Image { id: usize, x: f32, y: f32, width: f32, height: f32 },
}

/// A `PageSurface` that records every call, with A4-in-millimetre geometry.
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
    pub trigger: f32,
    page: usize,
    x: f32,
    y: f32,
    fill_color: Color,
    bold: bool,
}

impl RecordingSurface {
    /// A surface with its first page already open.
    pub fn with_trigger(trigger: f32) -> Self {
        Self {
            events: Vec::new(),
            trigger,
            page: 1,
            x: MARGIN,
            y: MARGIN,
            fill_color: Color::BLACK,
            bold: false,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &RecordedCell> {
        self.events.iter().filter_map(|e| match e {
            SurfaceEvent::Cell(c) => Some(c),
            _ => None,
        })
    }

    pub fn header_cells(&self) -> Vec<&RecordedCell> {
        self.cells().filter(|c| c.is_header()).collect()
    }

    /// Data rows as groups of `columns` consecutive non-header cells.
    pub fn data_rows(&self, columns: usize) -> Vec<Vec<RecordedCell>> {
        let cells: Vec<RecordedCell> = self.cells().filter(|c| !c.is_header()).cloned().collect();
        cells.chunks(columns).map(|chunk| chunk.to_vec()).collect()
    }

    pub fn page_breaks(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::BeginPage(_)))
            .count()
    }

    pub fn lines(&self) -> Vec<(usize, Point, Point)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Line { page, from, to } => Some((*page, *from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl PageSurface for RecordingSurface {
    fn begin_page(&mut self) -> Result<(), LayoutError> {
        self.page += 1;
        self.x = MARGIN;
        self.y = MARGIN;
        self.events.push(SurfaceEvent::BeginPage(self.page));
        Ok(())
    }

    fn page_number(&self) -> usize {
        self.page
    }

    fn cursor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_x(&mut self, x: f32) {
        self.x = if x >= 0.0 { x } else { PAGE_WIDTH + x };
    }

    fn set_y(&mut self, y: f32) {
        self.x = MARGIN;
        self.y = if y >= 0.0 { y } else { PAGE_HEIGHT + y };
    }

    fn left_margin(&self) -> f32 {
        MARGIN
    }

    fn page_break_trigger(&self) -> f32 {
        self.trigger
    }

    fn draw_cell(&mut self, cell: &Cell<'_>) -> Result<(), LayoutError> {
        let width = if cell.width == 0.0 {
            PAGE_WIDTH - MARGIN - self.x
        } else {
            cell.width
        };
        self.events.push(SurfaceEvent::Cell(RecordedCell {
            page: self.page,
            x: self.x,
            y: self.y,
            width,
            height: cell.height,
            text: cell.text.to_string(),
            border: cell.border,
            align: cell.align,
            fill: cell.fill,
            bold: self.bold,
            fill_color: self.fill_color,
        }));
        match cell.advance {
            CellAdvance::Right => self.x += width,
            CellAdvance::NextLine => {
                self.x = MARGIN;
                self.y += cell.height;
            }
            CellAdvance::Below => self.y += cell.height,
        }
        Ok(())
    }

    fn line_break(&mut self, height: f32) {
        self.x = MARGIN;
        self.y += height;
        self.events.push(SurfaceEvent::LineBreak(height));
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), LayoutError> {
        self.events.push(SurfaceEvent::Line {
            page: self.page,
            from,
            to,
        });
        Ok(())
    }

    fn draw_path(&mut self, ops: &[PathOp]) -> Result<(), LayoutError> {
        self.events.push(SurfaceEvent::Path(ops.to_vec()));
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    fn is_bold(&self) -> bool {
        self.bold
    }

    fn place_image(
        &mut self,
        image: &ImageHandle,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), LayoutError> {
        self.events.push(SurfaceEvent::Image {
            id: image.id,
            x,
            y,
            width,
            height,
        });
        Ok(())
    }
}
