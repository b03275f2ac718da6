//! The page-description primitive the layout helpers draw through.
//!
//! Layout code never talks to a PDF library directly. It holds a
//! `&mut impl PageSurface` and issues cell, line and path commands in
//! top-down page coordinates (y grows towards the bottom of the page),
//! which keeps every layout decision testable with a recording surface.

use crate::LayoutError;
use crate::painting::path::PathOp;
use docket_types::{Alignment, BorderSides, Color, Point};

/// Where the cursor goes after a cell has been drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellAdvance {
    /// Stay on the same line, just right of the cell.
    #[default]
    Right,
    /// Back to the left margin, one cell height down.
    NextLine,
    /// Same x as the cell, one cell height down.
    Below,
}

/// A single bordered/filled rectangular text region.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<'t> {
    pub width: f32,
    pub height: f32,
    pub text: &'t str,
    pub border: BorderSides,
    pub align: Alignment,
    pub fill: bool,
    pub advance: CellAdvance,
}

impl<'t> Cell<'t> {
    pub fn new(width: f32, height: f32, text: &'t str) -> Self {
        Self {
            width,
            height,
            text,
            border: BorderSides::NONE,
            align: Alignment::Left,
            fill: false,
            advance: CellAdvance::Right,
        }
    }

    pub fn border(mut self, border: BorderSides) -> Self {
        self.border = border;
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub fn advance(mut self, advance: CellAdvance) -> Self {
        self.advance = advance;
        self
    }
}

/// An image registered with a surface, placeable on any page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    pub id: usize,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl ImageHandle {
    /// Width that keeps the image's aspect ratio at the given height.
    pub fn width_for_height(&self, height: f32) -> f32 {
        if self.pixel_height == 0 {
            return 0.0;
        }
        height * self.pixel_width as f32 / self.pixel_height as f32
    }

    pub fn height_for_width(&self, width: f32) -> f32 {
        if self.pixel_width == 0 {
            return 0.0;
        }
        width * self.pixel_height as f32 / self.pixel_width as f32
    }
}

/// A trait for page surfaces, abstracting the PDF-writing primitives.
///
/// Coordinates are in the surface's user unit, measured from the top-left
/// corner of the page.
pub trait PageSurface {
    /// Closes the current page (if any) and starts a new one with the cursor
    /// at the top-left margin.
    fn begin_page(&mut self) -> Result<(), LayoutError>;

    /// One-based number of the current page; `0` before the first page.
    fn page_number(&self) -> usize;

    fn cursor(&self) -> Point;

    fn set_cursor(&mut self, x: f32, y: f32) {
        self.set_y(y);
        self.set_x(x);
    }

    /// A negative `x` is measured from the right edge of the page.
    fn set_x(&mut self, x: f32);

    /// Moves to `y` and resets x to the left margin. A negative `y` is
    /// measured from the bottom edge of the page.
    fn set_y(&mut self, y: f32);

    fn left_margin(&self) -> f32;

    /// The y coordinate below which content must not be placed.
    fn page_break_trigger(&self) -> f32;

    fn draw_cell(&mut self, cell: &Cell<'_>) -> Result<(), LayoutError>;

    /// Returns x to the left margin and moves y down by `height`.
    fn line_break(&mut self, height: f32);

    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), LayoutError>;

    /// Emits a path built in top-down page coordinates.
    fn draw_path(&mut self, ops: &[PathOp]) -> Result<(), LayoutError>;

    fn set_fill_color(&mut self, color: Color);

    fn fill_color(&self) -> Color;

    fn set_bold(&mut self, bold: bool);

    fn is_bold(&self) -> bool;

    fn place_image(
        &mut self,
        image: &ImageHandle,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), LayoutError>;
}
