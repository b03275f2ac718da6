use super::node::TableReport;
use super::spec::TableView;
use crate::algorithms::pagination::check_row_fit;
use crate::config::TableStyle;
use crate::surface::{Cell, PageSurface};
use crate::LayoutError;
use docket_types::{Alignment, BorderSides, Point};

/// The only mutable geometry threaded through one table render.
///
/// `x` is the table's left edge; every row, header and rule starts there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub x: f32,
    pub y: f32,
    pub page_break_trigger: f32,
    pub row_height: f32,
}

impl LayoutCursor {
    fn at<S: PageSurface + ?Sized>(surface: &S, origin: Point, row_height: f32) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            page_break_trigger: surface.page_break_trigger(),
            row_height,
        }
    }

    /// Whether `rows` more rows fit between the cursor and the trigger.
    fn fits(&self, rows: f32) -> bool {
        self.y + rows * self.row_height <= self.page_break_trigger
    }
}

/// Drives one table across as many pages as it needs.
///
/// Owned by a single `TableRenderer::render` call and consumed by `run`.
pub struct TablePagination<'a, S: PageSurface + ?Sized> {
    surface: &'a mut S,
    table: TableView<'a>,
    style: &'a TableStyle,
    cursor: LayoutCursor,
    filled: bool,
    report: TableReport,
}

impl<'a, S: PageSurface + ?Sized> TablePagination<'a, S> {
    pub fn new(surface: &'a mut S, table: TableView<'a>, style: &'a TableStyle, origin: Point) -> Self {
        let cursor = LayoutCursor::at(&*surface, origin, style.row_height);
        Self {
            surface,
            table,
            style,
            cursor,
            filled: true,
            report: TableReport::default(),
        }
    }

    pub fn run(mut self) -> Result<TableReport, LayoutError> {
        self.surface.set_cursor(self.cursor.x, self.cursor.y);
        // edge-relative origins are resolved by the surface
        let Point { x, y } = self.surface.cursor();
        self.cursor.x = x;
        self.cursor.y = y;

        // The header never sits alone at the bottom of a page.
        let opening_rows = if self.table.rows.is_empty() { 1.0 } else { 2.0 };
        if !self.cursor.fits(opening_rows) {
            log::debug!(
                "Table header at y={:.2} has no room before trigger {:.2}, starting on page {}",
                self.cursor.y,
                self.cursor.page_break_trigger,
                self.surface.page_number() + 1
            );
            self.start_new_page()?;
        }
        self.emit_header()?;

        let rows = self.table.rows;
        let last_index = rows.len().saturating_sub(1);
        for (index, row) in rows.iter().enumerate() {
            self.return_to_left_edge();

            if !self.cursor.fits(1.0) {
                log::debug!(
                    "Table row {} does not fit on page {} at y={:.2}, closing the page first",
                    index,
                    self.surface.page_number(),
                    self.cursor.y
                );
                self.draw_rule()?;
                self.continue_on_new_page()?;
                self.return_to_left_edge();
            }

            let fit = check_row_fit(
                self.cursor.y,
                self.cursor.row_height,
                self.style.lookahead_rows,
                self.cursor.page_break_trigger,
            );

            // The final row is followed by the closing rule instead of a page break,
            // so the table never ends on a page holding nothing but its header.
            if fit.should_break && index != last_index {
                log::debug!(
                    "Table row {} closes page {} at y={:.2} ({:.2} left before trigger {:.2})",
                    index,
                    self.surface.page_number(),
                    self.cursor.y,
                    fit.remaining_height,
                    self.cursor.page_break_trigger
                );
                self.emit_row(row, BorderSides::SIDES_AND_BOTTOM)?;
                self.continue_on_new_page()?;
            } else {
                self.emit_row(row, BorderSides::SIDES)?;
            }
            self.filled = !self.filled;
        }

        self.return_to_left_edge();
        self.report.end_y = self.draw_rule()?;
        Ok(self.report)
    }

    fn return_to_left_edge(&mut self) {
        self.surface.set_x(self.cursor.x);
        self.cursor.y = self.surface.cursor().y;
        self.cursor.page_break_trigger = self.surface.page_break_trigger();
    }

    fn emit_header(&mut self) -> Result<(), LayoutError> {
        let row_height = self.cursor.row_height;
        self.surface.set_x(self.cursor.x);
        self.surface.set_fill_color(self.style.header_fill);
        self.surface.set_bold(true);
        for (text, column) in self.table.headers.iter().zip(self.table.columns) {
            let cell = Cell::new(column.width, row_height, text)
                .border(BorderSides::ALL)
                .align(Alignment::Center)
                .fill(true);
            self.surface.draw_cell(&cell)?;
        }
        self.surface.set_fill_color(self.style.band_fill);
        self.surface.set_bold(false);
        self.surface.line_break(row_height);
        self.report.headers_drawn += 1;
        Ok(())
    }

    fn emit_row(&mut self, row: &[String], border: BorderSides) -> Result<(), LayoutError> {
        let row_height = self.cursor.row_height;
        for (text, column) in row.iter().zip(self.table.columns) {
            let cell = Cell::new(column.width, row_height, text)
                .border(border)
                .align(column.align)
                .fill(self.filled);
            self.surface.draw_cell(&cell)?;
        }
        self.surface.line_break(row_height);
        self.report.rows_drawn += 1;
        Ok(())
    }

    fn start_new_page(&mut self) -> Result<(), LayoutError> {
        self.surface.begin_page()?;
        self.surface.set_y(self.style.continuation_top);
        self.report.page_breaks += 1;
        self.return_to_left_edge();
        Ok(())
    }

    fn continue_on_new_page(&mut self) -> Result<(), LayoutError> {
        self.start_new_page()?;
        self.emit_header()
    }

    /// Horizontal rule across the table at the cursor; returns its y.
    fn draw_rule(&mut self) -> Result<f32, LayoutError> {
        let y = self.cursor.y;
        let from = Point::new(self.cursor.x, y);
        let to = Point::new(self.cursor.x + self.table.total_width(), y);
        self.surface.draw_line(from, to)?;
        Ok(y)
    }
}
