use super::pagination::TablePagination;
use super::spec::{ColumnSpec, TableSpec, TableView};
use crate::config::TableStyle;
use crate::surface::PageSurface;
use crate::{ConfigurationError, LayoutError};
use docket_types::Point;

/// What a table render did, for callers that keep laying out below it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TableReport {
    pub rows_drawn: usize,
    pub headers_drawn: usize,
    pub page_breaks: usize,
    /// Y of the closing rule on the final page.
    pub end_y: f32,
}

/// Renders auto-paginating tables onto a `PageSurface`.
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    style: TableStyle,
}

impl TableRenderer {
    pub fn new(style: TableStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    pub fn render<S: PageSurface + ?Sized>(
        &self,
        surface: &mut S,
        origin: Point,
        table: &TableSpec,
    ) -> Result<TableReport, LayoutError> {
        self.render_view(surface, origin, table.view())
    }

    /// Validates everything up front, so a rejected table leaves the surface untouched.
    pub fn render_view<S: PageSurface + ?Sized>(
        &self,
        surface: &mut S,
        origin: Point,
        table: TableView<'_>,
    ) -> Result<TableReport, LayoutError> {
        table.validate()?;
        self.validate_style()?;
        if !origin.is_finite() {
            return Err(ConfigurationError::InvalidGeometry(format!("table origin {origin:?} is not finite")).into());
        }

        let report = TablePagination::new(surface, table, &self.style, origin).run()?;
        log::debug!(
            "Table finished: {} rows, {} page breaks, closing rule at y={:.2}",
            report.rows_drawn,
            report.page_breaks,
            report.end_y
        );
        Ok(report)
    }

    fn validate_style(&self) -> Result<(), ConfigurationError> {
        let TableStyle {
            row_height,
            lookahead_rows,
            continuation_top,
            ..
        } = self.style;
        if !row_height.is_finite() || row_height <= 0.0 {
            return Err(ConfigurationError::InvalidGeometry(format!(
                "row height must be positive, got {row_height}"
            )));
        }
        if !lookahead_rows.is_finite() || lookahead_rows < 1.0 {
            return Err(ConfigurationError::InvalidGeometry(format!(
                "lookahead must be at least one row, got {lookahead_rows}"
            )));
        }
        if !continuation_top.is_finite() {
            return Err(ConfigurationError::InvalidGeometry(format!(
                "continuation top {continuation_top} is not finite"
            )));
        }
        Ok(())
    }
}

/// Draws `headers` and `rows` at `origin`, breaking pages as needed.
pub fn render_table<S: PageSurface + ?Sized>(
    surface: &mut S,
    origin: Point,
    headers: &[String],
    rows: &[Vec<String>],
    columns: &[ColumnSpec],
    style: &TableStyle,
) -> Result<TableReport, LayoutError> {
    let view = TableView {
        headers,
        rows,
        columns,
    };
    TableRenderer::new(*style).render_view(surface, origin, view)
}
