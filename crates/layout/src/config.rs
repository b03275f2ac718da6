use docket_types::Color;
use serde::{Deserialize, Serialize};

/// Visual and pagination settings for one paginated table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableStyle {
    /// Height of the header row and of every data row.
    ///
    /// Rows are single-line; a row taller than a page is not supported.
    ///
    /// Defaults to `5.0`.
    pub row_height: f32,

    /// Background of the header row, repeated on every page.
    pub header_fill: Color,

    /// Background of every other data row.
    pub band_fill: Color,

    /// Where the table resumes (before its repeated header) after a page break.
    ///
    /// Defaults to `40.0`, just below the page header zone of an invoice.
    pub continuation_top: f32,

    /// How many row heights of room must remain below the cursor for a row to be
    /// drawn as an ordinary open row.
    ///
    /// - **Higher values**: pages end earlier, leaving more space above the footer.
    /// - **Lower values**: denser pages. Must be at least `1.0`; a row that would
    ///   still cross the trigger is moved to the next page instead.
    ///
    /// Defaults to `2.0`.
    pub lookahead_rows: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            row_height: 5.0,
            header_fill: Color::rgb(0x94, 0xb8, 0xb8),
            band_fill: Color::rgb(0xc2, 0xc2, 0xa3),
            continuation_top: 40.0,
            lookahead_rows: 2.0,
        }
    }
}
