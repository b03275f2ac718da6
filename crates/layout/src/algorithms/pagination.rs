pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized check for whether a table row still fits as an open row.
///
/// * `cursor_y`: the current absolute Y position on the page.
/// * `row_height`: height of one row.
/// * `lookahead_rows`: how many rows of room must remain below the cursor.
/// * `trigger`: the page-break trigger of the surface.
///
/// The row itself is drawn either way; `should_break` only says it must be the
/// last row on this page and close the table box.
pub fn check_row_fit(cursor_y: f32, row_height: f32, lookahead_rows: f32, trigger: f32) -> BreakAnalysis {
    BreakAnalysis {
        should_break: cursor_y + lookahead_rows * row_height >= trigger,
        remaining_height: (trigger - cursor_y).max(0.0),
    }
}
