//! Static text blocks: plain line lists, bold titles, label/value lists and
//! rounded text boxes.

use crate::painting::path::{PaintStyle, YAxis};
use crate::painting::rounded_rect::{build_rounded_rect, RoundedRect};
use crate::surface::{Cell, CellAdvance, PageSurface};
use crate::LayoutError;
use docket_types::{Alignment, BorderSides};

const TEXT_LIST_WIDTH: f32 = 40.0;
const TITLE_WIDTH: f32 = 35.0;

/// Layout of a label/value list such as invoice totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelListStyle {
    pub line_height: f32,
    pub label_width: f32,
    pub value_width: f32,
    /// Only the value follows this; labels are always right-aligned.
    pub value_align: Alignment,
    pub border: bool,
    /// Fill the label cell with the surface's current fill color.
    pub label_fill: bool,
}

impl Default for LabelListStyle {
    fn default() -> Self {
        Self {
            line_height: 5.0,
            label_width: 35.0,
            value_width: 35.0,
            value_align: Alignment::Left,
            border: false,
            label_fill: false,
        }
    }
}

/// One unbordered, left-aligned line per entry, starting at `(x, y)`.
pub fn add_text_list<S, T>(
    surface: &mut S,
    x: f32,
    y: f32,
    lines: &[T],
    line_height: f32,
) -> Result<(), LayoutError>
where
    S: PageSurface + ?Sized,
    T: AsRef<str>,
{
    surface.set_y(y);
    for line in lines {
        surface.set_x(x);
        let cell = Cell::new(TEXT_LIST_WIDTH, line_height, line.as_ref()).advance(CellAdvance::NextLine);
        surface.draw_cell(&cell)?;
    }
    Ok(())
}

pub fn add_bold_title<S: PageSurface + ?Sized>(
    surface: &mut S,
    x: f32,
    y: f32,
    title: &str,
    line_height: f32,
) -> Result<(), LayoutError> {
    let was_bold = surface.is_bold();
    surface.set_cursor(x, y);
    surface.set_bold(true);
    let cell = Cell::new(TITLE_WIDTH, line_height, title).advance(CellAdvance::NextLine);
    let drawn = surface.draw_cell(&cell);
    surface.set_bold(was_bold);
    drawn
}

/// A bold right-aligned label next to its value, one entry per line, in
/// input order. A negative `x` is measured from the right page edge.
pub fn add_text_list_with_labels<S, L, V>(
    surface: &mut S,
    x: f32,
    y: f32,
    entries: &[(L, V)],
    style: &LabelListStyle,
) -> Result<(), LayoutError>
where
    S: PageSurface + ?Sized,
    L: AsRef<str>,
    V: AsRef<str>,
{
    let border = if style.border {
        BorderSides::ALL
    } else {
        BorderSides::NONE
    };
    let was_bold = surface.is_bold();

    surface.set_y(y);
    for (label, value) in entries {
        surface.set_x(x);
        surface.set_bold(true);
        let label_cell = Cell::new(style.label_width, style.line_height, label.as_ref())
            .border(border)
            .align(Alignment::Right)
            .fill(style.label_fill);
        surface.draw_cell(&label_cell)?;

        surface.set_bold(false);
        let value_cell = Cell::new(style.value_width, style.line_height, value.as_ref())
            .border(border)
            .align(style.value_align)
            .advance(CellAdvance::NextLine);
        surface.draw_cell(&value_cell)?;
    }
    surface.set_bold(was_bold);
    Ok(())
}

/// A rounded box tall enough for `lines` plus two lines of padding, with
/// the lines inset from its top-left corner.
///
/// Leaves the cursor three line heights below the last line of text.
#[allow(clippy::too_many_arguments)]
pub fn rounded_rect_text_box<S, T>(
    surface: &mut S,
    x: f32,
    y: f32,
    width: f32,
    lines: &[T],
    radius: f32,
    style: PaintStyle,
    line_height: f32,
) -> Result<(), LayoutError>
where
    S: PageSurface + ?Sized,
    T: AsRef<str>,
{
    let height = line_height * lines.len() as f32 + 2.0 * line_height;
    let shape = RoundedRect::new(x, y, width, height, radius, style);
    let path = build_rounded_rect(&shape, YAxis::TopDown)?;
    surface.draw_path(&path)?;

    let text_x = x + 0.1 * width;
    let text_y = y + 0.16 * height;
    add_text_list(surface, text_x, text_y, lines, line_height)?;

    let below = surface.cursor().y + 3.0 * line_height;
    surface.set_y(below);
    Ok(())
}
