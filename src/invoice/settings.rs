use crate::error::InvoiceError;
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use docket_layout::TableStyle;
use docket_render_lopdf::PageSetup;
use docket_types::Color;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Look and behaviour of a generated invoice. Every field has a default, so
/// a partial JSON object is enough to override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceSettings {
    /// Height of every text line and table row.
    pub line_height: f32,
    pub font_family: String,
    /// In points.
    pub font_size: f32,
    /// Fill of the "Mail To" / "Bill To" boxes.
    pub rounded_rect_color: Color,
    pub table_header_color: Color,
    /// Fill of every other table row, and of the totals labels.
    pub table_band_color: Color,
    /// Longer invoice numbers are cut to this many characters.
    pub invoice_number_max_len: usize,
    /// Where the line-item table resumes on continuation pages.
    pub continuation_top: f32,
    /// Rows of room a line item needs below it to stay open; at least one.
    pub lookahead_rows: f32,
    /// strftime pattern for the sent-on and due dates.
    pub date_format: String,
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            line_height: 5.0,
            font_family: "Helvetica".to_string(),
            font_size: 10.0,
            rounded_rect_color: Color::rgb(0x94, 0xb8, 0xb8),
            table_header_color: Color::rgb(0x94, 0xb8, 0xb8),
            table_band_color: Color::rgb(0xc2, 0xc2, 0xa3),
            invoice_number_max_len: 10,
            continuation_top: 40.0,
            lookahead_rows: 2.0,
            date_format: "%m/%d/%Y".to_string(),
        }
    }
}

impl InvoiceSettings {
    pub fn validate(&self) -> Result<(), InvoiceError> {
        if !self.line_height.is_finite() || self.line_height <= 0.0 {
            return Err(InvoiceError::Settings(format!(
                "line height must be positive, got {}",
                self.line_height
            )));
        }
        if !self.lookahead_rows.is_finite() || self.lookahead_rows < 1.0 {
            return Err(InvoiceError::Settings(format!(
                "table lookahead must be at least one row, got {}",
                self.lookahead_rows
            )));
        }
        if self.invoice_number_max_len == 0 {
            return Err(InvoiceError::Settings(
                "invoice numbers cannot be truncated to zero characters".to_string(),
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(InvoiceError::Settings(format!(
                "'{}' is not a valid date format",
                self.date_format
            )));
        }
        Ok(())
    }

    /// A4 in millimetres with this invoice's font.
    pub fn page_setup(&self) -> PageSetup {
        PageSetup {
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            ..PageSetup::a4()
        }
    }

    pub fn table_style(&self) -> TableStyle {
        TableStyle {
            row_height: self.line_height,
            header_fill: self.table_header_color,
            band_fill: self.table_band_color,
            continuation_top: self.continuation_top,
            lookahead_rows: self.lookahead_rows,
        }
    }

    pub fn format_date(&self, date: NaiveDate) -> Result<String, InvoiceError> {
        let mut out = String::new();
        write!(out, "{}", date.format(&self.date_format))
            .map_err(|_| InvoiceError::Settings(format!("cannot format {date} with '{}'", self.date_format)))?;
        Ok(out)
    }

    pub fn truncate_invoice_number(&self, number: &str) -> String {
        number.chars().take(self.invoice_number_max_len).collect()
    }
}
