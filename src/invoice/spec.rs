use super::document::{InvoiceDocument, InvoiceHeader};
use super::settings::InvoiceSettings;
use crate::error::InvoiceError;
use chrono::{Local, Months, NaiveDate};
use docket_layout::{Alignment, TableSpec};
use serde::{Deserialize, Serialize};
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

/// Everything needed to render one invoice, as read from JSON.
///
/// ```json
/// {
///   "invoiceNumber": "0123456789",
///   "dueDate": "2026-04-18",
///   "company": ["Innate Decor", "123 Main St."],
///   "client": ["Test Sales", "299 Elk Lodge Way"],
///   "table": {
///     "headers": ["Description", "Amount"],
///     "columns": [{"width": 150, "align": "L"}, {"width": 40, "align": "R"}],
///     "rows": [["Goods and Services", "$  200.00"]]
///   },
///   "totals": [["Total Due:", "$  200.00"]]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSpec {
    pub invoice_number: String,
    pub due_date: NaiveDate,
    /// Defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<PathBuf>,
    #[serde(default)]
    pub company: Vec<String>,
    #[serde(default)]
    pub client: Vec<String>,
    pub table: TableSpec,
    /// Printed in order.
    #[serde(default)]
    pub totals: Vec<(String, String)>,
    #[serde(default)]
    pub settings: InvoiceSettings,
}

impl InvoiceSpec {
    pub fn from_json(json: &str) -> Result<Self, InvoiceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InvoiceError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The stock sample invoice: two address boxes, `rows` identical line
    /// items and three totals.
    pub fn demo(rows: usize) -> Self {
        let today = Local::now().date_naive();
        let due_date = today.checked_add_months(Months::new(3)).unwrap_or(today);
        let headers = ["Description", "Unit Cost", "Quantity", "Extended"];
        let data = (1..=rows)
            .map(|i| {
                vec![
                    format!("Goods and Services and Other Incidentals {i}"),
                    "100.00".to_string(),
                    "2".to_string(),
                    "$  200.00".to_string(),
                ]
            })
            .collect();
        let aligns = [Alignment::Left, Alignment::Right, Alignment::Center, Alignment::Right];
        let columns = [110.0, 25.0, 20.0, 35.0]
            .into_iter()
            .zip(aligns)
            .map(|(width, align)| docket_layout::ColumnSpec::new(width, align))
            .collect();

        Self {
            invoice_number: "0123456789".to_string(),
            due_date,
            sent_on: Some(today),
            logo: None,
            company: lines(&["Innate Decor", "123 Main St.", "Corona, CA 92885", "555-1212", ""]),
            client: lines(&[
                "Test Sales",
                "299 Elk Lodge Way",
                "Suite 200",
                "Contact: Bill Simon",
                "555-555-1212",
            ]),
            table: TableSpec::new(lines(&headers), columns, data),
            totals: vec![
                ("Subtotal:".to_string(), "20,000.00".to_string()),
                ("Discount:".to_string(), "1,000.00".to_string()),
                ("Total Due:".to_string(), "$  19,000.00".to_string()),
            ],
            settings: InvoiceSettings::default(),
        }
    }

    fn header(&self) -> InvoiceHeader {
        let header = InvoiceHeader::new(self.invoice_number.clone(), self.due_date);
        match self.sent_on {
            Some(date) => header.sent_on(date),
            None => header,
        }
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Renders `spec` as a complete PDF into `writer`.
///
/// The table is checked before anything is drawn, so a malformed spec
/// never produces a partial document.
pub fn generate_invoice<W: Write + Seek>(spec: &InvoiceSpec, writer: W) -> Result<W, InvoiceError> {
    spec.table.validate()?;

    let mut document = InvoiceDocument::setup(spec.settings.clone(), spec.header(), spec.logo.as_deref())?;
    document.add_payment_info(&spec.company, &spec.client)?;
    let report = document.add_line_items(&spec.table)?;
    log::debug!(
        "Line items: {} rows over {} page breaks",
        report.rows_drawn,
        report.page_breaks
    );
    document.add_totals(&spec.totals)?;
    document.finish(writer)
}
