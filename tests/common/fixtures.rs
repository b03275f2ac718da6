use chrono::NaiveDate;
use docket::{Alignment, ColumnSpec, InvoiceSpec, TableSpec};
use image::{ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// A four-column line-item table with `rows` numbered rows.
pub fn line_items(rows: usize) -> TableSpec {
    let headers = ["Description", "Unit Cost", "Quantity", "Extended"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let columns = vec![
        ColumnSpec::new(110.0, Alignment::Left),
        ColumnSpec::new(25.0, Alignment::Right),
        ColumnSpec::new(20.0, Alignment::Center),
        ColumnSpec::new(35.0, Alignment::Right),
    ];
    let rows = (1..=rows)
        .map(|i| {
            vec![
                format!("Line item {i}"),
                "100.00".to_string(),
                "2".to_string(),
                "$  200.00".to_string(),
            ]
        })
        .collect();
    TableSpec::new(headers, columns, rows)
}

/// The demo invoice with fixed dates, so header text is predictable.
pub fn invoice(rows: usize) -> InvoiceSpec {
    InvoiceSpec {
        sent_on: Some(date(2026, 1, 18)),
        due_date: date(2026, 4, 18),
        table: line_items(rows),
        ..InvoiceSpec::demo(0)
    }
}

/// Writes a small solid PNG and returns its path.
pub fn write_logo(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("logo.png");
    RgbImage::from_pixel(width, height, Rgb([0x94, 0xb8, 0xb8]))
        .save_with_format(&path, ImageFormat::Png)
        .expect("write test logo");
    path
}
