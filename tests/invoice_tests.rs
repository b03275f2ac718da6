mod common;

use common::fixtures::*;
use common::pdf_assertions::{count_images, count_operator, extract_font_names};
use common::{generate_err, generate_pdf, generate_pdf_from_json, TestResult};
use docket::{ConfigurationError, InvoiceError, InvoiceSettings, LayoutError};

#[test]
fn test_single_page_invoice_contents() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&invoice(1))?;
    assert_pdf_page_count!(pdf, 1);
    for text in [
        "Sent On:",
        "01/18/2026",
        "Invoice No:",
        "0123456789",
        "Due Date:",
        "04/18/2026",
        "Mail To:",
        "Innate Decor",
        "Bill To:",
        "Contact: Bill Simon",
        "Description",
        "Line item 1",
        "Subtotal:",
        "$  19,000.00",
        "Page 1/1",
    ] {
        assert_pdf_contains_text!(pdf, text);
    }
    Ok(())
}

#[test]
fn test_header_block_precedes_the_body() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&invoice(3))?;
    let text = pdf.page_text(1);
    assert_eq!(
        &text[..6],
        &["Sent On:", "01/18/2026", "Invoice No:", "0123456789", "Due Date:", "04/18/2026"]
    );
    assert_eq!(text.last().map(String::as_str), Some("Page 1/1"));
    Ok(())
}

#[test]
fn test_payment_boxes_are_rounded() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&invoice(1))?;
    // four corner curves per box
    assert_eq!(count_operator(&pdf.doc, 1, "c"), 8);
    Ok(())
}

#[test]
fn test_standard_fonts_are_referenced() -> TestResult {
    let pdf = generate_pdf(&invoice(1))?;
    let fonts = extract_font_names(&pdf.doc);
    assert!(fonts.contains(&"Helvetica".to_string()), "fonts: {fonts:?}");
    assert!(fonts.contains(&"Helvetica-Bold".to_string()), "fonts: {fonts:?}");
    Ok(())
}

#[test]
fn test_long_invoice_number_is_truncated() -> TestResult {
    let mut spec = invoice(1);
    spec.invoice_number = "INV-2026-000042".to_string();

    let pdf = generate_pdf(&spec)?;
    assert_pdf_contains_text!(pdf, "INV-2026-0");
    assert_pdf_not_contains_text!(pdf, "INV-2026-00");
    Ok(())
}

#[test]
fn test_logo_is_embedded_once_and_drawn_on_every_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir()?;
    let mut spec = invoice(101);
    spec.logo = Some(write_logo(dir.path(), 40, 20));

    let pdf = generate_pdf(&spec)?;
    assert_eq!(count_images(&pdf.doc), 1);
    for page in 1..=pdf.page_count() as u32 {
        assert_eq!(count_operator(&pdf.doc, page, "Do"), 1, "page {page}");
    }
    Ok(())
}

#[test]
fn test_missing_logo_still_renders() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir()?;
    let mut spec = invoice(1);
    spec.logo = Some(dir.path().join("nope.gif"));

    let pdf = generate_pdf(&spec)?;
    assert_pdf_page_count!(pdf, 1);
    assert_eq!(count_images(&pdf.doc), 0);
    assert_pdf_contains_text!(pdf, "Invoice No:");
    Ok(())
}

#[test]
fn test_mismatched_row_is_rejected_before_rendering() {
    let mut spec = invoice(5);
    spec.table.rows[3].push("extra".to_string());

    let err = generate_err(&spec).expect("row with five cells must fail");
    assert!(matches!(
        err,
        InvoiceError::Layout(LayoutError::Configuration(ConfigurationError::ColumnMismatch {
            expected: 4,
            found: 5,
            ..
        }))
    ));
}

#[test]
fn test_invalid_settings_are_rejected() {
    let mut spec = invoice(1);
    spec.settings = InvoiceSettings {
        invoice_number_max_len: 0,
        ..InvoiceSettings::default()
    };
    assert!(matches!(generate_err(&spec), Some(InvoiceError::Settings(_))));
}

#[test]
fn test_invoice_from_json() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let json = r##"{
        "invoiceNumber": "A-17",
        "dueDate": "2026-04-18",
        "sentOn": "2026-01-18",
        "company": ["Innate Decor"],
        "client": ["Test Sales"],
        "table": {
            "headers": ["Description", "Amount"],
            "columns": [{"width": 150, "align": "L"}, {"width": 40, "align": "R"}],
            "rows": [["Consulting", "$  500.00"], ["Travel", "$  80.00"]]
        },
        "totals": [["Total Due:", "$  580.00"]],
        "settings": {"dateFormat": "%Y-%m-%d", "tableBandColor": "#eeeeee"}
    }"##;

    let pdf = generate_pdf_from_json(json)?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "2026-04-18");
    assert_pdf_contains_text!(pdf, "Travel");
    assert_pdf_contains_text!(pdf, "$  580.00");
    Ok(())
}

#[test]
fn test_invoice_written_to_a_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("invoice.pdf");

    let file = std::fs::File::create(&path)?;
    docket::generate_invoice(&invoice(10), file)?;

    let pdf = common::GeneratedPdf::from_bytes(std::fs::read(&path)?)?;
    assert_pdf_page_count!(pdf, 1);
    Ok(())
}
