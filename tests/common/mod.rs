#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use docket::{generate_invoice, InvoiceError, InvoiceSpec};
use lopdf::Document as LopdfDocument;
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Strings shown with `Tj` on one page (1-based), in drawing order.
    pub fn page_text(&self, page: u32) -> Vec<String> {
        pdf_assertions::shown_strings(&self.doc, page)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Generate a PDF from an invoice spec
pub fn generate_pdf(spec: &InvoiceSpec) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = generate_invoice(spec, Cursor::new(Vec::new()))?.into_inner();
    GeneratedPdf::from_bytes(bytes)
}

/// Generate a PDF from invoice JSON
pub fn generate_pdf_from_json(json: &str) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let spec = InvoiceSpec::from_json(json)?;
    generate_pdf(&spec)
}

/// Run the generator and keep only the error
pub fn generate_err(spec: &InvoiceSpec) -> Option<InvoiceError> {
    generate_invoice(spec, Cursor::new(Vec::new())).err()
}
