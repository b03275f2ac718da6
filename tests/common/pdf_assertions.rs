use lopdf::content::Content;
use lopdf::Document as LopdfDocument;
use std::collections::BTreeSet;

/// Strings passed to `Tj` on `page`, decoded as Latin-1.
pub fn shown_strings(doc: &LopdfDocument, page: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page) else {
        return Vec::new();
    };
    let Ok(bytes) = doc.get_page_content(*page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&bytes) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|operand| operand.as_str().ok())
        .map(|bytes| bytes.iter().map(|&b| b as char).collect())
        .collect()
}

/// Extract all shown text, one line per string, pages separated by blank lines
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page in 1..=doc.get_pages().len() as u32 {
        for line in shown_strings(doc, page) {
            text.push_str(&line);
            text.push('\n');
        }
        text.push('\n');
    }
    text
}

/// Count operators of one kind on a page
pub fn count_operator(doc: &LopdfDocument, page: u32, operator: &str) -> usize {
    let pages = doc.get_pages();
    pages
        .get(&page)
        .and_then(|id| doc.get_page_content(*id).ok())
        .and_then(|bytes| Content::decode(&bytes).ok())
        .map(|content| content.operations.iter().filter(|op| op.operator == operator).count())
        .unwrap_or(0)
}

/// Base font names of every font object in the file
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = BTreeSet::new();
    for object in doc.objects.values() {
        let Ok(dict) = object.as_dict() else { continue };
        let is_font = dict.get(b"Type").and_then(|t| t.as_name()).is_ok_and(|n| n == b"Font");
        if !is_font {
            continue;
        }
        if let Ok(name) = dict.get(b"BaseFont").and_then(|f| f.as_name()) {
            fonts.insert(String::from_utf8_lossy(name).into_owned());
        }
    }
    fonts.into_iter().collect()
}

/// Number of image XObjects stored in the file
pub fn count_images(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|object| object.as_stream().ok())
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|s| s.as_name())
                .is_ok_and(|n| n == b"Image")
        })
        .count()
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}
