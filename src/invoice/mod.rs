//! Invoice composition on top of the layout helpers and the lopdf canvas.

pub mod document;
pub mod settings;
pub mod spec;

pub use document::{InvoiceDocument, InvoiceHeader, TOTAL_PAGES_ALIAS};
pub use settings::InvoiceSettings;
pub use spec::{generate_invoice, InvoiceSpec};
