use docket_layout::{ConfigurationError, LayoutError};
use docket_render_core::RenderError;
use thiserror::Error;

/// Everything that can go wrong while producing an invoice.
#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Invoice JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invoice settings are invalid: {0}")]
    Settings(String),
}

impl From<ConfigurationError> for InvoiceError {
    fn from(e: ConfigurationError) -> Self {
        InvoiceError::Layout(LayoutError::Configuration(e))
    }
}
