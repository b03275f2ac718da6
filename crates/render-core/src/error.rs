use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid page setup: {0}")]
    InvalidSetup(String),
    #[error("No page is open; call begin_page first")]
    NoPage,
    #[error("Unknown image handle {0}")]
    UnknownImage(usize),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}
