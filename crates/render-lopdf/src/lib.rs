//! A `PageSurface` that writes PDF content streams with `lopdf`.

mod canvas;
mod xobject;
mod setup;
pub mod writer;

pub use canvas::LopdfCanvas;
pub use setup::PageSetup;
pub use writer::StreamingPdfWriter;
