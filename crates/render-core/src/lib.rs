//! Core rendering abstractions for PDF generation.
//!
//! This crate provides the pieces shared by PDF backends:
//! - `RenderError` for failures while producing a document
//! - `Unit` and coordinate conversion between layout and PDF space
//! - Widths of the standard Type1 fonts, for aligning text in cells

mod error;
pub mod metrics;
pub mod units;
pub mod utils;

pub use error::RenderError;
pub use metrics::StandardFont;
pub use units::Unit;
