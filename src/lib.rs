//! Paginated PDF invoices.
//!
//! The heavy lifting lives in the workspace crates: `docket-layout` decides
//! where rows, labels and boxes go, `docket-render-lopdf` turns those
//! decisions into PDF content. This crate composes them into an invoice.

pub mod error;
pub mod invoice;

pub use error::InvoiceError;
pub use invoice::{generate_invoice, InvoiceDocument, InvoiceHeader, InvoiceSettings, InvoiceSpec};

pub use docket_layout::{
    build_rounded_rect, render_table, Alignment, BorderSides, Cell, CellAdvance, Color, ColumnSpec,
    ConfigurationError, LayoutError, PageSurface, PaintStyle, PathOp, Point, RoundedRect, TableRenderer,
    TableReport, TableSpec, TableStyle, YAxis,
};
pub use docket_render_core::RenderError;
pub use docket_render_lopdf::{LopdfCanvas, PageSetup};
