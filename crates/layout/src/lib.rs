use docket_types::{CellAttrError, ColorError};
use thiserror::Error;

/// Invalid caller input. Raised before anything is drawn and never recovered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("{what} has {found} entries but the table has {expected} columns")]
    ColumnMismatch {
        what: String,
        expected: usize,
        found: usize,
    },
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ColorError),
    #[error("Invalid cell attribute: {0}")]
    InvalidCellAttr(#[from] CellAttrError),
}

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Page surface error: {0}")]
    Surface(String),
}

impl LayoutError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, LayoutError::Configuration(_))
    }
}

pub mod algorithms;
pub mod config;
pub mod nodes;
pub mod painting;
pub mod surface;

pub use self::config::TableStyle;
pub use self::nodes::label_list::{
    add_bold_title, add_text_list, add_text_list_with_labels, rounded_rect_text_box, LabelListStyle,
};
pub use self::nodes::table::{render_table, ColumnSpec, LayoutCursor, TableReport, TableRenderer, TableSpec};
pub use self::painting::path::{PaintStyle, PathOp, YAxis};
pub use self::painting::rounded_rect::{build_rounded_rect, RoundedRect};
pub use self::surface::{Cell, CellAdvance, ImageHandle, PageSurface};

// Re-export foundation types used throughout the public API
pub use docket_types::{Alignment, BorderSides, Color, Point, Rect};

#[cfg(test)]
mod test_utils;
