pub mod node;
pub mod pagination;
pub mod spec;

pub use node::{render_table, TableRenderer, TableReport};
pub use pagination::{LayoutCursor, TablePagination};
pub use spec::{ColumnSpec, TableSpec, TableView};
