pub mod cell;
pub mod color;
pub mod geometry;

pub use cell::{Alignment, BorderSides, CellAttrError};
pub use color::{Color, ColorError};
pub use geometry::{Margins, Point, Rect};
