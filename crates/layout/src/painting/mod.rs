pub mod path;
pub mod rounded_rect;
