mod flow;
mod rect;

pub use flow::{layout, measure, LayoutResult};
pub use rect::Rect;
