mod color;
mod edges;
mod enums;
mod style;
mod theme;

pub use color::{Color, ColorOp, Oklch, Rgb};
pub use edges::Edges;
pub use enums::{Border, Direction, Justify, Position, Size, TextAlign, TextStyle};
pub use style::Style;
pub use theme::{ColorContext, EmptyTheme, Theme};
