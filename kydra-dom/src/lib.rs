//! Retained element tree for terminal UIs.
//!
//! Components build an [`Element`] tree every frame. The host lays it out
//! against the viewport, paints it into a [`Buffer`] and routes input back
//! through [`hit_test`].

pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, text_content, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{layout, measure, LayoutResult, Rect};
pub use render::render_to_buffer;
pub use terminal::Terminal;
pub use types::*;
