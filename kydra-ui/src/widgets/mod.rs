//! Components. Each one builds a `kydra_dom::Element` tree from its props.

pub mod action_menu;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod navbar;
pub mod table;

/// Element data key holding the command an interactive element triggers.
pub const COMMAND_KEY: &str = "kydra.command";

pub use action_menu::{ActionMenu, MenuCommand, OpenMenu, MENU_OFFSET, MENU_WIDTH};
pub use button::{Button, ButtonVariant, IconPosition};
pub use checkbox::Checkbox;
pub use input::{InputEdit, InputPhase, InputState, InputVariant, TextInput};
pub use navbar::{NavPosition, Navbar};
pub use table::{Action, Column, DataTable, TableOptions, TableState, TableView};
