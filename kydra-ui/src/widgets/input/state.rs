//! Transient focus and cursor state of a text input.

use kydra_dom::{Key, Modifiers};

/// Visual phase of a text input, derived from focus and value.
///
/// ```text
/// UnfocusedEmpty --focus--> FocusedEmpty --type--> FocusedNonempty
///       ^                                                |
///       +--clear/delete all-- UnfocusedNonempty <--blur--+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    UnfocusedEmpty,
    FocusedEmpty,
    FocusedNonempty,
    UnfocusedNonempty,
}

impl InputPhase {
    pub fn of(focused: bool, value: &str) -> Self {
        match (focused, value.is_empty()) {
            (false, true) => InputPhase::UnfocusedEmpty,
            (true, true) => InputPhase::FocusedEmpty,
            (true, false) => InputPhase::FocusedNonempty,
            (false, false) => InputPhase::UnfocusedNonempty,
        }
    }

    /// The floating label sits above the field in every phase but one.
    pub fn is_lifted(self) -> bool {
        self != InputPhase::UnfocusedEmpty
    }
}

/// What a key press did to the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    /// The value should become this string.
    Changed(String),
    /// The field asked to be cleared.
    Cleared,
    /// Only the cursor moved.
    Moved,
    Ignored,
}

/// Focus tracking and cursor position. The value itself is owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    focused: bool,
    /// Byte offset into the value, always on a char boundary.
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self, value: &str) -> InputPhase {
        InputPhase::of(self.focused, value)
    }

    /// Focus the field with the cursor at the end of `value`.
    pub fn focus(&mut self, value: &str) {
        self.focused = true;
        self.cursor = value.len();
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Apply a key press to `value`.
    ///
    /// The caller decides what to do with the result; nothing here mutates
    /// the value.
    pub fn edit(&mut self, value: &str, key: Key, modifiers: Modifiers) -> InputEdit {
        if modifiers.ctrl || modifiers.alt {
            return InputEdit::Ignored;
        }
        let cursor = self.clamped_cursor(value);

        match key {
            Key::Char(c) if !c.is_control() => {
                let mut next = value.to_string();
                next.insert(cursor, c);
                self.cursor = cursor + c.len_utf8();
                InputEdit::Changed(next)
            }
            Key::Backspace if cursor > 0 => {
                let prev = value[..cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                let mut next = value.to_string();
                next.remove(prev);
                self.cursor = prev;
                InputEdit::Changed(next)
            }
            Key::Delete if cursor < value.len() => {
                let mut next = value.to_string();
                next.remove(cursor);
                self.cursor = cursor;
                InputEdit::Changed(next)
            }
            Key::Left => {
                self.cursor = value[..cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                InputEdit::Moved
            }
            Key::Right => {
                self.cursor = value[cursor..]
                    .chars()
                    .next()
                    .map(|c| cursor + c.len_utf8())
                    .unwrap_or(cursor);
                InputEdit::Moved
            }
            Key::Home => {
                self.cursor = 0;
                InputEdit::Moved
            }
            Key::End => {
                self.cursor = value.len();
                InputEdit::Moved
            }
            Key::Escape if !value.is_empty() => {
                self.cursor = 0;
                InputEdit::Cleared
            }
            _ => InputEdit::Ignored,
        }
    }

    /// The value may have changed under us since the last key press.
    fn clamped_cursor(&self, value: &str) -> usize {
        let mut cursor = self.cursor.min(value.len());
        while !value.is_char_boundary(cursor) {
            cursor -= 1;
        }
        cursor
    }
}
