/// High-level input events with element targeting.
///
/// `target` is the element id the host resolved (via hit testing or focus
/// tracking) before handing the event to a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, targeted at the focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse click
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Pointer moved onto an element
    Hover { target: Option<String> },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Left click on `target`.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    /// Unmodified key press on `target`.
    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Self::Key {
            target: Some(target.into()),
            key,
            modifiers: Modifiers::new(),
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Key { target, .. } | Self::Click { target, .. } | Self::Hover { target } => {
                target.as_deref()
            }
            Self::Focus { target } | Self::Blur { target } => Some(target.as_str()),
            Self::Resize { .. } => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = crossterm::event::KeyCode;

    /// Media, lock and modifier-only keys have no counterpart and are handed back.
    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, Self::Error> {
        use crossterm::event::KeyCode as Ct;
        Ok(match code {
            Ct::Char(c) => Key::Char(c),
            Ct::F(n) => Key::F(n),
            Ct::Enter => Key::Enter,
            Ct::Esc => Key::Escape,
            Ct::Tab => Key::Tab,
            Ct::BackTab => Key::BackTab,
            Ct::Backspace => Key::Backspace,
            Ct::Delete => Key::Delete,
            Ct::Insert => Key::Insert,
            Ct::Left => Key::Left,
            Ct::Right => Key::Right,
            Ct::Up => Key::Up,
            Ct::Down => Key::Down,
            Ct::Home => Key::Home,
            Ct::End => Key::End,
            Ct::PageUp => Key::PageUp,
            Ct::PageDown => Key::PageDown,
            other => return Err(other),
        })
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers as Ct;
        let held = |flag| mods.intersects(flag);
        Self {
            shift: held(Ct::SHIFT),
            ctrl: held(Ct::CONTROL),
            alt: held(Ct::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(button: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as Ct;
        match button {
            Ct::Left => Self::Left,
            Ct::Right => Self::Right,
            Ct::Middle => Self::Middle,
        }
    }
}

/// Target a crossterm key press at the focused element.
///
/// Returns `None` for keys widgets never see.
pub fn key_event(event: crossterm::event::KeyEvent, focused: Option<String>) -> Option<Event> {
    let key = Key::try_from(event.code).ok()?;
    Some(Event::Key {
        target: focused,
        key,
        modifiers: event.modifiers.into(),
    })
}
