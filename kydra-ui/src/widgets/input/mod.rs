//! Text input widget - a controlled string field with a floating label.

mod state;

pub use state::{InputEdit, InputPhase, InputState};

use kydra_dom::{Border, Color, Edges, Element, Event, Size, Style};

use crate::handler::{Callback, Handler};
use crate::widget::WidgetResult;
use crate::widgets::button::DEFAULT_ACCENT;

const CARET: char = '▏';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    /// Rounded outline.
    #[default]
    Standard,
    /// Underlined text, no outline.
    Underlined,
    /// Tinted background, no outline.
    Filled,
}

/// A text input builder.
///
/// The value and its change notifications belong to the caller; the widget
/// only tracks focus and cursor in an [`InputState`] the caller keeps
/// between builds.
///
/// # Example
///
/// ```ignore
/// let input = TextInput::new("email")
///     .value(&form.email)
///     .label("Email")
///     .on_change(Arc::new(move |v| set_email(v)))
///     .on_clear(Arc::new(move || set_email(String::new())));
/// let el = input.element(&email_state);
/// // later, for each event:
/// input.handle_event(&mut email_state, &event);
/// ```
#[derive(Clone)]
pub struct TextInput {
    id: String,
    value: String,
    label: Option<String>,
    placeholder: Option<String>,
    error: Option<String>,
    icon: Option<String>,
    variant: InputVariant,
    color: Color,
    disabled: bool,
    width: Size,
    clearable: bool,
    on_change: Option<Callback<String>>,
    on_clear: Option<Handler>,
}

impl TextInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            label: None,
            placeholder: None,
            error: None,
            icon: None,
            variant: InputVariant::Standard,
            color: Color::parse_or(DEFAULT_ACCENT, Color::rgb(99, 102, 241)),
            disabled: false,
            width: Size::Fill,
            clearable: false,
            on_change: None,
            on_clear: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Inline error message. Also paints label and outline in the danger color.
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn on_change(mut self, callback: Callback<String>) -> Self {
        self.on_change = Some(callback);
        self
    }

    /// Enables the clear action.
    pub fn on_clear(mut self, handler: Handler) -> Self {
        self.on_clear = Some(handler);
        self.clearable = true;
        self
    }

    /// Enables the clear action without a dedicated handler. Clearing is
    /// then reported through `on_change("")`, or by the owner watching
    /// [`clear_id`](Self::clear_id).
    pub fn clearable(mut self) -> Self {
        self.clearable = true;
        self
    }

    pub fn field_id(&self) -> &str {
        &self.id
    }

    pub fn clear_id(&self) -> String {
        format!("{}-clear", self.id)
    }

    pub fn shows_clear(&self) -> bool {
        self.clearable && !self.value.is_empty() && !self.disabled
    }

    pub fn build(&self, state: &InputState) -> Element {
        self.element(state)
    }

    pub fn element(&self, state: &InputState) -> Element {
        let phase = state.phase(&self.value);
        let focused = state.is_focused() && !self.disabled;
        let danger = Color::var("danger");
        let accent = if self.error.is_some() {
            danger.clone()
        } else {
            self.color.clone()
        };

        // Reserve the label line in every phase so the field does not jump.
        let label_line = self.label.as_ref().map(|label| {
            if phase.is_lifted() {
                let fg = if self.error.is_some() || focused {
                    accent.clone()
                } else {
                    Color::var("muted")
                };
                let style = Style::new().foreground(fg);
                Element::text(label).style(if focused { style.bold() } else { style })
            } else {
                Element::text("")
            }
        });

        let (text, text_style) = if !self.value.is_empty() {
            let shown = if focused {
                let cursor = state.cursor().min(self.value.len());
                let mut s = self.value.clone();
                if s.is_char_boundary(cursor) {
                    s.insert(cursor, CARET);
                }
                s
            } else {
                self.value.clone()
            };
            (shown, Style::new().foreground(Color::var("foreground")))
        } else if !phase.is_lifted() {
            let label = self.label.clone().unwrap_or_default();
            (label, Style::new().foreground(Color::var("muted")))
        } else if focused {
            let placeholder = self.placeholder.clone().unwrap_or_default();
            (
                format!("{CARET}{placeholder}"),
                Style::new().foreground(Color::var("muted")).italic(),
            )
        } else {
            (String::new(), Style::new())
        };

        let text_style = match self.variant {
            InputVariant::Underlined => text_style.underline(),
            _ => text_style,
        };

        let mut field = Element::row()
            .id(&self.id)
            .gap(1)
            .width(Size::Fill)
            .padding(Edges::horizontal(1))
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .captures_input(!self.disabled)
            .focused(focused)
            .disabled(self.disabled)
            .style(self.field_style(focused, &accent))
            .style_disabled(Style::new().dim());

        if let Some(icon) = &self.icon {
            let fg = if focused { accent.clone() } else { Color::var("muted") };
            field = field.child(Element::text(icon).style(Style::new().foreground(fg)));
        }
        field = field.child(Element::text(text).width(Size::Fill).style(text_style));
        if self.shows_clear() {
            field = field.child(
                Element::text("✕")
                    .id(self.clear_id())
                    .clickable(true)
                    .style(Style::new().foreground(Color::var("muted"))),
            );
        }

        let error_line = self
            .error
            .as_ref()
            .map(|e| Element::text(e).style(Style::new().foreground(danger.clone())));

        Element::col()
            .id(format!("{}-wrapper", self.id))
            .width(self.width)
            .child_opt(label_line)
            .child(field)
            .child_opt(error_line)
    }

    fn field_style(&self, focused: bool, accent: &Color) -> Style {
        let outline = if self.error.is_some() || focused {
            accent.clone()
        } else {
            Color::var("border")
        };
        match self.variant {
            InputVariant::Standard => Style::new().border(Border::Rounded).border_color(outline),
            InputVariant::Underlined => Style::new(),
            InputVariant::Filled => Style::new().background(Color::var("border")),
        }
    }

    /// Route an event targeted at this field.
    pub fn handle_event(&self, state: &mut InputState, event: &Event) -> WidgetResult {
        let clear_id = self.clear_id();
        match event {
            Event::Focus { target } if *target == self.id && !self.disabled => {
                state.focus(&self.value);
                WidgetResult::Handled
            }
            Event::Blur { target } if *target == self.id => {
                state.blur();
                WidgetResult::Handled
            }
            Event::Click {
                target: Some(target),
                ..
            } if *target == clear_id && self.shows_clear() => self.clear(state),
            Event::Click {
                target: Some(target),
                ..
            } if *target == self.id && !self.disabled => {
                state.focus(&self.value);
                WidgetResult::Handled
            }
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if *target == self.id && !self.disabled => {
                match state.edit(&self.value, *key, *modifiers) {
                    InputEdit::Changed(next) => {
                        if let Some(on_change) = &self.on_change {
                            on_change(next);
                        }
                        WidgetResult::Changed
                    }
                    InputEdit::Cleared => self.clear(state),
                    InputEdit::Moved => WidgetResult::Handled,
                    InputEdit::Ignored => WidgetResult::Ignored,
                }
            }
            _ => WidgetResult::Ignored,
        }
    }

    fn clear(&self, state: &mut InputState) -> WidgetResult {
        state.reset_cursor();
        if let Some(on_clear) = &self.on_clear {
            on_clear();
        } else if let Some(on_change) = &self.on_change {
            on_change(String::new());
        }
        log::debug!("input {} cleared", self.id);
        WidgetResult::Changed
    }
}

impl std::fmt::Debug for TextInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextInput")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
