//! Checkbox widget - a controlled boolean with optional label.

use std::sync::Arc;

use kydra_dom::{Color, Element, Style};

use crate::handler::{Callback, HandlerRegistry, ON_ACTIVATE};
use crate::widget::WidgetResult;
use crate::widgets::button::DEFAULT_ACCENT;

/// A checkbox widget builder.
///
/// The checked flag belongs to the caller. Activation never flips anything
/// locally; it reports the requested value through `on_change`.
#[derive(Clone)]
pub struct Checkbox {
    id: Option<String>,
    value: bool,
    label: Option<String>,
    color: Color,
    disabled: bool,
    on_change: Option<Callback<bool>>,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Checkbox {
    pub fn new(value: bool) -> Self {
        Self {
            id: None,
            value,
            label: None,
            color: Color::parse_or(DEFAULT_ACCENT, Color::rgb(99, 102, 241)),
            disabled: false,
            on_change: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
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

    pub fn on_change(mut self, callback: Callback<bool>) -> Self {
        self.on_change = Some(callback);
        self
    }

    pub fn is_checked(&self) -> bool {
        self.value
    }

    /// Request the opposite value.
    pub fn toggle(&self) -> WidgetResult {
        if self.disabled {
            return WidgetResult::Ignored;
        }
        if let Some(on_change) = &self.on_change {
            on_change(!self.value);
        }
        WidgetResult::Changed
    }

    /// Build the element without registering handlers.
    pub fn element(&self) -> Element {
        let id = self.id.clone().unwrap_or_else(|| "checkbox".into());

        let indicator = if self.value {
            Element::text("[✓]").style(Style::new().foreground(self.color.clone()).bold())
        } else {
            Element::text("[ ]").style(Style::new().foreground(Color::var("muted")))
        };

        let elem = match &self.label {
            Some(label) => Element::row().gap(1).child(indicator).child(
                Element::text(label).style(Style::new().foreground(Color::var("foreground"))),
            ),
            None => Element::row().child(indicator),
        };

        elem.id(id)
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled)
            .style_focused(Style::new().underline())
            .style_disabled(Style::new().dim())
    }

    /// Build the element and register the toggle for activation.
    pub fn build(&self, registry: &HandlerRegistry) -> Element {
        let element = self.element();
        if !self.disabled {
            if let Some(on_change) = &self.on_change {
                let on_change = Arc::clone(on_change);
                let next = !self.value;
                registry.register(&element.id, ON_ACTIVATE, Arc::new(move || on_change(next)));
            }
        }
        element
    }
}

impl std::fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkbox")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("label", &self.label)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
