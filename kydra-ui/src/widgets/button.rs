//! Button widget.

use std::sync::Arc;

use kydra_dom::{measure, Border, Color, Edges, Element, Justify, Size, Style, TextAlign};

use crate::handler::{Handler, HandlerRegistry, ON_ACTIVATE};
use crate::widget::WidgetResult;

pub const DEFAULT_BUTTON_LABEL: &str = "Button";
pub const DEFAULT_ACCENT: &str = "#6366f1";
pub const LOADING_LABEL: &str = "Loading...";
const SPINNER: &str = "⟳";
const MIN_WIDTH: u16 = 14;

/// Visual treatment of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Solid accent background.
    #[default]
    Filled,
    /// Dotted accent outline, tinted on hover.
    Dotted,
    /// Neutral outline that fills with the accent on hover.
    GhostHover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

/// A button widget builder.
///
/// Stateless: hover is tracked by the host and passed in with
/// [`hovered`](Self::hovered).
///
/// # Example
///
/// ```ignore
/// let save = Button::new()
///     .id("save")
///     .label("Save")
///     .icon("✓")
///     .loading(saving)
///     .on_click(Arc::new(move || save_all()));
/// root = root.child(save.build(&registry));
/// ```
#[derive(Clone)]
pub struct Button {
    id: Option<String>,
    label: String,
    icon: Option<String>,
    icon_position: IconPosition,
    variant: ButtonVariant,
    color: Color,
    text_align: TextAlign,
    disabled: bool,
    loading: bool,
    hovered: bool,
    on_click: Option<Handler>,
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Button {
    pub fn new() -> Self {
        Self {
            id: None,
            label: DEFAULT_BUTTON_LABEL.to_string(),
            icon: None,
            icon_position: IconPosition::Left,
            variant: ButtonVariant::Filled,
            color: Color::parse_or(DEFAULT_ACCENT, Color::rgb(99, 102, 241)),
            text_align: TextAlign::Center,
            disabled: false,
            loading: false,
            hovered: false,
            on_click: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set a glyph shown next to the label.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn icon_position(mut self, position: IconPosition) -> Self {
        self.icon_position = position;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// While loading the button shows a spinner and ignores activation.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn on_click(mut self, handler: Handler) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Run `on_click` unless disabled or loading.
    pub fn activate(&self) -> WidgetResult {
        match (&self.on_click, self.is_interactive()) {
            (Some(handler), true) => {
                handler();
                WidgetResult::Activated
            }
            _ => WidgetResult::Ignored,
        }
    }

    /// Build the element without registering handlers.
    pub fn element(&self) -> Element {
        let id = self.id.clone().unwrap_or_else(|| "button".into());
        let interactive = self.is_interactive();

        let glyph = if self.loading {
            Some(SPINNER.to_string())
        } else {
            self.icon.clone()
        };
        let label = if self.loading {
            LOADING_LABEL
        } else {
            self.label.as_str()
        };

        let label_el = Element::text(label);
        let parts = match (glyph.map(Element::text), self.icon_position) {
            (Some(glyph), IconPosition::Left) => vec![glyph, label_el],
            (Some(glyph), IconPosition::Right) => vec![label_el, glyph],
            (None, _) => vec![label_el],
        };
        let content = Element::row().gap(1).children(parts);

        let style = self.style();
        let padding = Edges::horizontal(if style.border == Border::None { 2 } else { 1 });
        let frame = padding.width() + style.border.size() * 2;
        let width = measure(&content).0.saturating_add(frame).max(MIN_WIDTH);

        let justify = match self.text_align {
            TextAlign::Left => Justify::Start,
            TextAlign::Center => Justify::Center,
            TextAlign::Right => Justify::End,
        };

        Element::row()
            .id(id)
            .width(Size::Fixed(width))
            .padding(padding)
            .justify(justify)
            .style(style)
            .style_focused(Style::new().bold())
            .style_disabled(Style::new().dim())
            .focusable(interactive)
            .clickable(interactive)
            .disabled(!interactive)
            .child(content)
    }

    /// Build the element and register `on_click` for activation.
    pub fn build(&self, registry: &HandlerRegistry) -> Element {
        let element = self.element();
        if self.is_interactive() {
            if let Some(handler) = &self.on_click {
                registry.register(&element.id, ON_ACTIVATE, Arc::clone(handler));
            }
        }
        element
    }

    fn style(&self) -> Style {
        let on_accent = Color::rgb(255, 255, 255);
        match self.variant {
            ButtonVariant::Filled => {
                let bg = if self.hovered {
                    self.color.clone().darken(0.05)
                } else {
                    self.color.clone()
                };
                Style::new().background(bg).foreground(on_accent).bold()
            }
            ButtonVariant::Dotted => {
                let style = Style::new()
                    .border(Border::Dotted)
                    .border_color(self.color.clone())
                    .foreground(self.color.clone());
                if self.hovered {
                    style.background(self.color.clone().alpha(0.1))
                } else {
                    style
                }
            }
            ButtonVariant::GhostHover if self.hovered => Style::new()
                .border(Border::Single)
                .border_color(self.color.clone())
                .background(self.color.clone())
                .foreground(on_accent),
            ButtonVariant::GhostHover => Style::new()
                .border(Border::Single)
                .border_color(Color::var("foreground"))
                .foreground(Color::var("foreground")),
        }
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("disabled", &self.disabled)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}
