use super::{Border, Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub border_color: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Overlay `other` on top of this style. Fields set in `other` win.
    pub fn merge(mut self, other: &Style) -> Self {
        if other.background.is_some() {
            self.background = other.background.clone();
        }
        if other.foreground.is_some() {
            self.foreground = other.foreground.clone();
        }
        if other.border != Border::None {
            self.border = other.border;
        }
        if other.border_color.is_some() {
            self.border_color = other.border_color.clone();
        }
        self.text_style.bold |= other.text_style.bold;
        self.text_style.italic |= other.text_style.italic;
        self.text_style.underline |= other.text_style.underline;
        self.text_style.dim |= other.text_style.dim;
        self
    }
}
