//! Accent color and light/dark palette shared by a table and its children.

use kydra_dom::{Color, Theme};

/// Default accent for tables.
pub const DEFAULT_TABLE_COLOR: &str = "#2563eb";

/// Theme context handed down to every piece a table builds.
///
/// Widgets paint neutral surfaces with [`Color::var`] names and resolve them
/// through this theme at render time:
///
/// | Variable | Meaning |
/// |----------|---------|
/// | `accent` | the configured color |
/// | `accent.soft` | accent at low opacity, for selected rows |
/// | `on_accent` | text drawn on accent backgrounds |
/// | `background` | page background |
/// | `surface` | table and popup background |
/// | `foreground` | body text |
/// | `muted` | secondary text |
/// | `border` | separators and outlines |
/// | `danger` | destructive actions and errors |
/// | `success` | export action |
#[derive(Debug, Clone, PartialEq)]
pub struct TableTheme {
    pub dark_mode: bool,
    pub color: Color,
}

impl Default for TableTheme {
    fn default() -> Self {
        Self {
            dark_mode: false,
            color: Color::parse_or(DEFAULT_TABLE_COLOR, Color::rgb(37, 99, 235)),
        }
    }
}

impl TableTheme {
    pub fn new(color: Color, dark_mode: bool) -> Self {
        Self { dark_mode, color }
    }

    /// Parse `color`, keeping the default accent when it is not a color.
    pub fn from_parts(color: &str, dark_mode: bool) -> Self {
        let fallback = Self::default().color;
        Self {
            dark_mode,
            color: Color::parse_or(color, fallback),
        }
    }

    fn neutral(&self, name: &str) -> Option<Color> {
        let (r, g, b) = match (name, self.dark_mode) {
            ("background", false) => (248, 250, 252),
            ("background", true) => (2, 6, 23),
            ("surface", false) => (255, 255, 255),
            ("surface", true) => (15, 23, 42),
            ("foreground", false) => (15, 23, 42),
            ("foreground", true) => (241, 245, 249),
            ("muted", false) => (100, 116, 139),
            ("muted", true) => (148, 163, 184),
            ("border", false) => (226, 232, 240),
            ("border", true) => (30, 41, 59),
            ("danger", _) => (239, 68, 68),
            ("success", _) => (22, 163, 74),
            ("on_accent", _) => (255, 255, 255),
            _ => return None,
        };
        Some(Color::rgb(r, g, b))
    }
}

impl Theme for TableTheme {
    fn resolve(&self, name: &str) -> Option<Color> {
        match name {
            "accent" => Some(self.color.clone()),
            "accent.soft" => Some(self.color.clone().alpha(0.12)),
            other => self.neutral(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_switches_with_dark_mode() {
        let light = TableTheme::default();
        let dark = TableTheme::new(light.color.clone(), true);
        assert_ne!(light.resolve("surface"), dark.resolve("surface"));
        assert_eq!(light.resolve("accent"), Some(Color::rgb(37, 99, 235)));
        assert_eq!(light.resolve("nope"), None);
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let theme = TableTheme::from_parts("not a color", false);
        assert_eq!(theme.color, Color::rgb(37, 99, 235));
    }
}
