use crate::types::{Color, ColorOp, Oklch, Rgb};

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<Color>;
}

/// Theme that resolves nothing. Unresolved variables paint as black.
pub struct EmptyTheme;

impl Theme for EmptyTheme {
    fn resolve(&self, _name: &str) -> Option<Color> {
        None
    }
}

/// Context for resolving color variables and derived colors.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve a color to a concrete Color (no Var or Derived variants).
    pub fn resolve(&self, color: &Color) -> Color {
        self.resolve_depth(color, 0)
    }

    fn resolve_depth(&self, color: &Color, depth: u8) -> Color {
        // Themes may alias variables to each other; cut off cycles.
        if depth > 8 {
            return Color::rgb(0, 0, 0);
        }
        match color {
            Color::Var(name) => match self.theme.resolve(name) {
                Some(resolved) => self.resolve_depth(&resolved, depth + 1),
                None => Color::rgb(0, 0, 0),
            },
            Color::Derived { base, ops } => {
                let resolved_base = self.resolve_depth(base, depth + 1);
                let mut oklch = to_oklch(&resolved_base);
                let mut alpha = resolved_base.opacity();

                for op in ops {
                    match op {
                        ColorOp::Lighten(amount) => {
                            oklch.l = (oklch.l + amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Darken(amount) => {
                            oklch.l = (oklch.l - amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Alpha(a) => {
                            alpha = a.clamp(0.0, 1.0);
                        }
                        ColorOp::Mix(other, amount) => {
                            let other = to_oklch(&self.resolve_depth(other, depth + 1));
                            oklch.l = oklch.l * (1.0 - amount) + other.l * amount;
                            oklch.c = oklch.c * (1.0 - amount) + other.c * amount;
                            let h_diff = other.h - oklch.h;
                            let h_diff = if h_diff > 180.0 {
                                h_diff - 360.0
                            } else if h_diff < -180.0 {
                                h_diff + 360.0
                            } else {
                                h_diff
                            };
                            oklch.h = (oklch.h + h_diff * amount).rem_euclid(360.0);
                        }
                    }
                }

                Color::Oklch {
                    l: oklch.l,
                    c: oklch.c,
                    h: oklch.h,
                    a: alpha,
                }
            }
            Color::Oklch { .. } | Color::Rgb { .. } => color.clone(),
        }
    }

    /// Resolve straight to RGB and opacity.
    pub fn resolve_rgb(&self, color: &Color) -> (Rgb, f32) {
        let resolved = self.resolve(color);
        (resolved.to_rgb(), resolved.opacity())
    }
}

fn to_oklch(color: &Color) -> Oklch {
    match color {
        Color::Oklch { l, c, h, .. } => Oklch::new(*l, *c, *h),
        Color::Rgb { r, g, b } => Oklch::from_rgb(Rgb::new(*r, *g, *b)),
        Color::Var(_) | Color::Derived { .. } => Oklch::default(),
    }
}
