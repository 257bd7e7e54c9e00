#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    /// Named variable, resolved through a [`Theme`](super::Theme).
    Var(String),
    Derived { base: Box<Color>, ops: Vec<ColorOp> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorOp {
    Lighten(f32),
    Darken(f32),
    Alpha(f32),
    Mix(Color, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend `self` over `under` with the given opacity.
    pub fn blend(self, under: Rgb, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| -> u8 {
            (top as f32 * a + bottom as f32 * (1.0 - a)).round() as u8
        };
        Rgb::new(mix(self.r, under.r), mix(self.g, under.g), mix(self.b, under.b))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Perceptual color coordinates used for lighten/darken/mix.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

impl Oklch {
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        use palette::{IntoColor, Srgb};

        let srgb = Srgb::new(rgb.r, rgb.g, rgb.b).into_format::<f32>();
        let oklch: palette::Oklch = srgb.into_color();
        Self::new(oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
    }

    pub fn to_rgb(self) -> Rgb {
        use palette::{Clamp, IntoColor, Srgb};

        let oklch = palette::Oklch::new(self.l, self.c, self.h);
        let srgb: Srgb = oklch.into_color();
        let (r, g, b) = srgb.clamp().into_format::<u8>().into_components();
        Rgb::new(r, g, b)
    }
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Parse a CSS-ish color string: `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a
    /// handful of named colors. Returns `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(body) = s.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
            let parts: Vec<u8> = body
                .split(',')
                .map(|p| p.trim().parse::<u8>())
                .collect::<Result<_, _>>()
                .ok()?;
            return match parts.as_slice() {
                [r, g, b] => Some(Self::rgb(*r, *g, *b)),
                _ => None,
            };
        }
        match s.to_ascii_lowercase().as_str() {
            "white" => Some(Self::rgb(255, 255, 255)),
            "black" => Some(Self::rgb(0, 0, 0)),
            "red" => Some(Self::rgb(239, 68, 68)),
            "green" => Some(Self::rgb(22, 163, 74)),
            "blue" => Some(Self::rgb(37, 99, 235)),
            "gray" | "grey" => Some(Self::rgb(148, 163, 184)),
            _ => None,
        }
    }

    /// Parse `input`, falling back to `fallback` when it is not a color.
    pub fn parse_or(input: &str, fallback: Color) -> Self {
        match Self::parse(input) {
            Some(color) => color,
            None => {
                log::warn!("unrecognized color {input:?}, using {}", fallback.to_dsl());
                fallback
            }
        }
    }

    pub fn lighten(self, amount: f32) -> Self {
        self.with_op(ColorOp::Lighten(amount))
    }

    pub fn darken(self, amount: f32) -> Self {
        self.with_op(ColorOp::Darken(amount))
    }

    pub fn alpha(self, a: f32) -> Self {
        self.with_op(ColorOp::Alpha(a))
    }

    pub fn mix(self, other: Color, amount: f32) -> Self {
        self.with_op(ColorOp::Mix(other, amount))
    }

    fn with_op(self, op: ColorOp) -> Self {
        match self {
            Self::Derived { base, mut ops } => {
                ops.push(op);
                Self::Derived { base, ops }
            }
            other => Self::Derived {
                base: Box::new(other),
                ops: vec![op],
            },
        }
    }

    /// Opacity of a concrete color. Variables and derived colors report 1.0
    /// until resolved.
    pub fn opacity(&self) -> f32 {
        match self {
            Self::Oklch { a, .. } => *a,
            _ => 1.0,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h, .. } => Oklch::new(*l, *c, *h).to_rgb(),
            Self::Var(_) => Rgb::default(), // needs ColorContext to resolve
            Self::Derived { .. } => Rgb::default(), // needs ColorContext to resolve
        }
    }

    pub fn to_dsl(&self) -> String {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b).to_hex(),
            Self::Oklch { l, c, h, a } => {
                if *a >= 1.0 {
                    format!("oklch({l}, {c}, {h})")
                } else {
                    format!("oklch({l}, {c}, {h}, {a})")
                }
            }
            Self::Var(name) => name.clone(),
            Self::Derived { base, ops } => {
                let mut s = base.to_dsl();
                for op in ops {
                    s.push_str(" | ");
                    s.push_str(&op.to_dsl());
                }
                s
            }
        }
    }
}

impl ColorOp {
    pub fn to_dsl(&self) -> String {
        match self {
            Self::Lighten(v) => format!("lighten({v})"),
            Self::Darken(v) => format!("darken({v})"),
            Self::Alpha(v) => format!("alpha({v})"),
            Self::Mix(color, amount) => format!("mix({}, {amount})", color.to_dsl()),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| {
                let d = c.to_digit(16).unwrap_or(0) as u8;
                d * 16 + d
            });
            Some(Color::rgb(digits.next()?, digits.next()?, digits.next()?))
        }
        6 => Some(Color::rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}
