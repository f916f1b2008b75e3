//! Color values and conversions.
//!
//! Four color forms — RGB, RGBA, HSL, HSLA — each convertible to the
//! others and to its textual CSS form. Conversions are pure arithmetic;
//! parsing failures degrade to black rather than aborting a render.

use crate::error::CssError;

/// An RGB color. Channels are 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An RGB color plus an alpha channel, all 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// An HSL color. `h` is degrees on the color wheel (0 red, 120 green,
/// 240 blue); `s` and `l` are fractions in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: u16,
    pub s: f32,
    pub l: f32,
}

/// An HSL color plus an alpha fraction in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: u16,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

/// Any of the four supported color forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    Rgba(Rgba),
    Hsl(Hsl),
    Hsla(Hsla),
}

pub fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba {
    Rgba { r, g, b, a }
}

pub fn hsl(h: u16, s: f32, l: f32) -> Hsl {
    Hsl { h, s, l }
}

pub fn hsla(h: u16, s: f32, l: f32, a: f32) -> Hsla {
    Hsla { h, s, l, a }
}

/// Parse a hex color, falling back to black on malformed input. Use
/// [`Rgb::from_hex`] to observe the parse failure instead.
pub fn hex(value: &str) -> Rgb {
    Rgb::from_hex(value).unwrap_or(Rgb { r: 0, g: 0, b: 0 })
}

impl Rgb {
    /// Parse `#RRGGBB` or `#RGB` (nibbles duplicated), case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Rgb, CssError> {
        let invalid = || CssError::InvalidHexColor(hex.to_string());
        let body = hex.strip_prefix('#').ok_or_else(invalid)?;
        let digits = body
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(invalid)?;
        match digits.as_slice() {
            [r1, r2, g1, g2, b1, b2] => Ok(Rgb {
                r: r1 * 16 + r2,
                g: g1 * 16 + g2,
                b: b1 * 16 + b2,
            }),
            [r, g, b] => Ok(Rgb {
                r: r * 17,
                g: g * 17,
                b: b * 17,
            }),
            _ => Err(invalid()),
        }
    }

    pub fn to_css(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_rgba(self) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: 255,
        }
    }

    pub fn to_hsla(self) -> Hsla {
        self.to_rgba().to_hsla()
    }
}

impl Rgba {
    pub fn to_css(self) -> String {
        let alpha = f32::from(self.a) / 255.0;
        format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, alpha)
    }

    pub fn to_hsla(self) -> Hsla {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;
        let a = f32::from(self.a) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        // Achromatic: hue and saturation default to zero
        if max == min {
            return Hsla { h: 0, s: 0.0, l, a };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsla {
            h: (h * 60.0).round() as u16,
            s,
            l,
            a,
        }
    }
}

impl Hsl {
    pub fn to_css(self) -> String {
        format!(
            "hsl({}, {:.1}%, {:.1}%)",
            self.h,
            self.s * 100.0,
            self.l * 100.0,
        )
    }

    pub fn to_hsla(self) -> Hsla {
        Hsla {
            h: self.h,
            s: self.s,
            l: self.l,
            a: 1.0,
        }
    }
}

impl Hsla {
    pub fn to_css(self) -> String {
        format!(
            "hsla({}, {:.1}%, {:.1}%, {:.2})",
            self.h,
            self.s * 100.0,
            self.l * 100.0,
            self.a,
        )
    }

    pub fn to_hsla(self) -> Hsla {
        self
    }

    pub fn to_rgba(self) -> Rgba {
        let a = (self.a * 255.0).round() as u8;

        if self.s == 0.0 {
            let v = (self.l * 255.0).round() as u8;
            return Rgba { r: v, g: v, b: v, a };
        }

        let h = f32::from(self.h) / 360.0;
        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;

        Rgba {
            r: (hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
            g: (hue_to_channel(p, q, h) * 255.0).round() as u8,
            b: (hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
            a,
        }
    }
}

/// Derive one RGB channel from hue position `t`, with `p` and `q` the
/// lightness/saturation intermediates. The hue circle is partitioned
/// into six 60-degree sectors.
fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl Color {
    pub fn to_css(self) -> String {
        match self {
            Color::Rgb(c) => c.to_css(),
            Color::Rgba(c) => c.to_css(),
            Color::Hsl(c) => c.to_css(),
            Color::Hsla(c) => c.to_css(),
        }
    }

    pub fn to_hsla(self) -> Hsla {
        match self {
            Color::Rgb(c) => c.to_hsla(),
            Color::Rgba(c) => c.to_hsla(),
            Color::Hsl(c) => c.to_hsla(),
            Color::Hsla(c) => c,
        }
    }

    pub fn to_rgba(self) -> Rgba {
        match self {
            Color::Rgb(c) => c.to_rgba(),
            Color::Rgba(c) => c,
            Color::Hsl(c) => c.to_hsla().to_rgba(),
            Color::Hsla(c) => c.to_rgba(),
        }
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c)
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::Rgba(c)
    }
}

impl From<Hsl> for Color {
    fn from(c: Hsl) -> Self {
        Color::Hsl(c)
    }
}

impl From<Hsla> for Color {
    fn from(c: Hsla) -> Self {
        Color::Hsla(c)
    }
}

/// Darken a color by `amount` (a fraction in 0.0-1.0) by scaling its
/// lightness down. Hue, saturation, and alpha are unchanged.
pub fn darken(color: impl Into<Color>, amount: f32) -> Hsla {
    let mut hsla = color.into().to_hsla();
    hsla.l = (hsla.l - hsla.l * amount).clamp(0.0, 1.0);
    hsla
}

/// Lighten a color by `amount` (a fraction in 0.0-1.0) by scaling its
/// lightness up. Hue, saturation, and alpha are unchanged.
pub fn lighten(color: impl Into<Color>, amount: f32) -> Hsla {
    let mut hsla = color.into().to_hsla();
    hsla.l = (hsla.l + hsla.l * amount).clamp(0.0, 1.0);
    hsla
}
