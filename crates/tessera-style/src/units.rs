//! CSS size units.

use std::fmt;

/// A CSS length or percentage unit suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Em,
    Rem,
    Cm,
    Mm,
    In,
    Pt,
    Pc,
    Ex,
    Ch,
    Vw,
    Vh,
    VMin,
    VMax,
    Percent,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::In => "in",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Ex => "ex",
            Unit::Ch => "ch",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::VMin => "vmin",
            Unit::VMax => "vmax",
            Unit::Percent => "%",
        }
    }
}

/// A numeric CSS value with a unit, e.g. `4px` or `1.25em`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub value: f32,
    pub unit: Unit,
}

impl Size {
    pub fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }
}

/// Whole values format as bare integers, everything else as 2-decimal
/// fixed point; `4px` rather than `4.00px` keeps output small.
impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.fract() == 0.0 && self.value.is_finite() {
            write!(f, "{}{}", self.value as i64, self.unit.suffix())
        } else {
            write!(f, "{:.2}{}", self.value, self.unit.suffix())
        }
    }
}

pub fn px(value: f32) -> Size {
    Size::new(value, Unit::Px)
}

pub fn em(value: f32) -> Size {
    Size::new(value, Unit::Em)
}

pub fn rem(value: f32) -> Size {
    Size::new(value, Unit::Rem)
}

pub fn cm(value: f32) -> Size {
    Size::new(value, Unit::Cm)
}

pub fn mm(value: f32) -> Size {
    Size::new(value, Unit::Mm)
}

/// Inches ("in" is reserved in Rust, hence the long name).
pub fn inches(value: f32) -> Size {
    Size::new(value, Unit::In)
}

pub fn pt(value: f32) -> Size {
    Size::new(value, Unit::Pt)
}

pub fn pc(value: f32) -> Size {
    Size::new(value, Unit::Pc)
}

pub fn ex(value: f32) -> Size {
    Size::new(value, Unit::Ex)
}

pub fn ch(value: f32) -> Size {
    Size::new(value, Unit::Ch)
}

pub fn vw(value: f32) -> Size {
    Size::new(value, Unit::Vw)
}

pub fn vh(value: f32) -> Size {
    Size::new(value, Unit::Vh)
}

pub fn vmin(value: f32) -> Size {
    Size::new(value, Unit::VMin)
}

pub fn vmax(value: f32) -> Size {
    Size::new(value, Unit::VMax)
}

pub fn percent(value: f32) -> Size {
    Size::new(value, Unit::Percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_formats_whole_values_as_integers() {
        let cases = [
            (px(5.0), "5px"),
            (em(5.0), "5em"),
            (rem(5.0), "5rem"),
            (cm(5.0), "5cm"),
            (mm(5.0), "5mm"),
            (inches(5.0), "5in"),
            (pt(5.0), "5pt"),
            (pc(5.0), "5pc"),
            (ex(5.0), "5ex"),
            (ch(5.0), "5ch"),
            (vw(5.0), "5vw"),
            (vh(5.0), "5vh"),
            (vmin(5.0), "5vmin"),
            (vmax(5.0), "5vmax"),
            (percent(5.0), "5%"),
        ];
        for (size, expected) in cases {
            assert_eq!(size.to_string(), expected);
        }
    }

    #[test]
    fn test_formats_fractional_values_with_two_decimals() {
        assert_eq!(em(4.3).to_string(), "4.30em");
    }

    #[test]
    fn test_fractional_values_are_rounded_to_two_decimals() {
        assert_eq!(em(3.14159).to_string(), "3.14em");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(px(-2.0).to_string(), "-2px");
        assert_eq!(px(-2.5).to_string(), "-2.50px");
    }
}
