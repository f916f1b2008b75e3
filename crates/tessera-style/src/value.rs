//! CSS property values and palette resolution.

use crate::color::{Color, Hsl, Hsla, Rgb, Rgba};
use crate::error::CssError;
use crate::units::{px, Size};
use std::collections::{BTreeMap, HashMap};
use tessera_core::{Builder, ClassName};

/// A mapping from theme variable names to concrete CSS values, letting
/// one stylesheet skeleton render with different values (e.g. light and
/// dark mode).
pub type Palette = HashMap<String, CssValue>;

/// Named palettes for multi-theme rendering.
pub type Palettes = BTreeMap<String, Palette>;

/// Palette lookups chaining deeper than this are treated as cycles.
const MAX_PALETTE_DEPTH: usize = 32;

/// A typed CSS property value.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// A literal string, emitted unchanged.
    Literal(String),
    /// A numeric value with a unit suffix.
    Size(Size),
    Color(Color),
    /// An indirect reference resolved against the palette at render time.
    Palette(String),
    /// A format template with embedded values.
    Format(CssFormat),
}

/// A template whose `{}` placeholders are substituted with resolved
/// values, e.g. `css_format("{} solid {}", vec![px(2.0).into(),
/// palette_value("border-color")])`.
#[derive(Debug, Clone, PartialEq)]
pub struct CssFormat {
    pub template: String,
    pub args: Vec<CssValue>,
}

/// Reference a palette entry by key.
pub fn palette_value(key: impl Into<String>) -> CssValue {
    CssValue::Palette(key.into())
}

/// Build a composite value from a `{}` template.
pub fn css_format(template: impl Into<String>, args: Vec<CssValue>) -> CssValue {
    CssValue::Format(CssFormat {
        template: template.into(),
        args,
    })
}

/// Build [`CssProps`](crate::CssProps) from `key => value` pairs:
///
/// ```
/// use tessera_style::{props, px, CssProps};
///
/// let p: CssProps = props! {
///     "background" => "red",
///     "padding" => px(4.0),
/// };
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! props {
    ($($key:expr => $value:expr),* $(,)?) => {
        vec![$(($key.to_string(), $crate::CssValue::from($value))),*]
    };
}

impl CssValue {
    /// Resolve to the textual CSS form. Fails on missing palette keys,
    /// palette cycles, and non-finite sizes; render paths catch the
    /// error, report it, and substitute `"inherit"`.
    pub fn try_resolve(&self, palette: &Palette) -> Result<String, CssError> {
        self.resolve_at_depth(palette, 0)
    }

    /// Resolve with the standard fallback: on failure the error goes to
    /// the builder's sink and `"inherit"` is substituted, keeping the
    /// stylesheet syntactically valid.
    pub fn resolve_or_inherit(&self, palette: &Palette, builder: &mut Builder) -> String {
        match self.try_resolve(palette) {
            Ok(value) => value,
            Err(error) => {
                builder.report(&error);
                "inherit".to_string()
            }
        }
    }

    fn resolve_at_depth(&self, palette: &Palette, depth: usize) -> Result<String, CssError> {
        match self {
            CssValue::Literal(value) => Ok(value.clone()),
            CssValue::Size(size) => {
                if size.value.is_finite() {
                    Ok(size.to_string())
                } else {
                    Err(CssError::InvalidValue(format!("{:?}", size.value)))
                }
            }
            CssValue::Color(color) => Ok(color.to_css()),
            CssValue::Palette(key) => {
                if depth >= MAX_PALETTE_DEPTH {
                    return Err(CssError::InvalidValue(format!(
                        "circular palette reference: {key}",
                    )));
                }
                match palette.get(key) {
                    Some(value) => value.resolve_at_depth(palette, depth + 1),
                    None => Err(CssError::MissingPaletteValue(key.clone())),
                }
            }
            CssValue::Format(format) => format.resolve_at_depth(palette, depth),
        }
    }
}

impl CssFormat {
    fn resolve_at_depth(&self, palette: &Palette, depth: usize) -> Result<String, CssError> {
        let mut out = String::new();
        let mut args = self.args.iter();
        let mut parts = self.template.split("{}");
        if let Some(first) = parts.next() {
            out.push_str(first);
        }
        for part in parts {
            if let Some(arg) = args.next() {
                out.push_str(&arg.resolve_at_depth(palette, depth)?);
            }
            out.push_str(part);
        }
        Ok(out)
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        CssValue::Literal(value.to_string())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        CssValue::Literal(value)
    }
}

impl From<ClassName> for CssValue {
    fn from(name: ClassName) -> Self {
        CssValue::Literal(name.0)
    }
}

impl From<Size> for CssValue {
    fn from(size: Size) -> Self {
        CssValue::Size(size)
    }
}

/// Bare integers are pixel counts, the most common shorthand.
impl From<i32> for CssValue {
    fn from(value: i32) -> Self {
        CssValue::Size(px(value as f32))
    }
}

impl From<Color> for CssValue {
    fn from(color: Color) -> Self {
        CssValue::Color(color)
    }
}

impl From<Rgb> for CssValue {
    fn from(color: Rgb) -> Self {
        CssValue::Color(color.into())
    }
}

impl From<Rgba> for CssValue {
    fn from(color: Rgba) -> Self {
        CssValue::Color(color.into())
    }
}

impl From<Hsl> for CssValue {
    fn from(color: Hsl) -> Self {
        CssValue::Color(color.into())
    }
}

impl From<Hsla> for CssValue {
    fn from(color: Hsla) -> Self {
        CssValue::Color(color.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex;
    use crate::units::em;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_literal_resolves_unchanged() {
        let value = CssValue::from("red");
        assert_eq!(value.try_resolve(&Palette::new()), Ok("red".to_string()));
    }

    #[test]
    fn test_size_resolves_with_suffix() {
        let value = CssValue::from(em(1.5));
        assert_eq!(value.try_resolve(&Palette::new()), Ok("1.50em".to_string()));
    }

    #[test]
    fn test_int_shorthand_resolves_as_pixels() {
        let value = CssValue::from(10);
        assert_eq!(value.try_resolve(&Palette::new()), Ok("10px".to_string()));
    }

    #[test]
    fn test_color_resolves_to_css_form() {
        let value = CssValue::from(hex("#ff00ff"));
        assert_eq!(value.try_resolve(&Palette::new()), Ok("#FF00FF".to_string()));
    }

    #[test]
    fn test_palette_lookup() {
        let palette = Palette::from([("bg".to_string(), hex("#ffffff").into())]);
        let value = palette_value("bg");
        assert_eq!(value.try_resolve(&palette), Ok("#FFFFFF".to_string()));
    }

    #[test]
    fn test_palette_lookup_resolves_recursively() {
        let palette = Palette::from([
            ("accent".to_string(), palette_value("base")),
            ("base".to_string(), hex("#00ff00").into()),
        ]);
        let value = palette_value("accent");
        assert_eq!(value.try_resolve(&palette), Ok("#00FF00".to_string()));
    }

    #[test]
    fn test_missing_palette_key_is_an_error() {
        let value = palette_value("bg");
        assert_eq!(
            value.try_resolve(&Palette::new()),
            Err(CssError::MissingPaletteValue("bg".to_string())),
        );
    }

    #[test]
    fn test_circular_palette_reference_is_an_error() {
        let palette = Palette::from([("a".to_string(), palette_value("a"))]);
        let value = palette_value("a");
        assert!(value.try_resolve(&palette).is_err());
    }

    #[test]
    fn test_non_finite_size_is_an_error() {
        let value = CssValue::Size(px(f32::NAN));
        assert!(value.try_resolve(&Palette::new()).is_err());
    }

    #[test]
    fn test_format_substitutes_arguments() {
        let palette = Palette::from([("border-color".to_string(), hex("#FF00FF").into())]);
        let value = css_format(
            "{} solid {}",
            vec![px(2.0).into(), palette_value("border-color")],
        );
        assert_eq!(
            value.try_resolve(&palette),
            Ok("2px solid #FF00FF".to_string()),
        );
    }

    #[test]
    fn test_format_with_missing_argument_fails() {
        let value = css_format("{} solid {}", vec![px(2.0).into(), palette_value("nope")]);
        assert_eq!(
            value.try_resolve(&Palette::new()),
            Err(CssError::MissingPaletteValue("nope".to_string())),
        );
    }

    #[test]
    fn test_props_macro_builds_ordered_pairs() {
        let props: crate::CssProps = props! {
            "background" => "red",
            "padding" => px(4.0),
        };
        assert_eq!(props[0].0, "background");
        assert_eq!(props[1].1, CssValue::Size(px(4.0)));
    }
}
