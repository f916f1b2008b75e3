//! The stylesheet aggregator.

use crate::error::CssError;
use crate::random::RandomNameGenerator;
use crate::value::{CssValue, Palette};
use tessera_core::{Builder, ClassName};

/// Ordered CSS declarations for one selector block. Declaration order is
/// preserved; the cascade depends on it for equal-specificity properties.
pub type CssProps = Vec<(String, CssValue)>;

/// Produces class names for [`StyleSheet::add_anon_class`]. Injectable so
/// tests can generate stable names.
pub trait ClassNameGenerator {
    fn generate(&mut self) -> String;
}

/// A `@font-face` declaration: a family name plus source URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    pub family: String,
    pub sources: Vec<String>,
}

/// A selector block with ordered properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub selector: String,
    pub props: CssProps,
}

/// Palette-dependent raw CSS produced by a callback at render time.
pub type PaletteCssFn = Box<dyn Fn(&Palette) -> String>;

/// One independently renderable piece of a stylesheet.
pub enum StyleSheetElement {
    /// Raw CSS emitted unchanged.
    Css(String),
    FontFace(FontFace),
    Block(Block),
    /// Raw CSS computed from the palette at render time.
    PaletteCss(PaletteCssFn),
}

/// Aggregates stylesheet elements in insertion order and compiles them to
/// a single CSS string against a palette. Repeated selectors are emitted
/// as independent rules; the cascade resolves conflicts in the browser.
pub struct StyleSheet {
    pub elements: Vec<StyleSheetElement>,
    names: Box<dyn ClassNameGenerator>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::with_generator(Box::new(RandomNameGenerator))
    }

    /// Use a custom class-name generator, e.g. a deterministic one in
    /// tests.
    pub fn with_generator(names: Box<dyn ClassNameGenerator>) -> Self {
        Self {
            elements: Vec::new(),
            names,
        }
    }

    /// Append a raw CSS string, emitted unchanged.
    pub fn add_css(&mut self, css: impl Into<String>) {
        self.elements.push(StyleSheetElement::Css(css.into()));
    }

    /// Append a `@font-face` declaration and return the family name for
    /// use as a `font-family` value.
    pub fn add_font<I, S>(&mut self, family: impl Into<String>, sources: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let family = family.into();
        self.elements.push(StyleSheetElement::FontFace(FontFace {
            family: family.clone(),
            sources: sources.into_iter().map(Into::into).collect(),
        }));
        family
    }

    /// Append a selector block.
    pub fn add_block(&mut self, selector: impl Into<String>, props: CssProps) {
        self.elements.push(StyleSheetElement::Block(Block {
            selector: selector.into(),
            props,
        }));
    }

    /// Append a class rule and return its name.
    pub fn add_class(&mut self, name: impl Into<String>, props: CssProps) -> ClassName {
        let name = name.into();
        self.add_block(format!(".{name}"), props);
        ClassName::new(name)
    }

    /// Append a class rule under a generated name. Collisions are not
    /// managed; generated names are unique enough within one render.
    pub fn add_anon_class(&mut self, props: CssProps) -> ClassName {
        let name = self.names.generate();
        self.add_class(name, props)
    }

    /// Append palette-dependent raw CSS.
    pub fn add_palette_css(&mut self, f: impl Fn(&Palette) -> String + 'static) {
        self.elements.push(StyleSheetElement::PaletteCss(Box::new(f)));
    }

    /// Compile every element, in insertion order, against the palette.
    pub fn to_css(&self, builder: &mut Builder, palette: &Palette) {
        for element in &self.elements {
            element.to_css(builder, palette);
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleSheetElement {
    pub fn to_css(&self, builder: &mut Builder, palette: &Palette) {
        match self {
            StyleSheetElement::Css(css) => builder.push_str(css),
            StyleSheetElement::FontFace(font) => font.to_css(builder),
            StyleSheetElement::Block(block) => block.to_css(builder, palette),
            StyleSheetElement::PaletteCss(f) => {
                let css = f(palette);
                builder.push_str(&css);
            }
        }
    }
}

impl FontFace {
    pub fn to_css(&self, builder: &mut Builder) {
        builder.push_str("@font-face{font-family:");
        builder.push_str(&self.family);
        builder.push_str(";src:");
        for (i, source) in self.sources.iter().enumerate() {
            if i > 0 {
                builder.push(',');
            }
            let format = match format_token(source) {
                Ok(token) => token,
                Err(error) => {
                    builder.report(&error);
                    ""
                }
            };
            builder.push_str("url(");
            builder.push_str(source);
            builder.push_str(")format('");
            builder.push_str(format);
            builder.push_str("')");
        }
        builder.push_str(";}");
    }
}

/// The `format()` token for a font source URL, keyed on its extension.
fn format_token(url: &str) -> Result<&'static str, CssError> {
    let extension = url.rsplit('.').next().unwrap_or_default();
    match extension {
        "ttf" => Ok("truetype"),
        "otf" => Ok("opentype"),
        "woff" => Ok("woff"),
        "woff2" => Ok("woff2"),
        _ => Err(CssError::InvalidFontUrl(url.to_string())),
    }
}

impl Block {
    pub fn to_css(&self, builder: &mut Builder, palette: &Palette) {
        builder.push_str(&self.selector);
        builder.push('{');
        for (key, value) in &self.props {
            builder.push_str(key);
            builder.push(':');
            let resolved = value.resolve_or_inherit(palette, builder);
            builder.push_str(&resolved);
            builder.push(';');
        }
        builder.push('}');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{hex, rgb};
    use crate::units::{em, px};
    use crate::value::{css_format, palette_value};
    use crate::{props, render_css, render_css_opts};
    use pretty_assertions::assert_eq;
    use tessera_core::MemorySink;

    /// Counts upward: "c0", "c1", ...
    struct SequentialNames(usize);

    impl ClassNameGenerator for SequentialNames {
        fn generate(&mut self) -> String {
            let name = format!("c{}", self.0);
            self.0 += 1;
            name
        }
    }

    fn test_sheet() -> StyleSheet {
        StyleSheet::with_generator(Box::new(SequentialNames(0)))
    }

    // =========================================================================
    // Font format tokens
    // =========================================================================

    #[test]
    fn test_font_url_to_format_token() {
        assert_eq!(format_token("a.ttf"), Ok("truetype"));
        assert_eq!(format_token("a.otf"), Ok("opentype"));
        assert_eq!(format_token("a.woff"), Ok("woff"));
        assert_eq!(format_token("a.woff2"), Ok("woff2"));
        assert_eq!(
            format_token("a.png"),
            Err(CssError::InvalidFontUrl("a.png".to_string())),
        );
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    #[test]
    fn test_renders_empty_stylesheet() {
        assert_eq!(render_css(&StyleSheet::new(), &Palette::new()), "");
    }

    #[test]
    fn test_raw_css_is_emitted_unchanged() {
        let mut styles = StyleSheet::new();
        styles.add_css(".hello{background:red;}");
        assert_eq!(
            render_css(&styles, &Palette::new()),
            ".hello{background:red;}",
        );
    }

    #[test]
    fn test_font_face() {
        let mut styles = StyleSheet::new();
        let font = styles.add_font("OpenSans", ["OpenSans.ttf", "OpenSans.woff2"]);
        assert_eq!(font, "OpenSans");
        assert_eq!(
            render_css(&styles, &Palette::new()),
            "@font-face{font-family:OpenSans;src:url(OpenSans.ttf)format('truetype'),url(OpenSans.woff2)format('woff2');}",
        );
    }

    #[test]
    fn test_invalid_font_url_reports_and_renders_empty_token() {
        let mut styles = StyleSheet::new();
        styles.add_font("OpenSans", ["OpenSans.png"]);
        let mut sink = MemorySink::new();
        let css = render_css_opts(&styles, &Palette::new(), Some(&mut sink));
        assert_eq!(
            css,
            "@font-face{font-family:OpenSans;src:url(OpenSans.png)format('');}",
        );
        assert_eq!(sink.messages, vec!["Invalid font URL: OpenSans.png"]);
    }

    #[test]
    fn test_class_with_string_prop() {
        let mut styles = StyleSheet::new();
        let class = styles.add_class("container", props! { "cursor" => "pointer" });
        assert_eq!(class.as_str(), "container");
        assert_eq!(
            render_css(&styles, &Palette::new()),
            ".container{cursor:pointer;}",
        );
    }

    #[test]
    fn test_class_with_size_prop() {
        let mut styles = StyleSheet::new();
        styles.add_class("container", props! { "padding" => em(1.5) });
        assert_eq!(
            render_css(&styles, &Palette::new()),
            ".container{padding:1.50em;}",
        );
    }

    #[test]
    fn test_class_with_int_prop_renders_pixels() {
        let mut styles = StyleSheet::new();
        styles.add_class("container", props! { "margin" => 10 });
        assert_eq!(
            render_css(&styles, &Palette::new()),
            ".container{margin:10px;}",
        );
    }

    #[test]
    fn test_class_with_color_prop() {
        let mut styles = StyleSheet::new();
        styles.add_class("container", props! { "color" => rgb(255, 0, 0) });
        assert_eq!(
            render_css(&styles, &Palette::new()),
            ".container{color:#FF0000;}",
        );
    }

    #[test]
    fn test_anon_class_uses_generated_name() {
        let mut styles = test_sheet();
        let class = styles.add_anon_class(props! { "cursor" => "pointer" });
        assert_eq!(class.as_str(), "c0");
        assert_eq!(render_css(&styles, &Palette::new()), ".c0{cursor:pointer;}");
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let mut styles = StyleSheet::new();
        styles.add_block(
            "body",
            props! {
                "margin" => 0,
                "padding" => px(4.0),
                "margin" => 8,
            },
        );
        assert_eq!(
            render_css(&styles, &Palette::new()),
            "body{margin:0px;padding:4px;margin:8px;}",
        );
    }

    #[test]
    fn test_block_with_palette_value() {
        let mut styles = StyleSheet::new();
        styles.add_block("body", props! { "background" => palette_value("background-color") });
        let palette = Palette::from([("background-color".to_string(), hex("#FF00FF").into())]);
        assert_eq!(
            render_css(&styles, &palette),
            "body{background:#FF00FF;}",
        );
    }

    #[test]
    fn test_block_with_formatted_palette_value() {
        let mut styles = StyleSheet::new();
        styles.add_block(
            "div",
            props! {
                "border" => css_format(
                    "{} solid {}",
                    vec![px(2.0).into(), palette_value("border-color")],
                ),
            },
        );
        let palette = Palette::from([("border-color".to_string(), hex("#FF00FF").into())]);
        assert_eq!(
            render_css(&styles, &palette),
            "div{border:2px solid #FF00FF;}",
        );
    }

    #[test]
    fn test_missing_palette_value_reports_and_inherits() {
        let mut styles = StyleSheet::new();
        styles.add_block("body", props! { "background" => palette_value("background-color") });
        let mut sink = MemorySink::new();
        let css = render_css_opts(&styles, &Palette::new(), Some(&mut sink));
        assert_eq!(css, "body{background:inherit;}");
        assert_eq!(sink.messages, vec!["Missing palette value: background-color"]);
    }

    #[test]
    fn test_invalid_value_reports_and_inherits() {
        let mut styles = StyleSheet::new();
        styles.add_block("body", props! { "width" => px(f32::NAN) });
        let mut sink = MemorySink::new();
        let css = render_css_opts(&styles, &Palette::new(), Some(&mut sink));
        assert_eq!(css, "body{width:inherit;}");
        assert_eq!(sink.messages.len(), 1);
        assert!(sink.messages[0].starts_with("Invalid CSS value:"));
    }

    #[test]
    fn test_palette_css_callback() {
        let mut styles = StyleSheet::new();
        styles.add_palette_css(|palette| {
            let color = palette_value("background-color")
                .try_resolve(palette)
                .unwrap_or_else(|_| "inherit".to_string());
            format!("body{{background:{color};}}")
        });
        let palette = Palette::from([("background-color".to_string(), hex("#FF00FF").into())]);
        assert_eq!(render_css(&styles, &palette), "body{background:#FF00FF;}");
    }

    #[test]
    fn test_repeated_selectors_are_kept_as_separate_rules() {
        let mut styles = StyleSheet::new();
        styles.add_block("body", props! { "background" => "red" });
        styles.add_block("body", props! { "background" => "blue" });
        assert_eq!(
            render_css(&styles, &Palette::new()),
            "body{background:red;}body{background:blue;}",
        );
    }
}
