//! Tessera style
//!
//! Typed CSS building blocks — colors, sizes, palette-indirected values —
//! and the [`StyleSheet`] aggregator that compiles them to CSS strings.
//! A stylesheet renders against a [`Palette`], so one skeleton can
//! produce themed variants (light/dark) from a single definition.
//!
//! ```
//! use tessera_style::{hex, palette_value, props, px, render_css, Palette, StyleSheet};
//!
//! let mut styles = StyleSheet::new();
//! styles.add_class("card", props! {
//!     "padding" => px(12.0),
//!     "background" => palette_value("bg"),
//! });
//!
//! let palette = Palette::from([("bg".to_string(), hex("#fff").into())]);
//! assert_eq!(
//!     render_css(&styles, &palette),
//!     ".card{padding:12px;background:#FFFFFF;}",
//! );
//! ```

pub mod color;
pub mod error;
pub mod random;
pub mod stylesheet;
pub mod units;
pub mod value;

pub use color::{darken, hex, hsl, hsla, lighten, rgb, rgba, Color, Hsl, Hsla, Rgb, Rgba};
pub use error::CssError;
pub use random::{random_string, RandomNameGenerator};
pub use stylesheet::{
    Block, ClassNameGenerator, CssProps, FontFace, StyleSheet, StyleSheetElement,
};
pub use units::{
    ch, cm, em, ex, inches, mm, pc, percent, pt, px, rem, vh, vmax, vmin, vw, Size, Unit,
};
pub use value::{css_format, palette_value, CssFormat, CssValue, Palette, Palettes};

use std::collections::BTreeMap;
use tessera_core::{Builder, DiagnosticSink, RenderOptions, StderrSink};

/// Render a stylesheet into a CSS string with the default settings. See
/// [`render_css_opts`] for more fine-grained control.
pub fn render_css(styles: &StyleSheet, palette: &Palette) -> String {
    render_css_opts(styles, palette, None)
}

/// Render a stylesheet with an explicit diagnostic sink. A `None` sink
/// reports to stderr.
pub fn render_css_opts(
    styles: &StyleSheet,
    palette: &Palette,
    sink: Option<&mut dyn DiagnosticSink>,
) -> String {
    let mut stderr = StderrSink;
    let sink: &mut dyn DiagnosticSink = match sink {
        Some(sink) => sink,
        None => &mut stderr,
    };
    let mut builder = Builder::new(RenderOptions::default(), sink);
    styles.to_css(&mut builder, palette);
    builder.into_string()
}

/// Render a stylesheet once per named palette, returning the CSS for each
/// theme keyed by palette name.
pub fn render_themes(styles: &StyleSheet, palettes: &Palettes) -> BTreeMap<String, String> {
    palettes
        .iter()
        .map(|(name, palette)| (name.clone(), render_css(styles, palette)))
        .collect()
}
