use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use tessera_core::{ClassName, EmptyElementStyle, RenderOptions};
use tessera_dom::meta::{author, charset, description, keywords, viewport};
use tessera_dom::tags::{body, div, head, link_href, span, title};
use tessera_dom::{html, render_html_opts, Node};
use tessera_sitemap::{render_sitemap, ChangeFreq, Sitemap, SitemapLocation};
use tessera_style::{
    em, hex, palette_value, props, render_themes, CssValue, Palette, Palettes, StyleSheet,
};

#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "Tessera — programmatic HTML and CSS generation demo")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the demo HTML page
    Page {
        /// Sort attributes for reproducible output
        #[arg(long)]
        deterministic: bool,

        /// Self-close childless tags (`<div />`) instead of `<div></div>`
        #[arg(long)]
        self_close: bool,
    },

    /// Print the demo stylesheet, once per palette
    Styles {
        /// JSON theme file: { "<palette>": { "<key>": "#hex or literal" } }
        #[arg(long)]
        theme: Option<String>,
    },

    /// Print the demo sitemap
    Sitemap,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Page {
            deterministic,
            self_close,
        } => cmd_page(deterministic, self_close),
        Command::Styles { theme } => cmd_styles(theme.as_deref()),
        Command::Sitemap => cmd_sitemap(),
    }
}

/// Theme file shape: palette names mapping keys to hex colors or CSS
/// literals.
#[derive(Debug, Deserialize)]
struct ThemeFile(BTreeMap<String, BTreeMap<String, String>>);

fn load_palettes(path: Option<&str>) -> Palettes {
    let Some(path) = path else {
        return default_palettes();
    };

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    };

    let theme: ThemeFile = match serde_json::from_str(&source) {
        Ok(theme) => theme,
        Err(e) => {
            eprintln!("Error parsing {path}: {e}");
            std::process::exit(1);
        }
    };

    theme
        .0
        .into_iter()
        .map(|(name, entries)| {
            let palette: Palette = entries
                .into_iter()
                .map(|(key, value)| (key, parse_theme_value(&value)))
                .collect();
            (name, palette)
        })
        .collect()
}

/// Strings starting with `#` are hex colors; anything else is a literal.
fn parse_theme_value(value: &str) -> CssValue {
    if value.starts_with('#') {
        hex(value).into()
    } else {
        value.into()
    }
}

fn default_palettes() -> Palettes {
    let mut palettes = Palettes::new();
    palettes.insert(
        "light".to_string(),
        Palette::from([
            ("bg".to_string(), hex("#eee").into()),
            ("fg".to_string(), hex("#222").into()),
        ]),
    );
    palettes.insert(
        "dark".to_string(),
        Palette::from([
            ("bg".to_string(), hex("#363636").into()),
            ("fg".to_string(), hex("#ddd").into()),
        ]),
    );
    palettes
}

fn demo_styles() -> (StyleSheet, ClassName) {
    let mut styles = StyleSheet::new();
    let font = styles.add_font("OpenSans", ["/OpenSans.woff2"]);
    let container = styles.add_anon_class(props! {
        "font-family" => font,
        "padding" => em(2.0),
        "background" => palette_value("bg"),
        "color" => palette_value("fg"),
    });
    (styles, container)
}

fn demo_page(container: &ClassName) -> Node {
    html(
        head()
            .child(charset(""))
            .child(title().text("My HTML Document"))
            .child(link_href("stylesheet", "/styles/index.css"))
            .child(keywords("tessera,template,rendering,rust"))
            .child(description("Tessera templates for Rust"))
            .child(author("Mendex"))
            .child(viewport("")),
        body()
            .class(container.clone())
            .child(
                div()
                    .attr("aria-label", "hello world")
                    .class("foo")
                    .class("bar")
                    .child(span().text("Hello world")),
            )
            .child(div().text("foobar")),
    )
    .attr("lang", "en")
    .into()
}

fn cmd_page(deterministic: bool, self_close: bool) {
    let (_, container) = demo_styles();
    let page = demo_page(&container);

    let options = RenderOptions {
        deterministic_attrs: deterministic,
        empty_elements: if self_close {
            EmptyElementStyle::SelfClose
        } else {
            EmptyElementStyle::ExplicitClose
        },
    };
    println!("{}", render_html_opts(&page, options, None));
}

fn cmd_styles(theme: Option<&str>) {
    let (styles, _) = demo_styles();
    let palettes = load_palettes(theme);

    for (name, css) in render_themes(&styles, &palettes) {
        println!("/* {name} */");
        println!("{css}");
    }
}

fn cmd_sitemap() {
    let sitemap: Sitemap = vec![
        SitemapLocation::from_url("https://example.com/"),
        SitemapLocation::with_lastmod(
            "https://example.com/blog",
            chrono::DateTime::parse_from_rfc3339("2026-08-01T12:00:00Z")
                .expect("valid RFC 3339 timestamp"),
        ),
        SitemapLocation::new(
            "https://example.com/news",
            chrono::DateTime::parse_from_rfc3339("2026-08-07T09:30:00+02:00")
                .expect("valid RFC 3339 timestamp"),
            ChangeFreq::Daily,
            0.9,
        ),
    ];
    println!("{}", render_sitemap(&sitemap));
}
