//! Tessera sitemap
//!
//! Serializes a list of page locations to XML following the sitemaps.org
//! protocol: https://www.sitemaps.org/protocol.html
//!
//! URLs are opaque strings; they are never fetched or validated.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::fmt;
use tessera_core::{Builder, DiagnosticSink, RenderOptions, StderrSink};

/// How frequently a page is expected to change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChangeFreq {
    /// No change frequency specified; the `<changefreq>` element is
    /// omitted.
    #[default]
    None,
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChangeFreq::None => "",
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        })
    }
}

/// The default priority. `<priority>` is omitted when equal to it.
pub const DEFAULT_PRIORITY: f64 = 0.5;

/// A single sitemap entry: a URL with optional metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapLocation {
    pub url: String,
    pub lastmod: Option<DateTime<FixedOffset>>,
    pub changefreq: ChangeFreq,
    pub priority: f64,
}

impl SitemapLocation {
    /// An entry with just a URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            lastmod: None,
            changefreq: ChangeFreq::None,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// An entry with a URL and a last-modified date.
    pub fn with_lastmod(url: impl Into<String>, lastmod: DateTime<FixedOffset>) -> Self {
        Self {
            lastmod: Some(lastmod),
            ..Self::from_url(url)
        }
    }

    /// An entry with every field specified.
    pub fn new(
        url: impl Into<String>,
        lastmod: DateTime<FixedOffset>,
        changefreq: ChangeFreq,
        priority: f64,
    ) -> Self {
        Self {
            url: url.into(),
            lastmod: Some(lastmod),
            changefreq,
            priority,
        }
    }
}

/// An ordered collection of sitemap locations.
pub type Sitemap = Vec<SitemapLocation>;

/// Render a sitemap into an XML string with the default settings. See
/// [`render_sitemap_opts`] for more fine-grained control.
pub fn render_sitemap(sitemap: &Sitemap) -> String {
    render_sitemap_opts(sitemap, None)
}

/// Render a sitemap with an explicit diagnostic sink. A `None` sink
/// reports to stderr.
pub fn render_sitemap_opts(sitemap: &Sitemap, sink: Option<&mut dyn DiagnosticSink>) -> String {
    let mut stderr = StderrSink;
    let sink: &mut dyn DiagnosticSink = match sink {
        Some(sink) => sink,
        None => &mut stderr,
    };
    let mut builder = Builder::new(RenderOptions::default(), sink);
    to_xml(sitemap, &mut builder);
    builder.into_string()
}

fn to_xml(sitemap: &Sitemap, builder: &mut Builder) {
    builder.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    builder.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">");
    for location in sitemap {
        builder.push_str("<url><loc>");
        builder.push_str(&location.url);
        builder.push_str("</loc>");
        if let Some(lastmod) = &location.lastmod {
            builder.push_str("<lastmod>");
            builder.push_str(&lastmod.to_rfc3339_opts(SecondsFormat::Secs, true));
            builder.push_str("</lastmod>");
        }
        if location.changefreq != ChangeFreq::None {
            builder.push_str("<changefreq>");
            builder.push_str(&location.changefreq.to_string());
            builder.push_str("</changefreq>");
        }
        if location.priority != DEFAULT_PRIORITY {
            builder.push_str("<priority>");
            builder.push_str(&format!("{:.2}", location.priority));
            builder.push_str("</priority>");
        }
        builder.push_str("</url>");
    }
    builder.push_str("</urlset>");
}
