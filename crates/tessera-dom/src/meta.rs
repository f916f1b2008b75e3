//! `<meta>` helpers for document heads.

use crate::element::Element;

/// A `meta` tag pairing a `name` with a `content` value.
pub fn meta(name: impl Into<String>, content: impl Into<String>) -> Element {
    Element::new("meta").attr("name", name).attr("content", content)
}

/// A "keywords" meta tag.
pub fn keywords(value: impl Into<String>) -> Element {
    meta("keywords", value)
}

/// A "description" meta tag.
pub fn description(value: impl Into<String>) -> Element {
    meta("description", value)
}

/// An "author" meta tag.
pub fn author(value: impl Into<String>) -> Element {
    meta("author", value)
}

/// A "viewport" meta tag. The empty string selects the usual
/// "width=device-width, initial-scale=1.0" default.
pub fn viewport(value: impl Into<String>) -> Element {
    let mut value = value.into();
    if value.is_empty() {
        value = "width=device-width, initial-scale=1.0".to_string();
    }
    meta("viewport", value)
}

/// A `meta` tag pairing an `http-equiv` with a `content` value.
pub fn equiv(key: impl Into<String>, content: impl Into<String>) -> Element {
    Element::new("meta")
        .attr("http-equiv", key)
        .attr("content", content)
}

/// Instruct the browser to reload the page every `seconds` seconds.
pub fn refresh(seconds: u32) -> Element {
    equiv("refresh", seconds.to_string())
}

/// An "x-ua-compatible" meta tag.
pub fn x_ua_compatible(value: impl Into<String>) -> Element {
    equiv("x-ua-compatible", value)
}

/// A charset declaration. The empty string selects UTF-8.
pub fn charset(value: impl Into<String>) -> Element {
    let mut value = value.into();
    if value.is_empty() {
        value = "UTF-8".to_string();
    }
    Element::new("meta").attr("charset", value)
}
