//! Constructors for the standard HTML5 tags.
//!
//! Each function returns a bare [`Element`] to be filled in with the
//! fluent builder API: `div().class("container").text("hi")`. A few
//! convenience constructors preset common attributes (`a_href`,
//! `link_href`, `script_src`).

use crate::element::Element;
use crate::text::raw;

pub fn a() -> Element {
    Element::new("a")
}

/// An anchor with its `href` preset.
pub fn a_href(href: impl Into<String>) -> Element {
    a().attr("href", href)
}

pub fn abbr() -> Element {
    Element::new("abbr")
}

pub fn address() -> Element {
    Element::new("address")
}

pub fn area() -> Element {
    Element::new("area")
}

pub fn article() -> Element {
    Element::new("article")
}

pub fn aside() -> Element {
    Element::new("aside")
}

pub fn audio() -> Element {
    Element::new("audio")
}

pub fn b() -> Element {
    Element::new("b")
}

pub fn base() -> Element {
    Element::new("base")
}

/// A `base` tag that also opens links in a new tab.
pub fn base_href(href: impl Into<String>) -> Element {
    base().attr("href", href).attr("target", "_blank")
}

pub fn bdi() -> Element {
    Element::new("bdi")
}

pub fn bdo() -> Element {
    Element::new("bdo")
}

pub fn blockquote() -> Element {
    Element::new("blockquote")
}

pub fn body() -> Element {
    Element::new("body")
}

pub fn br() -> Element {
    Element::new("br")
}

pub fn button() -> Element {
    Element::new("button")
}

pub fn canvas() -> Element {
    Element::new("canvas")
}

pub fn caption() -> Element {
    Element::new("caption")
}

pub fn cite() -> Element {
    Element::new("cite")
}

pub fn code() -> Element {
    Element::new("code")
}

pub fn col() -> Element {
    Element::new("col")
}

pub fn colgroup() -> Element {
    Element::new("colgroup")
}

pub fn data() -> Element {
    Element::new("data")
}

pub fn datalist() -> Element {
    Element::new("datalist")
}

pub fn dd() -> Element {
    Element::new("dd")
}

pub fn del() -> Element {
    Element::new("del")
}

pub fn details() -> Element {
    Element::new("details")
}

pub fn dfn() -> Element {
    Element::new("dfn")
}

pub fn dialog() -> Element {
    Element::new("dialog")
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn dl() -> Element {
    Element::new("dl")
}

pub fn dt() -> Element {
    Element::new("dt")
}

pub fn em() -> Element {
    Element::new("em")
}

pub fn embed() -> Element {
    Element::new("embed")
}

pub fn fieldset() -> Element {
    Element::new("fieldset")
}

pub fn figcaption() -> Element {
    Element::new("figcaption")
}

pub fn figure() -> Element {
    Element::new("figure")
}

pub fn footer() -> Element {
    Element::new("footer")
}

pub fn form() -> Element {
    Element::new("form")
}

/// A heading of the given level: `h(1)` renders `<h1>`.
pub fn h(level: u8) -> Element {
    Element::new(format!("h{level}"))
}

pub fn h1() -> Element {
    Element::new("h1")
}

pub fn h2() -> Element {
    Element::new("h2")
}

pub fn h3() -> Element {
    Element::new("h3")
}

pub fn h4() -> Element {
    Element::new("h4")
}

pub fn h5() -> Element {
    Element::new("h5")
}

pub fn h6() -> Element {
    Element::new("h6")
}

pub fn head() -> Element {
    Element::new("head")
}

pub fn header() -> Element {
    Element::new("header")
}

pub fn hr() -> Element {
    Element::new("hr")
}

pub fn i() -> Element {
    Element::new("i")
}

pub fn iframe() -> Element {
    Element::new("iframe")
}

pub fn img() -> Element {
    Element::new("img")
}

pub fn input() -> Element {
    Element::new("input")
}

pub fn ins() -> Element {
    Element::new("ins")
}

pub fn kbd() -> Element {
    Element::new("kbd")
}

pub fn label() -> Element {
    Element::new("label")
}

pub fn legend() -> Element {
    Element::new("legend")
}

pub fn li() -> Element {
    Element::new("li")
}

pub fn link() -> Element {
    Element::new("link")
}

/// A `link` tag with the given `rel` and `href`.
pub fn link_href(rel: impl Into<String>, href: impl Into<String>) -> Element {
    link().attr("rel", rel).attr("href", href)
}

pub fn main() -> Element {
    Element::new("main")
}

pub fn map() -> Element {
    Element::new("map")
}

pub fn mark() -> Element {
    Element::new("mark")
}

pub fn meter() -> Element {
    Element::new("meter")
}

pub fn nav() -> Element {
    Element::new("nav")
}

pub fn noscript() -> Element {
    Element::new("noscript")
}

pub fn object() -> Element {
    Element::new("object")
}

pub fn ol() -> Element {
    Element::new("ol")
}

pub fn optgroup() -> Element {
    Element::new("optgroup")
}

pub fn option() -> Element {
    Element::new("option")
}

pub fn output() -> Element {
    Element::new("output")
}

pub fn p() -> Element {
    Element::new("p")
}

pub fn param() -> Element {
    Element::new("param")
}

pub fn picture() -> Element {
    Element::new("picture")
}

pub fn pre() -> Element {
    Element::new("pre")
}

pub fn progress() -> Element {
    Element::new("progress")
}

pub fn q() -> Element {
    Element::new("q")
}

pub fn rp() -> Element {
    Element::new("rp")
}

pub fn rt() -> Element {
    Element::new("rt")
}

pub fn ruby() -> Element {
    Element::new("ruby")
}

pub fn s() -> Element {
    Element::new("s")
}

pub fn samp() -> Element {
    Element::new("samp")
}

pub fn script() -> Element {
    Element::new("script")
}

/// An external script reference.
pub fn script_src(src: impl Into<String>) -> Element {
    script().attr("src", src)
}

/// A script with inline (unescaped) source code.
pub fn inline_script(code: impl Into<String>) -> Element {
    script().child(raw(code))
}

pub fn section() -> Element {
    Element::new("section")
}

pub fn select() -> Element {
    Element::new("select")
}

pub fn small() -> Element {
    Element::new("small")
}

pub fn source() -> Element {
    Element::new("source")
}

pub fn span() -> Element {
    Element::new("span")
}

pub fn strong() -> Element {
    Element::new("strong")
}

pub fn style() -> Element {
    Element::new("style")
}

/// A style tag with inline (unescaped) CSS.
pub fn inline_style(css: impl Into<String>) -> Element {
    style().child(raw(css))
}

pub fn sub() -> Element {
    Element::new("sub")
}

pub fn summary() -> Element {
    Element::new("summary")
}

pub fn sup() -> Element {
    Element::new("sup")
}

pub fn svg() -> Element {
    Element::new("svg")
}

pub fn table() -> Element {
    Element::new("table")
}

pub fn tbody() -> Element {
    Element::new("tbody")
}

pub fn td() -> Element {
    Element::new("td")
}

pub fn template() -> Element {
    Element::new("template")
}

pub fn textarea() -> Element {
    Element::new("textarea")
}

pub fn tfoot() -> Element {
    Element::new("tfoot")
}

pub fn th() -> Element {
    Element::new("th")
}

pub fn thead() -> Element {
    Element::new("thead")
}

pub fn time() -> Element {
    Element::new("time")
}

pub fn title() -> Element {
    Element::new("title")
}

pub fn tr() -> Element {
    Element::new("tr")
}

pub fn track() -> Element {
    Element::new("track")
}

pub fn u() -> Element {
    Element::new("u")
}

pub fn ul() -> Element {
    Element::new("ul")
}

pub fn var() -> Element {
    Element::new("var")
}

pub fn video() -> Element {
    Element::new("video")
}

pub fn wbr() -> Element {
    Element::new("wbr")
}
