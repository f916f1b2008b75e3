//! Void-tag classification.

/// Every "void" (childless, no closing tag) element name in valid HTML.
/// Looked up with a binary search, so the table must be kept in
/// alphabetical order; `tests::test_table_is_sorted` enforces this.
/// https://html.spec.whatwg.org/multipage/syntax.html#syntax-tags
pub const VOID_TAGS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Whether `tag` is a void element. Total for any input, including the
/// empty string and names sorting after the last table entry.
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.binary_search(&tag).is_ok()
}
