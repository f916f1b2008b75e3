//! Class-name vocabulary and composition.

use indexmap::IndexMap;
use std::fmt;

/// The name of a CSS class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ClassName(pub String);

impl ClassName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ClassName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A conditional class set. Keys are class names, values say whether the
/// class applies. For instance `{"foo": true, "bar": false}` evaluates to
/// `"foo"`.
pub type Classes = IndexMap<String, bool>;

/// One argument to [`class_names`]. The closed set of accepted shapes:
/// a plain name or a conditional set.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassArg {
    Name(String),
    Conditional(Classes),
}

impl From<&str> for ClassArg {
    fn from(name: &str) -> Self {
        ClassArg::Name(name.to_string())
    }
}

impl From<String> for ClassArg {
    fn from(name: String) -> Self {
        ClassArg::Name(name)
    }
}

impl From<ClassName> for ClassArg {
    fn from(name: ClassName) -> Self {
        ClassArg::Name(name.0)
    }
}

impl From<Classes> for ClassArg {
    fn from(classes: Classes) -> Self {
        ClassArg::Conditional(classes)
    }
}

/// Concatenate class names into a single space-separated string suitable
/// for a `class` attribute. Empty names and false conditional entries are
/// skipped.
pub fn class_names<I>(args: I) -> String
where
    I: IntoIterator<Item = ClassArg>,
{
    let mut classes: Vec<String> = Vec::new();
    for arg in args {
        match arg {
            ClassArg::Name(name) => {
                if !name.is_empty() {
                    classes.push(name);
                }
            }
            ClassArg::Conditional(set) => {
                for (name, enabled) in set {
                    if enabled && !name.is_empty() {
                        classes.push(name);
                    }
                }
            }
        }
    }
    classes.join(" ")
}
