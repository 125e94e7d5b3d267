//! Identifiers used for binding names and map member names.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// An identifier in a pattern: the `x` of `n@x` or of `.x`.
///
/// Binding names are ASCII letters; member names also allow digits and `_`.
/// The parser enforces this; `Name` itself accepts any text so hand-built
/// trees can name arbitrary map keys.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Name(Box<str>);

impl Name {
    #[inline]
    pub fn new(text: impl Into<Box<str>>) -> Self {
        Name(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Name {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::new(text)
    }
}

impl From<String> for Name {
    fn from(text: String) -> Self {
        Name::new(text)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
