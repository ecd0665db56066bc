//! Key classification and path tokenization.
//!
//! A key is a *path* when it is text containing [`PATH_DELIMITER`]; every
//! other key is *simple* and used verbatim. Paths are split into tokens on
//! every delimiter and empty segments are kept: `"a."` is the empty key
//! inside `a`, and `".a"` is `a` inside the empty key.
//!
//! # Examples
//!
//! ```
//! # use attrmap::Key;
//! # use attrmap::map::path::{KeyClass, classify};
//! let key = Key::from("user.profile.name");
//! match classify(&key) {
//!     KeyClass::Path(path) => {
//!         assert_eq!(path.tokens(), ["user", "profile", "name"]);
//!         assert_eq!(path.split_last(), (&["user", "profile"][..], "name"));
//!     }
//!     KeyClass::Simple => unreachable!(),
//! }
//!
//! assert!(matches!(classify(&Key::from("name")), KeyClass::Simple));
//! assert!(matches!(classify(&Key::from(42)), KeyClass::Simple));
//! ```

use std::fmt;

use super::Key;
use crate::constants::PATH_DELIMITER;

/// How a key is interpreted by the item-access operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyClass<'a> {
    /// Used verbatim as a single entry key
    Simple,
    /// Decomposed into tokens and resolved through nested mappings
    Path(Path<'a>),
}

/// Classifies `key` as simple or path.
pub fn classify(key: &Key) -> KeyClass<'_> {
    match key {
        Key::Text(text) if text.contains(PATH_DELIMITER) => KeyClass::Path(Path::parse(text)),
        _ => KeyClass::Simple,
    }
}

/// A borrowed path key split into its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'a> {
    raw: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> Path<'a> {
    /// Splits `raw` on every delimiter, keeping empty segments.
    pub fn parse(raw: &'a str) -> Self {
        let tokens = raw.split(PATH_DELIMITER).collect();
        Path { raw, tokens }
    }

    /// The original key text
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Splits into the tokens to descend through and the terminal token
    pub fn split_last(&self) -> (&[&'a str], &'a str) {
        match self.tokens.split_last() {
            Some((last, rest)) => (rest, *last),
            None => (self.tokens.as_slice(), self.raw),
        }
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
