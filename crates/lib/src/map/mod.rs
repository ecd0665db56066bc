//! Attribute maps: hash maps with attribute-style access and path keys.
//!
//! This module provides [`AttrMap`], a mapping from [`Key`] to [`Value`]
//! with two access styles over the same storage:
//!
//! - **Item access** (`get_item`, `set_item`, `del_item`, `pop`, ...) decomposes
//!   text keys containing `.` into tokens and resolves them through nested
//!   mappings. `"a.b.c"` means "`c` inside `b` inside `a`".
//! - **Attribute access** (`get_attr`, `set_attr`, `del_attr`) always uses the
//!   whole name as one literal key.
//!
//! A literal key containing `.` (inserted raw, e.g. with [`AttrMap::raw_insert`]
//! or [`AttrMap::set_attr`]) is therefore reachable through attribute access and
//! iteration, but item access always treats it as a path.
//!
//! # Examples
//!
//! ```
//! use attrmap::{AttrMap, Key, attr_map};
//!
//! let mut map = attr_map! {
//!     "a" => attr_map! { "b" => attr_map! { "c" => "a->b->c" } },
//!     "a.b" => "literal",
//! };
//!
//! assert_eq!(map.get_item("a.b.c")?, "a->b->c");
//! assert_eq!(map.get_attr("a.b")?, "literal");
//!
//! // Intermediate mappings are never created implicitly
//! let err = map.set_item("x.y", 1).unwrap_err();
//! assert_eq!(err.key(), Some(&Key::from("x")));
//!
//! map.del_item("a.b")?;
//! assert_eq!(map.get_item("a")?, AttrMap::new());
//! # Ok::<(), attrmap::AttrMapError>(())
//! ```

use std::collections::hash_map;

use tracing::trace;

// Submodules
mod attr;
mod convert;
pub mod errors;
pub mod key;
pub mod path;
mod resolve;
mod serde_impl;
pub mod value;

// Convenience re-exports for core map types
pub use errors::AttrMapError;
pub use key::Key;
pub use path::{KeyClass, Path};
pub use value::{AttrRef, Indexable, Mapping, Value};

use path::classify;

/// Builds an [`AttrMap`] from `key => value` entries.
///
/// Entries are inserted raw, like keyword arguments: a key containing `.`
/// becomes one literal entry and plain mapping values are kept as they are.
///
/// ```
/// # use attrmap::{attr_map, AttrMap};
/// let map = attr_map! { "one" => 1, "two" => 2 };
/// assert_eq!(map.len(), 2);
/// assert_eq!(attr_map! {}, AttrMap::new());
/// ```
#[macro_export]
macro_rules! attr_map {
    () => {
        $crate::AttrMap::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::AttrMap::new();
        $(
            map.raw_insert($key, $value);
        )+
        map
    }};
}

/// A hash map whose text keys double as paths through nested mappings.
///
/// `Clone` is shallow: nested [`Value::AttrMap`] handles are shared between
/// the original and the clone. See [`AttrMap::copy`].
#[derive(Debug, Clone, Default)]
pub struct AttrMap {
    entries: Mapping,
}

impl AttrMap {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            entries: Mapping::new(),
        }
    }

    /// Creates a new empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mapping::with_capacity(capacity),
        }
    }

    /// Returns the number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every top-level entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only view of the raw entries
    pub fn entries(&self) -> &Mapping {
        &self.entries
    }

    /// Iterates over the raw top-level entries
    pub fn iter(&self) -> hash_map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> hash_map::Values<'_, Key, Value> {
        self.entries.values()
    }

    /// Looks up `key` verbatim, without path decomposition
    pub fn raw_get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Inserts `value` under `key` verbatim, without path decomposition.
    ///
    /// Returns the previous value, if any.
    pub fn raw_insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes `key` verbatim, without path decomposition
    pub fn raw_remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Inserts every pair verbatim, overwriting existing entries.
    ///
    /// Keys are never decomposed, so `update` can add literal dotted keys.
    pub fn update<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        for (key, value) in entries {
            self.raw_insert(key, value);
        }
    }

    /// Gets the value for a key or path.
    ///
    /// # Errors
    ///
    /// - [`AttrMapError::MissingKey`] with the simple key, or with the first
    ///   token of a path that could not be resolved
    /// - [`AttrMapError::TypeMismatch`] if a path runs through a value that
    ///   cannot be indexed by key
    pub fn get_item(&self, key: impl Into<Key>) -> Result<Value, AttrMapError> {
        let key = key.into();
        match classify(&key) {
            KeyClass::Simple => self
                .entries
                .get(&key)
                .cloned()
                .ok_or_else(|| AttrMapError::missing(key.clone())),
            KeyClass::Path(path) => {
                let (container, last) = self.resolve(&path)?;
                self.fetch_from(&container, last)
            }
        }
    }

    /// Gets the value for a key or path, or `None` if it does not resolve.
    ///
    /// Only missing keys are absorbed; type mismatches are still returned.
    pub fn get(&self, key: impl Into<Key>) -> Result<Option<Value>, AttrMapError> {
        match self.get_item(key) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_missing_key() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Gets the value for a key or path, or `default` if it does not resolve
    pub fn get_or(
        &self,
        key: impl Into<Key>,
        default: impl Into<Value>,
    ) -> Result<Value, AttrMapError> {
        Ok(self.get(key)?.unwrap_or_else(|| default.into()))
    }

    /// Returns true if the key or path resolves to a value
    pub fn contains_key(&self, key: impl Into<Key>) -> Result<bool, AttrMapError> {
        Ok(self.get(key)?.is_some())
    }

    /// Sets a value at the given key or path.
    ///
    /// Every token of a path but the last must already resolve, and the last
    /// must land in a nested [`AttrMap`]; containers are never created.
    pub fn set_item(
        &mut self,
        key: impl Into<Key>,
        value: impl Into<Value>,
    ) -> Result<(), AttrMapError> {
        let key = key.into();
        let value = value.into();
        match classify(&key) {
            KeyClass::Simple => {}
            KeyClass::Path(path) => {
                let (container, last) = self.resolve(&path)?;
                let last = Key::from(last);
                return self.with_target(container, |target| {
                    target.entries.insert(last, value);
                });
            }
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Deletes the value at the given key or path, returning it
    pub fn del_item(&mut self, key: impl Into<Key>) -> Result<Value, AttrMapError> {
        let key = key.into();
        match classify(&key) {
            KeyClass::Simple => self
                .entries
                .remove(&key)
                .ok_or_else(|| AttrMapError::missing(key.clone())),
            KeyClass::Path(path) => {
                let (container, last) = self.resolve(&path)?;
                let last = Key::from(last);
                self.with_target(container, |target| target.entries.remove(&last))?
                    .ok_or(AttrMapError::MissingKey { key: last })
            }
        }
    }

    /// Removes and returns the value at the given key or path
    pub fn pop(&mut self, key: impl Into<Key>) -> Result<Value, AttrMapError> {
        self.pop_with(key.into(), None)
    }

    /// Removes and returns the value at the given key or path, or `default`
    /// if any token of it does not resolve
    pub fn pop_or(
        &mut self,
        key: impl Into<Key>,
        default: impl Into<Value>,
    ) -> Result<Value, AttrMapError> {
        self.pop_with(key.into(), Some(default.into()))
    }

    fn pop_with(&mut self, key: Key, default: Option<Value>) -> Result<Value, AttrMapError> {
        match classify(&key) {
            KeyClass::Simple => match self.entries.remove(&key) {
                Some(value) => Ok(value),
                None => default.ok_or_else(|| AttrMapError::missing(key.clone())),
            },
            KeyClass::Path(path) => {
                let (container, last) = match self.resolve(&path) {
                    Ok(found) => found,
                    Err(err) if err.is_missing_key() => return default.ok_or(err),
                    Err(err) => return Err(err),
                };
                let last = Key::from(last);
                match self.with_target(container, |target| target.entries.remove(&last))? {
                    Some(value) => Ok(value),
                    None => default.ok_or(AttrMapError::MissingKey { key: last }),
                }
            }
        }
    }

    /// Returns the value at the key or path, inserting `default` there first
    /// if it does not resolve.
    pub fn set_default(
        &mut self,
        key: impl Into<Key>,
        default: impl Into<Value>,
    ) -> Result<Value, AttrMapError> {
        let key = key.into();
        match self.get_item(key.clone()) {
            Ok(existing) => Ok(existing),
            Err(err) if err.is_missing_key() => {
                let default = default.into();
                self.set_item(key, default.clone())?;
                Ok(default)
            }
            Err(err) => Err(err),
        }
    }

    /// Removes and returns an arbitrary top-level entry.
    ///
    /// Never descends into nested mappings.
    pub fn pop_item(&mut self) -> Result<(Key, Value), AttrMapError> {
        let key = self
            .entries
            .keys()
            .next()
            .cloned()
            .ok_or(AttrMapError::Empty)?;
        trace!(key = %key, "Popping top-level entry");
        self.entries.remove_entry(&key).ok_or(AttrMapError::Empty)
    }
}

impl PartialEq for AttrMap {
    fn eq(&self, other: &AttrMap) -> bool {
        value::entries_eq(&self.entries, &other.entries)
    }
}

impl PartialEq<Mapping> for AttrMap {
    fn eq(&self, other: &Mapping) -> bool {
        value::entries_eq(&self.entries, other)
    }
}

impl PartialEq<AttrMap> for Mapping {
    fn eq(&self, other: &AttrMap) -> bool {
        value::entries_eq(self, &other.entries)
    }
}

impl<'a> IntoIterator for &'a AttrMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = hash_map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for AttrMap {
    type Item = (Key, Value);
    type IntoIter = hash_map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttrMap::new();
        map.update(iter);
        map
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for AttrMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.update(iter);
    }
}
