//! Attribute-style access.
//!
//! These operations address the raw storage with the whole name as one text
//! key. They never decompose the name on `.`, so `get_attr("a.b")` finds a
//! literal `"a.b"` entry that `get_item("a.b")` would treat as a path.

use super::{AttrMap, AttrMapError, Key, Value};

impl AttrMap {
    /// Gets the value stored under `name`.
    ///
    /// # Errors
    ///
    /// [`AttrMapError::NoAttribute`] if there is no such entry.
    pub fn get_attr(&self, name: &str) -> Result<Value, AttrMapError> {
        self.raw_get(&Key::from(name))
            .cloned()
            .ok_or_else(|| AttrMapError::no_attribute(name))
    }

    /// Stores `value` under `name`, returning the previous value if any
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.raw_insert(Key::Text(name.into()), value)
    }

    /// Removes and returns the value stored under `name`
    pub fn del_attr(&mut self, name: &str) -> Result<Value, AttrMapError> {
        self.raw_remove(&Key::from(name))
            .ok_or_else(|| AttrMapError::no_attribute(name))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.raw_get(&Key::from(name)).is_some()
    }
}
