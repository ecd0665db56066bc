//! Conversions between attribute maps and plain mappings.
//!
//! Conversion is driven by the shape of each value: nested plain mappings
//! become nested attribute maps and back. Keys are copied verbatim in both
//! directions, so a dotted key stays one flat entry and is never expanded
//! into nested structure.

use tracing::trace;

use super::{AttrMap, Key, Mapping, Value};

impl AttrMap {
    /// Builds an attribute map from `source`, converting nested plain
    /// mappings recursively.
    ///
    /// Values that are already attribute maps are kept as they are (the
    /// handle is shared, not copied). Use `AttrMap::from(mapping)` for a
    /// shallow conversion that leaves nested plain mappings alone.
    ///
    /// ```
    /// # use attrmap::{AttrMap, Key, Mapping, Value};
    /// let mut inner = Mapping::new();
    /// inner.insert(Key::from("b"), Value::from("a->b"));
    /// let mut source = Mapping::new();
    /// source.insert(Key::from("a"), Value::from(inner));
    /// source.insert(Key::from("a.b"), Value::from("a.b"));
    ///
    /// let map = AttrMap::from_mapping(&source);
    /// assert!(map.get_attr("a")?.as_attr_map().is_some());
    /// assert_eq!(map.get_item("a.b")?, "a->b");
    /// assert_eq!(map.get_attr("a.b")?, "a.b");
    /// assert_eq!(map.to_mapping(), source);
    /// # Ok::<(), attrmap::AttrMapError>(())
    /// ```
    pub fn from_mapping(source: &Mapping) -> Self {
        trace!(entries = source.len(), "Converting mapping to attribute map");
        source
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::Map(nested) => Value::attr_map(AttrMap::from_mapping(nested)),
                    other => other.clone(),
                };
                (key.clone(), value)
            })
            .collect()
    }

    /// Builds a plain mapping from this map, converting nested attribute
    /// maps recursively.
    ///
    /// Everything that is not an attribute map is cloned unchanged.
    pub fn to_mapping(&self) -> Mapping {
        trace!(entries = self.len(), "Converting attribute map to mapping");
        self.iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::AttrMap(nested) => Value::Map(nested.borrow().to_mapping()),
                    other => other.clone(),
                };
                (key.clone(), value)
            })
            .collect()
    }

    /// Returns a shallow copy.
    ///
    /// The copy has its own top-level entries, but nested attribute maps are
    /// shared with this map. For a deep copy, round-trip through
    /// [`AttrMap::to_mapping`] and [`AttrMap::from_mapping`].
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Builds a map with every key in `keys` bound to a clone of `value`.
    ///
    /// Keys are inserted verbatim.
    pub fn from_keys<I, K>(keys: I, value: impl Into<Value>) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let value = value.into();
        keys.into_iter().map(|key| (key, value.clone())).collect()
    }

    /// Unwraps into the raw top-level entries without converting nested maps
    pub fn into_mapping(self) -> Mapping {
        self.entries
    }
}

impl From<Mapping> for AttrMap {
    /// Shallow conversion: nested plain mappings stay plain.
    fn from(entries: Mapping) -> Self {
        AttrMap { entries }
    }
}
