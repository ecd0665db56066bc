//! Serialization for attribute maps.
//!
//! An [`AttrMap`] serializes as a sequence of raw `(key, value)` pairs and
//! deserializes by inserting those pairs raw, so a round trip reproduces an
//! equal map without any path decomposition. Pair lists also keep non-text
//! keys representable in formats like JSON whose object keys must be strings.
//!
//! [`Value::Object`](super::Value::Object) holds arbitrary user data and
//! cannot be serialized; serializing a map that contains one is an error.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use super::{AttrMap, Key, Value};

impl Serialize for AttrMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        pairs::serialize(self.entries(), serializer)
    }
}

impl<'de> Deserialize<'de> for AttrMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        pairs::deserialize(deserializer).map(AttrMap::from)
    }
}

impl AttrMap {
    /// Serializes this map to a JSON string of `(key, value)` pairs.
    ///
    /// ```
    /// # use attrmap::{attr_map, AttrMap};
    /// let map = attr_map! { "a.b" => 1 };
    /// let json = map.to_json_string()?;
    /// assert_eq!(AttrMap::from_json_str(&json)?, map);
    /// # Ok::<(), attrmap::Error>(())
    /// ```
    pub fn to_json_string(&self) -> crate::Result<String> {
        serde_json::to_string(self).map_err(|err| {
            debug!(error = %err, "Failed to serialize attribute map");
            err.into()
        })
    }

    /// Parses a map from the JSON produced by [`AttrMap::to_json_string`]
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Serde adapter storing a mapping as a sequence of pairs.
pub(crate) mod pairs {
    use super::*;
    use crate::map::Mapping;

    pub(crate) fn serialize<S: Serializer>(map: &Mapping, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(map.iter())
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Mapping, D::Error> {
        let pairs = Vec::<(Key, Value)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}
