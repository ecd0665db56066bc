use std::{collections::HashMap, rc::Rc};

use attrmap::{AttrMap, AttrMapError, Indexable, Key, Mapping, Value};

/// Builds a plain mapping from text keys
pub fn mapping<const N: usize>(entries: [(&str, Value); N]) -> Mapping {
    entries
        .into_iter()
        .map(|(key, value)| (Key::from(key), value))
        .collect()
}

/// The standard fixture: a nested `a.b` entry next to a literal `"a.b"` key
///
/// ```text
/// { "a": { "b": "a->b" }, "a.b": "a.b", "c": "c" }
/// ```
pub fn dotted_mapping() -> Mapping {
    mapping([
        ("a", Value::from(mapping([("b", Value::from("a->b"))]))),
        ("a.b", Value::from("a.b")),
        ("c", Value::from("c")),
    ])
}

/// [`dotted_mapping`] converted recursively
pub fn dotted_map() -> AttrMap {
    AttrMap::from_mapping(&dotted_mapping())
}

/// Three levels deep: `a.b.c` plus a sibling `one.two`
pub fn nested_map() -> AttrMap {
    AttrMap::from_mapping(&mapping([
        ("one", Value::from(mapping([("two", Value::from("one->two"))]))),
        (
            "a",
            Value::from(mapping([(
                "b",
                Value::from(mapping([("c", Value::from("a->b->c"))])),
            )])),
        ),
    ]))
}

/// Top-level keys in sorted order
pub fn sorted_keys(map: &AttrMap) -> Vec<Key> {
    let mut keys: Vec<Key> = map.keys().cloned().collect();
    keys.sort();
    keys
}

pub fn keys(names: &[&str]) -> Vec<Key> {
    names.iter().map(|name| Key::from(*name)).collect()
}

/// Returns true if both values are handles to the same nested map
pub fn same_map(left: &Value, right: &Value) -> bool {
    match (left.as_attr_map(), right.as_attr_map()) {
        (Some(left), Some(right)) => Rc::ptr_eq(left, right),
        _ => false,
    }
}

/// A value that supports keyed indexing without being a mapping
#[derive(Debug, Default)]
pub struct Lookup {
    items: HashMap<String, Value>,
}

impl Lookup {
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.items.insert(key.to_string(), value.into());
        self
    }

    pub fn into_value(self) -> Value {
        Value::Object(Rc::new(self))
    }
}

impl Indexable for Lookup {
    fn get_item(&self, key: &Key) -> Result<Value, AttrMapError> {
        key.as_text()
            .and_then(|name| self.items.get(name))
            .cloned()
            .ok_or_else(|| AttrMapError::MissingKey { key: key.clone() })
    }
}
