//! Value types for attribute maps.
//!
//! This module provides the [`Value`] enum stored in an [`AttrMap`], and the
//! [`Indexable`] trait that lets user types take part in path resolution
//! without being mappings themselves.

use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use super::{AttrMap, AttrMapError, Key};
use crate::constants::{ATTR_MAP_TYPE, MAP_TYPE};

/// A plain mapping: a hash map with no path semantics of its own.
pub type Mapping = HashMap<Key, Value>;

/// Shared handle to a nested [`AttrMap`].
///
/// Nested maps have reference semantics: cloning a [`Value::AttrMap`] (and
/// therefore a shallow [`AttrMap::copy`]) shares the nested instance, so a
/// write through one handle is visible through every other.
pub type AttrRef = Rc<RefCell<AttrMap>>;

/// Keyed indexing for values that are not mappings.
///
/// Path resolution falls back to this trait when it meets a
/// [`Value::Object`]. Whatever error the implementation returns is
/// propagated to the caller unchanged.
///
/// ```
/// use std::{collections::HashMap, rc::Rc};
/// use attrmap::{AttrMap, AttrMapError, Indexable, Key, Value};
///
/// #[derive(Debug)]
/// struct Env(HashMap<String, String>);
///
/// impl Indexable for Env {
///     fn get_item(&self, key: &Key) -> Result<Value, AttrMapError> {
///         key.as_text()
///             .and_then(|name| self.0.get(name))
///             .map(|v| Value::from(v.as_str()))
///             .ok_or_else(|| AttrMapError::MissingKey { key: key.clone() })
///     }
/// }
///
/// let env = Env(HashMap::from([("HOME".to_string(), "/root".to_string())]));
/// let mut map = AttrMap::new();
/// map.set_item("env", Value::Object(Rc::new(env)))?;
/// assert_eq!(map.get_item("env.HOME")?, "/root");
/// # Ok::<(), AttrMapError>(())
/// ```
pub trait Indexable: fmt::Debug {
    /// Looks up `key`, failing with whatever error suits the type.
    fn get_item(&self, key: &Key) -> Result<Value, AttrMapError>;
}

/// Values that can be stored in an [`AttrMap`].
///
/// # Value Types
///
/// ## Leaf Values
/// - [`Value::Null`], [`Value::Bool`], [`Value::Int`], [`Value::Float`],
///   [`Value::Text`], [`Value::Bytes`]
///
/// ## Containers
/// - [`Value::List`] - Ordered values; not indexable by key
/// - [`Value::Map`] - A plain mapping, readable through paths
/// - [`Value::AttrMap`] - A nested attribute map, readable and writable through paths
/// - [`Value::Object`] - A user value indexable through [`Indexable`]
///
/// # Equality
///
/// Equality is structural. Plain mappings and attribute maps compare equal
/// when their entries are equal, whatever their container type. Integers and
/// floats compare numerically. Objects compare by identity.
///
/// ```
/// # use attrmap::{AttrMap, Mapping, Value};
/// assert_eq!(Value::Int(0), Value::Float(0.0));
/// assert_eq!(Value::from(AttrMap::new()), Value::from(Mapping::new()));
/// assert_ne!(Value::Null, Value::from(Mapping::new()));
/// assert!(Value::from("hello") == "hello");
/// ```
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Value {
    // Leaf values
    /// Null/empty value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Raw bytes
    Bytes(Vec<u8>),

    // Containers
    /// Ordered collection of values
    List(Vec<Value>),
    /// Plain mapping
    Map(#[serde(with = "crate::map::serde_impl::pairs")] Mapping),
    /// Nested attribute map
    AttrMap(AttrRef),
    /// Non-mapping value that supports keyed indexing
    #[serde(skip)]
    Object(Rc<dyn Indexable>),
}

impl Value {
    /// Wraps `map` in a fresh shared handle
    pub fn attr_map(map: AttrMap) -> Self {
        Value::AttrMap(Rc::new(RefCell::new(map)))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for the hierarchy-shaped values: plain mappings and attribute maps
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Map(_) | Value::AttrMap(_))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Map(_) => MAP_TYPE,
            Value::AttrMap(_) => ATTR_MAP_TYPE,
            Value::Object(_) => "object",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to a plain mapping
    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a nested attribute map handle
    pub fn as_attr_map(&self) -> Option<&AttrRef> {
        match self {
            Value::AttrMap(map) => Some(map),
            _ => None,
        }
    }

    /// Attribute access on a nested attribute map.
    ///
    /// Any other shape has no attributes and fails with
    /// [`AttrMapError::NoAttribute`].
    pub fn get_attr(&self, name: &str) -> Result<Value, AttrMapError> {
        match self {
            Value::AttrMap(map) => map.borrow().get_attr(name),
            _ => Err(AttrMapError::no_attribute(name)),
        }
    }
}

/// Compares two mappings entry by entry using structural value equality.
pub(crate) fn entries_eq(left: &Mapping, right: &Mapping) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|(key, value)| right.get(key).is_some_and(|other| value == other))
}

/// Exact comparison: the float must be integral and inside the `i64` range.
fn int_eq_float(int: i64, float: f64) -> bool {
    // i64::MIN as f64 is exactly -2^63
    let bound = -(i64::MIN as f64);
    float.fract() == 0.0 && float >= -bound && float < bound && float as i64 == int
}

fn same_object(left: &Rc<dyn Indexable>, right: &Rc<dyn Indexable>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(left), Rc::as_ptr(right))
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                int_eq_float(*a, *b)
            }
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => entries_eq(a, b),
            (Value::AttrMap(a), Value::AttrMap(b)) => {
                Rc::ptr_eq(a, b) || entries_eq(a.borrow().entries(), b.borrow().entries())
            }
            (Value::Map(a), Value::AttrMap(b)) | (Value::AttrMap(b), Value::Map(a)) => {
                entries_eq(a, b.borrow().entries())
            }
            (Value::Object(a), Value::Object(b)) => same_object(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Bytes(bytes) => write!(f, "b\"{}\"", bytes.escape_ascii()),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => write_entries(f, map),
            Value::AttrMap(map) => write_entries(f, map.borrow().entries()),
            Value::Object(object) => write!(f, "{object:?}"),
        }
    }
}

// Sorted so the output is stable across runs
fn write_entries(f: &mut fmt::Formatter<'_>, map: &Mapping) -> fmt::Result {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    write!(f, "{{")?;
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{key}: {value}")?;
    }
    write!(f, "}}")
}

// Convenient From implementations for common types
impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Map(value)
    }
}

impl From<AttrMap> for Value {
    fn from(value: AttrMap) -> Self {
        Value::attr_map(value)
    }
}

impl From<AttrRef> for Value {
    fn from(value: AttrRef) -> Self {
        Value::AttrMap(value)
    }
}

impl From<Rc<dyn Indexable>> for Value {
    fn from(value: Rc<dyn Indexable>) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_text() == Some(other.as_str())
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self == &Value::Int(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self == &Value::Int(*other as i64)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self == &Value::Float(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<Mapping> for Value {
    fn eq(&self, other: &Mapping) -> bool {
        match self {
            Value::Map(map) => entries_eq(map, other),
            Value::AttrMap(map) => entries_eq(map.borrow().entries(), other),
            _ => false,
        }
    }
}

impl PartialEq<AttrMap> for Value {
    fn eq(&self, other: &AttrMap) -> bool {
        self == other.entries()
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
