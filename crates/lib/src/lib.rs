//!
//! attrmap: mappings with attribute-style access and dot-delimited path keys.
//!
//! ## Core Concepts
//!
//! * **AttrMap (`map::AttrMap`)**: A hash map from [`Key`] to [`Value`] that interprets text keys
//!   containing `.` as paths through nested mappings when accessed with the item operations.
//! * **Keys (`map::Key`)**: Any hashable key: null, booleans, integers, text and bytes. Only text keys
//!   containing the delimiter are decomposed.
//! * **Values (`map::Value`)**: Leaves, lists, plain mappings, nested `AttrMap`s held by shared handles,
//!   and user objects implementing [`Indexable`].
//! * **Attribute access**: `get_attr`/`set_attr`/`del_attr` always treat the name as one literal key,
//!   so a key that itself contains `.` stays reachable.
//!
//! ```
//! use attrmap::{AttrMap, attr_map};
//!
//! let mut map: AttrMap = attr_map! {
//!     "server" => attr_map! { "port" => 8080 },
//! };
//!
//! assert_eq!(map.get_item("server.port")?, 8080);
//! map.set_item("server.host", "localhost")?;
//! assert_eq!(map.get_attr("server")?.get_attr("host")?, "localhost");
//! # Ok::<(), attrmap::Error>(())
//! ```

pub mod constants;
pub mod map;

pub use map::{AttrMap, AttrMapError, AttrRef, Indexable, Key, Mapping, Value};

/// Result type used throughout the attrmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the attrmap library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the map module
    #[error(transparent)]
    Map(map::AttrMapError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Map(_) => "map",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a key or attribute was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_missing_key() || map_err.is_attribute_error(),
            Error::Serialize(_) => false,
        }
    }

    /// Check if this error indicates a value had the wrong shape for the operation.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_type_error(),
            Error::Serialize(_) => false,
        }
    }
}
