//! Constants used throughout the attrmap library.

/// Delimiter separating the tokens of a path key.
///
/// A text key containing this character is decomposed into tokens by the
/// item-access operations of [`AttrMap`](crate::AttrMap).
pub const PATH_DELIMITER: char = '.';

/// Name used for [`AttrMap`](crate::AttrMap) values in type mismatch errors.
pub const ATTR_MAP_TYPE: &str = "attrmap";

/// Name used for plain mapping values in type mismatch errors.
pub const MAP_TYPE: &str = "map";
