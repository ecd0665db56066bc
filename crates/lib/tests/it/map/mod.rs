//! AttrMap integration tests
//!
//! Tests are organized by concern: the item-access operations, path
//! resolution through nested values, attribute access, conversions,
//! structural equality and serialization.

mod attr_tests;
mod path_tests;
