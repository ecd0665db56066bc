//! Path resolution.
//!
//! Resolving a path key walks every token but the last, producing the
//! container the terminal operation applies to. Reads go through
//! `fetch`, which dispatches on the shape of the current value:
//!
//! - attribute maps and plain mappings are looked up raw, so a nested
//!   attribute map never re-decomposes a single token;
//! - [`Value::Object`] values are indexed through [`Indexable`](super::Indexable)
//!   and their errors are passed through unchanged;
//! - anything else cannot be indexed by key and fails with a type mismatch.
//!
//! Writes and deletes need mutable access to the final container, which is
//! only possible for the root map or a nested attribute map.
//!
//! Nested maps are shared handles, so a path can lead back to the map the
//! operation runs on while that map is already borrowed through its own
//! handle. Such a handle is recognised by address and served from the root
//! directly; any other handle that is borrowed elsewhere fails with
//! [`AttrMapError::Borrowed`].

use tracing::{debug, trace};

use super::{AttrMap, AttrMapError, AttrRef, Key, Path, Value};
use crate::constants::ATTR_MAP_TYPE;

/// The container a resolved path points into.
#[derive(Debug, Clone)]
pub(crate) enum Container {
    /// The map the operation was invoked on
    Root,
    /// A value reached by descending through at least one token
    Nested(Value),
}

fn lookup(found: Option<&Value>, token: &str) -> Result<Value, AttrMapError> {
    found.cloned().ok_or_else(|| {
        debug!(token, "Path token did not resolve");
        AttrMapError::missing(token)
    })
}

impl AttrMap {
    /// Returns true if `handle` refers to this very map
    fn is_self(&self, handle: &AttrRef) -> bool {
        std::ptr::eq(handle.as_ptr(), self)
    }

    /// Looks up `token` in `container` according to its shape.
    pub(crate) fn fetch(&self, container: &Value, token: &str) -> Result<Value, AttrMapError> {
        match container {
            Value::AttrMap(map) => match map.try_borrow() {
                Ok(nested) => lookup(nested.raw_get(&Key::from(token)), token),
                Err(_) if self.is_self(map) => lookup(self.raw_get(&Key::from(token)), token),
                Err(_) => {
                    debug!(token, "Nested map is mutably borrowed elsewhere");
                    Err(AttrMapError::Borrowed)
                }
            },
            Value::Map(map) => lookup(map.get(&Key::from(token)), token),
            Value::Object(object) => object.get_item(&Key::from(token)),
            other => {
                debug!(
                    token,
                    actual = other.type_name(),
                    "Path runs through a value without keyed access"
                );
                Err(AttrMapError::type_mismatch("indexable value", other.type_name()))
            }
        }
    }

    /// Walks all but the last token of `path`.
    ///
    /// Returns the container reached and the terminal token. Fails with the
    /// first token that does not resolve.
    pub(crate) fn resolve<'k>(
        &self,
        path: &Path<'k>,
    ) -> Result<(Container, &'k str), AttrMapError> {
        let (parents, last) = path.split_last();
        trace!(key = path.as_str(), depth = parents.len(), "Resolving path key");
        let container = self.descend(parents)?;
        Ok((container, last))
    }

    /// Resolves `tokens` one after another, starting at this map.
    pub(crate) fn descend(&self, tokens: &[&str]) -> Result<Container, AttrMapError> {
        let Some((first, rest)) = tokens.split_first() else {
            return Ok(Container::Root);
        };
        let mut current = lookup(self.raw_get(&Key::from(*first)), first)?;
        for token in rest {
            trace!(token, from = current.type_name(), "Descending");
            current = self.fetch(&current, token)?;
        }
        Ok(Container::Nested(current))
    }

    /// Reads the terminal token from a resolved container.
    pub(crate) fn fetch_from(
        &self,
        container: &Container,
        token: &str,
    ) -> Result<Value, AttrMapError> {
        match container {
            Container::Root => lookup(self.raw_get(&Key::from(token)), token),
            Container::Nested(value) => self.fetch(value, token),
        }
    }

    /// Runs `op` against the map a resolved container refers to.
    ///
    /// Only the root and nested attribute maps can be written through;
    /// every other shape is a type mismatch. A handle to this map itself
    /// writes through `self`.
    pub(crate) fn with_target<R>(
        &mut self,
        container: Container,
        op: impl FnOnce(&mut AttrMap) -> R,
    ) -> Result<R, AttrMapError> {
        match container {
            Container::Root => Ok(op(self)),
            Container::Nested(Value::AttrMap(map)) => {
                let borrowed = map.try_borrow_mut();
                match borrowed {
                    Ok(mut target) => Ok(op(&mut *target)),
                    Err(_) if self.is_self(&map) => Ok(op(self)),
                    Err(_) => {
                        debug!("Cannot write through a nested map borrowed elsewhere");
                        Err(AttrMapError::Borrowed)
                    }
                }
            }
            Container::Nested(other) => {
                debug!(
                    actual = other.type_name(),
                    "Cannot write through a value that is not an attribute map"
                );
                Err(AttrMapError::type_mismatch(
                    ATTR_MAP_TYPE,
                    other.type_name(),
                ))
            }
        }
    }
}
