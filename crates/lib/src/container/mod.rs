//! Ordered nested containers with path-addressable access.
//!
//! This module provides [`Container`], an insertion-ordered mapping from
//! [`Key`] to [`Value`] where values may themselves be containers. A single
//! type serves both as a list and as a map: a container whose keys are exactly
//! `0..len` in order is *positional* and behaves like a list, anything else is
//! *associative*. That property is recomputed on demand, never cached.
//!
//! # Addressing
//!
//! Every keyed operation accepts a key expression (see [`expr`]):
//!
//! ```
//! use dotarray::Container;
//!
//! let mut arr = Container::new();
//! arr.set("user.profile.name", "Alice")?;   // creates `user` and `profile`
//! arr.set("user.langs", vec!["en", "pt"])?;
//!
//! assert_eq!(arr.get("user.profile.name")?.as_deref(), Some(&"Alice".into()));
//! assert!(arr.has("user.langs.1")?);
//! assert!(arr.get("user.missing.deeper")?.is_none());
//!
//! let langs = arr.get_array("user.langs")?.unwrap();
//! assert_eq!(langs.to_json_string(), r#"["en","pt"]"#);
//! # Ok::<(), dotarray::Error>(())
//! ```
//!
//! Reads never create entries. Writes through a dot path create every
//! missing level as an empty container.

use std::borrow::Cow;

use indexmap::IndexMap;

pub mod errors;
pub mod expr;
pub mod key;
pub mod value;

mod encoding;
mod ops;
mod sort;

pub use errors::ContainerError;
pub use expr::{Interval, KeyExpr, KeySyntax, ToKeyExpr};
pub use key::Key;
pub use value::Value;

/// Result type for container operations.
pub type Result<T> = std::result::Result<T, ContainerError>;

/// An ordered, mutable, arbitrarily nested key/value structure.
///
/// Each nested container is owned by the entry that holds it, so the structure
/// is always a tree.
///
/// # Examples
///
/// ```
/// # use dotarray::Container;
/// let mut arr = Container::from(vec![1, 2, 3, 4, 5]);
/// assert!(arr.is_positional());
///
/// let slice = arr.get("1:3")?.unwrap();
/// assert_eq!(slice.to_json_string(), "[2,3]");
///
/// arr.set("name", "five")?;
/// assert!(!arr.is_positional());
/// assert_eq!(arr.len(), 6);
/// # Ok::<(), dotarray::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Container {
    entries: IndexMap<Key, Value>,
}

impl Container {
    /// Creates a new empty container
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty container with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Creates a positional container holding `values` under keys `0..n`
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| (Key::Index(i), value.into()))
            .collect();
        Self { entries }
    }

    /// Returns the number of entries at this level, computed fresh
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Alias of [`Container::len`]
    pub fn count(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true iff the keys are exactly `0..len` in order.
    ///
    /// An empty container is positional.
    pub fn is_positional(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| key.as_index() == Some(i))
    }

    /// Gets the value addressed by a key expression.
    ///
    /// - Literal and path keys borrow the stored value. A path whose
    ///   intermediate level is missing or is a scalar yields `None`.
    /// - An interval yields a new container holding the selected entries.
    ///   Positional containers are re-indexed from 0; associative ones keep
    ///   their keys.
    ///
    /// # Errors
    /// Returns `InvalidExpression` if the key expression is malformed.
    pub fn get(&self, key: impl ToKeyExpr) -> Result<Option<Cow<'_, Value>>> {
        Ok(match key.to_key_expr()? {
            KeyExpr::Literal(key) => self.entries.get(&key).map(Cow::Borrowed),
            KeyExpr::Path(keys) => self.lookup(&keys).map(Cow::Borrowed),
            KeyExpr::Interval(interval) => Some(Cow::Owned(Value::Array(self.slice(interval)))),
        })
    }

    /// Gets a value by descending through the given keys one level at a time.
    ///
    /// Keys are used verbatim, so none of them is parsed as a path or interval.
    ///
    /// ```
    /// # use dotarray::{Container, Value};
    /// let mut arr = Container::new();
    /// arr.set("a.b.c", "x")?;
    /// assert_eq!(arr.get_in(["a", "b", "c"]), Some(&Value::from("x")));
    /// assert_eq!(arr.get_in(["a", "b"]).unwrap().to_json_string(), r#"{"c":"x"}"#);
    /// # Ok::<(), dotarray::Error>(())
    /// ```
    pub fn get_in<I, K>(&self, keys: I) -> Option<&Value>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let keys: Vec<Key> = keys
            .into_iter()
            .map(Into::<Key>::into)
            .map(Key::normalized)
            .collect();
        if keys.is_empty() {
            return None;
        }
        self.lookup(&keys)
    }

    /// Gets a mutable reference to the value addressed by a key or path.
    ///
    /// # Errors
    /// Returns `InvalidExpression` for malformed expressions and for intervals,
    /// which do not address a single stored value.
    pub fn get_mut(&mut self, key: impl ToKeyExpr) -> Result<Option<&mut Value>> {
        let expr = key.to_key_expr()?;
        let keys = Self::single_target(&expr)?;
        Ok(self.lookup_mut(keys))
    }

    /// Gets a nested container by key or path.
    ///
    /// Returns `None` if the entry is absent or holds a scalar.
    pub fn get_array(&self, key: impl ToKeyExpr) -> Result<Option<Cow<'_, Container>>> {
        Ok(match self.get(key)? {
            Some(Cow::Borrowed(Value::Array(container))) => Some(Cow::Borrowed(container)),
            Some(Cow::Owned(Value::Array(container))) => Some(Cow::Owned(container)),
            _ => None,
        })
    }

    /// Sets a value at the given key or path, returns the old value if present.
    ///
    /// Missing intermediate levels of a path are created as empty containers.
    /// An intermediate level holding a scalar is replaced by an empty container.
    ///
    /// # Errors
    /// Returns `InvalidExpression` for malformed expressions and for intervals.
    pub fn set(&mut self, key: impl ToKeyExpr, value: impl Into<Value>) -> Result<Option<Value>> {
        let expr = key.to_key_expr()?;
        let keys = Self::single_target(&expr)?;
        let Some((leaf, parents)) = keys.split_last() else {
            return Err(ContainerError::invalid_expression(
                expr.to_string(),
                "no key to assign",
            ));
        };

        let parent = self.descend_or_create(parents);
        Ok(parent.entries.insert(leaf.clone(), value.into()))
    }

    /// Returns the nested container at a key or path, creating it if needed.
    ///
    /// Every missing level, including the last one, is created empty; scalars
    /// in the way are replaced. This is the counterpart of appending to a
    /// nested list in one expression:
    ///
    /// ```
    /// # use dotarray::Container;
    /// let mut arr = Container::new();
    /// arr.container_mut("lorem.ipsum")?.push("dolor");
    /// arr.container_mut("lorem.ipsum")?.push("sit");
    /// assert_eq!(arr.to_json_string(), r#"{"lorem":{"ipsum":["dolor","sit"]}}"#);
    /// # Ok::<(), dotarray::Error>(())
    /// ```
    ///
    /// # Errors
    /// Returns `InvalidExpression` for malformed expressions and for intervals.
    pub fn container_mut(&mut self, key: impl ToKeyExpr) -> Result<&mut Container> {
        let expr = key.to_key_expr()?;
        let keys = Self::single_target(&expr)?;
        Ok(self.descend_or_create(keys))
    }

    /// Returns true if the key or path resolves to a stored entry.
    ///
    /// Present-but-empty values (null, false, "") still count as present.
    /// A well-formed interval is present if it selects at least one entry.
    ///
    /// # Errors
    /// Returns `InvalidExpression` if the key expression is malformed.
    pub fn has(&self, key: impl ToKeyExpr) -> Result<bool> {
        Ok(match key.to_key_expr()? {
            KeyExpr::Literal(key) => self.entries.contains_key(&key),
            KeyExpr::Path(keys) => self.lookup(&keys).is_some(),
            KeyExpr::Interval(interval) => !interval.resolve(self.len()).is_empty(),
        })
    }

    /// Negation of [`Container::has`]
    pub fn is_absent(&self, key: impl ToKeyExpr) -> Result<bool> {
        self.has(key).map(|present| !present)
    }

    /// Returns true if the addressed value is absent or empty.
    ///
    /// See [`Value::is_empty`] for what counts as empty.
    pub fn is_empty_at(&self, key: impl ToKeyExpr) -> Result<bool> {
        Ok(self.get(key)?.is_none_or(|value| value.is_empty()))
    }

    /// Negation of [`Container::is_empty_at`]
    pub fn is_filled(&self, key: impl ToKeyExpr) -> Result<bool> {
        self.is_empty_at(key).map(|empty| !empty)
    }

    /// Removes the entry at a key or path and returns it.
    ///
    /// Removing an absent entry is a no-op returning `None`. An interval
    /// removes every selected entry, without renumbering the rest, and returns
    /// them as a container.
    ///
    /// # Errors
    /// Returns `InvalidExpression` if the key expression is malformed.
    pub fn unset(&mut self, key: impl ToKeyExpr) -> Result<Option<Value>> {
        let keys = match key.to_key_expr()? {
            KeyExpr::Literal(key) => return Ok(self.entries.shift_remove(&key)),
            KeyExpr::Interval(interval) => {
                let range = interval.resolve(self.len());
                if range.is_empty() {
                    return Ok(None);
                }
                let removed: Container = self.entries.drain(range).collect();
                return Ok(Some(Value::Array(removed)));
            }
            KeyExpr::Path(keys) => keys,
        };

        let Some((leaf, parents)) = keys.split_last() else {
            return Ok(None);
        };
        let parent = match self.lookup_mut(parents) {
            Some(Value::Array(parent)) => parent,
            _ => return Ok(None),
        };
        Ok(parent.entries.shift_remove(leaf))
    }

    /// Returns the entries at the given insertion positions as a new container.
    ///
    /// Positional containers are re-indexed from 0; associative containers
    /// keep their keys.
    pub fn slice(&self, interval: Interval) -> Container {
        let range = interval.resolve(self.len());
        let Some(selected) = self.entries.get_range(range) else {
            return Container::new();
        };
        if self.is_positional() {
            Container::list(selected.values().cloned())
        } else {
            selected
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        }
    }

    /// Returns the entry at an insertion position
    pub fn get_index(&self, position: usize) -> Option<(&Key, &Value)> {
        self.entries.get_index(position)
    }

    /// Returns an iterator over all entries in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over all entries in insertion order
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Key, Value> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over the keys in insertion order
    pub fn keys_iter(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Returns an iterator over the values in insertion order
    pub fn values_iter(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Key of the next implicitly appended entry: one past the largest
    /// integer key, or 0.
    pub(crate) fn next_index(&self) -> usize {
        self.entries
            .keys()
            .filter_map(Key::as_index)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Narrows an expression to the keys of a single stored value.
    fn single_target(expr: &KeyExpr) -> Result<&[Key]> {
        match expr {
            KeyExpr::Interval(_) => {
                tracing::debug!(expr = %expr, "rejecting interval as a write target");
                Err(ContainerError::invalid_expression(
                    expr.to_string(),
                    "an interval does not address a single assignable entry",
                ))
            }
            _ => Ok(expr.keys()),
        }
    }

    fn lookup(&self, keys: &[Key]) -> Option<&Value> {
        let (first, rest) = keys.split_first()?;
        let mut current = self.entries.get(first)?;
        for key in rest {
            current = current.as_array()?.entries.get(key)?;
        }
        Some(current)
    }

    fn lookup_mut(&mut self, keys: &[Key]) -> Option<&mut Value> {
        let (first, rest) = keys.split_first()?;
        let mut current = self.entries.get_mut(first)?;
        for key in rest {
            current = current.as_array_mut()?.entries.get_mut(key)?;
        }
        Some(current)
    }

    /// Walks down `keys`, creating or replacing levels so each one is a container.
    fn descend_or_create(&mut self, keys: &[Key]) -> &mut Container {
        let mut current = self;
        for key in keys {
            let entry = current.entries.entry(key.clone()).or_insert_with(|| {
                tracing::trace!(key = %key, "creating intermediate container");
                Value::Array(Container::new())
            });
            if !entry.is_array() {
                tracing::debug!(
                    key = %key,
                    replaced = entry.type_name(),
                    "replacing scalar with container during path write"
                );
                *entry = Value::Array(Container::new());
            }
            current = match entry {
                Value::Array(container) => container,
                _ => unreachable!("entry was just made a container"),
            };
        }
        current
    }
}

impl PartialEq for Container {
    /// Same entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Container {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut container = Container::new();
        container.extend(iter);
        container
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Container {
    /// Later duplicates overwrite earlier ones in place. Keys are normalized
    /// with [`Key::normalized`].
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            let key: Key = key.into();
            self.entries.insert(key.normalized(), value.into());
        }
    }
}

impl<V: Into<Value>> From<Vec<V>> for Container {
    fn from(values: Vec<V>) -> Self {
        Container::list(values)
    }
}

impl<K: Into<Key>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Container {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Container {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
