//! List-style and bulk operations on containers.
//!
//! `push`/`pop` work at the end of the container and leave other keys alone.
//! `shift`/`unshift` work at the front and renumber integer keys from 0, which
//! keeps a positional container positional. String keys are never renumbered.

use indexmap::IndexMap;

use super::{Container, ContainerError, Key, Result, Value};
use crate::text::Text;

/// Reassigns integer keys `0, 1, 2, ...` in order, keeping string keys.
fn renumbered(items: impl IntoIterator<Item = (Key, Value)>) -> IndexMap<Key, Value> {
    let mut next = 0;
    items
        .into_iter()
        .map(|(key, value)| match key {
            Key::Index(_) => {
                let key = Key::Index(next);
                next += 1;
                (key, value)
            }
            name => (name, value),
        })
        .collect()
}

impl Container {
    /// Appends a value under the next integer key and returns that key.
    ///
    /// The next key is one past the largest integer key, or 0 when there is
    /// none, so appending to `{"lorem": "ipsum"}` uses key 0.
    pub fn push(&mut self, value: impl Into<Value>) -> Key {
        let key = Key::Index(self.next_index());
        self.entries.insert(key.clone(), value.into());
        key
    }

    /// Appends several values, preserving their order
    pub fn push_all<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let start = self.next_index();
        let values = values.into_iter();
        self.entries.reserve(values.size_hint().0);
        for (offset, value) in values.enumerate() {
            self.entries.insert(Key::Index(start + offset), value.into());
        }
        self
    }

    /// Prepends a value and renumbers integer keys from 0
    pub fn unshift(&mut self, value: impl Into<Value>) -> &mut Self {
        self.unshift_all([value])
    }

    /// Prepends several values, preserving their order, and renumbers integer
    /// keys from 0.
    ///
    /// ```
    /// # use dotarray::Container;
    /// let mut arr = Container::from(vec!["ipsum", "dolor"]);
    /// arr.unshift_all(["lorem", "sit"]);
    /// assert_eq!(arr.to_json_string(), r#"["lorem","sit","ipsum","dolor"]"#);
    /// ```
    pub fn unshift_all<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let existing = std::mem::take(&mut self.entries);
        let prepended = values
            .into_iter()
            .map(|value| (Key::Index(0), value.into()));
        self.entries = renumbered(prepended.chain(existing));
        self
    }

    /// Removes and returns the last entry's value. No-op on an empty container.
    pub fn pop(&mut self) -> Option<Value> {
        self.entries.pop().map(|(_, value)| value)
    }

    /// Removes and returns the first entry's value, then renumbers integer
    /// keys from 0. No-op on an empty container.
    pub fn shift(&mut self) -> Option<Value> {
        let (_, value) = self.entries.shift_remove_index(0)?;
        let rest = std::mem::take(&mut self.entries);
        self.entries = renumbered(rest);
        Some(value)
    }

    /// Value of the first entry
    pub fn first(&self) -> Option<&Value> {
        self.entries.first().map(|(_, value)| value)
    }

    /// Value of the last entry
    pub fn last(&self) -> Option<&Value> {
        self.entries.last().map(|(_, value)| value)
    }

    /// Calls `visitor` for every entry in insertion order
    pub fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&Key, &Value),
    {
        for (key, value) in &self.entries {
            visitor(key, value);
        }
    }

    /// Visits entries starting at position `start` and moving `step` positions
    /// at a time, until the position leaves `0..len`.
    ///
    /// A negative step walks backwards:
    ///
    /// ```
    /// # use dotarray::Container;
    /// let arr = Container::from(vec!["a", "b", "c", "d"]);
    /// let mut seen = Vec::new();
    /// arr.stride(arr.len() as isize - 1, -2, |_, value| seen.push(value.to_string()))?;
    /// assert_eq!(seen, ["d", "b"]);
    /// # Ok::<(), dotarray::Error>(())
    /// ```
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `step` is 0.
    pub fn stride<F>(&self, start: isize, step: isize, mut visitor: F) -> Result<()>
    where
        F: FnMut(&Key, &Value),
    {
        if step == 0 {
            return Err(ContainerError::invalid_argument(
                "stride",
                "step must not be zero",
            ));
        }
        let mut position = start;
        while let Ok(index) = usize::try_from(position) {
            let Some((key, value)) = self.entries.get_index(index) else {
                break;
            };
            visitor(key, value);
            position = match position.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
        Ok(())
    }

    /// Replaces every entry with the `(key, value)` pair returned by `transformer`.
    ///
    /// Returned keys are normalized with [`Key::normalized`].
    ///
    /// Entries are transformed in insertion order and the result keeps that
    /// order. When two entries map to the same key the later value wins, in the
    /// position of the first.
    ///
    /// ```
    /// # use dotarray::{Container, Key};
    /// let mut arr = Container::from(vec!["lorem", "ipsum"]);
    /// arr.map(|key, value| (key.as_index().unwrap_or(0) + 1, value));
    /// assert_eq!(arr.to_json_string(), r#"{"1":"lorem","2":"ipsum"}"#);
    /// ```
    pub fn map<F, K, V>(&mut self, mut transformer: F) -> &mut Self
    where
        F: FnMut(Key, Value) -> (K, V),
        K: Into<Key>,
        V: Into<Value>,
    {
        let existing = std::mem::take(&mut self.entries);
        let mut entries = IndexMap::with_capacity(existing.len());
        for (key, value) in existing {
            let (key, value) = transformer(key, value);
            let key: Key = key.into();
            entries.insert(key.normalized(), value.into());
        }
        self.entries = entries;
        self
    }

    /// Splits the entries into positional chunks of at most `size` values.
    ///
    /// ```
    /// # use dotarray::Container;
    /// let arr = Container::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(arr.chunk(2)?.to_json_string(), "[[1,2],[3,4],[5]]");
    /// # Ok::<(), dotarray::Error>(())
    /// ```
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `size` is 0.
    pub fn chunk(&self, size: usize) -> Result<Container> {
        if size == 0 {
            return Err(ContainerError::invalid_argument(
                "chunk",
                "size must be positive",
            ));
        }
        let values: Vec<&Value> = self.entries.values().collect();
        Ok(Container::list(
            values
                .chunks(size)
                .map(|chunk| Container::list(chunk.iter().map(|&value| value.clone()))),
        ))
    }

    /// Returns the keys as a positional container
    pub fn keys(&self) -> Container {
        Container::list(self.entries.keys().cloned())
    }

    /// Returns the values as a positional container
    pub fn values(&self) -> Container {
        Container::list(self.entries.values().cloned())
    }

    /// Collects `key` from every nested container into a positional container.
    ///
    /// Scalar entries and containers lacking `key` are skipped.
    pub fn column(&self, key: impl Into<Key>) -> Container {
        let key: Key = key.into();
        let key = key.normalized();
        Container::list(
            self.entries
                .values()
                .filter_map(Value::as_array)
                .filter_map(|row| row.entries.get(&key))
                .cloned(),
        )
    }

    /// Joins the display form of every value with `separator`.
    ///
    /// Nested containers contribute their JSON encoding.
    pub fn join(&self, separator: &str) -> Text {
        let parts: Vec<String> = self.entries.values().map(Value::to_string).collect();
        Text::new(parts.join(separator))
    }

    /// Pairs the values of `keys` with the values of `values`, position by
    /// position. The longer side is truncated.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if a key value is a nested container.
    pub fn combine(keys: &Container, values: &Container) -> Result<Container> {
        let mut combined = Container::with_capacity(keys.len().min(values.len()));
        for (key, value) in keys.values_iter().zip(values.values_iter()) {
            combined.entries.insert(Key::try_from(key)?, value.clone());
        }
        Ok(combined)
    }

    /// Lowercases every string key at this level. Later entries win on collision.
    pub fn lower_keys(&mut self) -> &mut Self {
        self.map_names(|name| name.to_lowercase())
    }

    /// Uppercases every string key at this level. Later entries win on collision.
    pub fn upper_keys(&mut self) -> &mut Self {
        self.map_names(|name| name.to_uppercase())
    }

    fn map_names(&mut self, rename: impl Fn(&str) -> String) -> &mut Self {
        self.map(|key, value| match key {
            Key::Name(name) => (Key::parse(&rename(&name)), value),
            index => (index, value),
        })
    }
}
