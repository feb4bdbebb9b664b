//! In-place reordering of a container's entries.
//!
//! | method   | orders by | keys      |
//! |----------|-----------|-----------|
//! | `sort`   | value asc | renumbered `0..n` |
//! | `rsort`  | value desc| renumbered `0..n` |
//! | `asort`  | value asc | kept      |
//! | `arsort` | value desc| kept      |
//! | `ksort`  | key asc   | kept      |
//! | `krsort` | key desc  | kept      |
//!
//! Values order by [`Value::compare`](super::Value::compare), keys by
//! [`Key`]'s `Ord`. Every sort is stable: entries that compare equal keep their
//! relative insertion order, in both directions.

use super::{Container, Key};

impl Container {
    /// Sorts values ascending and renumbers keys from 0
    pub fn sort(&mut self) -> &mut Self {
        self.asort();
        self.reindex()
    }

    /// Sorts values descending and renumbers keys from 0
    pub fn rsort(&mut self) -> &mut Self {
        self.arsort();
        self.reindex()
    }

    /// Sorts values ascending, keeping each value's key.
    ///
    /// ```
    /// # use dotarray::Container;
    /// let mut arr = Container::from([("three", 3), ("eight", 8), ("two", 2)]);
    /// arr.asort();
    /// assert_eq!(arr.to_json_string(), r#"{"two":2,"three":3,"eight":8}"#);
    /// ```
    pub fn asort(&mut self) -> &mut Self {
        self.entries.sort_by(|_, a, _, b| a.compare(b));
        self
    }

    /// Sorts values descending, keeping each value's key
    pub fn arsort(&mut self) -> &mut Self {
        self.entries.sort_by(|_, a, _, b| b.compare(a));
        self
    }

    /// Sorts by key ascending
    pub fn ksort(&mut self) -> &mut Self {
        self.entries.sort_by(|a, _, b, _| a.cmp(b));
        self
    }

    /// Sorts by key descending
    pub fn krsort(&mut self) -> &mut Self {
        self.entries.sort_by(|a, _, b, _| b.cmp(a));
        self
    }

    fn reindex(&mut self) -> &mut Self {
        let entries = std::mem::take(&mut self.entries);
        self.entries = entries
            .into_values()
            .enumerate()
            .map(|(i, value)| (Key::Index(i), value))
            .collect();
        self
    }
}
