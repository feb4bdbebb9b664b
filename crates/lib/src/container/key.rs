//! Keys addressing a single level of a container.
//!
//! A [`Key`] is either a non-negative integer position-style key or a string
//! name. Strings that spell a canonical non-negative integer (`"0"`, `"42"`, but
//! not `"042"`, `"-1"` or `"+1"`) are normalized to [`Key::Index`], so `"3"` and
//! `3` always name the same entry.

use std::{cmp::Ordering, fmt};

use super::{ContainerError, value::Value};

/// A key within one level of a [`Container`](crate::Container).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer key; positional containers use `0..len`
    Index(usize),
    /// Any other string key
    Name(String),
}

/// Returns true if `s` is the canonical decimal spelling of a non-negative integer.
///
/// ```
/// # use dotarray::container::key::is_canonical_index;
/// assert!(is_canonical_index("0"));
/// assert!(is_canonical_index("123"));
/// assert!(!is_canonical_index("007"));
/// assert!(!is_canonical_index("-1"));
/// assert!(!is_canonical_index(""));
/// ```
pub fn is_canonical_index(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit())
}

impl Key {
    /// Builds a key from a string, normalizing canonical integers to [`Key::Index`].
    pub fn parse(s: &str) -> Self {
        if is_canonical_index(s) {
            // Overlong digit strings do not fit usize and stay names
            if let Ok(index) = s.parse::<usize>() {
                return Key::Index(index);
            }
        }
        Key::Name(s.to_string())
    }

    /// Returns the integer key, if this is one
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// Returns the string key, if this is one
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Rewrites a [`Key::Name`] spelling a canonical integer as [`Key::Index`].
    ///
    /// Containers apply this to every key they receive, so a hand-built
    /// `Key::Name("1".into())` and `Key::Index(1)` address the same entry.
    pub fn normalized(self) -> Self {
        match self {
            Key::Name(name) => Key::from(name),
            index => index,
        }
    }
}

impl Ord for Key {
    /// Integer keys sort before names; integers numerically, names lexicographically.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Index(a), Key::Index(b)) => a.cmp(b),
            (Key::Name(a), Key::Name(b)) => a.cmp(b),
            (Key::Index(_), Key::Name(_)) => Ordering::Less,
            (Key::Name(_), Key::Index(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => write!(f, "{name}"),
        }
    }
}

impl serde::Serialize for Key {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Index(i) => serializer.serialize_u64(*i as u64),
            Key::Name(name) => serializer.serialize_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Index(value as usize)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::from(value as i64)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        match usize::try_from(value) {
            Ok(index) => Key::Index(index),
            Err(_) => Key::Name(value.to_string()),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::parse(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        if is_canonical_index(&value) {
            Key::parse(&value)
        } else {
            Key::Name(value)
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::parse(value)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone().normalized()
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Index(i) => Value::Int(i as i64),
            Key::Name(name) => Value::Text(name),
        }
    }
}

/// Converts a stored value into a key, as `combine` does with its key column.
impl TryFrom<&Value> for Key {
    type Error = ContainerError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Key::Name(String::new())),
            Value::Bool(b) => Ok(Key::Index(usize::from(*b))),
            Value::Int(n) => Ok(Key::from(*n)),
            Value::Float(x) => Ok(Key::parse(&x.to_string())),
            Value::Text(s) => Ok(Key::parse(s)),
            Value::Array(_) => Err(ContainerError::invalid_argument(
                "key conversion",
                "a nested container cannot be used as a key",
            )),
        }
    }
}
