//! Key expressions for addressing container entries.
//!
//! Every container operation takes a key expression. A raw string is classified
//! into one of three addressing modes:
//!
//! - **Literal**: a single key, `"name"` or `3`
//! - **Path**: dot-separated keys descending one level at a time, `"user.profile.name"`
//! - **Interval**: `start:end` insertion positions, `"2:6"`, `":3"`, `"-2:"`
//!
//! Parsing is pure and happens once per call; the container then dispatches on
//! the [`KeyExpr`] variant.
//!
//! # Usage
//!
//! ```rust
//! use dotarray::{Key, KeyExpr, path};
//!
//! assert_eq!(KeyExpr::parse("name")?, KeyExpr::Literal(Key::from("name")));
//! assert_eq!(
//!     KeyExpr::parse("user.tags.0")?,
//!     KeyExpr::Path(vec![Key::from("user"), Key::from("tags"), Key::Index(0)])
//! );
//! assert!(KeyExpr::parse("3:4:5").is_err());
//!
//! // Build a path from parts; a part may itself contain a dot
//! let expr = path!("hosts", "example.com", 0);
//! assert_eq!(expr.keys().len(), 3);
//! # Ok::<(), dotarray::container::ContainerError>(())
//! ```

use std::{fmt, ops::Range};

use serde::{Deserialize, Serialize};

use super::{ContainerError, key::Key};
use crate::constants::{INTERVAL_SEPARATOR, PATH_SEPARATOR};

/// Separators recognised by the key-expression parser.
///
/// Loadable from a host application's configuration:
///
/// ```
/// # use dotarray::KeySyntax;
/// let syntax: KeySyntax = serde_json::from_str(r#"{"path_separator": "/"}"#)?;
/// assert_eq!(syntax.path_separator(), '/');
/// assert_eq!(syntax.interval_separator(), ':');
/// # Ok::<(), serde_json::Error>(())
/// ```
///
/// Deserialization applies the same checks as [`KeySyntax::new`]:
///
/// ```
/// # use dotarray::KeySyntax;
/// assert!(serde_json::from_str::<KeySyntax>(r#"{"path_separator": ":"}"#).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawKeySyntax")]
pub struct KeySyntax {
    path_separator: char,
    interval_separator: char,
}

impl Default for KeySyntax {
    fn default() -> Self {
        Self {
            path_separator: PATH_SEPARATOR,
            interval_separator: INTERVAL_SEPARATOR,
        }
    }
}

/// Unvalidated form of [`KeySyntax`] as it appears in configuration.
#[derive(Deserialize)]
#[serde(default)]
struct RawKeySyntax {
    path_separator: char,
    interval_separator: char,
}

impl Default for RawKeySyntax {
    fn default() -> Self {
        Self {
            path_separator: PATH_SEPARATOR,
            interval_separator: INTERVAL_SEPARATOR,
        }
    }
}

impl TryFrom<RawKeySyntax> for KeySyntax {
    type Error = ContainerError;

    fn try_from(raw: RawKeySyntax) -> Result<Self, Self::Error> {
        KeySyntax::new(raw.path_separator, raw.interval_separator)
    }
}

impl KeySyntax {
    /// Creates a syntax with custom separators.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the separators are equal, or if either one
    /// could appear inside an interval bound (an ASCII digit, `-` or `+`).
    pub fn new(path_separator: char, interval_separator: char) -> Result<Self, ContainerError> {
        if path_separator == interval_separator {
            return Err(ContainerError::invalid_argument(
                "KeySyntax::new",
                "path and interval separators must differ",
            ));
        }
        for sep in [path_separator, interval_separator] {
            if sep.is_ascii_digit() || sep == '-' || sep == '+' {
                return Err(ContainerError::invalid_argument(
                    "KeySyntax::new",
                    format!("'{sep}' cannot be used as a separator"),
                ));
            }
        }
        Ok(Self {
            path_separator,
            interval_separator,
        })
    }

    /// Separator between path levels
    pub fn path_separator(&self) -> char {
        self.path_separator
    }

    /// Separator between interval bounds
    pub fn interval_separator(&self) -> char {
        self.interval_separator
    }
}

/// Half-open range of insertion positions, `start:end`.
///
/// Missing bounds default to the start and end of the container. Negative
/// bounds count back from the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interval {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl Interval {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    /// Resolves the bounds against a container of `len` entries.
    ///
    /// Out-of-range bounds clamp; an inverted interval resolves to an empty range.
    ///
    /// ```
    /// # use dotarray::container::Interval;
    /// assert_eq!(Interval::new(Some(2), Some(6)).resolve(4), 2..4);
    /// assert_eq!(Interval::new(Some(-2), None).resolve(5), 3..5);
    /// assert_eq!(Interval::new(Some(4), Some(1)).resolve(5), 4..4);
    /// ```
    pub fn resolve(&self, len: usize) -> Range<usize> {
        let clamp = |bound: i64| -> usize {
            if bound < 0 {
                len.saturating_sub(bound.unsigned_abs() as usize)
            } else {
                (bound as u64).min(len as u64) as usize
            }
        };
        let start = self.start.map_or(0, clamp);
        let end = self.end.map_or(len, clamp);
        start..end.max(start)
    }
}

/// Renders the canonical form with the default `:` separator.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        write!(f, "{INTERVAL_SEPARATOR}")?;
        if let Some(end) = self.end {
            write!(f, "{end}")?;
        }
        Ok(())
    }
}

/// A classified key expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyExpr {
    /// One key at the current level
    Literal(Key),
    /// Two or more keys, resolved one level at a time
    Path(Vec<Key>),
    /// Positional range over the current level
    Interval(Interval),
}

impl KeyExpr {
    /// Parses a raw key string with the default separators.
    pub fn parse(raw: &str) -> Result<Self, ContainerError> {
        Self::parse_with(raw, &KeySyntax::default())
    }

    /// Parses a raw key string with the given separators.
    ///
    /// The interval grammar wins over the path grammar: any string containing
    /// the interval separator must be a well-formed interval. Empty path
    /// segments are dropped, so `"a..b"` addresses the same entry as `"a.b"`.
    ///
    /// # Errors
    /// Returns `InvalidExpression` for more than one interval separator,
    /// non-integer bounds, or a path with no segments left.
    pub fn parse_with(raw: &str, syntax: &KeySyntax) -> Result<Self, ContainerError> {
        if raw.contains(syntax.interval_separator) {
            return parse_interval(raw, syntax.interval_separator).map(KeyExpr::Interval);
        }

        if raw.contains(syntax.path_separator) {
            let keys: Vec<Key> = raw
                .split(syntax.path_separator)
                .filter(|segment| !segment.is_empty())
                .map(Key::parse)
                .collect();
            if keys.is_empty() {
                tracing::debug!(expr = raw, "rejecting path without segments");
                return Err(ContainerError::invalid_expression(
                    raw,
                    "path has no segments",
                ));
            }
            return Ok(Self::path(keys));
        }

        Ok(KeyExpr::Literal(Key::parse(raw)))
    }

    /// Builds a path expression from already-split keys.
    ///
    /// A single key collapses to [`KeyExpr::Literal`]. Keys are never split,
    /// so they may contain separator characters; they are normalized with
    /// [`Key::normalized`].
    pub fn path<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let mut keys: Vec<Key> = keys
            .into_iter()
            .map(Into::<Key>::into)
            .map(Key::normalized)
            .collect();
        if keys.len() == 1 {
            if let Some(key) = keys.pop() {
                return KeyExpr::Literal(key);
            }
        }
        KeyExpr::Path(keys)
    }

    /// Returns the keys this expression descends through (empty for intervals)
    pub fn keys(&self) -> &[Key] {
        match self {
            KeyExpr::Literal(key) => std::slice::from_ref(key),
            KeyExpr::Path(keys) => keys,
            KeyExpr::Interval(_) => &[],
        }
    }

    pub fn is_interval(&self) -> bool {
        matches!(self, KeyExpr::Interval(_))
    }

    /// Applies [`Key::normalized`] to every key of a literal or path
    pub fn normalized(self) -> Self {
        match self {
            KeyExpr::Literal(key) => KeyExpr::Literal(key.normalized()),
            KeyExpr::Path(keys) => KeyExpr::Path(keys.into_iter().map(Key::normalized).collect()),
            interval => interval,
        }
    }
}

fn parse_interval(raw: &str, separator: char) -> Result<Interval, ContainerError> {
    let parts: Vec<&str> = raw.split(separator).collect();
    if parts.len() != 2 {
        tracing::debug!(expr = raw, "rejecting interval with extra separators");
        return Err(ContainerError::invalid_expression(
            raw,
            format!("expected a single '{separator}' between interval bounds"),
        ));
    }

    let bound = |part: &str| -> Result<Option<i64>, ContainerError> {
        let part = part.trim();
        if part.is_empty() {
            return Ok(None);
        }
        part.parse::<i64>().map(Some).map_err(|_| {
            tracing::debug!(expr = raw, bound = part, "rejecting non-integer interval bound");
            ContainerError::invalid_expression(raw, format!("bound '{part}' is not an integer"))
        })
    };

    Ok(Interval::new(bound(parts[0])?, bound(parts[1])?))
}

/// Renders the canonical form with the default separators, whatever
/// [`KeySyntax`] the expression was parsed with. Parse errors carry the raw
/// input instead.
///
/// ```
/// # use dotarray::{KeyExpr, KeySyntax};
/// let syntax = KeySyntax::new('/', '~')?;
/// assert_eq!(KeyExpr::parse_with("a/b", &syntax)?.to_string(), "a.b");
/// assert_eq!(KeyExpr::parse_with("1~3", &syntax)?.to_string(), "1:3");
///
/// let err = KeyExpr::parse_with("1~2~3", &syntax).unwrap_err();
/// assert_eq!(err.expression(), Some("1~2~3"));
/// # Ok::<(), dotarray::container::ContainerError>(())
/// ```
impl fmt::Display for KeyExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyExpr::Literal(key) => write!(f, "{key}"),
            KeyExpr::Path(keys) => {
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{PATH_SEPARATOR}")?;
                    }
                    write!(f, "{key}")?;
                }
                Ok(())
            }
            KeyExpr::Interval(interval) => write!(f, "{interval}"),
        }
    }
}

/// Anything that can be resolved into a [`KeyExpr`].
///
/// Strings go through [`KeyExpr::parse`]; integers and [`Key`]s are always
/// literal; a pre-parsed [`KeyExpr`] (for example one built with a custom
/// [`KeySyntax`]) is used as-is.
pub trait ToKeyExpr {
    fn to_key_expr(&self) -> Result<KeyExpr, ContainerError>;
}

impl ToKeyExpr for str {
    fn to_key_expr(&self) -> Result<KeyExpr, ContainerError> {
        KeyExpr::parse(self)
    }
}

impl ToKeyExpr for String {
    fn to_key_expr(&self) -> Result<KeyExpr, ContainerError> {
        KeyExpr::parse(self)
    }
}

impl ToKeyExpr for KeyExpr {
    fn to_key_expr(&self) -> Result<KeyExpr, ContainerError> {
        Ok(self.clone().normalized())
    }
}

impl ToKeyExpr for Key {
    fn to_key_expr(&self) -> Result<KeyExpr, ContainerError> {
        Ok(KeyExpr::Literal(self.clone().normalized()))
    }
}

impl ToKeyExpr for Interval {
    fn to_key_expr(&self) -> Result<KeyExpr, ContainerError> {
        Ok(KeyExpr::Interval(*self))
    }
}

macro_rules! impl_to_key_expr_int {
    ($($t:ty),*) => {
        $(
            impl ToKeyExpr for $t {
                fn to_key_expr(&self) -> Result<KeyExpr, ContainerError> {
                    Ok(KeyExpr::Literal(Key::from(*self)))
                }
            }
        )*
    };
}

impl_to_key_expr_int!(usize, u32, i32, i64);

impl<T: ToKeyExpr + ?Sized> ToKeyExpr for &T {
    fn to_key_expr(&self) -> Result<KeyExpr, ContainerError> {
        (**self).to_key_expr()
    }
}

/// Builds a [`KeyExpr`] from individual keys.
///
/// Each argument converts with `Key::from`, so strings and integers mix
/// freely. Unlike a dotted string, an argument containing `.` stays one key.
///
/// ```
/// # use dotarray::{Key, KeyExpr, path};
/// assert_eq!(path!("a", "b"), KeyExpr::parse("a.b").unwrap());
/// assert_eq!(path!("v1.2"), KeyExpr::Literal(Key::from("v1.2")));
/// ```
#[macro_export]
macro_rules! path {
    ($($key:expr),+ $(,)?) => {
        $crate::KeyExpr::path([$($crate::Key::from($key)),+])
    };
}
