//! A mutable string wrapper with chainable edits.
//!
//! [`Text`] is the string-side counterpart of [`Container`]: splitting a text
//! produces a positional container, and [`Container::join`] produces a text.
//! Regular expressions use the `regex` crate syntax, written without
//! delimiters (`\s+`, not `/\s+/`).
//!
//! ```
//! use dotarray::Text;
//!
//! let mut text = Text::new("Lorem ipsum dolor");
//! text.xreplace(r"\s+", "_", None)?.upper();
//! assert_eq!(text.get(), "LOREM_IPSUM_DOLOR");
//!
//! let words = text.split("_", None)?;
//! assert_eq!(words.len(), 3);
//! # Ok::<(), dotarray::Error>(())
//! ```

use std::fmt;

use regex::Regex;

use crate::Container;

pub mod errors;

pub use errors::TextError;

/// Result type for text operations.
pub type Result<T> = std::result::Result<T, TextError>;

/// An owned string with in-place editing operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Replaces the whole content
    pub fn set(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = content.into();
        self
    }

    pub fn get(&self) -> &str {
        &self.content
    }

    /// Consumes the wrapper and returns the inner string
    pub fn into_string(self) -> String {
        self.content
    }

    /// Replaces every occurrence of `search` with `replacement`.
    ///
    /// An empty `search` matches nothing and leaves the content unchanged.
    pub fn replace(&mut self, search: &str, replacement: &str) -> &mut Self {
        if !search.is_empty() {
            self.content = self.content.replace(search, replacement);
        }
        self
    }

    /// Replaces matches of a regular expression.
    ///
    /// `limit` caps the number of replacements, counted from the start;
    /// `None` replaces every match. The replacement may refer to capture
    /// groups as `$1` or `${name}`.
    ///
    /// ```
    /// # use dotarray::Text;
    /// let mut text = Text::new("a1 b2 c3");
    /// text.xreplace(r"([a-z])(\d)", "$2$1", Some(2))?;
    /// assert_eq!(text.get(), "1a 2b c3");
    /// # Ok::<(), dotarray::text::TextError>(())
    /// ```
    ///
    /// # Errors
    /// Returns `InvalidPattern` if `pattern` does not compile.
    pub fn xreplace(
        &mut self,
        pattern: &str,
        replacement: &str,
        limit: Option<usize>,
    ) -> Result<&mut Self> {
        let regex = compile(pattern)?;
        let replaced = match limit {
            None => regex.replace_all(&self.content, replacement),
            Some(0) => return Ok(self),
            Some(limit) => regex.replacen(&self.content, limit, replacement),
        };
        self.content = replaced.into_owned();
        Ok(self)
    }

    /// Splits on a literal delimiter into a positional container.
    ///
    /// With `Some(limit)` at most `limit` pieces are produced and the last
    /// one holds the unsplit remainder. A limit of 0 behaves like 1.
    ///
    /// # Errors
    /// Returns `EmptyDelimiter` if `delimiter` is empty.
    pub fn split(&self, delimiter: &str, limit: Option<usize>) -> Result<Container> {
        if delimiter.is_empty() {
            return Err(TextError::EmptyDelimiter);
        }
        Ok(match limit {
            None => Container::list(self.content.split(delimiter)),
            Some(limit) => Container::list(self.content.splitn(limit.max(1), delimiter)),
        })
    }

    /// Splits on matches of a regular expression into a positional container.
    ///
    /// `limit` works as in [`Text::split`].
    ///
    /// # Errors
    /// Returns `InvalidPattern` if `pattern` does not compile.
    pub fn xsplit(&self, pattern: &str, limit: Option<usize>) -> Result<Container> {
        let regex = compile(pattern)?;
        Ok(match limit {
            None => Container::list(regex.split(&self.content)),
            Some(limit) => Container::list(regex.splitn(&self.content, limit.max(1))),
        })
    }

    /// Lowercases the content
    pub fn lower(&mut self) -> &mut Self {
        self.content = self.content.to_lowercase();
        self
    }

    /// Uppercases the content
    pub fn upper(&mut self) -> &mut Self {
        self.content = self.content.to_uppercase();
        self
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|err| {
        tracing::debug!(pattern, error = %err, "rejecting regular expression");
        TextError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        }
    })
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::new(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::new(value)
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.content
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.content == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.content == *other
    }
}
