//!
//! Dotarray: ordered nested containers addressed by key expressions.
//!
//! This library provides a single mutable structure that behaves both as a list
//! and as a map, together with a small text wrapper that converts to and from it.
//!
//! ## Core Concepts
//!
//! * **Containers (`container::Container`)**: Insertion-ordered mappings from keys to values.
//!   Values are scalars or nested containers, so a container is always a tree.
//! * **Keys (`container::Key`)**: Either an integer or a name. Strings spelling a canonical
//!   non-negative integer are normalized to integers, so `"3"` and `3` are the same key.
//! * **Key expressions (`container::KeyExpr`)**: How every keyed operation addresses entries:
//!     * **Literal**: one key at the current level, `"name"` or `3`.
//!     * **Path**: dot-separated keys descending through nested containers, `"user.profile.name"`.
//!     * **Interval**: a `start:end` range of insertion positions, `"2:6"`, `":3"`, `"-2:"`.
//! * **Text (`text::Text`)**: A string wrapper whose `split`/`xsplit` produce containers and
//!   which `Container::join` produces.
//!
//! ```
//! use dotarray::{Container, Text};
//!
//! let mut arr = Container::new();
//! arr.set("lorem.ipsum", "dolor")?;
//! arr.container_mut("lorem.list")?.push_all([1, 2, 3]);
//!
//! assert_eq!(arr.to_json_string(), r#"{"lorem":{"ipsum":"dolor","list":[1,2,3]}}"#);
//! assert_eq!(arr.get_array("lorem.list")?.unwrap().join("|"), Text::from("1|2|3"));
//! # Ok::<(), dotarray::Error>(())
//! ```

pub mod constants;
pub mod container;
pub mod text;

pub use container::{Container, ContainerError, Interval, Key, KeyExpr, KeySyntax, ToKeyExpr, Value};
pub use text::{Text, TextError};

/// Result type used throughout the Dotarray library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Dotarray library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured container errors from the container module
    #[error(transparent)]
    Container(ContainerError),

    /// Structured text errors from the text module
    #[error(transparent)]
    Text(TextError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Container(_) => "container",
            Error::Text(_) => "text",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error comes from a malformed or unusable key expression.
    pub fn is_invalid_expression(&self) -> bool {
        match self {
            Error::Container(container_err) => container_err.is_invalid_expression(),
            _ => false,
        }
    }

    /// Check if this error comes from an out-of-range argument.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Container(container_err) => container_err.is_invalid_argument(),
            Error::Text(TextError::EmptyDelimiter) => true,
            _ => false,
        }
    }

    /// Check if this error comes from a regular expression that failed to compile.
    pub fn is_invalid_pattern(&self) -> bool {
        match self {
            Error::Text(text_err) => text_err.is_invalid_pattern(),
            _ => false,
        }
    }

    /// Check if this error is container-related.
    pub fn is_container_error(&self) -> bool {
        matches!(self, Error::Container(_))
    }

    /// Check if this error is text-related.
    pub fn is_text_error(&self) -> bool {
        matches!(self, Error::Text(_))
    }

    /// Check if this error is a serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
