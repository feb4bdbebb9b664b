//! Constants used throughout the dotarray library.
//!
//! This module provides central definitions for the default key-expression
//! separators and other fixed values shared by the container and text modules.

/// Separator between levels of a dot path, as in `"user.profile.name"`.
pub const PATH_SEPARATOR: char = '.';

/// Separator between the bounds of an interval expression, as in `"2:6"`.
pub const INTERVAL_SEPARATOR: char = ':';

/// Display text of a null value.
pub const NULL_TEXT: &str = "null";
