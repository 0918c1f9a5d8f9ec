//! Error types for paramex.
//!
//! All failures are local and synchronous: they surface at the offending call
//! and are never retried internally. Category resolution deliberately has no
//! error path (unknown identifiers degrade to the default category).

use thiserror::Error;

/// The error type for paramex operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The same parameter name was registered twice in one catalog.
    #[error("duplicate parameter '{name}'")]
    DuplicateParameter {
        /// The offending parameter name.
        name: String,
    },

    /// Lookup of a name unknown to the catalog or selection tracker.
    #[error("unknown parameter '{name}'")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A category color channel was outside 0–255.
    #[error("invalid color ({r}, {g}, {b}) for category '{identifier}': channels must be 0-255")]
    InvalidColor {
        /// Category being registered.
        identifier: String,
        r: i32,
        g: i32,
        b: i32,
    },

    /// A caller-supplied argument was unusable (e.g. an empty parameter name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A parameter file line could not be parsed.
    #[error("malformed parameter file at line {line}: {message}")]
    ParamFileFormat {
        /// 1-based line number.
        line: usize,
        /// Description of what went wrong.
        message: String,
    },

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for paramex operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    #[must_use]
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateParameter { name: name.into() }
    }

    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
