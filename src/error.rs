//! Error types for parsing and file I/O.
//!
//! Parsing has exactly one failure kind: [`Error::Syntax`], carrying the
//! position of the offending input and a human-readable message. Any syntax
//! error aborts the whole parse; there is no partial-result return.
//! [`Error::Io`] only arises in the path/file convenience layer.
//!
//! ## Examples
//!
//! ```rust
//! use jsonette::{from_str, Error};
//!
//! let result = from_str("{\"open\": [1, 2");
//! assert!(matches!(result, Err(Error::Syntax { .. })));
//! ```

use thiserror::Error;

/// All errors the crate can produce.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Syntax error with the position of the offending input
    #[error("syntax error at line {line}, column {col}: {msg}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
    },

    /// Custom error, used by fallible conversions out of the tree
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonette::Error;
    ///
    /// let err = Error::syntax(3, 7, "object was never closed");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.into(),
        }
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
