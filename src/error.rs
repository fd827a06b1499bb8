//! Error types for query construction.
//!
//! Every failure is raised synchronously by the primitive that detected it,
//! before any text is formatted. Errors fall into the coarse categories
//! exposed by [`ErrorKind`] so callers can branch without matching on every
//! variant.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QueryBuilderError>;

/// Coarse classification of a [`QueryBuilderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument has the wrong shape (not text, not a number, not callable, missing).
    Type,
    /// A numeric argument is outside the permitted bound.
    Range,
    /// A configuration value could not be used.
    Config,
}

/// Errors raised while validating arguments or building a query string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryBuilderError {
    /// Argument is not of the required shape.
    #[error("argument `{argument}` at position {position} must be {expected}, got {found}")]
    Type {
        argument: String,
        position: usize,
        expected: &'static str,
        found: String,
    },

    /// Numeric argument is outside its inclusive bound.
    #[error(
        "argument `{argument}` at position {position} must be within [{min}, {max}], got {value}"
    )]
    Range {
        argument: String,
        position: usize,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Numeric argument is larger in magnitude than the largest safely representable integer.
    #[error(
        "argument `{argument}` at position {position} exceeds the maximum safe integer magnitude, got {value}"
    )]
    UnsafeMagnitude {
        argument: String,
        position: usize,
        value: f64,
    },

    /// No primitive is exported under the requested name.
    #[error("`{0}` is not a known query primitive")]
    UnknownPrimitive(String),

    /// Configuration could not be applied.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl QueryBuilderError {
    /// Create an invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        QueryBuilderError::InvalidConfig(msg.into())
    }

    /// Create an unknown primitive error.
    pub fn unknown_primitive<S: Into<String>>(name: S) -> Self {
        QueryBuilderError::UnknownPrimitive(name.into())
    }

    /// The coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryBuilderError::Type { .. } | QueryBuilderError::UnknownPrimitive(_) => {
                ErrorKind::Type
            }
            QueryBuilderError::Range { .. } | QueryBuilderError::UnsafeMagnitude { .. } => {
                ErrorKind::Range
            }
            QueryBuilderError::InvalidConfig(_) => ErrorKind::Config,
        }
    }

    /// Returns `true` for argument shape errors.
    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    /// Returns `true` for numeric bound errors.
    pub fn is_range_error(&self) -> bool {
        self.kind() == ErrorKind::Range
    }
}
