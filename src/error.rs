//! Error types for the Ordo library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`OrdoError`]. Value conversion failures are reported through the typed
//! [`ConversionError`] so callers can tell a missing field from a field of the
//! wrong type.
//!
//! # Examples
//!
//! ```
//! use ordo::error::{OrdoError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(OrdoError::query("empty clause"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::schema::FieldType;

/// The main error type for Ordo operations.
#[derive(Error, Debug)]
pub enum OrdoError {
    /// I/O errors (reading document files, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Mapping-related errors
    #[error("Schema error: {0}")]
    Schema(String),

    /// A field value could not be converted to its declared type
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// A field value that does not match its declared [`FieldType`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The document carries no value for a field that requires one.
    #[error("field {field:?} is missing, expected {expected}")]
    MissingField {
        /// Field name.
        field: String,
        /// Declared type of the field.
        expected: FieldType,
    },

    /// The document carries a value of another type.
    #[error("field {field:?} has type {found}, expected {expected}")]
    TypeMismatch {
        /// Field name.
        field: String,
        /// Declared type of the field.
        expected: FieldType,
        /// Type of the value actually present.
        found: String,
    },
}

/// Result type alias for operations that may fail with OrdoError.
pub type Result<T> = std::result::Result<T, OrdoError>;

impl OrdoError {
    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        OrdoError::Schema(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        OrdoError::Query(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        OrdoError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        OrdoError::Other(msg.into())
    }

    /// Returns the conversion error if this is one.
    pub fn as_conversion(&self) -> Option<&ConversionError> {
        match self {
            OrdoError::Conversion(e) => Some(e),
            _ => None,
        }
    }
}
