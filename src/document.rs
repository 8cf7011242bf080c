//! Document module.
//!
//! Documents are collections of named, typed field values. Values form a closed
//! set ([`field_value::FieldValue`]): text or integer.
//!
//! # Core Components
//!
//! - [`document::Document`] - A stored document with its assigned id
//! - [`document::Fields`] - The field-name to value map submitted for indexing
//! - [`field_value::FieldValue`] - Text or integer value
//!
//! # Examples
//!
//! ```
//! use ordo::document::document::Fields;
//! use ordo::document::field_value::FieldValue;
//!
//! let fields = Fields::new()
//!     .with_text("name", "Blue dress")
//!     .with_integer("popularity", 7);
//!
//! assert_eq!(fields.get("popularity"), Some(&FieldValue::Integer(7)));
//! ```

pub mod document;
pub mod field_value;
