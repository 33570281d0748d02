//! Error types for property access.
//!
//! ## Error Hierarchy
//!
//! ```text
//! AccessError     - a single property read or write failed at runtime
//! MetadataError   - a property table is malformed (programmer error)
//! ```
//!
//! `AccessError` is the per-property failure reported through a diagnostic
//! sink. It never aborts a merge. `MetadataError` surfaces only when a table
//! is first introspected and is treated as fatal by the cache.

use std::any;
use std::fmt;

use thiserror::Error;

// ============================================================================
// Access Errors
// ============================================================================

/// A failed read or write of one property.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The object handed to an accessor is not of the type the accessor
    /// was generated for.
    #[error("receiver is not a `{expected}`")]
    ReceiverMismatch { expected: &'static str },

    /// The value handed to a setter does not have the declared type.
    #[error("expected a value of type `{expected}`, found `{found}`")]
    ValueMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The property has no getter.
    #[error("property `{property}` is not readable")]
    NotReadable { property: &'static str },

    /// The property has no setter.
    #[error("property `{property}` is not writable")]
    NotWritable { property: &'static str },

    /// A custom setter refused the value.
    #[error("{reason}")]
    Rejected { reason: String },
}

impl AccessError {
    /// Receiver mismatch for an accessor generated on `T`.
    pub fn receiver<T: ?Sized>() -> Self {
        AccessError::ReceiverMismatch {
            expected: any::type_name::<T>(),
        }
    }

    /// Value mismatch for a setter expecting `T`.
    pub fn value<T: ?Sized>(found: &'static str) -> Self {
        AccessError::ValueMismatch {
            expected: any::type_name::<T>(),
            found,
        }
    }

    /// Wrap the error returned by a custom setter.
    pub fn rejected(reason: impl fmt::Display) -> Self {
        AccessError::Rejected {
            reason: reason.to_string(),
        }
    }
}

// ============================================================================
// Metadata Errors
// ============================================================================

/// A property table that cannot be turned into a [`PropertySet`](crate::PropertySet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// Two properties of one type share a name.
    #[error("duplicate property `{property}`")]
    DuplicateProperty { property: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_mismatch_message_names_both_types() {
        let err = AccessError::value::<i32>("alloc::string::String");
        assert_eq!(
            err.to_string(),
            "expected a value of type `i32`, found `alloc::string::String`"
        );
    }

    #[test]
    fn rejected_keeps_reason_verbatim() {
        let err = AccessError::rejected("age must not be negative");
        assert_eq!(err.to_string(), "age must not be negative");
    }

    #[test]
    fn receiver_mismatch_names_expected_type() {
        let err = AccessError::receiver::<u8>();
        assert_eq!(err, AccessError::ReceiverMismatch { expected: "u8" });
    }
}
