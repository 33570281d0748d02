//! Diagnostic side channel for failed property assignments.
//!
//! A merge never fails as a whole. When reading a source property or writing
//! the target property goes wrong despite the types matching (a custom setter
//! refused the value, for example) the spreader builds a [`PropertyFailure`]
//! and hands it to a [`DiagnosticSink`], then moves on to the next property.
//!
//! Sinks:
//!
//! - [`TracingSink`] - emits one `tracing` warning per failure (the default)
//! - [`Diagnostics`] - collects failures in memory for later inspection
//! - [`IgnoreSink`] - drops failures
//! - any `FnMut(PropertyFailure)` closure, which receives each failure by value
//!
//! # Examples
//!
//! ```
//! use spread::{Diagnostics, DiagnosticSink, PropertyFailure, AccessError};
//!
//! let mut diagnostics = Diagnostics::new();
//! diagnostics.report(PropertyFailure {
//!     property: "age",
//!     target_type: "Person",
//!     source_type: "Patch",
//!     error: AccessError::rejected("age must not be negative"),
//! });
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(
//!     diagnostics.failures()[0].to_string(),
//!     "error setting property age: age must not be negative"
//! );
//! ```

use std::slice;
use std::vec;

use spread_core::AccessError;
use thiserror::Error;

/// One property that could not be copied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error setting property {property}: {error}")]
pub struct PropertyFailure {
    /// Name of the property.
    pub property: &'static str,
    /// Type being merged into.
    pub target_type: &'static str,
    /// Runtime type of the source the value came from.
    pub source_type: &'static str,
    /// What went wrong.
    #[source]
    pub error: AccessError,
}

/// Receiver of property failures.
pub trait DiagnosticSink {
    fn report(&mut self, failure: PropertyFailure);
}

impl<F: FnMut(PropertyFailure)> DiagnosticSink for F {
    fn report(&mut self, failure: PropertyFailure) {
        self(failure)
    }
}

/// Logs each failure as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, failure: PropertyFailure) {
        tracing::warn!(
            property = failure.property,
            target_type = failure.target_type,
            source_type = failure.source_type,
            error = %failure.error,
            "error setting property"
        );
    }
}

/// Discards every failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreSink;

impl DiagnosticSink for IgnoreSink {
    fn report(&mut self, _failure: PropertyFailure) {}
}

/// A collection of property failures.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    failures: Vec<PropertyFailure>,
}

impl Diagnostics {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> &[PropertyFailure] {
        &self.failures
    }

    pub fn iter(&self) -> slice::Iter<'_, PropertyFailure> {
        self.failures.iter()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failures recorded for `property`.
    pub fn for_property<'d>(
        &'d self,
        property: &'d str,
    ) -> impl Iterator<Item = &'d PropertyFailure> + 'd {
        self.failures.iter().filter(move |f| f.property == property)
    }

    pub fn clear(&mut self) {
        self.failures.clear();
    }

    pub fn into_failures(self) -> Vec<PropertyFailure> {
        self.failures
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, failure: PropertyFailure) {
        self.failures.push(failure);
    }
}

impl IntoIterator for Diagnostics {
    type Item = PropertyFailure;
    type IntoIter = vec::IntoIter<PropertyFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a PropertyFailure;
    type IntoIter = slice::Iter<'a, PropertyFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}
