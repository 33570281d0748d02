//! Spread Registry crate.
//!
//! Holds the process-wide property metadata cache. Property tables are built
//! by the types themselves (see `spread_core::Introspect`); this crate only
//! decides when to build them and keeps the results.

mod cache;

pub use cache::{PropertyCache, get_properties};

// Re-export the metadata types callers need alongside the cache
pub use spread_core::{PropertyDescriptor, PropertySet, TypeDescriptor};
