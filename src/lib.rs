//! Merge the properties of several typed records into a new value.
//!
//! `spread` builds a fresh target value from its `Default` and copies, from
//! each source in turn, every readable property whose name matches a
//! writable property of the target and whose declared type the target
//! accepts. Later sources win. Absent sources are skipped. Anything that does
//! not line up is dropped rather than coerced.
//!
//! # Example
//!
//! ```
//! use spread::{Reflect, spread};
//!
//! #[derive(Debug, Default, PartialEq, Reflect)]
//! pub struct Person {
//!     pub name: Option<String>,
//!     pub age: i32,
//!     pub country: Option<String>,
//! }
//!
//! #[derive(Reflect)]
//! pub struct Basics {
//!     pub name: Option<String>,
//!     pub age: i32,
//! }
//!
//! #[derive(Reflect)]
//! pub struct Move {
//!     pub age: i32,
//!     pub country: Option<String>,
//! }
//!
//! let basics = Basics { name: Some("Alice".into()), age: 25 };
//! let moved = Move { age: 30, country: Some("Wonderland".into()) };
//!
//! let person: Person = spread!(Person; &basics, &moved);
//! assert_eq!(person, Person {
//!     name: Some("Alice".into()),
//!     age: 30,
//!     country: Some("Wonderland".into()),
//! });
//! ```
//!
//! # Diagnostics
//!
//! Copies that fail at runtime (a custom setter refusing a value, for
//! example) are reported to a [`DiagnosticSink`] and never abort the merge.
//! [`spread`] logs them through `tracing`; [`spread_with`] takes any sink.

pub mod diagnostics;
mod source;
mod spreader;

pub use diagnostics::{DiagnosticSink, Diagnostics, IgnoreSink, PropertyFailure, TracingSink};
pub use source::Source;
pub use spreader::{SpreadOptions, Spreader};

pub use spread_core::{
    AccessError, Introspect, MetadataError, Property, PropertyDescriptor, PropertyFlags,
    PropertySet, PropertyValue, Reflect, TypeDescriptor, TypeInfo, impl_property,
};
pub use spread_registry::{PropertyCache, get_properties};

#[cfg(feature = "derive")]
pub use spread_macros::Reflect;

/// Build a `T` from its default and merge `sources` into it, in order.
///
/// Uses the process-wide property cache and logs copy failures through
/// [`TracingSink`].
pub fn spread<'a, T: Introspect + Default>(
    sources: impl IntoIterator<Item = impl Into<Source<'a>>>,
) -> T {
    Spreader::new().spread(sources, &mut TracingSink)
}

/// Like [`spread`], reporting copy failures to `sink`.
pub fn spread_with<'a, T: Introspect + Default>(
    sources: impl IntoIterator<Item = impl Into<Source<'a>>>,
    sink: &mut dyn DiagnosticSink,
) -> T {
    Spreader::new().spread(sources, sink)
}

/// Spread any mix of sources into a new `T`.
///
/// Each source may be a `&impl Reflect`, a `&dyn Reflect`, an
/// `Option<&impl Reflect>` or [`Source::none()`].
///
/// ```
/// # use spread::{Reflect, Source, spread};
/// # #[derive(Default, Reflect)]
/// # pub struct Person { pub name: Option<String>, pub age: i32 }
/// # #[derive(Reflect)]
/// # pub struct Named { pub name: Option<String> }
/// let named = Named { name: Some("Alice".into()) };
///
/// let empty: Person = spread!(Person);
/// let alice: Person = spread!(Person; &named, Source::none());
///
/// assert_eq!(empty.name, None);
/// assert_eq!(alice.name.as_deref(), Some("Alice"));
/// assert_eq!(alice.age, 0);
/// ```
#[macro_export]
macro_rules! spread {
    ($target:ty $(;)?) => {
        $crate::spread::<$target>(::core::iter::empty::<$crate::Source<'static>>())
    };
    ($target:ty; $($source:expr),+ $(,)?) => {
        $crate::spread::<$target>([$($crate::Source::from($source)),+])
    };
}
