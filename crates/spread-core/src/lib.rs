//! Property metadata for typed spreading.
//!
//! Rust has no runtime reflection, so every type that takes part in a merge
//! carries a property table: one [`PropertyDescriptor`] per exposed field,
//! holding the field's public name, its declared [`TypeInfo`], whether it can
//! be read or written, and the accessors that do so on an erased receiver.
//!
//! - [`Introspect`] provides the table for a concrete type.
//! - [`Reflect`] is the object-safe view used for heterogeneous sources.
//! - [`Property`] is implemented by every declared property type and decides
//!   how erased [`PropertyValue`]s are recovered.
//! - [`PropertySet`] is the ordered, name-indexed table the metadata cache
//!   stores per [`TypeDescriptor`].

mod error;
mod property;
mod property_set;
mod reflect;
mod type_info;
mod value;

pub use error::{AccessError, MetadataError};
pub use property::{Getter, PropertyDescriptor, PropertyFlags, Setter};
pub use property_set::PropertySet;
pub use reflect::{Introspect, Reflect, TypeDescriptor};
pub use type_info::{Property, TypeInfo};
pub use value::PropertyValue;
