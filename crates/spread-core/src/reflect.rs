//! Reflect and Introspect traits.
//!
//! [`Introspect`] is implemented by every type that takes part in spreading,
//! either as a target or as a source. It provides the type's property table.
//! [`Reflect`] is its object-safe face: every `Introspect` type is
//! automatically `Reflect`, so heterogeneous sources can be passed around as
//! `&dyn Reflect` and still report their runtime type.
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//! use spread_core::{AccessError, Introspect, PropertyDescriptor, PropertyValue, Reflect};
//!
//! #[derive(Default)]
//! struct Named {
//!     name: Option<String>,
//! }
//!
//! impl Introspect for Named {
//!     fn properties() -> Vec<PropertyDescriptor> {
//!         vec![PropertyDescriptor::new::<Option<String>>("name").with_getter(|obj: &dyn Any| {
//!             let this = obj.downcast_ref::<Named>().ok_or_else(AccessError::receiver::<Named>)?;
//!             Ok(PropertyValue::new(this.name.clone()))
//!         })]
//!     }
//! }
//!
//! let named = Named::default();
//! let erased: &dyn Reflect = &named;
//! assert_eq!(erased.type_descriptor(), Named::descriptor());
//! ```
//!
//! With the `#[derive(Reflect)]` macro (from `spread-macros`):
//!
//! ```ignore
//! #[derive(Default, Reflect)]
//! pub struct Named {
//!     pub name: Option<String>,
//! }
//! ```

use std::any::{self, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::PropertyDescriptor;

/// Identity of a reflected type, used as the metadata cache key.
///
/// Equality and hashing use the [`TypeId`] only.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
    introspect: fn() -> Vec<PropertyDescriptor>,
}

impl TypeDescriptor {
    /// Descriptor of `T`.
    pub fn of<T: Introspect>() -> Self {
        TypeDescriptor {
            id: TypeId::of::<T>(),
            name: T::type_name(),
            introspect: T::properties,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Build the type's property table.
    pub fn introspect(&self) -> Vec<PropertyDescriptor> {
        (self.introspect)()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeDescriptor").field(&self.name).finish()
    }
}

/// A type with a property table.
///
/// The recommended way to implement this trait is `#[derive(Reflect)]` from
/// the `spread-macros` crate.
pub trait Introspect: Any + Sized {
    /// Name used in diagnostics.
    fn type_name() -> &'static str {
        any::type_name::<Self>()
    }

    /// The public properties of this type, in declaration order.
    ///
    /// Names must be unique.
    fn properties() -> Vec<PropertyDescriptor>;

    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>()
    }
}

/// Object-safe access to an [`Introspect`] value of unknown type.
pub trait Reflect: Any {
    /// Descriptor of the value's runtime type.
    fn type_descriptor(&self) -> TypeDescriptor;

    fn as_reflect(&self) -> &dyn Reflect;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Introspect> Reflect for T {
    fn type_descriptor(&self) -> TypeDescriptor {
        T::descriptor()
    }

    fn as_reflect(&self) -> &dyn Reflect {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dyn Reflect({})", self.type_descriptor().name())
    }
}
