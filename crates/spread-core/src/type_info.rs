//! Declared property types.
//!
//! This module provides [`TypeInfo`], the identity of a property's declared
//! type, and the [`Property`] trait which every property type implements.
//! Compatibility between a source and a target property is decided on
//! `TypeInfo` alone:
//!
//! - identical types are always compatible;
//! - `T` is compatible with a target declared as `Option<T>` (lifting);
//! - nothing else is. There is no numeric widening and no cross-kind
//!   coercion, so a `String` never lands in an `i32`.
//!
//! # Example
//!
//! ```
//! use spread_core::{Property, TypeInfo};
//!
//! let age = <i32 as Property>::type_info();
//! let maybe_age = <Option<i32> as Property>::type_info();
//!
//! assert!(age.accepts(&age));
//! assert!(maybe_age.accepts(&age));
//! assert!(!age.accepts(&maybe_age));
//! assert!(!age.accepts(&TypeInfo::of::<String>()));
//! ```

use std::any::{self, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

use crate::{AccessError, PropertyValue};

/// Identity of a declared property type.
///
/// Equality and hashing use the [`TypeId`] only.
#[derive(Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
    /// `Some(inner)` when this type is `Option<inner>`.
    nullable_of: Option<TypeId>,
}

impl TypeInfo {
    /// Type info for `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeInfo {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
            nullable_of: None,
        }
    }

    /// Type info for `Option<T>`, remembering `T` for lifting.
    pub fn nullable<T: 'static>() -> Self {
        TypeInfo {
            id: TypeId::of::<Option<T>>(),
            name: any::type_name::<Option<T>>(),
            nullable_of: Some(TypeId::of::<T>()),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The inner type when this is `Option<inner>`.
    pub fn nullable_of(&self) -> Option<TypeId> {
        self.nullable_of
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Whether a property of this type can take a value of type `source`.
    pub fn accepts(&self, source: &TypeInfo) -> bool {
        self.accepts_exact(source) || self.nullable_of == Some(source.id)
    }

    /// Whether `source` is the very same type.
    pub fn accepts_exact(&self, source: &TypeInfo) -> bool {
        self.id == source.id
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A type that can be the declared type of a property.
///
/// Values are read by cloning and written by moving, so the type must be
/// `Clone`. Implement it for your own types with [`impl_property!`] or
/// `#[spread(value)]` on a derived type.
///
/// [`impl_property!`]: crate::impl_property
pub trait Property: Clone + 'static {
    /// Identity of this type as a declared property type.
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    /// Recover a value of this type from an erased value.
    fn from_value(value: PropertyValue) -> Result<Self, AccessError> {
        value.downcast::<Self>()
    }
}

/// Implement [`Property`] for one or more types with the default
/// (exact type) behaviour.
///
/// ```
/// use spread_core::impl_property;
///
/// #[derive(Clone)]
/// struct Email(String);
///
/// impl_property!(Email);
/// ```
#[macro_export]
macro_rules! impl_property {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Property for $ty {}
        )*
    };
}

impl_property!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

impl<T: Property> Property for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::nullable::<T>()
    }

    fn from_value(value: PropertyValue) -> Result<Self, AccessError> {
        if value.is::<Self>() {
            return value.downcast::<Self>();
        }
        let found = value.type_name();
        T::from_value(value)
            .map(Some)
            .map_err(|_| AccessError::value::<Self>(found))
    }
}

impl<T: Property> Property for Vec<T> {}

impl<T: Property> Property for Box<T> {}

impl<T: ?Sized + 'static> Property for Arc<T> {}

impl<T: ?Sized + 'static> Property for Rc<T> {}
