//! Type-erased property values.

use std::any::{self, Any};
use std::fmt;

use crate::AccessError;

/// An owned value read from a property.
///
/// The value is boxed behind [`Any`] so that getters and setters of
/// unrelated types can exchange it. The concrete type name is kept for
/// diagnostics, since `dyn Any` cannot report it.
pub struct PropertyValue {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl PropertyValue {
    /// Box `value`.
    pub fn new<T: 'static>(value: T) -> Self {
        PropertyValue {
            value: Box::new(value),
            type_name: any::type_name::<T>(),
        }
    }

    /// Name of the concrete type held.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the held value is a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrow the held value as a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Take the held value as a `T`.
    pub fn downcast<T: 'static>(self) -> Result<T, AccessError> {
        let found = self.type_name;
        self.value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| AccessError::value::<T>(found))
    }
}

impl fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyValue({})", self.type_name)
    }
}
