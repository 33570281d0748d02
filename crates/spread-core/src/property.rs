//! Property descriptors.
//!
//! A [`PropertyDescriptor`] records everything the spreader needs to know
//! about one property of a type: its name, declared type, capabilities and
//! the accessors that read and write it on an erased receiver.
//!
//! Descriptors are normally produced by `#[derive(Reflect)]`. A hand-written
//! table looks like this:
//!
//! ```
//! use std::any::Any;
//! use spread_core::{AccessError, PropertyDescriptor, PropertyValue};
//!
//! struct Counter {
//!     value: i32,
//! }
//!
//! let value = PropertyDescriptor::new::<i32>("value")
//!     .with_getter(|obj: &dyn Any| {
//!         let this = obj.downcast_ref::<Counter>().ok_or_else(AccessError::receiver::<Counter>)?;
//!         Ok(PropertyValue::new(this.value))
//!     })
//!     .with_setter(|obj: &mut dyn Any, value: PropertyValue| {
//!         let this = obj.downcast_mut::<Counter>().ok_or_else(AccessError::receiver::<Counter>)?;
//!         this.value = value.downcast::<i32>()?;
//!         Ok(())
//!     });
//!
//! assert!(value.is_readable());
//! assert!(value.is_writable());
//! ```

use std::any::Any;
use std::fmt;

use bitflags::bitflags;

use crate::{AccessError, Property, PropertyValue, TypeInfo};

bitflags! {
    /// Capabilities of a property.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PropertyFlags: u8 {
        /// The property can be read.
        const READABLE = 1 << 0;
        /// The property can be written.
        const WRITABLE = 1 << 1;
    }
}

/// Reads a property from an erased receiver.
pub type Getter = fn(&dyn Any) -> Result<PropertyValue, AccessError>;

/// Writes a property on an erased receiver.
pub type Setter = fn(&mut dyn Any, PropertyValue) -> Result<(), AccessError>;

/// Metadata and accessors for one property.
#[derive(Clone, Copy)]
pub struct PropertyDescriptor {
    /// Public property name, unique within the owning type.
    pub name: &'static str,
    /// Declared type.
    pub ty: TypeInfo,
    /// Capabilities.
    pub flags: PropertyFlags,
    getter: Option<Getter>,
    setter: Option<Setter>,
}

impl PropertyDescriptor {
    /// A descriptor declared as `P`, with no accessors yet.
    pub fn new<P: Property>(name: &'static str) -> Self {
        Self::with_type(name, P::type_info())
    }

    /// A descriptor with an explicit declared type, with no accessors yet.
    pub fn with_type(name: &'static str, ty: TypeInfo) -> Self {
        PropertyDescriptor {
            name,
            ty,
            flags: PropertyFlags::empty(),
            getter: None,
            setter: None,
        }
    }

    /// Attach a getter and mark the property readable.
    pub fn with_getter(mut self, getter: Getter) -> Self {
        self.getter = Some(getter);
        self.flags |= PropertyFlags::READABLE;
        self
    }

    /// Attach a setter and mark the property writable.
    pub fn with_setter(mut self, setter: Setter) -> Self {
        self.setter = Some(setter);
        self.flags |= PropertyFlags::WRITABLE;
        self
    }

    pub fn is_readable(&self) -> bool {
        self.flags.contains(PropertyFlags::READABLE) && self.getter.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.flags.contains(PropertyFlags::WRITABLE) && self.setter.is_some()
    }

    /// Read this property from `receiver`.
    pub fn read(&self, receiver: &dyn Any) -> Result<PropertyValue, AccessError> {
        match self.getter {
            Some(get) if self.is_readable() => get(receiver),
            _ => Err(AccessError::NotReadable {
                property: self.name,
            }),
        }
    }

    /// Write `value` into this property on `receiver`.
    pub fn write(&self, receiver: &mut dyn Any, value: PropertyValue) -> Result<(), AccessError> {
        match self.setter {
            Some(set) if self.is_writable() => set(receiver, value),
            _ => Err(AccessError::NotWritable {
                property: self.name,
            }),
        }
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("flags", &self.flags)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i32,
    }

    fn x_property() -> PropertyDescriptor {
        PropertyDescriptor::new::<i32>("x")
            .with_getter(|obj: &dyn Any| {
                let this = obj
                    .downcast_ref::<Point>()
                    .ok_or_else(AccessError::receiver::<Point>)?;
                Ok(PropertyValue::new(this.x))
            })
            .with_setter(|obj: &mut dyn Any, value: PropertyValue| {
                let this = obj
                    .downcast_mut::<Point>()
                    .ok_or_else(AccessError::receiver::<Point>)?;
                this.x = value.downcast::<i32>()?;
                Ok(())
            })
    }

    #[test]
    fn accessors_set_flags() {
        let bare = PropertyDescriptor::new::<i32>("x");
        assert!(bare.flags.is_empty());
        assert!(!bare.is_readable());
        assert!(!bare.is_writable());

        let full = x_property();
        assert_eq!(full.flags, PropertyFlags::READABLE | PropertyFlags::WRITABLE);
    }

    #[test]
    fn read_and_write_through_erased_receiver() {
        let prop = x_property();
        let mut point = Point { x: 1 };

        prop.write(&mut point, PropertyValue::new(5)).unwrap();
        assert_eq!(point.x, 5);

        let value = prop.read(&point).unwrap();
        assert_eq!(value.downcast::<i32>().unwrap(), 5);
    }

    #[test]
    fn wrong_receiver_is_an_error() {
        let prop = x_property();
        let mut other = String::new();
        assert_eq!(
            prop.write(&mut other, PropertyValue::new(5)),
            Err(AccessError::receiver::<Point>())
        );
    }

    #[test]
    fn wrong_value_is_an_error_and_leaves_receiver_alone() {
        let prop = x_property();
        let mut point = Point { x: 1 };
        let err = prop.write(&mut point, PropertyValue::new(5u8)).unwrap_err();
        assert!(matches!(err, AccessError::ValueMismatch { expected: "i32", found: "u8" }));
        assert_eq!(point.x, 1);
    }

    #[test]
    fn clearing_a_flag_disables_the_accessor() {
        let mut prop = x_property();
        prop.flags.remove(PropertyFlags::WRITABLE);

        let mut point = Point { x: 1 };
        assert_eq!(
            prop.write(&mut point, PropertyValue::new(5)),
            Err(AccessError::NotWritable { property: "x" })
        );
        assert!(prop.read(&point).is_ok());
    }
}
