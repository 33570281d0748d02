//! Merge sources.

use std::fmt;

use spread_core::Reflect;

/// One entry of a source list: a reflected value, or nothing.
///
/// An absent source is skipped by the spreader without affecting the
/// entries around it.
#[derive(Clone, Copy, Default)]
pub struct Source<'a>(Option<&'a dyn Reflect>);

impl<'a> Source<'a> {
    /// An absent source.
    pub const fn none() -> Self {
        Source(None)
    }

    pub fn new(value: &'a dyn Reflect) -> Self {
        Source(Some(value))
    }

    pub fn get(self) -> Option<&'a dyn Reflect> {
        self.0
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl<'a, T: Reflect + ?Sized> From<&'a T> for Source<'a> {
    fn from(value: &'a T) -> Self {
        Source(Some(value.as_reflect()))
    }
}

impl<'a, T: Reflect> From<Option<&'a T>> for Source<'a> {
    fn from(value: Option<&'a T>) -> Self {
        Source(value.map(Reflect::as_reflect))
    }
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "Source({})", value.type_descriptor().name()),
            None => f.write_str("Source(none)"),
        }
    }
}
