//! Ordered property tables.

use std::slice;

use rustc_hash::FxHashMap;

use crate::{MetadataError, PropertyDescriptor};

/// The properties of one type, in declaration order.
///
/// Lookup by name is exact and case-sensitive. A set is never mutated after
/// construction.
#[derive(Debug, Default)]
pub struct PropertySet {
    properties: Vec<PropertyDescriptor>,
    by_name: FxHashMap<&'static str, usize>,
}

impl PropertySet {
    /// Build a set, rejecting duplicate names.
    pub fn new(properties: Vec<PropertyDescriptor>) -> Result<Self, MetadataError> {
        let mut by_name =
            FxHashMap::with_capacity_and_hasher(properties.len(), Default::default());

        for (index, property) in properties.iter().enumerate() {
            if by_name.insert(property.name, index).is_some() {
                return Err(MetadataError::DuplicateProperty {
                    property: property.name,
                });
            }
        }

        Ok(PropertySet {
            properties,
            by_name,
        })
    }

    /// Look up a property by its exact name.
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.by_name.get(name).map(|&index| &self.properties[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> slice::Iter<'_, PropertyDescriptor> {
        self.properties.iter()
    }

    /// Property names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.iter().map(|p| p.name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = &'a PropertyDescriptor;
    type IntoIter = slice::Iter<'a, PropertyDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
