//! PropertyCache - process-wide property metadata storage.
//!
//! This module provides [`PropertyCache`], a lazily populated map from a
//! [`TypeDescriptor`] to the [`PropertySet`] of that type.
//!
//! # Storage Model
//!
//! - Entries are keyed by `TypeId` and hold an `Arc<PropertySet>`.
//! - An entry is built from the type's property table the first time the type
//!   is requested and is never evicted or replaced afterwards.
//!
//! # Thread Safety
//!
//! `PropertyCache` is `Send + Sync` and needs no external locking:
//!
//! - **Hit**: a shared read lock is taken for the map lookup and the `Arc` is
//!   cloned out; the set itself is immutable and read without any lock.
//! - **Miss**: the table is introspected with no lock held, then inserted
//!   under the write lock unless another thread got there first. Racing
//!   callers may build the set more than once, but all of them return the
//!   first published `Arc`.
//!
//! A poisoned lock is recovered, since entries are complete before they are
//! published.
//!
//! # Example
//!
//! ```
//! use spread_core::{Introspect, PropertyDescriptor};
//! use spread_registry::PropertyCache;
//! use std::sync::Arc;
//!
//! struct Marker;
//!
//! impl Introspect for Marker {
//!     fn properties() -> Vec<PropertyDescriptor> {
//!         vec![PropertyDescriptor::new::<bool>("enabled")]
//!     }
//! }
//!
//! let cache = PropertyCache::new();
//! let first = cache.properties_of::<Marker>();
//! let again = cache.properties_of::<Marker>();
//! assert!(Arc::ptr_eq(&first, &again));
//! assert_eq!(cache.len(), 1);
//! ```

use std::any::TypeId;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use rustc_hash::FxHashMap;
use spread_core::{Introspect, PropertySet, TypeDescriptor};

static GLOBAL: OnceLock<PropertyCache> = OnceLock::new();

/// Cache of property sets keyed by type.
#[derive(Debug, Default)]
pub struct PropertyCache {
    entries: RwLock<FxHashMap<TypeId, Arc<PropertySet>>>,
}

impl PropertyCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache.
    pub fn global() -> &'static PropertyCache {
        GLOBAL.get_or_init(PropertyCache::new)
    }

    /// Properties of `ty`, introspecting it on first use.
    ///
    /// # Panics
    ///
    /// Panics if the type's property table contains duplicate names. This is
    /// a bug in the table, not in the data being merged.
    pub fn properties(&self, ty: &TypeDescriptor) -> Arc<PropertySet> {
        if let Some(set) = self.lookup(ty) {
            return set;
        }

        let built = match PropertySet::new(ty.introspect()) {
            Ok(set) => Arc::new(set),
            Err(err) => panic!("invalid property table for `{}`: {err}", ty.name()),
        };

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let published = entries.entry(ty.id()).or_insert_with(|| {
            tracing::trace!(
                type_name = ty.name(),
                properties = built.len(),
                "cached property metadata"
            );
            Arc::clone(&built)
        });
        Arc::clone(published)
    }

    /// Properties of `T`, introspecting it on first use.
    pub fn properties_of<T: Introspect>(&self) -> Arc<PropertySet> {
        self.properties(&T::descriptor())
    }

    /// Whether `ty` has been introspected already.
    pub fn contains(&self, ty: &TypeDescriptor) -> bool {
        self.lookup(ty).is_some()
    }

    /// Number of cached types.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, ty: &TypeDescriptor) -> Option<Arc<PropertySet>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&ty.id())
            .cloned()
    }
}

/// Properties of `ty` from the process-wide cache.
pub fn get_properties(ty: &TypeDescriptor) -> Arc<PropertySet> {
    PropertyCache::global().properties(ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spread_core::PropertyDescriptor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    static INTROSPECTIONS: AtomicUsize = AtomicUsize::new(0);

    struct Counted;

    impl Introspect for Counted {
        fn properties() -> Vec<PropertyDescriptor> {
            INTROSPECTIONS.fetch_add(1, Ordering::SeqCst);
            vec![
                PropertyDescriptor::new::<String>("name"),
                PropertyDescriptor::new::<i32>("age"),
            ]
        }
    }

    struct Plain;

    impl Introspect for Plain {
        fn properties() -> Vec<PropertyDescriptor> {
            vec![
                PropertyDescriptor::new::<String>("name"),
                PropertyDescriptor::new::<i32>("age"),
            ]
        }
    }

    struct Other;

    impl Introspect for Other {
        fn properties() -> Vec<PropertyDescriptor> {
            vec![PropertyDescriptor::new::<bool>("flag")]
        }
    }

    struct Broken;

    impl Introspect for Broken {
        fn properties() -> Vec<PropertyDescriptor> {
            vec![
                PropertyDescriptor::new::<i32>("id"),
                PropertyDescriptor::new::<u32>("id"),
            ]
        }
    }

    #[test]
    fn populates_once_per_type() {
        let cache = PropertyCache::new();
        assert!(cache.is_empty());
        assert!(!cache.contains(&Counted::descriptor()));

        let before = INTROSPECTIONS.load(Ordering::SeqCst);
        let first = cache.properties_of::<Counted>();
        let second = cache.properties_of::<Counted>();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(INTROSPECTIONS.load(Ordering::SeqCst), before + 1);
        assert!(cache.contains(&Counted::descriptor()));
        assert_eq!(first.names().collect::<Vec<_>>(), ["name", "age"]);
    }

    #[test]
    fn distinct_types_get_distinct_entries() {
        let cache = PropertyCache::new();
        let plain = cache.properties_of::<Plain>();
        let other = cache.properties_of::<Other>();

        assert_eq!(cache.len(), 2);
        assert!(plain.contains("age"));
        assert!(other.contains("flag"));
        assert!(!other.contains("age"));
    }

    #[test]
    fn concurrent_first_requests_converge() {
        let cache = PropertyCache::new();

        let sets: Vec<Arc<PropertySet>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| cache.properties_of::<Other>()))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(cache.len(), 1);
        let published = cache.properties_of::<Other>();
        assert!(sets.iter().all(|set| Arc::ptr_eq(set, &published)));
    }

    #[test]
    #[should_panic(expected = "duplicate property `id`")]
    fn duplicate_names_are_fatal() {
        PropertyCache::new().properties_of::<Broken>();
    }

    #[test]
    fn global_cache_is_shared() {
        let local = get_properties(&Other::descriptor());
        let again = PropertyCache::global().properties_of::<Other>();
        assert!(Arc::ptr_eq(&local, &again));
        assert!(std::ptr::eq(PropertyCache::global(), PropertyCache::global()));
    }
}
