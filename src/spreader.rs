//! The merge algorithm.
//!
//! [`Spreader::apply`] walks the sources in order. For every readable
//! property of a source it looks up the property with exactly the same name
//! on the target, and copies the value when the target property is writable
//! and its declared type accepts the source's declared type. Later sources
//! overwrite earlier ones, `None` included.
//!
//! Mismatches (unknown name, read-only target, incompatible type) are
//! skipped silently apart from a `trace` event. Failures of the copy itself
//! go to the [`DiagnosticSink`] and never abort the merge.

use std::any::Any;

use spread_core::{Introspect, PropertyDescriptor, PropertySet, Reflect, TypeInfo};
use spread_registry::PropertyCache;

use crate::diagnostics::{DiagnosticSink, PropertyFailure};
use crate::source::Source;

/// Merge configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadOptions {
    /// Let a `T` source property fill an `Option<T>` target property.
    pub lift_into_option: bool,
}

impl SpreadOptions {
    /// Default options: lifting into `Option` enabled.
    pub fn new() -> Self {
        SpreadOptions {
            lift_into_option: true,
        }
    }

    /// Options that only copy between identical declared types.
    pub fn strict() -> Self {
        SpreadOptions {
            lift_into_option: false,
        }
    }

    pub fn lift_into_option(mut self, enabled: bool) -> Self {
        self.lift_into_option = enabled;
        self
    }

    fn accepts(&self, target: &TypeInfo, source: &TypeInfo) -> bool {
        if self.lift_into_option {
            target.accepts(source)
        } else {
            target.accepts_exact(source)
        }
    }
}

impl Default for SpreadOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a source property was not copied.
#[derive(Debug, Clone, Copy)]
enum Skip {
    NotOnTarget,
    ReadOnly,
    Incompatible,
}

/// Merges sources into targets using a property cache.
#[derive(Debug, Clone, Copy)]
pub struct Spreader<'c> {
    cache: &'c PropertyCache,
    options: SpreadOptions,
}

impl Spreader<'static> {
    /// A spreader backed by the process-wide cache.
    pub fn new() -> Self {
        Self::with_cache(PropertyCache::global())
    }
}

impl Default for Spreader<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> Spreader<'c> {
    /// A spreader backed by `cache`.
    pub fn with_cache(cache: &'c PropertyCache) -> Self {
        Spreader {
            cache,
            options: SpreadOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SpreadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> SpreadOptions {
        self.options
    }

    /// Build a `T` from its default value and merge `sources` into it.
    pub fn spread<'a, T: Introspect + Default>(
        &self,
        sources: impl IntoIterator<Item = impl Into<Source<'a>>>,
        sink: &mut dyn DiagnosticSink,
    ) -> T {
        let mut result = T::default();
        self.apply(&mut result, sources, sink);
        result
    }

    /// Merge `sources` into an existing `target`.
    pub fn apply<'a, T: Introspect>(
        &self,
        target: &mut T,
        sources: impl IntoIterator<Item = impl Into<Source<'a>>>,
        sink: &mut dyn DiagnosticSink,
    ) {
        let target_props = self.cache.properties_of::<T>();

        for source in sources {
            let Some(source) = source.into().get() else {
                continue;
            };
            self.merge_source(target, T::type_name(), &target_props, source, sink);
        }
    }

    fn merge_source(
        &self,
        target: &mut dyn Any,
        target_type: &'static str,
        target_props: &PropertySet,
        source: &dyn Reflect,
        sink: &mut dyn DiagnosticSink,
    ) {
        let source_ty = source.type_descriptor();
        let source_props = self.cache.properties(&source_ty);

        for sp in source_props.iter() {
            if !sp.is_readable() {
                continue;
            }

            let tp = match self.match_target(target_props, sp) {
                Ok(tp) => tp,
                Err(reason) => {
                    tracing::trace!(
                        property = sp.name,
                        target_type,
                        source_type = source_ty.name(),
                        ?reason,
                        "skipped property"
                    );
                    continue;
                }
            };

            let copied = sp
                .read(source.as_any())
                .and_then(|value| tp.write(target, value));

            if let Err(error) = copied {
                sink.report(PropertyFailure {
                    property: sp.name,
                    target_type,
                    source_type: source_ty.name(),
                    error,
                });
            }
        }
    }

    fn match_target<'p>(
        &self,
        target_props: &'p PropertySet,
        sp: &PropertyDescriptor,
    ) -> Result<&'p PropertyDescriptor, Skip> {
        let tp = target_props.get(sp.name).ok_or(Skip::NotOnTarget)?;
        if !tp.is_writable() {
            return Err(Skip::ReadOnly);
        }
        if !self.options.accepts(&tp.ty, &sp.ty) {
            return Err(Skip::Incompatible);
        }
        Ok(tp)
    }
}
