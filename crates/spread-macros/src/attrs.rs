//! Attribute parsing utilities for the spread macros.

use syn::{Attribute, LitStr, Path};

/// Parsed `#[spread(...)]` attributes on a type.
#[derive(Debug, Default)]
pub struct TypeAttrs {
    /// Override name used in diagnostics (default: Rust struct name)
    pub name: Option<String>,
    /// The type is also a whole-value property type
    pub value: bool,
}

/// Parsed `#[spread(...)]` attributes on a field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Expose a getter
    pub get: bool,
    /// Expose a setter
    pub set: bool,
    /// Never expose the field
    pub skip: bool,
    /// Override property name
    pub name: Option<String>,
    /// Route writes through `fn(&mut Self, FieldTy) -> Result<(), E>`
    pub set_with: Option<Path>,
}

impl FieldAttrs {
    /// Whether any capability was requested explicitly.
    pub fn is_explicit(&self) -> bool {
        self.get || self.set || self.set_with.is_some()
    }
}

impl TypeAttrs {
    /// Parse attributes from a list of `#[spread(...)]` attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("spread") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.name = Some(value.value());
                } else if meta.path.is_ident("value") {
                    result.value = true;
                } else {
                    return Err(meta.error(format!(
                        "unknown spread attribute: {}",
                        meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                    )));
                }
                Ok(())
            })?;
        }

        Ok(result)
    }
}

impl FieldAttrs {
    /// Parse attributes from a list of `#[spread(...)]` attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("spread") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("get") {
                    result.get = true;
                } else if meta.path.is_ident("set") {
                    result.set = true;
                } else if meta.path.is_ident("skip") {
                    result.skip = true;
                } else if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.name = Some(value.value());
                } else if meta.path.is_ident("set_with") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.set_with = Some(value.parse()?);
                } else {
                    return Err(meta.error(format!(
                        "unknown spread field attribute: {}",
                        meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                    )));
                }
                Ok(())
            })?;

            if result.skip && result.is_explicit() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`skip` cannot be combined with `get`, `set` or `set_with`",
                ));
            }
        }

        Ok(result)
    }
}
