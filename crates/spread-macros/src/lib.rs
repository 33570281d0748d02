//! Spread Proc Macros
//!
//! This crate provides `#[derive(Reflect)]`, which generates the property
//! table a type needs to take part in spreading.
//!
//! # Example
//!
//! ```ignore
//! use spread_macros::Reflect;
//!
//! #[derive(Default, Reflect)]
//! pub struct Person {
//!     pub name: Option<String>,
//!     pub age: i32,
//! }
//! ```

use proc_macro::TokenStream;

mod attrs;
mod derive_reflect;

/// Derive `spread_core::Introspect` (and with it `Reflect`) for a struct.
///
/// Only structs with named fields, or unit structs, are supported. Every
/// field type must implement `spread_core::Property`.
///
/// # Field selection
///
/// `pub` fields are exposed readable and writable. Other fields are hidden
/// unless annotated with `get`, `set` or `set_with`; renaming a hidden field
/// is an error.
///
/// # Type Attributes
///
/// - `#[spread(name = "...")]` - Name used in diagnostics
/// - `#[spread(value)]` - Also implement `Property`, so the type can be the
///   declared type of another type's property (requires `Clone`)
///
/// # Field Attributes
///
/// - `#[spread(get)]` - Readable only
/// - `#[spread(set)]` - Writable only
/// - `#[spread(get, set)]` - Readable and writable
/// - `#[spread(name = "...")]` - Override property name
/// - `#[spread(skip)]` - Never exposed
/// - `#[spread(set_with = "path")]` - Write through
///   `fn(&mut Self, FieldTy) -> Result<(), E>` where `E: Display`; an `Err`
///   is reported as an assignment failure. Implies `set`.
///
/// # Example
///
/// ```ignore
/// #[derive(Default, Reflect)]
/// #[spread(name = "Account")]
/// pub struct Account {
///     pub owner: Option<String>,
///
///     #[spread(get)]
///     pub id: u64,
///
///     #[spread(get, set_with = "Self::set_balance", name = "balance")]
///     cents: i64,
///
///     #[spread(skip)]
///     pub cache_key: u64,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(spread))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    derive_reflect::derive_reflect_impl(input)
}
