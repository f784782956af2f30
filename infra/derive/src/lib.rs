#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the presenter layer.
//! This crate generates the boilerplate that ties a presenter to its model, gives plain
//! structs a canonical [`Model`] serialization, and wires error enums into `thiserror`.
//!
//! ## Usage
//! The generated code refers to `::vitrine_kernel`, which re-exports every macro here:
//! ```toml
//! [dependencies]
//! vitrine-kernel = { path = "../crates/shared/kernel" }
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but `tests/ui` holds compiled copies.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro to declare a presenter for a model type.
///
/// The annotated struct must be a unit struct (or have empty braces). It is rewritten into
/// a wrapper holding `Arc<Model>`, which keeps the identity of the model it was built from.
///
/// # Generated Items
///
/// * `Deref<Target = Model>`: every field and method the presenter does not declare itself
///   resolves on the model, returning the model's own values and errors untouched.
/// * `From<Arc<Model>>` and `From<Model>`.
/// * `vitrine_kernel::ModelWrapper`, the construction hook behind `make`, `collection`
///   and `pagination`.
/// * `serde::Serialize`, serializing whatever `Presenter::to_array` returns.
/// * `Debug` and `Clone` unless already derived.
/// * An empty `impl Presenter` (default `to_array`) unless `impl_presenter = false`.
///
/// # Arguments
///
/// * `model = Path` - The wrapped model type. Required.
/// * `impl_presenter = false` - Skip the empty `Presenter` impl so the author can write one
///   that overrides `to_array`.
///
/// # Example
///
/// ```rust,ignore
/// use vitrine_kernel::prelude::*;
///
/// #[presenter(model = User, impl_presenter = false)]
/// pub struct UserPresenter;
///
/// impl Presenter for UserPresenter {
///     fn to_array(&self) -> Record {
///         let mut record = Record::new();
///         record.insert("fullname".to_owned(), self.fullname().into());
///         record.insert("email".to_owned(), self.email.clone().into());
///         record
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn presenter(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::presenter::expand_presenter(args.into(), input).into()
}

/// Derives `Model::to_array` for a struct with named fields.
///
/// Fields are emitted in declaration order through `serde_json::Value::from`, so every
/// field type must be `Clone` and convertible into a JSON value (strings, numbers, bools,
/// `Option`s and `Vec`s of those).
///
/// # Field Attributes
///
/// * `#[model(rename = "key")]` - Use `key` instead of the field name.
/// * `#[model(skip)]` - Leave the field out of the record.
///
/// # Example
///
/// ```rust,ignore
/// use vitrine_kernel::Model;
///
/// #[derive(Debug, Model)]
/// pub struct User {
///     pub firstname: String,
///     pub lastname: String,
///     #[model(rename = "mail")]
///     pub email: String,
///     #[model(skip)]
///     pub password_hash: String,
/// }
/// ```
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::model::expand_derive(input).into()
}

/// A high-level attribute macro for defining crate-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Type Aliasing**: Creates `Result<T, E = ErrorName>` next to the enum.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` if an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]`, and must also carry a `context` field.
/// 4. Tuple or unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[vitrine_derive::vitrine_error]
/// pub enum LoaderError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn vitrine_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
