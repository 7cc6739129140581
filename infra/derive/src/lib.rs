#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the tradepost crates.
//!
//! The only macro today is [`macro@tpost_error`], which turns a plain enum into a
//! `thiserror` error with context support. Every error type in the workspace
//! (`EnvelopeError`, `UserError`, `LoggerError`, ...) is declared through it so
//! that failures carry the same shape everywhere.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(...)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source error.
/// * **Standard Conversions**: Implements `From<Source>` for variants holding a `source`
///   field (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields. Tuple and unit variants are rejected.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. Variants wrapping a source error must also declare `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[tpost_derive::tpost_error]
/// pub enum EnvelopeError {
///     #[error("Malformed envelope{}: {message}", format_context(.context))]
///     MalformedEnvelope { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Serialization error{}: {source}", format_context(.context))]
///     Serialization { source: postcard::Error, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(bytes: &[u8]) -> Result<Body, EnvelopeError> {
///     postcard::from_bytes(bytes).context("Reading envelope body")
/// }
/// ```
#[proc_macro_attribute]
pub fn tpost_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
