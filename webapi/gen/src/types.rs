//! The closed table mapping schema type tags to Rust-side types.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Rust-side representation of a schema parameter type.
///
/// The table is closed: a tag outside it maps to `None` in
/// [`ParamType::from_tag`] and the parameter is skipped with a warning
/// rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Text,
    Int32,
    Bool,
    Float32,
    Bytes,
    Uint32,
    Uint64,
}

impl ParamType {
    /// Looks a schema type tag up in the table.
    ///
    /// The literal `{message}` tag is a protobuf payload the service
    /// accepts as an opaque string; other brace-wrapped tags stay unmapped.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" | "{message}" => Some(Self::Text),
            "int32" => Some(Self::Int32),
            "bool" => Some(Self::Bool),
            "float" => Some(Self::Float32),
            "rawbinary" => Some(Self::Bytes),
            "uint32" => Some(Self::Uint32),
            "uint64" => Some(Self::Uint64),
            _ => None,
        }
    }

    /// Tokens for the descriptor field type.
    pub fn rust_type(&self) -> TokenStream {
        match self {
            Self::Text => quote! { String },
            Self::Int32 => quote! { i32 },
            Self::Bool => quote! { bool },
            Self::Float32 => quote! { f32 },
            Self::Bytes => quote! { Vec<u8> },
            Self::Uint32 => quote! { u32 },
            Self::Uint64 => quote! { u64 },
        }
    }

    /// Statement encoding a field into the runtime `Parameters` set, using
    /// the typed adder matching this type.
    pub fn encode_stmt(&self, wire_name: &str, field: &syn::Ident) -> TokenStream {
        let adder = format_ident!("{}", self.adder_name());
        if self.passes_by_ref() {
            quote! { params.#adder(#wire_name, &self.#field); }
        } else {
            quote! { params.#adder(#wire_name, self.#field); }
        }
    }

    /// Condition under which an optional field of this type is considered
    /// set and therefore transmitted. Unset is the `Default` value.
    pub fn present_condition(&self, field: &syn::Ident) -> TokenStream {
        match self {
            Self::Text | Self::Bytes => quote! { !self.#field.is_empty() },
            Self::Int32 | Self::Uint32 | Self::Uint64 => quote! { self.#field != 0 },
            Self::Float32 => quote! { self.#field != 0.0 },
            Self::Bool => quote! { self.#field },
        }
    }

    fn adder_name(&self) -> &'static str {
        match self {
            Self::Text => "add_string",
            Self::Int32 => "add_i32",
            Self::Bool => "add_bool",
            Self::Float32 => "add_f32",
            Self::Bytes => "add_bytes",
            Self::Uint32 => "add_u32",
            Self::Uint64 => "add_u64",
        }
    }

    fn passes_by_ref(&self) -> bool {
        matches!(self, Self::Text | Self::Bytes)
    }
}
