//! # formgen-macros
//!
//! Procedural macros for generating SwiftUI surfaces from Rust structs.
//!
//! This crate provides the `#[derive(Surface)]` macro. Use it through the
//! `formgen` crate with the `derive` feature.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formgen::Surface;
//!
//! #[derive(Surface)]
//! #[surface(kinds(form, view))]
//! pub struct Credentials {
//!     #[surface(visible, modifiable)]
//!     username: String,
//!
//!     #[surface(visible, modifiable, secure)]
//!     password: String,
//! }
//! ```
//!
//! ## Attributes
//!
//! ### Container Attributes (on the struct)
//!
//! - `#[surface(kinds(form, settings, view))]` - Surfaces to generate (required)
//! - `#[surface(style = "labeled")]` - Wrap every control in a labeled row
//! - `#[surface(rename_all = "camelCase")]` - Rename all members
//!
//! ### Field Attributes
//!
//! - `#[surface(visible)]` - Show the member (members are hidden otherwise)
//! - `#[surface(modifiable)]` - Bind controls two-way
//! - `#[surface(secure)]` - Mask text
//! - `#[surface(section)]` / `#[surface(section = "Title")]` - Start a section
//! - `#[surface(default = "expr")]` - Persisted default for settings
//! - `#[surface(rename = "newName")]` - Rename this member
//!
//! Generated surfaces are always named after the type, so a parent can name
//! the surfaces of the models it nests. Visible member names must be valid
//! Swift identifiers and visible members need a named type.
use proc_macro::TokenStream;
use syn::DeriveInput;

mod codegen;

use codegen::impl_block::ImplBlockGenerator;
use formgen_codegen::{Engine, ModelParser};

/// Derive macro generating SwiftUI surfaces for a struct.
#[proc_macro_derive(Surface, attributes(surface))]
pub fn derive_surface(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_surface_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn derive_surface_impl(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let (model, args) = ModelParser::parse(input).map_err(|e| e.to_syn_error(&input.ident))?;

    let artifacts = Engine::new()
        .generate(&model, &args)
        .map_err(|e| e.to_syn_error(&input.ident))?;

    Ok(ImplBlockGenerator::new(input).generate(&model, &artifacts))
}
