//! Impl block generation for the `Surface` trait.
//!
//! Generated sources are embedded as string literals so the runtime can hand
//! them out without re-running the engine.

use formgen_codegen::ir::{GeneratedArtifact, ModelSpec, SurfaceKind};
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// Builds `impl ::formgen::Surface for Type`.
pub struct ImplBlockGenerator<'a> {
    input: &'a DeriveInput,
}

impl<'a> ImplBlockGenerator<'a> {
    pub fn new(input: &'a DeriveInput) -> Self {
        Self { input }
    }

    /// Generate the impl block for a model and its artifacts.
    pub fn generate(&self, model: &ModelSpec, artifacts: &[GeneratedArtifact]) -> TokenStream {
        let name = &self.input.ident;
        let (impl_generics, ty_generics, where_clause) = self.input.generics.split_for_impl();
        let surface_name = &model.name;

        let arms = SurfaceKind::ALL.iter().map(|&kind| {
            let path = kind_path(kind);
            match artifacts.iter().find(|a| a.kind == kind) {
                Some(artifact) => {
                    let text = &artifact.text;
                    quote! { #path => ::core::option::Option::Some(#text), }
                }
                None => quote! { #path => ::core::option::Option::None, },
            }
        });

        let nested = self.generate_nested(artifacts);

        quote! {
            impl #impl_generics ::formgen::Surface for #name #ty_generics #where_clause {
                fn surface_name() -> &'static str {
                    #surface_name
                }

                fn surface_source(kind: ::formgen::SurfaceKind) -> ::core::option::Option<&'static str> {
                    match kind {
                        #(#arms)*
                    }
                }

                #nested
            }
        }
    }

    /// `nested_surfaces()`, only when some artifact references another model.
    fn generate_nested(&self, artifacts: &[GeneratedArtifact]) -> TokenStream {
        let mut names: Vec<&str> = Vec::new();
        for name in artifacts.iter().flat_map(|a| a.nested.iter()) {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }

        if names.is_empty() {
            return quote! {};
        }

        quote! {
            fn nested_surfaces() -> &'static [&'static str] {
                &[#(#names),*]
            }
        }
    }
}

fn kind_path(kind: SurfaceKind) -> TokenStream {
    match kind {
        SurfaceKind::Form => quote! { ::formgen::SurfaceKind::Form },
        SurfaceKind::Settings => quote! { ::formgen::SurfaceKind::Settings },
        SurfaceKind::View => quote! { ::formgen::SurfaceKind::View },
    }
}
