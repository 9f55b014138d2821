//! Rust source parser for extracting models with `#[derive(Surface)]`.
//!
//! Structs, enums and unions are collected from the top level and from
//! inline modules. Shape checks are left to the engine so that the CLI
//! reports the same diagnostics as the derive.

use crate::error::{CliError, CliResult, ParseError};
use crate::scanner::SourceFile;
use std::path::{Path, PathBuf};
use syn::{Attribute, Data, DataEnum, DataStruct, DataUnion, DeriveInput, Item};

/// A model declaration found in a source file.
#[derive(Debug, Clone)]
pub struct ParsedModel {
    /// Rust identifier of the type.
    pub name: String,

    pub derive_input: DeriveInput,

    pub location: SourceLocation,
}

/// Source location for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: PathBuf,

    /// 1-indexed
    pub line: usize,

    /// 1-indexed
    pub column: usize,
}

/// Parser for Rust source files.
#[derive(Debug, Default)]
pub struct RustParser;

impl RustParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_file(&self, source: &SourceFile) -> CliResult<Vec<ParsedModel>> {
        self.parse_source(&source.content, &source.relative_path)
    }

    /// Parse source code and extract models with `#[derive(Surface)]`.
    pub fn parse_source(&self, content: &str, file_path: &Path) -> CliResult<Vec<ParsedModel>> {
        let syntax = syn::parse_file(content).map_err(|e| {
            let start = e.span().start();
            ParseError::syntax(file_path.to_path_buf(), start.line, start.column + 1, e.to_string())
        })?;

        let mut models = Vec::new();
        self.collect(&syntax.items, file_path, &mut models);

        tracing::trace!(file = %file_path.display(), models = models.len(), "parsed source");
        Ok(models)
    }

    /// Parse multiple source files, collecting errors.
    pub fn parse_files(&self, sources: &[SourceFile]) -> (Vec<ParsedModel>, Vec<ParseError>) {
        let mut models = Vec::new();
        let mut errors = Vec::new();

        for source in sources {
            match self.parse_file(source) {
                Ok(parsed) => models.extend(parsed),
                Err(CliError::Parse(e)) => errors.push(e),
                Err(e) => tracing::warn!(file = %source.path.display(), error = %e, "skipping file"),
            }
        }

        (models, errors)
    }

    fn collect(&self, items: &[Item], file_path: &Path, models: &mut Vec<ParsedModel>) {
        for item in items {
            match item {
                Item::Mod(module) => {
                    if let Some((_, nested)) = &module.content {
                        self.collect(nested, file_path, models);
                    }
                }
                _ => {
                    if let Some(model) = Self::extract_model(item, file_path) {
                        models.push(model);
                    }
                }
            }
        }
    }

    fn extract_model(item: &Item, file_path: &Path) -> Option<ParsedModel> {
        let (attrs, vis, ident, generics, data) = match item {
            Item::Struct(s) => (
                &s.attrs,
                &s.vis,
                &s.ident,
                &s.generics,
                Data::Struct(DataStruct {
                    struct_token: s.struct_token,
                    fields: s.fields.clone(),
                    semi_token: s.semi_token,
                }),
            ),
            Item::Enum(e) => (
                &e.attrs,
                &e.vis,
                &e.ident,
                &e.generics,
                Data::Enum(DataEnum {
                    enum_token: e.enum_token,
                    brace_token: e.brace_token,
                    variants: e.variants.clone(),
                }),
            ),
            Item::Union(u) => (
                &u.attrs,
                &u.vis,
                &u.ident,
                &u.generics,
                Data::Union(DataUnion {
                    union_token: u.union_token,
                    fields: u.fields.clone(),
                }),
            ),
            _ => return None,
        };

        if !has_surface_derive(attrs) {
            return None;
        }

        let start = ident.span().start();
        Some(ParsedModel {
            name: ident.to_string(),
            derive_input: DeriveInput {
                attrs: attrs.clone(),
                vis: vis.clone(),
                ident: ident.clone(),
                generics: generics.clone(),
                data,
            },
            location: SourceLocation {
                file: file_path.to_path_buf(),
                line: start.line,
                column: start.column + 1,
            },
        })
    }
}

/// Whether attributes contain `#[derive(Surface)]` or `#[derive(formgen::Surface)]`.
fn has_surface_derive(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .filter_map(|attr| {
            attr.parse_args_with(
                syn::punctuated::Punctuated::<syn::Path, syn::Token![,]>::parse_terminated,
            )
            .ok()
        })
        .flatten()
        .any(|path| path.segments.last().is_some_and(|s| s.ident == "Surface"))
}
