//! Declaration parsing.
//!
//! Turns a `DeriveInput` into the model IR and the invocation arguments. The
//! parser never rejects a declaration for its shape; it records the shape in
//! [`ModelSpec::target`] and leaves the decision to the engine. Arguments,
//! names and members are only checked for record shapes, so an enum or tuple
//! struct always reports the unsupported target first.

use darling::{FromDeriveInput, FromField};
use syn::{Attribute, Data, DataStruct, DeriveInput, Fields, FieldsNamed, Lit, Meta, Visibility};

use crate::error::{Error, Result};
use crate::ir::{AccessLevel, DeclarationKind, GenerationArguments, MemberSpec, ModelSpec};
use crate::parser::attributes::{ContainerAttrs, FieldAttrs, RenameRule};
use crate::parser::identifier::check_swift_identifier;
use crate::parser::type_parser::TypeParser;

/// Parses annotated declarations into [`ModelSpec`] and [`GenerationArguments`].
pub struct ModelParser;

impl ModelParser {
    /// Parse a declaration.
    pub fn parse(input: &DeriveInput) -> Result<(ModelSpec, GenerationArguments)> {
        let container = ContainerAttrs::from_derive_input(input)
            .map_err(|e| Error::malformed_arguments(e.to_string()))?;

        let name = container.model_name();
        let target = declaration_kind(&input.data);

        let args = if target.is_record() {
            check_swift_identifier(&name).map_err(|reason| {
                Error::invalid_member(format!("type name `{name}` {reason}"))
            })?;
            GenerationArguments::new(container.surface_kinds()?, container.label_style()?)
        } else {
            GenerationArguments::default()
        };

        let members = match &input.data {
            Data::Struct(DataStruct {
                fields: Fields::Named(fields),
                ..
            }) => Self::parse_members(fields, container.rename_all)?,
            _ => Vec::new(),
        };

        let mut model = ModelSpec::new(name, access_level(&container.vis))
            .with_target(target)
            .with_members(members);
        model.description = extract_doc_comments(&input.attrs);

        tracing::trace!(
            model = %model.name,
            target = %model.target,
            members = model.members.len(),
            "parsed declaration"
        );

        Ok((model, args))
    }

    fn parse_members(
        fields: &FieldsNamed,
        rename_all: Option<RenameRule>,
    ) -> Result<Vec<MemberSpec>> {
        let mut members = Vec::with_capacity(fields.named.len());

        for field in &fields.named {
            let field_name = field
                .ident
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();

            let attrs = FieldAttrs::from_field(field)
                .map_err(|e| Error::invalid_member(format!("`{field_name}`: {e}")))?;

            let name = attrs
                .member_name(rename_all)
                .ok_or_else(|| Error::invalid_member("field has no identifier"))?;

            let type_name = TypeParser::type_name(&attrs.ty);
            if attrs.visible {
                check_swift_identifier(&name).map_err(|reason| {
                    Error::invalid_member(format!("`{field_name}`: generated name `{name}` {reason}"))
                })?;
                if type_name.is_none() {
                    return Err(Error::invalid_member(format!(
                        "`{field_name}`: visible members need a named type, found `{}`",
                        TypeParser::token_text(&attrs.ty)
                    )));
                }
            }

            let flags = attrs.member_attrs();
            let type_name = type_name.unwrap_or_else(|| TypeParser::token_text(&attrs.ty));
            let mut member = MemberSpec::new(name, type_name, flags);
            member.rust_name = field_name;
            member.section_title = attrs.section_title();
            member.initializer = attrs.default.clone();

            members.push(member);
        }

        Ok(members)
    }
}

fn declaration_kind(data: &Data) -> DeclarationKind {
    match data {
        Data::Struct(data) => match data.fields {
            Fields::Named(_) => DeclarationKind::Struct,
            Fields::Unnamed(_) => DeclarationKind::TupleStruct,
            Fields::Unit => DeclarationKind::UnitStruct,
        },
        Data::Enum(_) => DeclarationKind::Enum,
        Data::Union(_) => DeclarationKind::Union,
    }
}

/// Map Rust visibility onto the generated access level.
pub fn access_level(vis: &Visibility) -> AccessLevel {
    match vis {
        Visibility::Public(_) => AccessLevel::Public,
        Visibility::Restricted(_) => AccessLevel::Internal,
        Visibility::Inherited => AccessLevel::FilePrivate,
    }
}

/// Extract doc comments from attributes.
///
/// Combines all `///` lines into a single string, trimming each line.
pub fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let doc_lines: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(expr_lit) = &meta.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value());
                    }
                }
            }
            None
        })
        .collect();

    let description = doc_lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    if description.is_empty() {
        None
    } else {
        Some(description)
    }
}
