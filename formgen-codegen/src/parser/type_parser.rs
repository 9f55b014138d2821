//! Member type resolution.
//!
//! Reduces a `syn::Type` to the type-name token the taxonomy classifies:
//! references and smart pointers (`Box`, `Rc`, `Arc`) are unwrapped, paths
//! keep their last segment.

use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type};

use crate::ir::{MemberAttrs, MemberType};

const TRANSPARENT_WRAPPERS: &[&str] = &["Box", "Rc", "Arc"];

/// Resolves member types to type-name tokens.
pub struct TypeParser;

impl TypeParser {
    /// The type-name token for a member type.
    ///
    /// `None` for types with no path to name them (tuples, arrays, function
    /// pointers, qualified paths); those cannot be given a control.
    pub fn type_name(ty: &Type) -> Option<String> {
        match ty {
            Type::Reference(reference) => Self::type_name(&reference.elem),
            Type::Paren(paren) => Self::type_name(&paren.elem),
            Type::Group(group) => Self::type_name(&group.elem),
            Type::Path(type_path) if type_path.qself.is_none() => {
                let segment = type_path.path.segments.last()?;
                let ident = segment.ident.to_string();
                if TRANSPARENT_WRAPPERS.contains(&ident.as_str()) {
                    if let Some(inner) = Self::single_type_argument(&segment.arguments) {
                        return Self::type_name(inner);
                    }
                }
                Some(ident)
            }
            _ => None,
        }
    }

    /// Token text of a type with whitespace removed, e.g. `(u8,u8)`.
    pub fn token_text(ty: &Type) -> String {
        ty.to_token_stream()
            .to_string()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    /// Classify a member type under the given attributes.
    ///
    /// Types without a name classify as nested under their token text.
    pub fn classify(ty: &Type, attrs: MemberAttrs) -> MemberType {
        let name = Self::type_name(ty).unwrap_or_else(|| Self::token_text(ty));
        MemberType::classify(&name, attrs.contains(MemberAttrs::SECURE))
    }

    fn single_type_argument(arguments: &PathArguments) -> Option<&Type> {
        let PathArguments::AngleBracketed(args) = arguments else {
            return None;
        };
        let mut types = args.args.iter().filter_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        });
        match (types.next(), types.next()) {
            (Some(ty), None) => Some(ty),
            _ => None,
        }
    }
}
