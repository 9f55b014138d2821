//! Attribute parsing using darling for `#[surface(...)]`.
//!
//! ```rust,ignore
//! #[derive(Surface)]
//! #[surface(kinds(form, view), style = "labeled", rename_all = "camelCase")]
//! pub struct Prefs {
//!     #[surface(visible, modifiable, section = "General", default = "0.5")]
//!     volume: f64,
//! }
//! ```

use darling::util::{Override, PathList};
use darling::{FromDeriveInput, FromField, FromMeta};
use syn::ext::IdentExt;
use syn::{Ident, Type, Visibility};

use crate::error::{Error, Result};
use crate::ir::{LabelStyle, MemberAttrs, SurfaceKind};

/// Container-level attributes parsed from `#[surface(...)]` on the type.
///
/// No shape restriction is placed here; enums and unions are reported as
/// unsupported targets by the engine.
#[derive(Debug, Clone, FromDeriveInput)]
#[darling(attributes(surface))]
pub struct ContainerAttrs {
    pub ident: Ident,

    pub vis: Visibility,

    /// Requested surface kinds, e.g. `kinds(form, view)`
    #[darling(default)]
    pub kinds: Option<PathList>,

    /// `"labeled"` or `"unlabeled"`
    #[darling(default)]
    pub style: Option<String>,

    /// Rename all members using a case convention
    #[darling(default)]
    pub rename_all: Option<RenameRule>,
}

impl ContainerAttrs {
    /// The model name: the type's identifier, without any `r#` prefix.
    ///
    /// There is no container-level `rename`; nested members reference a
    /// model's surfaces by its type name, which must match.
    pub fn model_name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Requested kinds. A missing `kinds(...)` yields an empty list.
    pub fn surface_kinds(&self) -> Result<Vec<SurfaceKind>> {
        let Some(paths) = &self.kinds else {
            return Ok(Vec::new());
        };
        paths
            .iter()
            .map(|path| {
                let ident = path.get_ident().ok_or_else(|| {
                    Error::malformed_arguments("surface kinds must be plain identifiers")
                })?;
                ident.to_string().parse::<SurfaceKind>()
            })
            .collect()
    }

    /// Label style, defaulting to unlabeled.
    pub fn label_style(&self) -> Result<LabelStyle> {
        match &self.style {
            Some(style) => style.parse(),
            None => Ok(LabelStyle::default()),
        }
    }
}

/// Field-level attributes parsed from `#[surface(...)]` on struct fields.
#[derive(Debug, Clone, FromField)]
#[darling(attributes(surface))]
pub struct FieldAttrs {
    /// Field identifier (None for tuple struct fields)
    pub ident: Option<Ident>,

    pub ty: Type,

    /// Show the member on generated surfaces
    #[darling(default)]
    pub visible: bool,

    /// Bind controls two-way
    #[darling(default)]
    pub modifiable: bool,

    /// Mask text values
    #[darling(default)]
    pub secure: bool,

    /// Open a section: `section` or `section = "Title"`
    #[darling(default)]
    pub section: Option<Override<String>>,

    /// Initializer expression, used as the persisted default
    #[darling(default)]
    pub default: Option<String>,

    /// Rename this member
    #[darling(default)]
    pub rename: Option<String>,
}

impl FieldAttrs {
    /// Capability flags of the member.
    pub fn member_attrs(&self) -> MemberAttrs {
        let mut attrs = MemberAttrs::empty();
        attrs.set(MemberAttrs::VISIBLE, self.visible);
        attrs.set(MemberAttrs::MODIFIABLE, self.modifiable);
        attrs.set(MemberAttrs::SECURE, self.secure);
        attrs.set(MemberAttrs::SECTION, self.section.is_some());
        attrs
    }

    /// Explicit section title, if any.
    pub fn section_title(&self) -> Option<String> {
        match &self.section {
            Some(Override::Explicit(title)) => Some(title.clone()),
            _ => None,
        }
    }

    /// Get the member name for this field (renamed or original).
    pub fn member_name(&self, rename_rule: Option<RenameRule>) -> Option<String> {
        if let Some(ref name) = self.rename {
            return Some(name.clone());
        }

        let name = self.ident.as_ref()?.unraw().to_string();
        Some(match rename_rule {
            Some(rule) => rule.apply(&name),
            None => name,
        })
    }
}

/// Rename rule for member name transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromMeta)]
pub enum RenameRule {
    /// camelCase
    #[darling(rename = "camelCase")]
    CamelCase,

    /// snake_case
    #[darling(rename = "snake_case")]
    SnakeCase,

    /// PascalCase
    #[darling(rename = "PascalCase")]
    PascalCase,

    /// SCREAMING_SNAKE_CASE
    #[darling(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnakeCase,
}

impl RenameRule {
    /// Apply the rename rule to a string.
    pub fn apply(&self, name: &str) -> String {
        use convert_case::{Case, Casing};

        match self {
            RenameRule::CamelCase => name.to_case(Case::Camel),
            RenameRule::SnakeCase => name.to_case(Case::Snake),
            RenameRule::PascalCase => name.to_case(Case::Pascal),
            RenameRule::ScreamingSnakeCase => name.to_case(Case::UpperSnake),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn container(input: syn::DeriveInput) -> ContainerAttrs {
        ContainerAttrs::from_derive_input(&input).unwrap()
    }

    #[test]
    fn test_container_kinds_and_style() {
        let attrs = container(parse_quote! {
            #[surface(kinds(view, form), style = "labeled")]
            pub struct Credentials { username: String }
        });
        assert_eq!(
            attrs.surface_kinds().unwrap(),
            vec![SurfaceKind::View, SurfaceKind::Form]
        );
        assert_eq!(attrs.label_style().unwrap(), LabelStyle::Labeled);
        assert_eq!(attrs.model_name(), "Credentials");
    }

    #[test]
    fn test_container_missing_kinds_is_empty() {
        let attrs = container(parse_quote! {
            struct Plain { a: bool }
        });
        assert!(attrs.surface_kinds().unwrap().is_empty());
        assert_eq!(attrs.label_style().unwrap(), LabelStyle::Unlabeled);
    }

    #[test]
    fn test_container_unknown_kind_and_style() {
        let attrs = container(parse_quote! {
            #[surface(kinds(sheet), style = "boxed")]
            struct Odd { a: bool }
        });
        assert!(matches!(
            attrs.surface_kinds(),
            Err(Error::MalformedArguments(_))
        ));
        assert!(matches!(
            attrs.label_style(),
            Err(Error::MalformedArguments(_))
        ));
    }

    #[test]
    fn test_container_rename_is_not_accepted() {
        let input: syn::DeriveInput = parse_quote! {
            #[surface(kinds(form), rename = "Account")]
            struct AccountModel { a: bool }
        };
        assert!(ContainerAttrs::from_derive_input(&input).is_err());

        let attrs = container(parse_quote! {
            #[surface(kinds(form))]
            struct r#Account { a: bool }
        });
        assert_eq!(attrs.model_name(), "Account");
    }

    #[test]
    fn test_kebab_case_is_not_a_rule() {
        let input: syn::DeriveInput = parse_quote! {
            #[surface(kinds(form), rename_all = "kebab-case")]
            struct Account { user_name: String }
        };
        assert!(ContainerAttrs::from_derive_input(&input).is_err());
    }

    #[test]
    fn test_field_flags_and_section() {
        let field: syn::Field = parse_quote! {
            #[surface(visible, modifiable, section = "General", default = "0.5")]
            volume: f64
        };
        let attrs = FieldAttrs::from_field(&field).unwrap();
        let flags = attrs.member_attrs();
        assert!(flags.contains(MemberAttrs::VISIBLE | MemberAttrs::MODIFIABLE | MemberAttrs::SECTION));
        assert!(!flags.contains(MemberAttrs::SECURE));
        assert_eq!(attrs.section_title().as_deref(), Some("General"));
        assert_eq!(attrs.default.as_deref(), Some("0.5"));
    }

    #[test]
    fn test_field_untitled_section() {
        let field: syn::Field = parse_quote! {
            #[surface(visible, section)]
            muted: bool
        };
        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.member_attrs().contains(MemberAttrs::SECTION));
        assert_eq!(attrs.section_title(), None);
    }

    #[test]
    fn test_field_without_attributes_is_hidden() {
        let field: syn::Field = parse_quote! { internal_id: u64 };
        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.member_attrs().is_empty());
    }

    #[test]
    fn test_field_unknown_attribute_fails() {
        let field: syn::Field = parse_quote! {
            #[surface(visible, hidden)]
            a: bool
        };
        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_member_name_priority() {
        let field: syn::Field = parse_quote! {
            #[surface(rename = "pin")]
            pass_code: String
        };
        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(
            attrs.member_name(Some(RenameRule::CamelCase)).as_deref(),
            Some("pin")
        );

        let field: syn::Field = parse_quote! { pass_code: String };
        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(
            attrs.member_name(Some(RenameRule::CamelCase)).as_deref(),
            Some("passCode")
        );
        assert_eq!(attrs.member_name(None).as_deref(), Some("pass_code"));
    }

    #[test]
    fn test_rename_rules() {
        assert_eq!(RenameRule::CamelCase.apply("user_name"), "userName");
        assert_eq!(RenameRule::SnakeCase.apply("userName"), "user_name");
        assert_eq!(RenameRule::PascalCase.apply("user_name"), "UserName");
        assert_eq!(RenameRule::ScreamingSnakeCase.apply("userName"), "USER_NAME");
    }
}
