//! Model and member IR.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::types::{AccessLevel, DeclarationKind, MemberType};

bitflags! {
    /// Per-member capability flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct MemberAttrs: u8 {
        /// The member appears on generated surfaces.
        const VISIBLE = 1;
        /// Controls for the member write back.
        const MODIFIABLE = 1 << 1;
        /// Text is masked.
        const SECURE = 1 << 2;
        /// The member opens a new section.
        const SECTION = 1 << 3;
    }
}

/// Structural description of one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSpec {
    /// Name used in generated text (may be renamed)
    pub name: String,

    /// Original Rust field name
    pub rust_name: String,

    /// Type-name token as written in the declaration
    pub type_name: String,

    /// Widget category derived from `type_name`
    pub ty: MemberType,

    pub attrs: MemberAttrs,

    /// Only meaningful when `attrs` contains `SECTION`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_title: Option<String>,

    /// Initializer expression text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<String>,
}

impl MemberSpec {
    /// Create a member, classifying `type_name` against the taxonomy.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, attrs: MemberAttrs) -> Self {
        let name = name.into();
        let type_name = type_name.into();
        let ty = MemberType::classify(&type_name, attrs.contains(MemberAttrs::SECURE));
        Self {
            rust_name: name.clone(),
            name,
            type_name,
            ty,
            attrs,
            section_title: None,
            initializer: None,
        }
    }

    /// Override the classified type.
    pub fn with_type(mut self, ty: MemberType) -> Self {
        self.ty = ty;
        self
    }

    /// Set the generated name, keeping the Rust name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mark the member as opening a section, optionally titled.
    pub fn with_section(mut self, title: Option<String>) -> Self {
        self.attrs |= MemberAttrs::SECTION;
        self.section_title = title;
        self
    }

    /// Set the initializer expression.
    pub fn with_initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }

    pub fn is_visible(&self) -> bool {
        self.attrs.contains(MemberAttrs::VISIBLE)
    }

    pub fn is_modifiable(&self) -> bool {
        self.attrs.contains(MemberAttrs::MODIFIABLE)
    }

    pub fn starts_section(&self) -> bool {
        self.attrs.contains(MemberAttrs::SECTION)
    }

    /// Section title, ignored unless the member starts a section.
    pub fn section_title(&self) -> Option<&str> {
        if self.starts_section() {
            self.section_title.as_deref()
        } else {
            None
        }
    }
}

/// Structural description of a model declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Rust type name. Artifact names and nested references both derive
    /// from it, so a parent always names the surfaces its children get.
    pub name: String,

    pub access: AccessLevel,

    /// Declaration the model was read from
    #[serde(default)]
    pub target: DeclarationKind,

    /// Doc comment text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Members in declaration order
    pub members: Vec<MemberSpec>,
}

impl ModelSpec {
    /// Create a struct model with no members.
    pub fn new(name: impl Into<String>, access: AccessLevel) -> Self {
        Self {
            name: name.into(),
            access,
            target: DeclarationKind::Struct,
            description: None,
            members: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: DeclarationKind) -> Self {
        self.target = target;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_members(mut self, members: Vec<MemberSpec>) -> Self {
        self.members = members;
        self
    }

    /// Append a member.
    pub fn push(&mut self, member: MemberSpec) {
        self.members.push(member);
    }

    /// Visible members, in declaration order.
    pub fn visible_members(&self) -> impl Iterator<Item = &MemberSpec> {
        self.members.iter().filter(|m| m.is_visible())
    }

    /// Distinct nested type names referenced by visible members, first use first.
    pub fn nested_types(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self.visible_members().filter_map(|m| m.ty.nested_name()) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }
}
