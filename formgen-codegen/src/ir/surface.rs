//! Assembled surfaces and generated artifacts.

use serde::{Deserialize, Serialize};

use super::arguments::SurfaceKind;
use super::node::Node;
use super::types::{AccessLevel, MemberType};

/// A constructor input of a surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Input {
    /// A two-way binding to a model instance.
    Binding { name: String, model: String },
    /// A model value.
    Value { name: String, model: String },
    /// The caller-supplied number formatter.
    Formatter,
}

impl Input {
    pub fn name(&self) -> &str {
        match self {
            Input::Binding { name, .. } | Input::Value { name, .. } => name,
            Input::Formatter => "formatter",
        }
    }
}

/// Default value of a persisted member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    /// Initializer expression taken from the declaration.
    Initializer(String),
    /// The zero value of the member's type.
    TypeDefault,
}

/// One persisted member of a settings surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageDecl {
    /// Storage key, `<Model>.<member>`
    pub key: String,
    pub name: String,
    pub ty: MemberType,
    pub default: DefaultValue,
}

/// A fully assembled surface, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceDecl {
    pub kind: SurfaceKind,

    /// Artifact type name, e.g. `CredentialsForm`
    pub type_name: String,

    pub model_name: String,

    pub access: AccessLevel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Constructor inputs, in parameter order
    pub inputs: Vec<Input>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub storage: Vec<StorageDecl>,

    pub body: Vec<Node>,

    /// Nested model names this surface references
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<String>,
}

/// Rendered output for one requested kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub kind: SurfaceKind,

    /// Artifact type name, e.g. `CredentialsForm`
    pub type_name: String,

    /// Source text
    pub text: String,

    /// Nested model names whose artifacts this one references
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<String>,
}

impl GeneratedArtifact {
    /// Lowercase kind name (`form`, `settings`, `view`).
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}
