//! Surface kinds and artifacts.

use std::fmt;

/// Kind of generated surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SurfaceKind {
    /// Editable surface bound to a model instance (`<Model>Form`).
    Form,
    /// Editable surface backed by persisted storage (`<Model>SettingsView`).
    Settings,
    /// Read-only display surface (`<Model>View`).
    View,
}

impl SurfaceKind {
    /// Every kind, in emission order.
    pub const ALL: [SurfaceKind; 3] = [SurfaceKind::Form, SurfaceKind::Settings, SurfaceKind::View];

    pub fn name(self) -> &'static str {
        match self {
            SurfaceKind::Form => "form",
            SurfaceKind::Settings => "settings",
            SurfaceKind::View => "view",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            SurfaceKind::Form => "Form",
            SurfaceKind::Settings => "SettingsView",
            SurfaceKind::View => "View",
        }
    }

    /// Artifact type name for a model.
    pub fn type_name(self, model: &str) -> String {
        format!("{model}{}", self.suffix())
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A generated artifact held by a [`Surface`](crate::Surface) implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Artifact {
    /// Model the artifact was generated from
    pub model: &'static str,

    pub kind: SurfaceKind,

    /// Artifact type name, e.g. `CredentialsForm`
    pub type_name: String,

    /// Source text
    pub source: &'static str,
}
