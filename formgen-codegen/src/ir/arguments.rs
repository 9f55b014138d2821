//! Generation arguments.
//!
//! Which surfaces to produce and how to label their controls.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kind of generated surface.
///
/// Ordering follows declaration order, which is also the order artifacts are
/// emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    /// Editable surface bound to a model instance.
    Form,
    /// Editable surface backed by persisted key-value storage.
    Settings,
    /// Read-only display surface.
    View,
}

impl SurfaceKind {
    /// Every kind, in emission order.
    pub const ALL: [SurfaceKind; 3] = [SurfaceKind::Form, SurfaceKind::Settings, SurfaceKind::View];

    /// Lowercase name used in attributes and configuration.
    pub fn name(self) -> &'static str {
        match self {
            SurfaceKind::Form => "form",
            SurfaceKind::Settings => "settings",
            SurfaceKind::View => "view",
        }
    }

    /// Suffix appended to the model name to form the artifact name.
    pub fn suffix(self) -> &'static str {
        match self {
            SurfaceKind::Form => "Form",
            SurfaceKind::Settings => "SettingsView",
            SurfaceKind::View => "View",
        }
    }

    /// Artifact type name for a model, e.g. `CredentialsForm`.
    pub fn type_name(self, model: &str) -> String {
        format!("{model}{}", self.suffix())
    }

    /// Whether controls on this surface can write back.
    pub fn is_editable(self) -> bool {
        !matches!(self, SurfaceKind::View)
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SurfaceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "form" => Ok(SurfaceKind::Form),
            "settings" => Ok(SurfaceKind::Settings),
            "view" => Ok(SurfaceKind::View),
            other => Err(Error::malformed_arguments(format!(
                "unknown surface kind `{other}`, expected one of: form, settings, view"
            ))),
        }
    }
}

/// How each control is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Each control is wrapped in a labeled container keyed `<key>.label`.
    Labeled,
    /// Controls are emitted bare.
    #[default]
    Unlabeled,
}

impl FromStr for LabelStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "labeled" => Ok(LabelStyle::Labeled),
            "unlabeled" => Ok(LabelStyle::Unlabeled),
            other => Err(Error::malformed_arguments(format!(
                "unknown style `{other}`, expected `labeled` or `unlabeled`"
            ))),
        }
    }
}

/// Arguments of one generator invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationArguments {
    /// Requested kinds. Duplicates collapse.
    pub kinds: BTreeSet<SurfaceKind>,

    /// Label style applied to every control.
    #[serde(default)]
    pub style: LabelStyle,
}

impl GenerationArguments {
    /// Create arguments for the given kinds.
    pub fn new(kinds: impl IntoIterator<Item = SurfaceKind>, style: LabelStyle) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
            style,
        }
    }

    /// Arguments requesting every kind.
    pub fn all(style: LabelStyle) -> Self {
        Self::new(SurfaceKind::ALL, style)
    }

    /// Set the label style.
    pub fn with_style(mut self, style: LabelStyle) -> Self {
        self.style = style;
        self
    }

    /// Whether the given kind was requested.
    pub fn requests(&self, kind: SurfaceKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Reject argument sets that cannot produce anything.
    pub fn validate(&self) -> Result<()> {
        if self.kinds.is_empty() {
            return Err(Error::malformed_arguments(
                "at least one surface kind must be requested",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_and_suffixes() {
        assert_eq!(SurfaceKind::Form.type_name("Credentials"), "CredentialsForm");
        assert_eq!(
            SurfaceKind::Settings.type_name("Preferences"),
            "PreferencesSettingsView"
        );
        assert_eq!(SurfaceKind::View.type_name("Profile"), "ProfileView");
        assert_eq!(SurfaceKind::Settings.to_string(), "settings");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("form".parse::<SurfaceKind>().unwrap(), SurfaceKind::Form);
        assert_eq!("view".parse::<SurfaceKind>().unwrap(), SurfaceKind::View);
        assert!(matches!(
            "sheet".parse::<SurfaceKind>(),
            Err(Error::MalformedArguments(_))
        ));
    }

    #[test]
    fn test_duplicate_kinds_collapse() {
        let args = GenerationArguments::new(
            [SurfaceKind::View, SurfaceKind::Form, SurfaceKind::View],
            LabelStyle::Unlabeled,
        );
        let kinds: Vec<_> = args.kinds.iter().copied().collect();
        assert_eq!(kinds, vec![SurfaceKind::Form, SurfaceKind::View]);
    }

    #[test]
    fn test_empty_kinds_rejected() {
        let args = GenerationArguments::new([], LabelStyle::Labeled);
        assert!(matches!(args.validate(), Err(Error::MalformedArguments(_))));
        assert!(GenerationArguments::all(LabelStyle::Labeled).validate().is_ok());
    }

    #[test]
    fn test_style_default_is_unlabeled() {
        assert_eq!(LabelStyle::default(), LabelStyle::Unlabeled);
        assert_eq!("labeled".parse::<LabelStyle>().unwrap(), LabelStyle::Labeled);
        assert!("boxed".parse::<LabelStyle>().is_err());
    }
}
