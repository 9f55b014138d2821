//! Per-kind assembly policies.
//!
//! The three surfaces share one assembly routine; everything that differs
//! between them is answered by a [`SurfacePolicy`].

use crate::ir::{
    Binding, DefaultValue, Input, MemberSpec, ModelSpec, NestedInput, Node, StorageDecl,
    SurfaceKind,
};

/// Kind-specific answers used by the resolver and the assembler.
pub trait SurfacePolicy: Send + Sync {
    /// The kind this policy assembles.
    fn kind(&self) -> SurfaceKind;

    /// Expression reading a member's value on this surface.
    fn value_path(&self, member: &str) -> String;

    /// What a nested sub-surface receives on an editable surface.
    fn nested_binding(&self, binding: Binding) -> Option<NestedInput> {
        Some(NestedInput::Binding(binding))
    }

    /// What a nested sub-surface receives on a display surface.
    fn nested_input(&self, path: String) -> Option<NestedInput> {
        Some(NestedInput::Value(path))
    }

    /// Constructor inputs, in parameter order.
    fn inputs(&self, model: &ModelSpec) -> Vec<Input>;

    /// Persisted backing declarations for the visible members.
    fn storage(&self, _model: &ModelSpec, _visible: &[&MemberSpec]) -> Vec<StorageDecl> {
        Vec::new()
    }

    /// Node emitted when the body would otherwise be empty.
    fn placeholder(&self, _model: &ModelSpec) -> Option<Node> {
        None
    }
}

/// Editable surface bound to a model instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormPolicy;

impl SurfacePolicy for FormPolicy {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Form
    }

    fn value_path(&self, member: &str) -> String {
        format!("model.{member}")
    }

    fn inputs(&self, model: &ModelSpec) -> Vec<Input> {
        vec![
            Input::Binding {
                name: "model".into(),
                model: model.name.clone(),
            },
            Input::Formatter,
        ]
    }
}

/// Editable surface backed by persisted storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsPolicy;

impl SurfacePolicy for SettingsPolicy {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Settings
    }

    fn value_path(&self, member: &str) -> String {
        member.to_string()
    }

    /// Nested settings surfaces own their storage and take no binding.
    fn nested_binding(&self, _binding: Binding) -> Option<NestedInput> {
        None
    }

    fn inputs(&self, _model: &ModelSpec) -> Vec<Input> {
        vec![Input::Formatter]
    }

    fn storage(&self, model: &ModelSpec, visible: &[&MemberSpec]) -> Vec<StorageDecl> {
        visible
            .iter()
            .filter(|member| !member.ty.is_nested())
            .map(|member| StorageDecl {
                key: format!("{}.{}", model.name, member.name),
                name: member.name.clone(),
                ty: member.ty.clone(),
                default: match &member.initializer {
                    Some(expr) => DefaultValue::Initializer(expr.clone()),
                    None => DefaultValue::TypeDefault,
                },
            })
            .collect()
    }
}

/// Read-only surface over a model value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewPolicy;

impl SurfacePolicy for ViewPolicy {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::View
    }

    fn value_path(&self, member: &str) -> String {
        format!("model.{member}")
    }

    fn inputs(&self, model: &ModelSpec) -> Vec<Input> {
        vec![Input::Value {
            name: "model".into(),
            model: model.name.clone(),
        }]
    }

    fn placeholder(&self, model: &ModelSpec) -> Option<Node> {
        Some(Node::Placeholder {
            key: format!("{}.empty", SurfaceKind::View.type_name(&model.name)),
        })
    }
}

static FORM: FormPolicy = FormPolicy;
static SETTINGS: SettingsPolicy = SettingsPolicy;
static VIEW: ViewPolicy = ViewPolicy;

/// The built-in policy for a kind.
pub fn policy_for(kind: SurfaceKind) -> &'static dyn SurfacePolicy {
    match kind {
        SurfaceKind::Form => &FORM,
        SurfaceKind::Settings => &SETTINGS,
        SurfaceKind::View => &VIEW,
    }
}
