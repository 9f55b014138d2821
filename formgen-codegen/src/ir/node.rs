//! Body nodes.
//!
//! Resolver and grouper output. A renderer walks the flat node list and
//! tracks nesting from the open/close markers.

use serde::{Deserialize, Serialize};

use super::arguments::SurfaceKind;

/// How a control reaches its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingMode {
    /// Edits write through to the value.
    TwoWay,
    /// Bound to a snapshot; edits are discarded.
    Constant,
}

/// A value path together with its binding mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Binding {
    pub mode: BindingMode,
    pub path: String,
}

impl Binding {
    pub fn two_way(path: impl Into<String>) -> Self {
        Self {
            mode: BindingMode::TwoWay,
            path: path.into(),
        }
    }

    pub fn constant(path: impl Into<String>) -> Self {
        Self {
            mode: BindingMode::Constant,
            path: path.into(),
        }
    }

    pub fn is_two_way(&self) -> bool {
        self.mode == BindingMode::TwoWay
    }
}

/// What a nested sub-surface receives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum NestedInput {
    Binding(Binding),
    Value(String),
}

/// A resolved control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    Toggle { binding: Binding },
    TextField { binding: Binding },
    SecureField { binding: Binding },
    DatePicker { binding: Binding },
    /// Numeric entry using the surface's formatter.
    NumberField { binding: Binding },

    BoolText { path: String },
    Text { path: String },
    /// Fixed mask in place of a secret value.
    Masked,
    DateText { path: String },
    NumberText { path: String },

    /// Reference to `<type_name><kind suffix>`.
    Nested {
        type_name: String,
        kind: SurfaceKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        input: Option<NestedInput>,
    },
}

impl Widget {
    /// Binding of an editable control.
    pub fn binding(&self) -> Option<&Binding> {
        match self {
            Widget::Toggle { binding }
            | Widget::TextField { binding }
            | Widget::SecureField { binding }
            | Widget::DatePicker { binding }
            | Widget::NumberField { binding } => Some(binding),
            Widget::Nested {
                input: Some(NestedInput::Binding(binding)),
                ..
            } => Some(binding),
            _ => None,
        }
    }
}

/// One element of a surface body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Control { key: String, widget: Widget },
    LabelOpen { key: String },
    LabelClose,
    GroupOpen {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    GroupClose,
    /// Stands in for an empty body.
    Placeholder { key: String },
}

impl Node {
    pub fn is_group_open(&self) -> bool {
        matches!(self, Node::GroupOpen { .. })
    }

    pub fn is_group_close(&self) -> bool {
        matches!(self, Node::GroupClose)
    }

    /// Key of a control, label or placeholder.
    pub fn key(&self) -> Option<&str> {
        match self {
            Node::Control { key, .. } | Node::LabelOpen { key } | Node::Placeholder { key } => {
                Some(key)
            }
            _ => None,
        }
    }
}
