//! Member widget resolution.
//!
//! Maps one member to its control nodes for a given surface kind and label
//! style. Pure: the same member always yields the same nodes.

use crate::ir::{Binding, LabelStyle, MemberSpec, MemberType, Node, Widget};

use super::policy::SurfacePolicy;

/// Resolves members of one model for one surface kind.
pub struct MemberResolver<'a> {
    model_name: &'a str,
    style: LabelStyle,
    policy: &'a dyn SurfacePolicy,
}

impl<'a> MemberResolver<'a> {
    pub fn new(model_name: &'a str, style: LabelStyle, policy: &'a dyn SurfacePolicy) -> Self {
        Self {
            model_name,
            style,
            policy,
        }
    }

    /// Lookup key of a member, `<Model><Suffix>.<member>`.
    pub fn key(&self, member: &MemberSpec) -> String {
        format!(
            "{}.{}",
            self.policy.kind().type_name(self.model_name),
            member.name
        )
    }

    /// Nodes for one member; empty when the member is not visible.
    pub fn resolve(&self, member: &MemberSpec) -> Vec<Node> {
        if !member.is_visible() {
            return Vec::new();
        }

        let key = self.key(member);
        let control = Node::Control {
            key: key.clone(),
            widget: self.widget(member),
        };

        match self.style {
            LabelStyle::Unlabeled => vec![control],
            LabelStyle::Labeled => vec![
                Node::LabelOpen {
                    key: format!("{key}.label"),
                },
                control,
                Node::LabelClose,
            ],
        }
    }

    /// Choose the control for a member.
    pub fn widget(&self, member: &MemberSpec) -> Widget {
        let kind = self.policy.kind();
        let path = self.policy.value_path(&member.name);

        if !kind.is_editable() {
            return match &member.ty {
                MemberType::Boolean => Widget::BoolText { path },
                MemberType::Text => Widget::Text { path },
                MemberType::SecretText => Widget::Masked,
                MemberType::Date => Widget::DateText { path },
                MemberType::Numeric(_) => Widget::NumberText { path },
                MemberType::Nested(type_name) => Widget::Nested {
                    type_name: type_name.clone(),
                    kind,
                    input: self.policy.nested_input(path),
                },
            };
        }

        let binding = if member.is_modifiable() {
            Binding::two_way(path)
        } else {
            Binding::constant(path)
        };

        match &member.ty {
            MemberType::Boolean => Widget::Toggle { binding },
            MemberType::Text => Widget::TextField { binding },
            MemberType::SecretText => Widget::SecureField { binding },
            MemberType::Date => Widget::DatePicker { binding },
            MemberType::Numeric(_) => Widget::NumberField { binding },
            MemberType::Nested(type_name) => Widget::Nested {
                type_name: type_name.clone(),
                kind,
                input: self.policy.nested_binding(binding),
            },
        }
    }
}
