//! Surface assembly.
//!
//! One routine serves all three kinds: filter to visible members, group and
//! resolve them, then let the policy supply inputs, storage and the empty
//! placeholder.

use crate::ir::{LabelStyle, MemberSpec, ModelSpec, SurfaceDecl};

use super::grouper::SectionGrouper;
use super::policy::SurfacePolicy;
use super::resolver::MemberResolver;

/// Assemble the surface a policy describes.
pub fn assemble(model: &ModelSpec, style: LabelStyle, policy: &dyn SurfacePolicy) -> SurfaceDecl {
    let kind = policy.kind();
    let type_name = kind.type_name(&model.name);
    let visible: Vec<&MemberSpec> = model.visible_members().collect();

    let resolver = MemberResolver::new(&model.name, style, policy);
    let mut body = SectionGrouper::group(
        visible.iter().copied(),
        |title| format!("{type_name}.{title}"),
        |member| {
            tracing::trace!(member = %member.name, ty = ?member.ty, "resolving member");
            resolver.resolve(member)
        },
    );

    if body.is_empty() {
        body.extend(policy.placeholder(model));
    }

    SurfaceDecl {
        kind,
        type_name,
        model_name: model.name.clone(),
        access: model.access,
        description: model.description.clone(),
        inputs: policy.inputs(model),
        storage: policy.storage(model, &visible),
        body,
        nested: model.nested_types(),
    }
}
