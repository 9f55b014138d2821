//! Generation engine.
//!
//! Checks the invocation, assembles one [`SurfaceDecl`] per requested kind
//! and renders each into a [`GeneratedArtifact`]. An invocation either yields
//! every requested artifact or fails.

pub mod assembler;
pub mod grouper;
pub mod policy;
pub mod resolver;

mod proptest;

pub use assembler::assemble;
pub use grouper::SectionGrouper;
pub use policy::{policy_for, FormPolicy, SettingsPolicy, SurfacePolicy, ViewPolicy};
pub use resolver::MemberResolver;

use crate::error::{Error, Result};
use crate::ir::{GeneratedArtifact, GenerationArguments, LabelStyle, ModelSpec, SurfaceDecl, SurfaceKind};
use crate::render::{RenderConfig, Renderer, SwiftUiRenderer};

/// Runs models through assembly and rendering.
#[derive(Debug, Clone, Default)]
pub struct Engine<R: Renderer = SwiftUiRenderer> {
    renderer: R,
    config: RenderConfig,
}

impl Engine<SwiftUiRenderer> {
    /// Engine with the SwiftUI renderer and default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Renderer> Engine<R> {
    /// Engine with a custom renderer.
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            renderer,
            config: RenderConfig::default(),
        }
    }

    /// Set the render configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Reject inputs the engine cannot generate from.
    pub fn check(&self, model: &ModelSpec, args: &GenerationArguments) -> Result<()> {
        if !model.target.is_record() {
            return Err(Error::unsupported_target(format!(
                "`{}` is a {}; surfaces can only be derived for structs with named fields",
                model.name, model.target
            )));
        }
        args.validate()
    }

    /// Assemble the surface of one kind without rendering it.
    pub fn assemble(&self, model: &ModelSpec, kind: SurfaceKind, style: LabelStyle) -> SurfaceDecl {
        assemble(model, style, policy_for(kind))
    }

    /// Generate every requested artifact, in kind order.
    pub fn generate(
        &self,
        model: &ModelSpec,
        args: &GenerationArguments,
    ) -> Result<Vec<GeneratedArtifact>> {
        self.check(model, args)?;

        args.kinds
            .iter()
            .map(|&kind| {
                let decl = self.assemble(model, kind, args.style);
                let text = self.renderer.render(&decl, &self.config)?;

                tracing::debug!(
                    model = %model.name,
                    kind = %kind,
                    artifact = %decl.type_name,
                    nodes = decl.body.len(),
                    renderer = self.renderer.id(),
                    "generated artifact"
                );

                Ok(GeneratedArtifact {
                    kind,
                    type_name: decl.type_name,
                    text,
                    nested: decl.nested,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{AccessLevel, DeclarationKind, MemberAttrs, MemberSpec};

    fn credentials() -> ModelSpec {
        ModelSpec::new("Credentials", AccessLevel::Public).with_members(vec![
            MemberSpec::new("username", "String", MemberAttrs::VISIBLE | MemberAttrs::MODIFIABLE),
            MemberSpec::new(
                "password",
                "String",
                MemberAttrs::VISIBLE | MemberAttrs::MODIFIABLE | MemberAttrs::SECURE,
            ),
        ])
    }

    #[test]
    fn test_generates_each_requested_kind_in_order() {
        let args = GenerationArguments::new(
            [SurfaceKind::View, SurfaceKind::Form, SurfaceKind::Settings],
            LabelStyle::Unlabeled,
        );
        let artifacts = Engine::new().generate(&credentials(), &args).unwrap();
        let names: Vec<_> = artifacts.iter().map(|a| a.type_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["CredentialsForm", "CredentialsSettingsView", "CredentialsView"]
        );
        assert_eq!(artifacts[2].kind_name(), "view");
    }

    #[test]
    fn test_rejects_non_record_targets() {
        let args = GenerationArguments::all(LabelStyle::Unlabeled);
        for target in [
            DeclarationKind::Enum,
            DeclarationKind::Union,
            DeclarationKind::TupleStruct,
        ] {
            let model = credentials().with_target(target);
            assert!(matches!(
                Engine::new().generate(&model, &args),
                Err(Error::UnsupportedTarget(_))
            ));
        }
    }

    #[test]
    fn test_target_checked_before_arguments() {
        let model = credentials().with_target(DeclarationKind::Enum);
        let args = GenerationArguments::new([], LabelStyle::Unlabeled);
        assert!(matches!(
            Engine::new().generate(&model, &args),
            Err(Error::UnsupportedTarget(_))
        ));
    }

    #[test]
    fn test_rejects_empty_kinds() {
        let args = GenerationArguments::new([], LabelStyle::Unlabeled);
        assert!(matches!(
            Engine::new().generate(&credentials(), &args),
            Err(Error::MalformedArguments(_))
        ));
    }

    #[test]
    fn test_unit_struct_is_a_record() {
        let model = ModelSpec::new("Empty", AccessLevel::Internal)
            .with_target(DeclarationKind::UnitStruct);
        let args = GenerationArguments::new([SurfaceKind::View], LabelStyle::Unlabeled);
        let artifacts = Engine::new().generate(&model, &args).unwrap();
        assert!(artifacts[0].text.contains("Text(\"EmptyView.empty\")"));
    }
}
