//! # formgen-codegen
//!
//! The generation engine behind `#[derive(Surface)]` and the `formgen` CLI.
//!
//! Given a structural description of a record type ([`ModelSpec`]) and the
//! invocation arguments ([`GenerationArguments`]), the engine produces up to
//! three SwiftUI artifacts:
//!
//! - `<Model>Form` - an editable surface bound to an instance of the model
//! - `<Model>SettingsView` - an editable surface backed by persisted storage
//! - `<Model>View` - a read-only display surface
//!
//! ## Pipeline
//!
//! ```text
//! syn::DeriveInput ──ModelParser──▶ ModelSpec + GenerationArguments
//!                                        │
//!                                        ▼
//!        Engine: for each requested kind
//!          visible members ─▶ SectionGrouper ─▶ MemberResolver (per member)
//!                                        │
//!                                        ▼
//!                         SurfaceDecl (structured IR)
//!                                        │
//!                               Renderer (SwiftUI)
//!                                        ▼
//!                               GeneratedArtifact
//! ```
//!
//! ## Example
//!
//! ```rust
//! use formgen_codegen::ir::{AccessLevel, GenerationArguments, LabelStyle, MemberAttrs, MemberSpec, ModelSpec, SurfaceKind};
//! use formgen_codegen::Engine;
//!
//! let model = ModelSpec::new("Credentials", AccessLevel::Public).with_members(vec![
//!     MemberSpec::new("username", "String", MemberAttrs::VISIBLE | MemberAttrs::MODIFIABLE),
//!     MemberSpec::new(
//!         "password",
//!         "String",
//!         MemberAttrs::VISIBLE | MemberAttrs::MODIFIABLE | MemberAttrs::SECURE,
//!     ),
//! ]);
//! let args = GenerationArguments::new([SurfaceKind::View], LabelStyle::Unlabeled);
//!
//! let artifacts = Engine::new().generate(&model, &args).unwrap();
//! assert_eq!(artifacts[0].type_name, "CredentialsView");
//! assert!(artifacts[0].text.contains("Text(\"********\")"));
//! ```

pub mod engine;
pub mod error;
pub mod ir;
pub mod parser;
pub mod render;

pub use engine::Engine;
pub use error::{Error, Result};
pub use ir::{GeneratedArtifact, GenerationArguments, ModelSpec};
pub use parser::ModelParser;
pub use render::{RenderConfig, Renderer, SwiftUiRenderer};

use syn::DeriveInput;

/// Parse a declaration and run the engine with the default SwiftUI renderer.
///
/// This is the entry point shared by the derive macro and the CLI.
pub fn generate(input: &DeriveInput) -> Result<Vec<GeneratedArtifact>> {
    generate_with(input, &Engine::new())
}

/// Parse a declaration and run it through the given engine.
pub fn generate_with<R: Renderer>(
    input: &DeriveInput,
    engine: &Engine<R>,
) -> Result<Vec<GeneratedArtifact>> {
    let (model, args) = ModelParser::parse(input)?;
    engine.generate(&model, &args)
}
