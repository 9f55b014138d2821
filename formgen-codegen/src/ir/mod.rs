//! Intermediate Representation (IR) module.
//!
//! The IR sits between declaration parsing and rendering. The parser fills a
//! [`ModelSpec`] and [`GenerationArguments`]; the engine turns those into one
//! [`SurfaceDecl`] per requested kind, which a renderer prints to text.

pub mod arguments;
pub mod model;
pub mod node;
pub mod surface;
pub mod types;

pub use arguments::{GenerationArguments, LabelStyle, SurfaceKind};
pub use model::{MemberAttrs, MemberSpec, ModelSpec};
pub use node::{Binding, BindingMode, NestedInput, Node, Widget};
pub use surface::{DefaultValue, GeneratedArtifact, Input, StorageDecl, SurfaceDecl};
pub use types::{AccessLevel, DeclarationKind, MemberType, NumericType};
