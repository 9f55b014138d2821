//! Rendering of assembled surfaces into target source text.
//!
//! The engine hands each [`SurfaceDecl`](crate::ir::SurfaceDecl) to a
//! [`Renderer`]. SwiftUI is the only built-in target.

pub mod swiftui;
pub mod traits;
pub mod type_mapper;

pub use swiftui::SwiftUiRenderer;
pub use traits::{escape_string, IndentStyle, LineEnding, RenderConfig, Renderer, SourceWriter};
pub use type_mapper::SwiftTypeMapper;
