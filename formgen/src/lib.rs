//! # formgen
//!
//! Generate SwiftUI form, settings and view surfaces from Rust structs.
//!
//! This crate provides the runtime trait, registry and export helpers. Use the
//! `#[derive(Surface)]` macro to generate the surfaces of a struct at compile
//! time; the generated source text is embedded in the implementation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formgen::{Surface, SurfaceKind};
//!
//! #[derive(Surface)]
//! #[surface(kinds(form, view))]
//! pub struct Credentials {
//!     #[surface(visible, modifiable)]
//!     username: String,
//!
//!     #[surface(visible, modifiable, secure)]
//!     password: String,
//!
//!     session_token: String,
//! }
//!
//! let form = Credentials::surface_source(SurfaceKind::Form).unwrap();
//! // => "public struct CredentialsForm<Footer: View>: View { ... }"
//! ```
//!
//! ## Features
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `derive` | Re-export `#[derive(Surface)]` | ✅ |
//! | `serde` | Serialize kinds and artifacts | ❌ |
//!
//! ## Surface Kinds
//!
//! | Kind | Type name | Members are |
//! |------|-----------|-------------|
//! | `form` | `<Model>Form` | bound to a model instance |
//! | `settings` | `<Model>SettingsView` | persisted with `@AppStorage` |
//! | `view` | `<Model>View` | displayed read-only |
//!
//! ## Container Attributes
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `#[surface(kinds(form, settings, view))]` | Surfaces to generate (required, non-empty) |
//! | `#[surface(style = "labeled")]` | Wrap every control in a labeled row |
//! | `#[surface(rename_all = "camelCase")]` | Rename all members |
//!
//! ## Field Attributes
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `#[surface(visible)]` | Show the member; members are hidden otherwise |
//! | `#[surface(modifiable)]` | Bind editable controls two-way |
//! | `#[surface(secure)]` | Use a secure field and mask the value in views |
//! | `#[surface(section)]` | Start a new section at this member |
//! | `#[surface(section = "Title")]` | Start a titled section |
//! | `#[surface(default = "expr")]` | Initial value of a persisted setting |
//! | `#[surface(rename = "name")]` | Rename this member |
//!
//! ## Type Mappings
//!
//! | Rust Type | Editable control | Display |
//! |-----------|------------------|---------|
//! | `bool` | `Toggle` | `Text(value.description)` |
//! | `String`, `&str` | `TextField` | `Text` |
//! | `String` + `secure` | `SecureField` | masked `Text` |
//! | `Date`, `DateTime`, `NaiveDate`, ... | `DatePicker` | `Text(value, format: .dateTime)` |
//! | `i8`-`i64`, `u8`-`u64`, `isize`, `usize`, `f32`, `f64` | `TextField` with a formatter | `Text(value, format: .number)` |
//! | any other type | nested `<Type>Form` / `<Type>SettingsView` / `<Type>View` | |
//!
//! ## Composing Surfaces
//!
//! Surfaces of nested models are referenced by name. Use the
//! [`SurfaceRegistry`] to gather them and [`export`] to write one file:
//!
//! ```rust,ignore
//! use formgen::{export, SurfaceKind, SurfaceRegistry};
//!
//! let mut registry = SurfaceRegistry::new();
//! registry.register::<Order>().register::<Address>();
//!
//! let (source, unresolved) =
//!     export::generate_closure(&registry, "Order", SurfaceKind::Form, &Default::default());
//! assert!(unresolved.is_empty());
//! ```

pub mod export;
pub mod kind;
pub mod registry;
pub mod traits;

pub use export::ExportConfig;
pub use kind::{Artifact, SurfaceKind};
pub use registry::{Bundle, SurfaceProvider, SurfaceRegistry, TypedProvider};
pub use traits::Surface;

// Re-export derive macro when available
#[cfg(feature = "derive")]
pub use formgen_macros::Surface;
