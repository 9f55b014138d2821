//! Core trait for types with generated surfaces.
//!
//! Most users derive [`Surface`] with `#[derive(Surface)]`. It can also be
//! implemented by hand, e.g. for a model whose surfaces are written by hand:
//!
//! ```rust
//! use formgen::{Surface, SurfaceKind};
//!
//! struct Address;
//!
//! impl Surface for Address {
//!     fn surface_name() -> &'static str {
//!         "Address"
//!     }
//!
//!     fn surface_source(kind: SurfaceKind) -> Option<&'static str> {
//!         match kind {
//!             SurfaceKind::View => Some("struct AddressView: View { /* ... */ }\n"),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! assert_eq!(Address::surface_type_name(SurfaceKind::View), "AddressView");
//! assert_eq!(Address::surface_kinds(), vec![SurfaceKind::View]);
//! ```

use crate::kind::{Artifact, SurfaceKind};

/// A type with generated surfaces.
///
/// # Required Methods
///
/// - [`surface_name`](Surface::surface_name) - Model name used in generated text
/// - [`surface_source`](Surface::surface_source) - Source of one kind, if generated
///
/// # Provided Methods
///
/// - [`nested_surfaces`](Surface::nested_surfaces) - Models this one delegates to
/// - [`surface_type_name`](Surface::surface_type_name) - Artifact type name of a kind
/// - [`surface_kinds`](Surface::surface_kinds) - Kinds with generated source
/// - [`artifacts`](Surface::artifacts) - Every generated artifact
pub trait Surface {
    /// Model name used in generated text (after renaming).
    fn surface_name() -> &'static str;

    /// Generated source of one kind, or `None` if it was not requested.
    fn surface_source(kind: SurfaceKind) -> Option<&'static str>;

    /// Model names whose surfaces the generated ones reference.
    fn nested_surfaces() -> &'static [&'static str] {
        &[]
    }

    /// Artifact type name of a kind, e.g. `CredentialsForm`.
    fn surface_type_name(kind: SurfaceKind) -> String {
        kind.type_name(Self::surface_name())
    }

    /// Kinds with generated source, in emission order.
    fn surface_kinds() -> Vec<SurfaceKind> {
        SurfaceKind::ALL
            .into_iter()
            .filter(|&kind| Self::surface_source(kind).is_some())
            .collect()
    }

    /// Every generated artifact, in emission order.
    fn artifacts() -> Vec<Artifact> {
        SurfaceKind::ALL
            .into_iter()
            .filter_map(|kind| {
                Self::surface_source(kind).map(|source| Artifact {
                    model: Self::surface_name(),
                    kind,
                    type_name: Self::surface_type_name(kind),
                    source,
                })
            })
            .collect()
    }
}
