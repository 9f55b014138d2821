//! Surface registry for composing generated artifacts.
//!
//! Generated surfaces reference the surfaces of nested models by name. The
//! registry resolves those references so a set of models can be exported as
//! one self-contained source file.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::marker::PhantomData;

use crate::kind::{Artifact, SurfaceKind};
use crate::traits::Surface;

/// Object-safe view of a [`Surface`] implementation.
pub trait SurfaceProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn source(&self, kind: SurfaceKind) -> Option<&'static str>;

    fn nested(&self) -> &'static [&'static str];
}

/// Provider backed by a `Surface` type.
pub struct TypedProvider<T>(PhantomData<fn() -> T>);

impl<T> TypedProvider<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for TypedProvider<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Surface> SurfaceProvider for TypedProvider<T> {
    fn name(&self) -> &'static str {
        T::surface_name()
    }

    fn source(&self, kind: SurfaceKind) -> Option<&'static str> {
        T::surface_source(kind)
    }

    fn nested(&self) -> &'static [&'static str] {
        T::nested_surfaces()
    }
}

/// Artifacts collected by a registry walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    /// Artifacts, dependencies before their dependents
    pub artifacts: Vec<Artifact>,

    /// Artifact type names that were referenced but could not be provided
    pub unresolved: Vec<String>,
}

impl Bundle {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// A registry of models with generated surfaces.
#[derive(Default)]
pub struct SurfaceRegistry {
    providers: BTreeMap<&'static str, Box<dyn SurfaceProvider>>,
}

impl fmt::Debug for SurfaceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceRegistry")
            .field("models", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SurfaceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a `Surface` type. Re-registering a name replaces it.
    pub fn register<T: Surface + 'static>(&mut self) -> &mut Self {
        self.register_provider(Box::new(TypedProvider::<T>::new()))
    }

    /// Register a provider.
    pub fn register_provider(&mut self, provider: Box<dyn SurfaceProvider>) -> &mut Self {
        self.providers.insert(provider.name(), provider);
        self
    }

    /// Get a provider by model name.
    pub fn get(&self, name: &str) -> Option<&dyn SurfaceProvider> {
        self.providers.get(name).map(|p| p.as_ref())
    }

    /// Registered model names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers.keys().copied()
    }

    /// Get the number of registered models.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Source of one kind of one model.
    pub fn resolve(&self, name: &str, kind: SurfaceKind) -> Option<&'static str> {
        self.get(name)?.source(kind)
    }

    /// Artifacts of one kind needed by `root`, dependencies first.
    ///
    /// Each model appears once; reference cycles are cut at the first
    /// revisit. Missing models or kinds are listed in
    /// [`Bundle::unresolved`] rather than failing the walk.
    pub fn closure(&self, root: &str, kind: SurfaceKind) -> Bundle {
        let mut walk = Walk::new(self);
        walk.visit(root, kind, true);
        walk.finish()
    }

    /// Every artifact of every registered model, dependencies first.
    ///
    /// Kinds a model was not generated for are skipped unless another
    /// model's surface refers to them.
    pub fn bundle(&self) -> Bundle {
        let mut walk = Walk::new(self);
        for name in self.names() {
            for kind in SurfaceKind::ALL {
                walk.visit(name, kind, false);
            }
        }
        walk.finish()
    }
}

struct Walk<'r> {
    registry: &'r SurfaceRegistry,
    visited: BTreeSet<(String, SurfaceKind)>,
    bundle: Bundle,
}

impl<'r> Walk<'r> {
    fn new(registry: &'r SurfaceRegistry) -> Self {
        Self {
            registry,
            visited: BTreeSet::new(),
            bundle: Bundle::default(),
        }
    }

    /// `required` reports a missing kind as unresolved instead of skipping it.
    fn visit(&mut self, name: &str, kind: SurfaceKind, required: bool) {
        let key = (name.to_string(), kind);
        if self.visited.contains(&key) {
            return;
        }

        let Some(provider) = self.registry.get(name) else {
            self.visited.insert(key);
            self.unresolved(kind.type_name(name));
            return;
        };

        let Some(source) = provider.source(kind) else {
            if required {
                self.visited.insert(key);
                self.unresolved(kind.type_name(name));
            }
            return;
        };

        self.visited.insert(key);
        for nested in provider.nested() {
            self.visit(nested, kind, true);
        }

        self.bundle.artifacts.push(Artifact {
            model: provider.name(),
            kind,
            type_name: kind.type_name(provider.name()),
            source,
        });
    }

    fn unresolved(&mut self, type_name: String) {
        if !self.bundle.unresolved.contains(&type_name) {
            self.bundle.unresolved.push(type_name);
        }
    }

    fn finish(self) -> Bundle {
        self.bundle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! surface {
        ($ty:ident, $name:literal, [$($kind:ident),*], [$($nested:literal),*]) => {
            struct $ty;

            impl Surface for $ty {
                fn surface_name() -> &'static str {
                    $name
                }

                fn surface_source(kind: SurfaceKind) -> Option<&'static str> {
                    match kind {
                        $(SurfaceKind::$kind => Some(concat!($name, "/", stringify!($kind))),)*
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }

                fn nested_surfaces() -> &'static [&'static str] {
                    &[$($nested),*]
                }
            }
        };
    }

    surface!(Order, "Order", [Form, View], ["Address", "Customer"]);
    surface!(Address, "Address", [Form, View], ["Country"]);
    surface!(Country, "Country", [Form, View], []);
    surface!(Customer, "Customer", [View], ["Address"]);
    surface!(Left, "Left", [Form], ["Right"]);
    surface!(Right, "Right", [Form], ["Left"]);
    surface!(Loose, "Loose", [Form], ["Missing"]);

    fn type_names(bundle: &Bundle) -> Vec<&str> {
        bundle.artifacts.iter().map(|a| a.type_name.as_str()).collect()
    }

    fn shop() -> SurfaceRegistry {
        let mut registry = SurfaceRegistry::new();
        registry
            .register::<Order>()
            .register::<Address>()
            .register::<Country>()
            .register::<Customer>();
        registry
    }

    #[test]
    fn test_register_and_resolve() {
        let registry = shop();

        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Address", "Country", "Customer", "Order"]);
        assert_eq!(registry.resolve("Order", SurfaceKind::Form), Some("Order/Form"));
        assert_eq!(registry.resolve("Order", SurfaceKind::Settings), None);
        assert_eq!(registry.resolve("Unknown", SurfaceKind::Form), None);
    }

    #[test]
    fn test_closure_dependencies_first() {
        let bundle = shop().closure("Order", SurfaceKind::View);

        assert!(bundle.is_complete());
        assert_eq!(
            type_names(&bundle),
            vec!["CountryView", "AddressView", "CustomerView", "OrderView"]
        );
    }

    #[test]
    fn test_closure_reports_missing_kind() {
        // Customer has no form, so OrderForm cannot be satisfied.
        let bundle = shop().closure("Order", SurfaceKind::Form);

        assert_eq!(type_names(&bundle), vec!["CountryForm", "AddressForm", "OrderForm"]);
        assert_eq!(bundle.unresolved, vec!["CustomerForm"]);
        assert!(!bundle.is_complete());
    }

    #[test]
    fn test_closure_reports_missing_model() {
        let mut registry = SurfaceRegistry::new();
        registry.register::<Loose>();

        let bundle = registry.closure("Loose", SurfaceKind::Form);
        assert_eq!(type_names(&bundle), vec!["LooseForm"]);
        assert_eq!(bundle.unresolved, vec!["MissingForm"]);

        let bundle = registry.closure("Nowhere", SurfaceKind::View);
        assert!(bundle.is_empty());
        assert_eq!(bundle.unresolved, vec!["NowhereView"]);
    }

    #[test]
    fn test_closure_cuts_cycles() {
        let mut registry = SurfaceRegistry::new();
        registry.register::<Left>().register::<Right>();

        let bundle = registry.closure("Left", SurfaceKind::Form);
        assert!(bundle.is_complete());
        assert_eq!(type_names(&bundle), vec!["RightForm", "LeftForm"]);
    }

    #[test]
    fn test_bundle_includes_each_artifact_once() {
        let bundle = shop().bundle();

        assert_eq!(bundle.len(), 7);
        assert_eq!(bundle.unresolved, vec!["CustomerForm"]);

        let names = type_names(&bundle);
        let position = |name: &str| names.iter().position(|n| *n == name);
        assert!(position("CountryForm") < position("AddressForm"));
        assert!(position("AddressView") < position("CustomerView"));
        assert!(position("CustomerView") < position("OrderView"));

        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn test_bundle_skips_unrequested_kinds() {
        let mut registry = SurfaceRegistry::new();
        registry.register::<Country>();

        let bundle = registry.bundle();
        assert!(bundle.is_complete());
        assert_eq!(type_names(&bundle), vec!["CountryForm", "CountryView"]);
    }

    #[test]
    fn test_reregistering_replaces() {
        let mut registry = SurfaceRegistry::new();
        registry.register::<Country>().register::<Country>();
        assert_eq!(registry.len(), 1);
        assert!(format!("{registry:?}").contains("Country"));
    }
}
