//! Integration tests for the Surface derive macro.
//!
//! These drive the derive through the `formgen` runtime and check the
//! embedded source text.

#![allow(dead_code)]

use formgen::{export, ExportConfig, Surface, SurfaceKind, SurfaceRegistry};

// =============================================================================
// Kinds
// =============================================================================

#[test]
fn test_requested_kinds_only() {
    #[derive(Surface)]
    #[surface(kinds(form, view))]
    pub struct Credentials {
        #[surface(visible, modifiable)]
        username: String,

        #[surface(visible, modifiable, secure)]
        password: String,

        session_token: String,
    }

    assert_eq!(Credentials::surface_name(), "Credentials");
    assert_eq!(Credentials::surface_kinds(), vec![SurfaceKind::Form, SurfaceKind::View]);
    assert!(Credentials::surface_source(SurfaceKind::Settings).is_none());

    let form = Credentials::surface_source(SurfaceKind::Form).unwrap();
    assert!(form.contains("public struct CredentialsForm<Footer: View>: View {"));
    assert!(form.contains("@Binding var model: Credentials"));
    assert!(form.contains("TextField(\"CredentialsForm.username\", text: $model.username)"));
    assert!(form.contains("SecureField(\"CredentialsForm.password\", text: $model.password)"));
    assert!(!form.contains("session_token"));

    let view = Credentials::surface_source(SurfaceKind::View).unwrap();
    assert!(view.contains("Text(model.username)"));
    assert!(view.contains("Text(\"********\")"));
    assert!(!view.contains("model.password"));
}

#[test]
fn test_all_kinds_in_order() {
    #[derive(Surface)]
    #[surface(kinds(view, settings, form))]
    struct Flags {
        #[surface(visible)]
        enabled: bool,
    }

    assert_eq!(Flags::surface_kinds(), SurfaceKind::ALL.to_vec());

    let artifacts = Flags::artifacts();
    let names: Vec<_> = artifacts.iter().map(|a| a.type_name.as_str()).collect();
    assert_eq!(names, vec!["FlagsForm", "FlagsSettingsView", "FlagsView"]);
    assert!(artifacts.iter().all(|a| a.model == "Flags"));
}

// =============================================================================
// Bindings and Access
// =============================================================================

#[test]
fn test_read_only_member_binds_constant() {
    #[derive(Surface)]
    #[surface(kinds(form))]
    struct Profile {
        #[surface(visible)]
        id: u64,

        #[surface(visible, modifiable)]
        nickname: String,
    }

    let form = Profile::surface_source(SurfaceKind::Form).unwrap();
    assert!(form.contains("fileprivate struct ProfileForm"));
    assert!(form.contains("TextField(\"ProfileForm.id\", value: .constant(model.id), formatter: formatter)"));
    assert!(form.contains("TextField(\"ProfileForm.nickname\", text: $model.nickname)"));
}

#[test]
fn test_generic_model() {
    #[derive(Surface)]
    #[surface(kinds(view))]
    struct Tagged<T> {
        #[surface(visible)]
        label: String,

        payload: T,
    }

    assert_eq!(Tagged::<u8>::surface_name(), "Tagged");
    assert!(Tagged::<String>::surface_source(SurfaceKind::View)
        .unwrap()
        .contains("Text(model.label)"));
}

// =============================================================================
// Renaming
// =============================================================================

#[test]
fn test_model_named_by_type() {
    #[derive(Surface)]
    #[surface(kinds(form))]
    struct r#Login {
        #[surface(visible, modifiable)]
        user: String,
    }

    assert_eq!(Login::surface_name(), "Login");
    assert_eq!(Login::surface_type_name(SurfaceKind::Form), "LoginForm");

    let form = Login::surface_source(SurfaceKind::Form).unwrap();
    assert!(form.contains("struct LoginForm<Footer: View>"));
    assert!(form.contains("LoginForm.user"));
}

#[test]
fn test_rename_all_members() {
    #[derive(Surface)]
    #[surface(kinds(form), rename_all = "camelCase")]
    struct Account {
        #[surface(visible, modifiable)]
        display_name: String,

        #[surface(visible, modifiable, rename = "mail")]
        email_address: String,
    }

    let form = Account::surface_source(SurfaceKind::Form).unwrap();
    assert!(form.contains("$model.displayName"));
    assert!(form.contains("AccountForm.displayName"));
    assert!(form.contains("$model.mail"));
    assert!(!form.contains("display_name"));
    assert!(!form.contains("email_address"));
}

// =============================================================================
// Sections and Labels
// =============================================================================

#[test]
fn test_sections() {
    #[derive(Surface)]
    #[surface(kinds(view))]
    struct Server {
        #[surface(visible, section = "connection")]
        host: String,

        #[surface(visible)]
        port: u16,

        #[surface(visible, section)]
        verbose: bool,
    }

    let view = Server::surface_source(SurfaceKind::View).unwrap();
    assert!(view.contains("Section(\"ServerView.connection\") {"));
    assert_eq!(view.matches("Section").count(), 2);
    assert!(view.contains("Section {"));

    let host = view.find("Text(model.host)").unwrap();
    let port = view.find("Text(model.port, format: .number)").unwrap();
    let verbose = view.find("Text(model.verbose.description)").unwrap();
    assert!(host < port && port < verbose);
}

#[test]
fn test_labeled_style() {
    #[derive(Surface)]
    #[surface(kinds(view), style = "labeled")]
    struct Contact {
        #[surface(visible)]
        phone: String,
    }

    let view = Contact::surface_source(SurfaceKind::View).unwrap();
    assert!(view.contains("LabeledContent(\"ContactView.phone.label\") {"));
}

// =============================================================================
// Settings
// =============================================================================

#[test]
fn test_settings_storage() {
    #[derive(Surface)]
    #[surface(kinds(settings))]
    pub struct Prefs {
        #[surface(visible, modifiable, default = "0.5")]
        volume: f64,

        #[surface(visible, modifiable)]
        muted: bool,

        hidden: String,
    }

    let settings = Prefs::surface_source(SurfaceKind::Settings).unwrap();
    assert!(settings.contains("@AppStorage(\"Prefs.volume\") var volume: Double = 0.5"));
    assert!(settings.contains("@AppStorage(\"Prefs.muted\") var muted: Bool = false"));
    assert!(settings.contains("Toggle(\"PrefsSettingsView.muted\", isOn: $muted)"));
    assert!(!settings.contains("hidden"));
}

// =============================================================================
// Nested Models and Composition
// =============================================================================

#[derive(Surface)]
#[surface(kinds(form, view))]
pub struct Address {
    #[surface(visible, modifiable)]
    street: String,
}

#[derive(Surface)]
#[surface(kinds(form, view))]
pub struct Order {
    #[surface(visible, modifiable)]
    shipping: Address,

    #[surface(visible)]
    billing: Address,

    #[surface(visible)]
    customer: Customer,
}

#[derive(Surface)]
#[surface(kinds(view))]
pub struct Customer {
    #[surface(visible)]
    name: String,
}

#[test]
fn test_nested_surfaces() {
    assert_eq!(Order::nested_surfaces(), &["Address", "Customer"]);
    assert!(Address::nested_surfaces().is_empty());

    let form = Order::surface_source(SurfaceKind::Form).unwrap();
    assert!(form.contains("AddressForm(model: $model.shipping, formatter: formatter)"));
    assert!(form.contains("AddressForm(model: .constant(model.billing), formatter: formatter)"));

    let view = Order::surface_source(SurfaceKind::View).unwrap();
    assert!(view.contains("AddressView(model: model.shipping)"));
    assert!(view.contains("CustomerView(model: model.customer)"));
}

#[test]
fn test_registry_closure() {
    let mut registry = SurfaceRegistry::new();
    registry.register::<Order>().register::<Address>().register::<Customer>();

    let bundle = registry.closure("Order", SurfaceKind::View);
    assert!(bundle.is_complete());
    let names: Vec<_> = bundle.artifacts.iter().map(|a| a.type_name.as_str()).collect();
    assert_eq!(names, vec!["AddressView", "CustomerView", "OrderView"]);

    let bundle = registry.closure("Order", SurfaceKind::Form);
    assert_eq!(bundle.unresolved, vec!["CustomerForm"]);
}

#[derive(Surface)]
#[surface(kinds(form), rename_all = "camelCase")]
pub struct Destination {
    #[surface(visible, modifiable, rename = "zip")]
    postal_code: String,
}

#[derive(Surface)]
#[surface(kinds(form), rename_all = "camelCase")]
pub struct Shipment {
    #[surface(visible, modifiable, rename = "to")]
    destination: Destination,
}

#[test]
fn test_renamed_members_resolve_nested_models() {
    let mut registry = SurfaceRegistry::new();
    registry.register::<Shipment>().register::<Destination>();

    let bundle = registry.closure("Shipment", SurfaceKind::Form);
    assert!(bundle.unresolved.is_empty(), "{:?}", bundle.unresolved);
    let names: Vec<_> = bundle.artifacts.iter().map(|a| a.type_name.as_str()).collect();
    assert_eq!(names, vec!["DestinationForm", "ShipmentForm"]);

    let form = Shipment::surface_source(SurfaceKind::Form).unwrap();
    assert!(form.contains("DestinationForm(model: $model.to, formatter: formatter)"));
    assert!(Destination::surface_source(SurfaceKind::Form)
        .unwrap()
        .contains("$model.zip"));
}

#[test]
fn test_export_closure() {
    let mut registry = SurfaceRegistry::new();
    registry.register::<Order>().register::<Address>().register::<Customer>();

    let (source, unresolved) =
        export::generate_closure(&registry, "Order", SurfaceKind::View, &ExportConfig::default());

    assert!(unresolved.is_empty());
    assert!(source.starts_with("import SwiftUI\n\n"));
    assert_eq!(source.matches("import SwiftUI").count(), 1);

    let address = source.find("struct AddressView").unwrap();
    let order = source.find("struct OrderView").unwrap();
    assert!(address < order);
}
