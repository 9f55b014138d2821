//! SwiftUI renderer.
//!
//! Every surface renders as a `View` struct generic over a trailing
//! `Footer` view, with a designated initializer taking a `@ViewBuilder`
//! footer and an `EmptyView` extension for callers that need none.

use crate::error::Result;
use crate::ir::{
    Binding, BindingMode, DefaultValue, Input, NestedInput, Node, StorageDecl, SurfaceDecl,
    SurfaceKind, Widget,
};
use crate::render::traits::{escape_string, RenderConfig, Renderer, SourceWriter};
use crate::render::type_mapper::SwiftTypeMapper;

/// Fallback initializer for persisted members whose type has no known zero value.
const INIT_SENTINEL: &str = ".init()";

/// Mask shown in place of secret text.
const SECRET_MASK: &str = "********";

/// SwiftUI source renderer.
#[derive(Debug, Clone, Default)]
pub struct SwiftUiRenderer {
    type_mapper: SwiftTypeMapper,
}

impl SwiftUiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn container(kind: SurfaceKind) -> &'static str {
        match kind {
            SurfaceKind::Form | SurfaceKind::Settings => "Form",
            SurfaceKind::View => "List",
        }
    }

    fn summary(decl: &SurfaceDecl) -> String {
        if let Some(description) = &decl.description {
            return description.clone();
        }
        match decl.kind {
            SurfaceKind::Form => format!("Editable form for `{}`.", decl.model_name),
            SurfaceKind::Settings => format!("Persisted settings for `{}`.", decl.model_name),
            SurfaceKind::View => format!("Read-only view of `{}`.", decl.model_name),
        }
    }

    fn property(input: &Input) -> String {
        match input {
            Input::Binding { name, model } => format!("@Binding var {name}: {model}"),
            Input::Value { name, model } => format!("let {name}: {model}"),
            Input::Formatter => "let formatter: Formatter".to_string(),
        }
    }

    fn parameter(input: &Input) -> String {
        match input {
            Input::Binding { name, model } => format!("{name}: Binding<{model}>"),
            Input::Value { name, model } => format!("{name}: {model}"),
            Input::Formatter => "formatter: Formatter".to_string(),
        }
    }

    fn assignment(input: &Input) -> String {
        match input {
            Input::Binding { name, .. } => format!("self._{name} = {name}"),
            Input::Value { name, .. } => format!("self.{name} = {name}"),
            Input::Formatter => "self.formatter = formatter".to_string(),
        }
    }

    fn storage(&self, storage: &StorageDecl) -> String {
        let default = match &storage.default {
            DefaultValue::Initializer(expr) => expr.as_str(),
            DefaultValue::TypeDefault => self
                .type_mapper
                .type_default(&storage.ty)
                .unwrap_or(INIT_SENTINEL),
        };
        format!(
            "@AppStorage(\"{}\") var {}: {} = {}",
            escape_string(&storage.key),
            storage.name,
            self.type_mapper.swift_type(&storage.ty),
            default
        )
    }

    fn binding(binding: &Binding) -> String {
        match binding.mode {
            BindingMode::TwoWay => format!("${}", binding.path),
            BindingMode::Constant => format!(".constant({})", binding.path),
        }
    }

    /// One control expression.
    pub fn control(&self, key: &str, widget: &Widget) -> String {
        let key = escape_string(key);
        match widget {
            Widget::Toggle { binding } => {
                format!("Toggle(\"{key}\", isOn: {})", Self::binding(binding))
            }
            Widget::TextField { binding } => {
                format!("TextField(\"{key}\", text: {})", Self::binding(binding))
            }
            Widget::SecureField { binding } => {
                format!("SecureField(\"{key}\", text: {})", Self::binding(binding))
            }
            Widget::DatePicker { binding } => {
                format!("DatePicker(\"{key}\", selection: {})", Self::binding(binding))
            }
            Widget::NumberField { binding } => format!(
                "TextField(\"{key}\", value: {}, formatter: formatter)",
                Self::binding(binding)
            ),
            Widget::BoolText { path } => format!("Text({path}.description)"),
            Widget::Text { path } => format!("Text({path})"),
            Widget::Masked => format!("Text(\"{SECRET_MASK}\")"),
            Widget::DateText { path } => format!("Text({path}, format: .dateTime)"),
            Widget::NumberText { path } => format!("Text({path}, format: .number)"),
            Widget::Nested {
                type_name,
                kind,
                input,
            } => {
                let mut args = Vec::new();
                match input {
                    Some(NestedInput::Binding(binding)) => {
                        args.push(format!("model: {}", Self::binding(binding)))
                    }
                    Some(NestedInput::Value(path)) => args.push(format!("model: {path}")),
                    None => {}
                }
                if kind.is_editable() {
                    args.push("formatter: formatter".to_string());
                }
                format!("{}({})", kind.type_name(type_name), args.join(", "))
            }
        }
    }

    fn body(&self, writer: &mut SourceWriter<'_>, body: &[Node]) {
        for node in body {
            match node {
                Node::Control { key, widget } => writer.line(self.control(key, widget)),
                Node::LabelOpen { key } => {
                    writer.open(format!("LabeledContent(\"{}\") {{", escape_string(key)))
                }
                Node::GroupOpen { title: Some(title) } => {
                    writer.open(format!("Section(\"{}\") {{", escape_string(title)))
                }
                Node::GroupOpen { title: None } => writer.open("Section {"),
                Node::LabelClose | Node::GroupClose => writer.close("}"),
                Node::Placeholder { key } => {
                    writer.line(format!("Text(\"{}\")", escape_string(key)))
                }
            }
        }
    }
}

impl Renderer for SwiftUiRenderer {
    fn id(&self) -> &'static str {
        "swiftui"
    }

    fn name(&self) -> &'static str {
        "SwiftUI"
    }

    fn file_extension(&self) -> &'static str {
        "swift"
    }

    fn preamble(&self, config: &RenderConfig) -> String {
        let mut writer = SourceWriter::new(config);
        writer.line("import SwiftUI");
        writer.finish()
    }

    fn render(&self, decl: &SurfaceDecl, config: &RenderConfig) -> Result<String> {
        let access = decl.access.keyword();
        let params: Vec<String> = decl.inputs.iter().map(Self::parameter).collect();
        let forwarded: Vec<String> = decl
            .inputs
            .iter()
            .map(|input| format!("{0}: {0}", input.name()))
            .collect();

        let mut designated = params.clone();
        designated.push("@ViewBuilder footer: () -> Footer".to_string());

        let mut w = SourceWriter::new(config);

        if config.docs {
            w.doc(&Self::summary(decl));
        }
        w.open(format!(
            "{access} struct {}<Footer: View>: View {{",
            decl.type_name
        ));
        for storage in &decl.storage {
            w.line(self.storage(storage));
        }
        for input in &decl.inputs {
            w.line(Self::property(input));
        }
        w.line("let footer: Footer");
        w.blank();

        if config.docs {
            w.doc("Creates the surface with a trailing custom footer.");
        }
        w.open(format!("{access} init({}) {{", designated.join(", ")));
        for input in &decl.inputs {
            w.line(Self::assignment(input));
        }
        w.line("self.footer = footer()");
        w.close("}");
        w.blank();

        w.open(format!("{access} var body: some View {{"));
        w.open(format!("{} {{", Self::container(decl.kind)));
        self.body(&mut w, &decl.body);
        w.line("footer");
        w.close("}");
        w.close("}");
        w.close("}");
        w.blank();

        w.open(format!(
            "{access} extension {} where Footer == EmptyView {{",
            decl.type_name
        ));
        if config.docs {
            w.doc("Creates the surface without a footer.");
        }
        w.open(format!("init({}) {{", params.join(", ")));
        w.line(format!(
            "self.init({}) {{ EmptyView() }}",
            forwarded.join(", ")
        ));
        w.close("}");
        w.close("}");

        Ok(w.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::ir::{
        AccessLevel, GenerationArguments, LabelStyle, MemberAttrs, MemberSpec, ModelSpec,
        NumericType,
    };

    const EDIT: MemberAttrs = MemberAttrs::VISIBLE.union(MemberAttrs::MODIFIABLE);

    fn render(model: &ModelSpec, kind: SurfaceKind, style: LabelStyle, config: RenderConfig) -> String {
        let args = GenerationArguments::new([kind], style);
        let artifacts = Engine::new().with_config(config).generate(model, &args).unwrap();
        artifacts[0].text.clone()
    }

    #[test]
    fn test_controls() {
        let r = SwiftUiRenderer::new();
        assert_eq!(
            r.control("K", &Widget::Toggle { binding: Binding::two_way("model.on") }),
            "Toggle(\"K\", isOn: $model.on)"
        );
        assert_eq!(
            r.control("K", &Widget::TextField { binding: Binding::constant("model.name") }),
            "TextField(\"K\", text: .constant(model.name))"
        );
        assert_eq!(
            r.control("K", &Widget::DatePicker { binding: Binding::two_way("since") }),
            "DatePicker(\"K\", selection: $since)"
        );
        assert_eq!(
            r.control("K", &Widget::NumberField { binding: Binding::two_way("volume") }),
            "TextField(\"K\", value: $volume, formatter: formatter)"
        );
        assert_eq!(
            r.control("K", &Widget::BoolText { path: "model.on".into() }),
            "Text(model.on.description)"
        );
        assert_eq!(
            r.control("K", &Widget::DateText { path: "model.at".into() }),
            "Text(model.at, format: .dateTime)"
        );
        assert_eq!(
            r.control("K", &Widget::NumberText { path: "model.n".into() }),
            "Text(model.n, format: .number)"
        );
        assert_eq!(r.control("K", &Widget::Masked), "Text(\"********\")");
    }

    #[test]
    fn test_nested_controls() {
        let r = SwiftUiRenderer::new();
        assert_eq!(
            r.control(
                "K",
                &Widget::Nested {
                    type_name: "Address".into(),
                    kind: SurfaceKind::Form,
                    input: Some(NestedInput::Binding(Binding::constant("model.address"))),
                }
            ),
            "AddressForm(model: .constant(model.address), formatter: formatter)"
        );
        assert_eq!(
            r.control(
                "K",
                &Widget::Nested {
                    type_name: "Theme".into(),
                    kind: SurfaceKind::Settings,
                    input: None,
                }
            ),
            "ThemeSettingsView(formatter: formatter)"
        );
        assert_eq!(
            r.control(
                "K",
                &Widget::Nested {
                    type_name: "User".into(),
                    kind: SurfaceKind::View,
                    input: Some(NestedInput::Value("model.owner".into())),
                }
            ),
            "UserView(model: model.owner)"
        );
    }

    #[test]
    fn test_keys_are_escaped() {
        let r = SwiftUiRenderer::new();
        assert_eq!(
            r.control("a\"b", &Widget::Toggle { binding: Binding::two_way("x") }),
            "Toggle(\"a\\\"b\", isOn: $x)"
        );
    }

    #[test]
    fn test_preamble() {
        let r = SwiftUiRenderer::new();
        assert_eq!(r.preamble(&RenderConfig::default()), "import SwiftUI\n");
        assert_eq!(r.file_extension(), "swift");
    }

    #[test]
    fn test_credentials_view_snapshot() {
        let model = ModelSpec::new("Credentials", AccessLevel::Public).with_members(vec![
            MemberSpec::new("username", "String", EDIT),
            MemberSpec::new("password", "String", EDIT | MemberAttrs::SECURE),
        ]);
        let text = render(&model, SurfaceKind::View, LabelStyle::Unlabeled, RenderConfig::default());
        insta::assert_snapshot!(text, @r#"
/// Read-only view of `Credentials`.
public struct CredentialsView<Footer: View>: View {
    let model: Credentials
    let footer: Footer

    /// Creates the surface with a trailing custom footer.
    public init(model: Credentials, @ViewBuilder footer: () -> Footer) {
        self.model = model
        self.footer = footer()
    }

    public var body: some View {
        List {
            Text(model.username)
            Text("********")
            footer
        }
    }
}

public extension CredentialsView where Footer == EmptyView {
    /// Creates the surface without a footer.
    init(model: Credentials) {
        self.init(model: model) { EmptyView() }
    }
}
"#);
    }

    #[test]
    fn test_prefs_settings_snapshot() {
        let model = ModelSpec::new("Prefs", AccessLevel::Public).with_members(vec![
            MemberSpec::new("volume", "f64", EDIT)
                .with_section(Some("General".into()))
                .with_initializer("0.5"),
            MemberSpec::new("muted", "bool", MemberAttrs::VISIBLE).with_section(None),
        ]);
        let text = render(&model, SurfaceKind::Settings, LabelStyle::Unlabeled, RenderConfig::default());
        insta::assert_snapshot!(text, @r#"
/// Persisted settings for `Prefs`.
public struct PrefsSettingsView<Footer: View>: View {
    @AppStorage("Prefs.volume") var volume: Double = 0.5
    @AppStorage("Prefs.muted") var muted: Bool = false
    let formatter: Formatter
    let footer: Footer

    /// Creates the surface with a trailing custom footer.
    public init(formatter: Formatter, @ViewBuilder footer: () -> Footer) {
        self.formatter = formatter
        self.footer = footer()
    }

    public var body: some View {
        Form {
            Section("PrefsSettingsView.General") {
                TextField("PrefsSettingsView.volume", value: $volume, formatter: formatter)
            }
            Section {
                Toggle("PrefsSettingsView.muted", isOn: .constant(muted))
            }
            footer
        }
    }
}

public extension PrefsSettingsView where Footer == EmptyView {
    /// Creates the surface without a footer.
    init(formatter: Formatter) {
        self.init(formatter: formatter) { EmptyView() }
    }
}
"#);
    }

    #[test]
    fn test_labeled_form_snapshot() {
        let model = ModelSpec::new("Account", AccessLevel::Internal).with_members(vec![
            MemberSpec::new("email", "String", EDIT),
            MemberSpec::new("address", "Address", EDIT),
        ]);
        let config = RenderConfig::default().with_docs(false);
        let text = render(&model, SurfaceKind::Form, LabelStyle::Labeled, config);
        insta::assert_snapshot!(text, @r#"
internal struct AccountForm<Footer: View>: View {
    @Binding var model: Account
    let formatter: Formatter
    let footer: Footer

    internal init(model: Binding<Account>, formatter: Formatter, @ViewBuilder footer: () -> Footer) {
        self._model = model
        self.formatter = formatter
        self.footer = footer()
    }

    internal var body: some View {
        Form {
            LabeledContent("AccountForm.email.label") {
                TextField("AccountForm.email", text: $model.email)
            }
            LabeledContent("AccountForm.address.label") {
                AddressForm(model: $model.address, formatter: formatter)
            }
            footer
        }
    }
}

internal extension AccountForm where Footer == EmptyView {
    init(model: Binding<Account>, formatter: Formatter) {
        self.init(model: model, formatter: formatter) { EmptyView() }
    }
}
"#);
    }

    #[test]
    fn test_empty_view_renders_placeholder_only() {
        let model = ModelSpec::new("Empty", AccessLevel::FilePrivate);
        let text = render(&model, SurfaceKind::View, LabelStyle::Unlabeled, RenderConfig::default());
        assert!(text.contains("fileprivate struct EmptyView<Footer: View>: View {"));
        assert!(text.contains("        List {\n            Text(\"EmptyView.empty\")\n            footer\n        }\n"));
    }

    #[test]
    fn test_description_replaces_summary() {
        let model = ModelSpec::new("Note", AccessLevel::Public)
            .with_description("A short note.\n\nShown on the dashboard.");
        let text = render(&model, SurfaceKind::Form, LabelStyle::Unlabeled, RenderConfig::default());
        assert!(text.starts_with("/// A short note.\n///\n/// Shown on the dashboard.\npublic struct NoteForm"));
    }

    #[test]
    fn test_settings_type_defaults() {
        let model = ModelSpec::new("Prefs", AccessLevel::Public).with_members(vec![
            MemberSpec::new("name", "String", EDIT),
            MemberSpec::new("since", "NaiveDate", EDIT),
            MemberSpec::new("count", "u32", EDIT),
            MemberSpec::new("theme", "Theme", EDIT),
        ]);
        let text = render(&model, SurfaceKind::Settings, LabelStyle::Unlabeled, RenderConfig::default());
        assert!(text.contains("@AppStorage(\"Prefs.name\") var name: String = \"\""));
        assert!(text.contains("@AppStorage(\"Prefs.since\") var since: Date = Date()"));
        assert!(text.contains(&format!(
            "@AppStorage(\"Prefs.count\") var count: {} = 0",
            SwiftTypeMapper::new().numeric_type(NumericType::U32)
        )));
        assert!(!text.contains("Prefs.theme\")"));
        assert!(text.contains("ThemeSettingsView(formatter: formatter)"));
    }

    #[test]
    fn test_crlf_and_tabs() {
        let model = ModelSpec::new("Flag", AccessLevel::Public)
            .with_members(vec![MemberSpec::new("on", "bool", EDIT)]);
        let config = RenderConfig::default()
            .with_indent(crate::render::IndentStyle::Tabs)
            .with_line_ending(crate::render::LineEnding::CrLf)
            .with_docs(false);
        let text = render(&model, SurfaceKind::Form, LabelStyle::Unlabeled, config);
        assert!(text.starts_with("public struct FlagForm<Footer: View>: View {\r\n\t@Binding var model: Flag\r\n"));
        assert!(text.contains("\t\t\tToggle(\"FlagForm.on\", isOn: $model.on)\r\n"));
        assert!(!text.replace("\r\n", "").contains('\n'));
    }
}
