//! Surface generation for parsed models.
//!
//! Every model is run through the same engine the derive macro uses, so
//! files written by the CLI match the source embedded by `#[derive(Surface)]`.
//! Models are emitted dependencies first; references to surfaces that were
//! not generated are reported as unresolved.

use crate::config::{Config, Layout};
use crate::error::{CliResult, GenerateError};
use crate::parser::ParsedModel;
use formgen_codegen::ir::SurfaceKind;
use formgen_codegen::render::{RenderConfig, Renderer};
use formgen_codegen::{Engine, GeneratedArtifact, ModelParser, SwiftUiRenderer};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// A file to write, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub content: String,
}

/// A model and the artifacts generated from it.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedModel {
    /// Rust type name, which every surface name derives from.
    pub name: String,

    /// Declaring file, relative to the input directory.
    pub source: PathBuf,

    pub line: usize,

    pub artifacts: Vec<ArtifactEntry>,
}

/// Manifest entry for one artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactEntry {
    pub kind: SurfaceKind,

    pub type_name: String,

    /// Output file holding the artifact, relative to the output directory.
    pub file: PathBuf,

    /// Models whose surfaces this artifact references.
    pub nested: Vec<String>,
}

/// Description of one generation run, written as `formgen-manifest.json`.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub generator: &'static str,

    pub version: &'static str,

    pub renderer: &'static str,

    pub layout: Layout,

    pub models: Vec<GeneratedModel>,

    pub unresolved: Vec<String>,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    pub files: Vec<OutputFile>,

    /// Models in emission order.
    pub models: Vec<GeneratedModel>,

    /// Artifact type names that are referenced but were not generated.
    pub unresolved: Vec<String>,

    layout: Layout,
}

impl GeneratedOutput {
    pub fn artifact_count(&self) -> usize {
        self.models.iter().map(|m| m.artifacts.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn manifest(&self) -> Manifest {
        Manifest {
            generator: "formgen",
            version: env!("CARGO_PKG_VERSION"),
            renderer: SwiftUiRenderer::new().id(),
            layout: self.layout,
            models: self.models.clone(),
            unresolved: self.unresolved.clone(),
        }
    }

    /// Pretty-printed manifest JSON.
    pub fn manifest_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.manifest()).map(|json| json + "\n")
    }
}

struct Unit {
    parsed: ParsedModel,
    name: String,
    artifacts: Vec<GeneratedArtifact>,
}

/// Generates SwiftUI sources for parsed models.
pub struct SurfaceGenerator {
    config: Config,
    engine: Engine,
}

impl SurfaceGenerator {
    pub fn new(config: Config) -> Self {
        let engine = Engine::new().with_config(config.render.render_config());
        Self { config, engine }
    }

    fn render_config(&self) -> &RenderConfig {
        self.engine.config()
    }

    /// Generate output files for parsed models.
    ///
    /// Fails on the first model the engine rejects.
    pub fn generate(&self, models: Vec<ParsedModel>) -> CliResult<GeneratedOutput> {
        let mut units: BTreeMap<String, Unit> = BTreeMap::new();

        for parsed in models {
            let unit = self.generate_model(parsed)?;
            if let Some(existing) = units.get(&unit.name) {
                return Err(GenerateError::DuplicateModel {
                    name: unit.name,
                    first: existing.parsed.location.file.clone(),
                    second: unit.parsed.location.file,
                }
                .into());
            }
            units.insert(unit.name.clone(), unit);
        }

        let order = emission_order(&units);
        let unresolved = unresolved_references(&units);
        for name in &unresolved {
            tracing::warn!(artifact = %name, "referenced surface was not generated");
        }

        let ordered: Vec<&Unit> = order.iter().filter_map(|name| units.get(name)).collect();
        let (files, models) = match self.config.output.layout {
            Layout::Bundle => self.bundle(&ordered),
            Layout::PerArtifact => self.per_artifact(&ordered),
        };

        Ok(GeneratedOutput {
            files,
            models,
            unresolved,
            layout: self.config.output.layout,
        })
    }

    fn generate_model(&self, parsed: ParsedModel) -> CliResult<Unit> {
        let rejected = |e: formgen_codegen::Error| GenerateError::Model {
            name: parsed.name.clone(),
            file: parsed.location.file.clone(),
            line: parsed.location.line,
            message: e.to_string(),
        };

        let (model, args) = ModelParser::parse(&parsed.derive_input).map_err(rejected)?;
        let artifacts = self.engine.generate(&model, &args).map_err(rejected)?;

        tracing::debug!(
            model = %model.name,
            file = %parsed.location.file.display(),
            artifacts = artifacts.len(),
            "generated model"
        );

        Ok(Unit {
            name: model.name,
            parsed,
            artifacts,
        })
    }

    /// One file holding every artifact.
    fn bundle(&self, units: &[&Unit]) -> (Vec<OutputFile>, Vec<GeneratedModel>) {
        let file = PathBuf::from(&self.config.output.file);
        let texts: Vec<&str> = units
            .iter()
            .flat_map(|unit| unit.artifacts.iter().map(|a| a.text.as_str()))
            .collect();

        let models = units.iter().map(|unit| describe(unit, |_| file.clone())).collect();

        if texts.is_empty() {
            return (Vec::new(), models);
        }

        let content = self.file_content(&texts);
        (vec![OutputFile { path: file, content }], models)
    }

    /// One file per artifact, named after its type.
    fn per_artifact(&self, units: &[&Unit]) -> (Vec<OutputFile>, Vec<GeneratedModel>) {
        let extension = SwiftUiRenderer::new().file_extension();
        let file_of = |artifact: &GeneratedArtifact| {
            PathBuf::from(format!("{}.{extension}", artifact.type_name))
        };

        let files = units
            .iter()
            .flat_map(|unit| unit.artifacts.iter())
            .map(|artifact| OutputFile {
                path: file_of(artifact),
                content: self.file_content(&[artifact.text.as_str()]),
            })
            .collect();

        let models = units.iter().map(|unit| describe(unit, file_of)).collect();
        (files, models)
    }

    /// Header, preamble and artifacts separated by blank lines.
    fn file_content(&self, texts: &[&str]) -> String {
        let config = self.render_config();
        let newline = config.line_ending.as_str();
        let mut sections: Vec<String> = Vec::new();

        if let Some(header) = &self.config.render.header {
            let banner: String = header
                .lines()
                .map(|line| {
                    if line.is_empty() {
                        format!("//{newline}")
                    } else {
                        format!("// {line}{newline}")
                    }
                })
                .collect();
            sections.push(banner);
        }

        sections.push(SwiftUiRenderer::new().preamble(config));
        sections.extend(texts.iter().map(|text| text.to_string()));
        sections.join(newline)
    }
}

fn describe(unit: &Unit, file_of: impl Fn(&GeneratedArtifact) -> PathBuf) -> GeneratedModel {
    GeneratedModel {
        name: unit.name.clone(),
        source: unit.parsed.location.file.clone(),
        line: unit.parsed.location.line,
        artifacts: unit
            .artifacts
            .iter()
            .map(|artifact| ArtifactEntry {
                kind: artifact.kind,
                type_name: artifact.type_name.clone(),
                file: file_of(artifact),
                nested: artifact.nested.clone(),
            })
            .collect(),
    }
}

/// Model names sorted so that referenced models come first.
///
/// Roots are visited by name; a reference cycle is cut at the first revisit.
fn emission_order(units: &BTreeMap<String, Unit>) -> Vec<String> {
    fn visit(
        name: &str,
        units: &BTreeMap<String, Unit>,
        visited: &mut BTreeSet<String>,
        order: &mut Vec<String>,
    ) {
        let Some(unit) = units.get(name) else {
            return;
        };
        if !visited.insert(name.to_string()) {
            return;
        }
        for artifact in &unit.artifacts {
            for nested in &artifact.nested {
                visit(nested, units, visited, order);
            }
        }
        order.push(name.to_string());
    }

    let mut visited = BTreeSet::new();
    let mut order = Vec::with_capacity(units.len());
    for name in units.keys() {
        visit(name, units, &mut visited, &mut order);
    }
    order
}

/// Referenced artifacts that no model provides, in first-reference order.
fn unresolved_references(units: &BTreeMap<String, Unit>) -> Vec<String> {
    let mut unresolved = Vec::new();
    for unit in units.values() {
        for artifact in &unit.artifacts {
            for nested in &artifact.nested {
                let provided = units
                    .get(nested)
                    .is_some_and(|dep| dep.artifacts.iter().any(|a| a.kind == artifact.kind));
                let type_name = artifact.kind.type_name(nested);
                if !provided && !unresolved.contains(&type_name) {
                    unresolved.push(type_name);
                }
            }
        }
    }
    unresolved
}
