//! Configuration management for the CLI.
//!
//! Configuration is read from `formgen.toml` and merged with command-line
//! arguments, which take precedence.

use crate::error::{CliResult, ConfigError};
use formgen_codegen::render::{IndentStyle, LineEnding, RenderConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "formgen.toml";

/// Manifest filename, written next to the generated sources.
pub const MANIFEST_FILENAME: &str = "formgen-manifest.json";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,

    pub render: RenderSection,

    pub scan: ScanConfig,
}

/// How generated artifacts are split into files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Every artifact in one file
    #[default]
    Bundle,

    /// One file per artifact, named after its type
    PerArtifact,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated files.
    pub dir: PathBuf,

    pub layout: Layout,

    /// Output filename for the bundle layout.
    pub file: String,

    /// Whether to write `formgen-manifest.json`.
    pub manifest: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./Generated"),
            layout: Layout::Bundle,
            file: "Surfaces.swift".to_string(),
            manifest: false,
        }
    }
}

/// `[render]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderSection {
    pub indent: IndentStyle,

    pub line_ending: LineEnding,

    /// Banner comment placed at the top of every generated file.
    pub header: Option<String>,

    /// Emit doc comments on generated declarations.
    pub docs: bool,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            indent: IndentStyle::default(),
            line_ending: LineEnding::default(),
            header: Some("Generated by formgen. Do not edit.".to_string()),
            docs: true,
        }
    }
}

impl RenderSection {
    /// Renderer configuration for the engine.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new()
            .with_indent(self.indent)
            .with_line_ending(self.line_ending)
            .with_docs(self.docs)
    }
}

/// `[scan]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub respect_gitignore: bool,

    /// Only scan files whose path relative to the input matches this glob.
    pub filter: Option<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            respect_gitignore: true,
            filter: None,
        }
    }
}

impl Config {
    /// Path of the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.output.dir.join(MANIFEST_FILENAME)
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// Without an explicit path, `formgen.toml` in the working directory is
    /// used if present and defaults otherwise. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::not_found(path.to_path_buf()).into());
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(CONFIG_FILENAME),
        };

        if !config_path.exists() {
            tracing::debug!("no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config = Self::parse(&content, &config_path)?;
        tracing::debug!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration text. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> CliResult<Config> {
        toml::from_str(content)
            .map_err(|e| ConfigError::invalid_toml(path.to_path_buf(), e.to_string()).into())
    }

    /// Merge CLI arguments into configuration.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(ref file) = args.output_file {
            config.output.file = file.clone();
        }

        if let Some(layout) = args.layout {
            config.output.layout = layout;
        }

        if let Some(manifest) = args.manifest {
            config.output.manifest = manifest;
        }

        if let Some(docs) = args.docs {
            config.render.docs = docs;
        }

        if let Some(ref filter) = args.filter {
            config.scan.filter = Some(filter.clone());
        }

        config
    }

    /// Default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# formgen configuration file

[output]
# Output directory for generated Swift files
dir = "./Generated"

# "bundle" writes every surface into `file`,
# "per-artifact" writes one file per surface (e.g. LoginForm.swift)
layout = "bundle"

# Output file name for the bundle layout
file = "Surfaces.swift"

# Write formgen-manifest.json describing the generated surfaces
manifest = false

[render]
# Indentation: "spaces2", "spaces4" or "tabs"
indent = "spaces4"

# Line endings: "lf" or "crlf"
line_ending = "lf"

# Banner comment at the top of every generated file
header = "Generated by formgen. Do not edit."

# Carry Rust doc comments into generated declarations
docs = true

[scan]
# Skip files ignored by .gitignore
respect_gitignore = true

# Only scan files matching this glob, relative to the input directory
# filter = "src/models/**/*.rs"
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    pub output: Option<PathBuf>,

    pub output_file: Option<String>,

    pub layout: Option<Layout>,

    pub manifest: Option<bool>,

    pub docs: Option<bool>,

    pub filter: Option<String>,
}
