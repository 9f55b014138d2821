//! Export utilities for writing generated surfaces into source files.

use crate::kind::{Artifact, SurfaceKind};
use crate::registry::{Bundle, SurfaceRegistry};

/// Import line every generated source file needs.
pub const SWIFTUI_IMPORT: &str = "import SwiftUI";

/// Configuration for source file generation.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Whether to include the `import SwiftUI` line.
    pub include_import: bool,

    /// Custom preamble to add at the top of the file.
    pub preamble: Option<String>,

    /// Custom postamble to add at the bottom of the file.
    pub postamble: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_import: true,
            preamble: None,
            postamble: None,
        }
    }
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_import(mut self, include: bool) -> Self {
        self.include_import = include;
        self
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    pub fn with_postamble(mut self, postamble: impl Into<String>) -> Self {
        self.postamble = Some(postamble.into());
        self
    }
}

/// Join artifacts into one source file, in the order given.
pub fn generate_source_file(artifacts: &[Artifact], config: &ExportConfig) -> String {
    let mut output = String::new();

    if let Some(preamble) = &config.preamble {
        output.push_str(preamble.trim_end());
        output.push_str("\n\n");
    }

    if config.include_import {
        output.push_str(SWIFTUI_IMPORT);
        output.push_str("\n\n");
    }

    for (i, artifact) in artifacts.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(artifact.source.trim_end());
        output.push('\n');
    }

    if let Some(postamble) = &config.postamble {
        output.push('\n');
        output.push_str(postamble.trim_end());
        output.push('\n');
    }

    output
}

/// Source file for everything in the registry, plus what could not be resolved.
pub fn generate_bundle(registry: &SurfaceRegistry, config: &ExportConfig) -> (String, Vec<String>) {
    let Bundle { artifacts, unresolved } = registry.bundle();
    (generate_source_file(&artifacts, config), unresolved)
}

/// Source file for one surface of `root` and every surface it references.
pub fn generate_closure(
    registry: &SurfaceRegistry,
    root: &str,
    kind: SurfaceKind,
    config: &ExportConfig,
) -> (String, Vec<String>) {
    let Bundle { artifacts, unresolved } = registry.closure(root, kind);
    (generate_source_file(&artifacts, config), unresolved)
}

/// An index comment listing the artifact types in a file.
pub fn generate_index(artifacts: &[Artifact]) -> String {
    let mut output = String::from("// Generated surfaces\n");

    let mut entries: Vec<_> = artifacts.iter().map(|a| (a.type_name.as_str(), a.model)).collect();
    entries.sort_unstable();

    for (type_name, model) in entries {
        output.push_str(&format!("// - {type_name} ({model})\n"));
    }

    output
}
