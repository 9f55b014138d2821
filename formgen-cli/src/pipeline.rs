//! Scan, parse, generate and write in one place.
//!
//! `generate`, `validate` and watch mode all go through [`Pipeline`] so they
//! agree on what the output should be.

use crate::config::Config;
use crate::error::{CliResult, ParseError};
use crate::generator::{GeneratedOutput, SurfaceGenerator};
use crate::parser::RustParser;
use crate::scanner::SourceScanner;
use crate::writer::{FileWriter, WriteOutcome};
use std::path::{Path, PathBuf};

/// Outcome of scanning and generating.
#[derive(Debug)]
pub struct Run {
    pub files_scanned: usize,

    /// Files that could not be parsed; their models are skipped.
    pub parse_errors: Vec<ParseError>,

    pub output: GeneratedOutput,
}

/// A generated file that differs from what is on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stale {
    Missing(PathBuf),
    Outdated(PathBuf),
}

impl Stale {
    pub fn path(&self) -> &Path {
        match self {
            Stale::Missing(path) | Stale::Outdated(path) => path,
        }
    }
}

pub struct Pipeline {
    input: PathBuf,
    config: Config,
}

impl Pipeline {
    pub fn new(input: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            input: input.into(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Scan the input directory and generate surfaces.
    pub fn run(&self) -> CliResult<Run> {
        let files = SourceScanner::from_config(&self.input, &self.config.scan)?.scan_allow_empty()?;
        let (models, parse_errors) = RustParser::new().parse_files(&files);

        for error in &parse_errors {
            tracing::warn!(%error, "skipping unparsable file");
        }

        let output = SurfaceGenerator::new(self.config.clone()).generate(models)?;
        tracing::info!(
            files = files.len(),
            models = output.models.len(),
            artifacts = output.artifact_count(),
            "generation finished"
        );

        Ok(Run {
            files_scanned: files.len(),
            parse_errors,
            output,
        })
    }

    /// Every file a run produces, with paths under the output directory.
    pub fn planned_files(&self, output: &GeneratedOutput) -> CliResult<Vec<(PathBuf, String)>> {
        let dir = &self.config.output.dir;
        let mut files: Vec<(PathBuf, String)> = output
            .files
            .iter()
            .map(|file| (dir.join(&file.path), file.content.clone()))
            .collect();

        if self.config.output.manifest {
            let json = output
                .manifest_json()
                .map_err(crate::error::WriteError::Manifest)?;
            files.push((self.config.manifest_path(), json));
        }

        Ok(files)
    }

    /// Write a run's files.
    pub fn write(&self, output: &GeneratedOutput, dry_run: bool) -> CliResult<Vec<WriteOutcome>> {
        let writer = FileWriter::new(dry_run);
        self.planned_files(output)?
            .iter()
            .map(|(path, content)| writer.write(path, content))
            .collect()
    }

    /// Files on disk that do not match a fresh run.
    pub fn stale_files(&self, output: &GeneratedOutput) -> CliResult<Vec<Stale>> {
        let mut stale = Vec::new();
        for (path, content) in self.planned_files(output)? {
            match std::fs::read_to_string(&path) {
                Ok(existing) if existing == content => {}
                Ok(_) => stale.push(Stale::Outdated(path)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => stale.push(Stale::Missing(path)),
                Err(e) => return Err(e.into()),
            }
        }
        Ok(stale)
    }
}
