//! Writing generated files to disk.

use crate::error::{CliResult, WriteError};
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to one output file.
#[derive(Debug)]
pub enum WriteOutcome {
    Written { path: PathBuf, bytes: usize },

    /// The file already had this content and was left untouched.
    Unchanged { path: PathBuf },

    /// Dry run: the content that would have been written.
    Planned { path: PathBuf, content: String },
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written { path, .. }
            | WriteOutcome::Unchanged { path }
            | WriteOutcome::Planned { path, .. } => path,
        }
    }

    pub fn was_written(&self) -> bool {
        matches!(self, WriteOutcome::Written { .. })
    }
}

/// Writes output files, skipping those whose content is already current.
///
/// Skipping keeps modification times stable, so watch mode does not touch
/// outputs a change did not affect.
#[derive(Debug, Clone, Copy)]
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteOutcome> {
        let path = path.to_path_buf();

        if self.dry_run {
            let content = content.to_string();
            return Ok(WriteOutcome::Planned { path, content });
        }

        if fs::read_to_string(&path).is_ok_and(|current| current == content) {
            tracing::debug!(path = %path.display(), "output unchanged");
            return Ok(WriteOutcome::Unchanged { path });
        }

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        fs::write(&path, content).map_err(|source| WriteError::WriteFile {
            path: path.clone(),
            source,
        })?;

        let bytes = content.len();
        tracing::debug!(path = %path.display(), bytes, "wrote output");
        Ok(WriteOutcome::Written { path, bytes })
    }
}
