//! Discovery of Rust sources under the input directory.
//!
//! `.gitignore` rules apply even outside a git checkout. An optional glob
//! narrows the set by path relative to the root.

use crate::config::ScanConfig;
use crate::error::{CliError, CliResult, ScanError};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// A Rust file and its text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,

    /// Path relative to the scan root.
    pub relative_path: PathBuf,

    pub content: String,
}

#[derive(Debug)]
pub struct SourceScanner {
    root: PathBuf,
    gitignore: bool,
    glob: Option<glob::Pattern>,
}

impl SourceScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            gitignore: true,
            glob: None,
        }
    }

    /// Scanner configured from a `[scan]` section.
    pub fn from_config(root: impl Into<PathBuf>, config: &ScanConfig) -> Result<Self, ScanError> {
        let scanner = Self::new(root).with_gitignore(config.respect_gitignore);
        match config.filter.as_deref() {
            Some(pattern) => scanner.with_filter(pattern),
            None => Ok(scanner),
        }
    }

    pub fn with_gitignore(self, gitignore: bool) -> Self {
        Self { gitignore, ..self }
    }

    /// Keep only files whose relative path matches `pattern`.
    pub fn with_filter(self, pattern: &str) -> Result<Self, ScanError> {
        let glob = glob::Pattern::new(pattern)
            .map_err(|e| ScanError::invalid_pattern(pattern, e.to_string()))?;
        Ok(Self {
            glob: Some(glob),
            ..self
        })
    }

    /// Read every matching `.rs` file, sorted by relative path.
    ///
    /// An empty result is a [`ScanError::NoRustFiles`].
    pub fn scan(&self) -> CliResult<Vec<SourceFile>> {
        if !self.root.exists() {
            return Err(ScanError::not_found(self.root.clone()).into());
        }

        let mut files = self
            .matching_paths()?
            .into_iter()
            .map(|path| self.read(path))
            .collect::<Result<Vec<_>, _>>()?;

        if files.is_empty() {
            return Err(ScanError::no_rust_files(self.root.clone()).into());
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        tracing::debug!(root = %self.root.display(), files = files.len(), "scanned sources");
        Ok(files)
    }

    /// Like [`scan`](Self::scan), but an empty tree is not an error.
    pub fn scan_allow_empty(&self) -> CliResult<Vec<SourceFile>> {
        self.scan().or_else(|e| match e {
            CliError::Scan(ScanError::NoRustFiles { .. }) => Ok(Vec::new()),
            other => Err(other),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn matching_paths(&self) -> Result<Vec<PathBuf>, ScanError> {
        let walk = WalkBuilder::new(&self.root)
            .hidden(false)
            .require_git(false)
            .git_ignore(self.gitignore)
            .git_global(self.gitignore)
            .git_exclude(self.gitignore)
            .build();

        let mut paths = Vec::new();
        for entry in walk {
            let path = entry?.into_path();
            let is_rust = path.is_file() && path.extension().is_some_and(|ext| ext == "rs");
            if is_rust && self.selected(&path) {
                paths.push(path);
            }
        }
        Ok(paths)
    }

    fn selected(&self, path: &Path) -> bool {
        self.glob
            .as_ref()
            .map_or(true, |glob| glob.matches_path(&self.relative(path)))
    }

    fn read(&self, path: PathBuf) -> Result<SourceFile, ScanError> {
        let content = std::fs::read_to_string(&path).map_err(|source| ScanError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(SourceFile {
            relative_path: self.relative(&path),
            path,
            content,
        })
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }
}
