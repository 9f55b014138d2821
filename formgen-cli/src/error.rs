//! CLI errors.
//!
//! Each pipeline stage has its own error enum; [`CliError`] wraps them for
//! `main`, which maps every failure to an exit code.

use std::path::PathBuf;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("scan: {0}")]
    Scan(#[from] ScanError),

    #[error("parse: {0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Generate(#[from] GenerateError),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("output: {0}")]
    Write(#[from] WriteError),

    #[error("watch: {0}")]
    Watch(#[from] WatchError),

    /// Generated files are missing or out of date.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// 2 when generated files are stale, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("input directory {path} does not exist")]
    DirectoryNotFound { path: PathBuf },

    #[error("no .rs files under {path}")]
    NoRustFiles { path: PathBuf },

    #[error("bad --filter glob `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Walk(#[from] ignore::Error),
}

impl ScanError {
    pub fn not_found(path: PathBuf) -> Self {
        Self::DirectoryNotFound { path }
    }

    pub fn no_rust_files(path: PathBuf) -> Self {
        Self::NoRustFiles { path }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

/// A source file `syn` could not parse. Positions are 1-indexed.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{file}:{line}:{column}: {message}")]
    Syntax {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

impl ParseError {
    pub fn syntax(file: PathBuf, line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            file,
            line,
            column,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The engine rejected a model.
    #[error("{file}:{line}: `{name}`: {message}")]
    Model {
        name: String,
        file: PathBuf,
        line: usize,
        message: String,
    },

    /// Two models produce the same surface names.
    #[error("`{name}` is declared in both {first} and {second}")]
    DuplicateModel {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{path} does not exist")]
    NotFound { path: PathBuf },

    #[error("{path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("cannot start watcher: {0}")]
    Init(String),
}
