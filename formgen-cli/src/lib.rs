//! # formgen-cli
//!
//! CLI library for generating SwiftUI surfaces from Rust source files.
//!
//! Models are found by scanning for `#[derive(Surface)]` and generated with
//! the same engine as the derive macro.
//!
//! - [`config`] - `formgen.toml` loading and merging with flags
//! - [`scanner`] - Source file discovery and filtering
//! - [`parser`] - Rust source parsing and model extraction
//! - [`generator`] - Surface generation, file layout and manifest
//! - [`pipeline`] - Scan, generate, write and validate
//! - [`writer`] - File output and dry-run support
//! - [`watcher`] - File system watching for development mode
//! - [`logging`] - `tracing` subscriber setup
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod scanner;
pub mod watcher;
pub mod writer;

pub use config::{Config, ConfigManager, Layout};
pub use error::{CliError, CliResult};
pub use generator::{GeneratedOutput, SurfaceGenerator};
pub use parser::{ParsedModel, RustParser};
pub use pipeline::{Pipeline, Stale};
pub use scanner::{SourceFile, SourceScanner};
pub use watcher::FileWatcher;
pub use writer::FileWriter;
