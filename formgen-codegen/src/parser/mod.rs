//! Parser module for turning Rust declarations into model IR.
//!
//! This module contains parsers for:
//! - `#[surface(...)]` container and field attributes
//! - Member type names
//! - Swift identifier checks
//! - Whole declarations

pub mod attributes;
pub mod identifier;
pub mod model_parser;
pub mod type_parser;

pub use model_parser::{extract_doc_comments, ModelParser};
