//! Rust code emitted by the derive macro.

pub mod impl_block;
