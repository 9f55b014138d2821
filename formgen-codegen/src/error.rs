//! Error types for declaration parsing and generation.
//!
//! Every failure is fatal to the invocation: the engine either yields all
//! requested artifacts or none of them.

use quote::ToTokens;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised while turning a declaration into artifacts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The declaration is not record-like (enum, union, tuple struct).
    #[error("unsupported declaration target: {0}")]
    UnsupportedTarget(String),

    /// The generator arguments are missing, empty or malformed.
    #[error("malformed generation arguments: {0}")]
    MalformedArguments(String),

    /// A member carries attributes the declaration parser cannot read.
    #[error("invalid member attributes: {0}")]
    InvalidMember(String),
}

impl Error {
    /// Create an unsupported target error.
    pub fn unsupported_target(what: impl Into<String>) -> Self {
        Self::UnsupportedTarget(what.into())
    }

    /// Create a malformed arguments error.
    pub fn malformed_arguments(message: impl Into<String>) -> Self {
        Self::MalformedArguments(message.into())
    }

    /// Create an invalid member error.
    pub fn invalid_member(message: impl Into<String>) -> Self {
        Self::InvalidMember(message.into())
    }

    /// Convert to a `syn::Error` pointing at the given tokens.
    pub fn to_syn_error(&self, spanned: impl ToTokens) -> syn::Error {
        syn::Error::new_spanned(spanned, self.to_string())
    }
}
