//! Error types for the structural selection engine.
//!
//! The taxonomy is deliberately small: a propagation request naming an
//! unknown node id and an empty document are *not* errors (both are valid
//! no-op conditions handled by [`crate::session::Session`]), and a failure
//! extracting a single page is logged and skipped without surfacing here.

use thiserror::Error;

/// Primary error type for document selection operations.
#[derive(Error, Debug)]
pub enum SelectError {
    /// An external collaborator (page renderer, block-tree renderer,
    /// workbook parser) was never registered. Recoverable by the caller;
    /// the core does not retry.
    #[error("{kind} provider not available")]
    ProviderUnavailable { kind: &'static str },

    /// A provider failed to produce geometry or text for its input.
    #[error("provider error: {0}")]
    Provider(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for SelectError.
pub type Result<T> = std::result::Result<T, SelectError>;
