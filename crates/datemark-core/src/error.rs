//! Error types for Datemark

use thiserror::Error;

use crate::record::{EntityId, ParseError};

/// Main error type for Datemark operations
#[derive(Debug, Error)]
pub enum DatemarkError {
    /// Malformed record line in the input corpus
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// An entity's observations leave some slot without any candidate component
    #[error("Contradictory observations for entity '{entity}' in sweep {sweep}")]
    Contradiction { entity: EntityId, sweep: u64 },

    /// Invalid operation for current puzzle state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for Datemark operations
pub type Result<T> = std::result::Result<T, DatemarkError>;
