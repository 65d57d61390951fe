use thiserror::Error;

/// Errors surfaced by the story engine.
///
/// Only caller/engine contract violations end up here. Degenerate but legal
/// edits (deleting the last page, updating nothing) are absorbed by the
/// reducer and never produce an error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The action `type` tag is not one the reducer knows about
    #[error("Unknown action kind: {0}")]
    UnknownAction(String),

    /// The action kind is known but its payload does not decode
    #[error("Malformed payload for {kind}: {source}")]
    MalformedAction {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// A RESTORE payload that would produce an invalid story
    #[error("Malformed restore payload: {0}")]
    MalformedRestore(String),

    /// Merging a property patch produced something that is not a valid target
    #[error("Invalid properties for {target}: {source}")]
    InvalidProperties {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Migration(#[from] MigrationError),

    #[error("Failed to (de)serialize story data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the migration pipeline.
///
/// Legacy data that is merely odd is repaired in place; these cover the few
/// structural requirements a document must meet before any step runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MigrationError {
    #[error("Invalid story document: {reason}")]
    InvalidDocument { reason: String },

    #[error("Unsupported story document version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Result type for migration operations
pub type MigrationResult<T> = Result<T, MigrationError>;
