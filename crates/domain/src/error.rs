//! Domain error types.

use thiserror::Error;

/// Errors that can occur while loading or saving a project tree.
///
/// The generator itself is total and never fails; errors only arise at
/// the serialization boundary the collaborator uses.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The project JSON could not be parsed.
    #[error("invalid project JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Result type alias for project serialization operations.
pub type ProjectResult<T> = Result<T, ProjectError>;
