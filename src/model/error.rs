use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model artifact '{0}'")]
    ArtifactRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to write model artifact '{0}'")]
    ArtifactWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode model artifact '{0}'")]
    ArtifactDecode(PathBuf, #[source] Box<bincode::error::DecodeError>),

    #[error("Failed to encode model artifact")]
    ArtifactEncode(#[source] Box<bincode::error::EncodeError>),

    #[error("Model artifact '{path}' has format version {found}, expected {expected}")]
    UnsupportedVersion {
        path: PathBuf,
        expected: u32,
        found: u32,
    },

    #[error("Model artifact is inconsistent: {0}")]
    InvalidArtifact(String),

    #[error("Model expects {expected} features, got {found}")]
    InputDimension { expected: usize, found: usize },

    #[error("Model produced a non-finite output ({0})")]
    NonFiniteOutput(f64),

    // Covers errors joining tokio blocking tasks
    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
