use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for the crate.
///
/// Storage reads are recoverable: the store treats unreadable history as
/// empty and hands the error back as a soft warning. Storage writes are not,
/// since the caller must know the result it holds was never persisted.
/// "Scan not found" is an `Option`, not an error.
#[derive(Debug, Error)]
pub enum AutodiagError {
    #[error("scan history at {} could not be read: {reason}", path.display())]
    StorageRead { path: PathBuf, reason: String },

    #[error("failed to write scan history to {}: {reason}", path.display())]
    StorageWrite { path: PathBuf, reason: String },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AutodiagError>;
