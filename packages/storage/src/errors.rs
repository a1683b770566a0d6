use thiserror::Error;

use newsforge_model::IntegrityError;

/// Hard storage failures (export-to-file only; slot writes degrade to
/// warnings instead)
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Import failures, distinguishable so the caller can show the right
/// recovery message
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid newsletter JSON file")]
    Parse(#[source] serde_json::Error),

    #[error("Newsletter failed integrity validation: {0}")]
    Integrity(#[from] IntegrityError),
}
