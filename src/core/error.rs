use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the launcher generator.
/// Every module returns `Result<T, GeneratorError>`.
#[derive(Debug, Error)]
pub enum GeneratorError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Layout ──────────────────────────────────────────
    #[error("Library folder not found: {0:?}")]
    LibraryDirMissing(PathBuf),
}

/// Convenience alias used throughout the crate.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

impl GeneratorError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}
