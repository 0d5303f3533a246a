//! Error types shared by the loading, parsing and persistence layers

use std::path::PathBuf;

/// Result alias defaulting to [`ArchaismError`]
pub type Result<T, E = ArchaismError> = std::result::Result<T, E>;

/// Everything that can go wrong while loading or persisting archaism data.
///
/// Malformed dictionary lines and unparsable years are not errors: they are
/// skipped (and counted) by the respective loaders.
#[derive(Debug, thiserror::Error)]
pub enum ArchaismError {
  /// A required input file does not exist
  #[error("required input file '{}' not found", .0.display())]
  MissingInput(PathBuf),

  /// Filesystem error
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Reading or writing a CSV table failed
  #[error(transparent)]
  Csv(#[from] csv::Error),

  /// Encoding or decoding the binary record mirror failed
  #[error(transparent)]
  Bincode(#[from] bincode::Error),

  /// The optional JSON configuration file is malformed
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// Moving a finished temporary file into place failed
  #[error(transparent)]
  TempPersist(#[from] tempfile::PersistError),
}

impl ArchaismError {
  /// True for the one error class the binaries report and exit on with status 1
  pub fn is_missing_input(&self) -> bool {
    matches!(self, ArchaismError::MissingInput(_))
  }
}

/// Fail with [`ArchaismError::MissingInput`] unless `path` exists
pub fn require_file(path: &std::path::Path) -> Result<()> {
  if path.exists() {
    Ok(())
  } else {
    Err(ArchaismError::MissingInput(path.to_path_buf()))
  }
}
