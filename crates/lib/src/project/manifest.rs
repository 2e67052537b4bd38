//! Reading the project manifest (`s-project.json`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::paths::manifest_path;

/// Errors that can occur while reading or applying the project manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  /// No manifest at the expected location.
  #[error("project manifest not found: {}", path.display())]
  NotFound { path: PathBuf },

  /// The manifest exists but could not be read.
  #[error("failed to read project manifest {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  /// The manifest is not valid JSON.
  #[error("failed to parse project manifest {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  /// The manifest parsed, but its top level is not an object.
  #[error("project manifest {} must contain a JSON object", path.display())]
  NotAnObject { path: PathBuf },

  /// A known manifest key holds a value of the wrong shape.
  #[error("invalid value for manifest key '{key}': {source}")]
  InvalidField { key: String, source: serde_json::Error },
}

/// Read `<root>/s-project.json` into its top-level key/value pairs.
pub fn read_manifest(root: &Path) -> Result<Map<String, Value>, ManifestError> {
  let path = manifest_path(root);

  let content = match fs::read_to_string(&path) {
    Ok(content) => content,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(ManifestError::NotFound { path }),
    Err(source) => return Err(ManifestError::Read { path, source }),
  };

  let value: Value = match serde_json::from_str(&content) {
    Ok(value) => value,
    Err(source) => return Err(ManifestError::Parse { path, source }),
  };

  match value {
    Value::Object(map) => {
      debug!(path = %path.display(), keys = map.len(), "read project manifest");
      Ok(map)
    }
    _ => Err(ManifestError::NotAnObject { path }),
  }
}
