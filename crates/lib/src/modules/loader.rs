//! Loading a single module descriptor.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::trace;

use crate::paths::module_manifest_path;
use crate::project::ModuleDescriptor;

/// Errors that can occur while loading one module.
#[derive(Debug, Error)]
pub enum ModuleLoadError {
  #[error("module manifest not found: {}", path.display())]
  NotFound { path: PathBuf },

  #[error("failed to read module manifest {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to parse module manifest {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("module manifest {} has no string 'name'", path.display())]
  MissingName { path: PathBuf },

  /// Infrastructure templates belong to the project, never to a module.
  #[error("module '{module}' declares its own infrastructure template")]
  EmbeddedTemplate { module: String },
}

/// Produces the descriptor of one module directory.
///
/// `module` is relative to `<root>/back/modules`.
pub trait ModuleLoader {
  fn load(&self, root: &Path, module: &Path) -> Result<ModuleDescriptor, ModuleLoadError>;
}

/// Loads `<root>/back/modules/<module>/s-module.json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonModuleLoader;

impl ModuleLoader for JsonModuleLoader {
  fn load(&self, root: &Path, module: &Path) -> Result<ModuleDescriptor, ModuleLoadError> {
    let path = module_manifest_path(root, module);

    let content = match fs::read_to_string(&path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(ModuleLoadError::NotFound { path }),
      Err(source) => return Err(ModuleLoadError::Read { path, source }),
    };

    let value: Value = match serde_json::from_str(&content) {
      Ok(value) => value,
      Err(source) => return Err(ModuleLoadError::Parse { path, source }),
    };

    if !value.get("name").is_some_and(Value::is_string) {
      return Err(ModuleLoadError::MissingName { path });
    }

    trace!(path = %path.display(), "parsed module manifest");
    serde_json::from_value(value).map_err(|source| ModuleLoadError::Parse { path, source })
  }
}
