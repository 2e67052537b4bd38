//! Module discovery and aggregation.
//!
//! Every immediate subdirectory of `<root>/back/modules` is one module. A
//! [`ModuleLoader`] turns each directory into a [`ModuleDescriptor`], and the
//! results are collected under each module's declared `name`, which need not
//! match its directory name.

mod loader;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::paths::modules_dir;
use crate::project::ModuleDescriptor;

pub use loader::{JsonModuleLoader, ModuleLoadError, ModuleLoader};

/// Errors that can occur while enumerating module directories.
#[derive(Debug, Error)]
pub enum DiscoveryError {
  /// The modules directory does not exist.
  #[error("modules directory not found: {}", path.display())]
  Missing { path: PathBuf },

  /// The modules path exists but is not a directory.
  #[error("modules path is not a directory: {}", path.display())]
  NotADirectory { path: PathBuf },

  /// Reading the modules directory failed.
  #[error("failed to read modules directory {}: {source}", path.display())]
  Walk { path: PathBuf, source: io::Error },

  /// Two module directories declare the same name.
  #[error("module '{name}' is declared by both {} and {}", first.display(), second.display())]
  DuplicateModule { name: String, first: PathBuf, second: PathBuf },
}

/// Errors from [`aggregate_modules`].
#[derive(Debug, Error)]
pub enum AggregateError {
  #[error(transparent)]
  Discovery(#[from] DiscoveryError),

  #[error(transparent)]
  Load(#[from] ModuleLoadError),
}

/// List module directories under `<root>/back/modules`, relative to it.
///
/// Plain files are skipped. The result is sorted by name.
pub fn discover_module_dirs(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
  let dir = modules_dir(root);

  match fs::metadata(&dir) {
    Ok(meta) if meta.is_dir() => {}
    Ok(_) => return Err(DiscoveryError::NotADirectory { path: dir }),
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(DiscoveryError::Missing { path: dir }),
    Err(source) => return Err(DiscoveryError::Walk { path: dir, source }),
  }

  let mut found = Vec::new();
  for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).sort_by_file_name() {
    let entry = entry.map_err(|e| DiscoveryError::Walk {
      path: dir.clone(),
      source: e.into(),
    })?;

    // follow symlinked module directories like the loader will
    let is_dir = entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir());
    if is_dir {
      found.push(PathBuf::from(entry.file_name()));
    }
  }

  Ok(found)
}

/// Load every discovered module and key it by its declared name.
///
/// Returns an empty map when the modules directory has no subdirectories.
/// All loads complete before the map is returned; the first failure aborts.
pub fn aggregate_modules(
  root: &Path,
  loader: &impl ModuleLoader,
) -> Result<BTreeMap<String, ModuleDescriptor>, AggregateError> {
  let dirs = discover_module_dirs(root)?;
  let mut modules = BTreeMap::new();
  let mut origins: BTreeMap<String, PathBuf> = BTreeMap::new();

  for dir in dirs {
    let module = loader.load(root, &dir)?;
    if module.has_template() {
      return Err(ModuleLoadError::EmbeddedTemplate { module: module.name }.into());
    }

    if let Some(first) = origins.get(&module.name) {
      return Err(
        DiscoveryError::DuplicateModule {
          name: module.name,
          first: first.clone(),
          second: dir,
        }
        .into(),
      );
    }

    debug!(module = %module.name, dir = %dir.display(), "loaded module");
    origins.insert(module.name.clone(), dir);
    modules.insert(module.name.clone(), module);
  }

  info!(count = modules.len(), "aggregated modules");
  Ok(modules)
}
