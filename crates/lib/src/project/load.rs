//! Loading a project descriptor from disk.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::modules::{AggregateError, DiscoveryError, JsonModuleLoader, ModuleLoadError, ModuleLoader, aggregate_modules};

use super::defaults::build_defaults;
use super::manifest::{ManifestError, read_manifest};
use super::merge::apply_overrides;
use super::types::ProjectDescriptor;

/// Errors that abort a load. No partial descriptor is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
  #[error(transparent)]
  Manifest(#[from] ManifestError),

  #[error(transparent)]
  ModuleDiscovery(#[from] DiscoveryError),

  #[error(transparent)]
  ModuleLoad(#[from] ModuleLoadError),
}

impl From<AggregateError> for LoadError {
  fn from(err: AggregateError) -> Self {
    match err {
      AggregateError::Discovery(e) => LoadError::ModuleDiscovery(e),
      AggregateError::Load(e) => LoadError::ModuleLoad(e),
    }
  }
}

/// Load the project at `root` using the JSON module loader.
///
/// See [`load_with`].
pub fn load(root: Option<&Path>) -> Result<ProjectDescriptor, LoadError> {
  load_with(root, &JsonModuleLoader)
}

/// Load the project at `root`.
///
/// 1. Start from [`build_defaults`].
/// 2. Without a root (or with an empty one) return the defaults as-is.
/// 3. Read `s-project.json`.
/// 4. Aggregate the modules under `back/modules`; they replace whatever
///    `modules` the manifest declared.
/// 5. Shallow-merge the manifest onto the defaults.
pub fn load_with(root: Option<&Path>, loader: &impl ModuleLoader) -> Result<ProjectDescriptor, LoadError> {
  let mut descriptor = build_defaults();

  let Some(root) = root.filter(|r| !r.as_os_str().is_empty()) else {
    debug!(name = %descriptor.name, "no project root, using defaults");
    return Ok(descriptor);
  };

  let mut overrides = read_manifest(root)?;
  let modules = aggregate_modules(root, loader)?;

  let declared = overrides.remove("modules");
  if declared.is_some_and(|d| d.as_object().map_or(!d.is_null(), |m| !m.is_empty())) {
    warn!("ignoring 'modules' declared in the project manifest; modules come from back/modules");
  }

  apply_overrides(&mut descriptor, overrides)?;
  descriptor.modules = modules;

  info!(
    root = %root.display(),
    name = %descriptor.name,
    modules = descriptor.modules.len(),
    "loaded project"
  );
  Ok(descriptor)
}
