//! Project directory layout and root resolution.

use std::path::{Path, PathBuf};

use crate::consts::{MODULE_MANIFEST, MODULES_DIR, PROJECT_MANIFEST, PROJECT_ROOT_ENV, VARIABLES_DIR};

/// Path of the project manifest (`<root>/s-project.json`).
pub fn manifest_path(root: &Path) -> PathBuf {
  root.join(PROJECT_MANIFEST)
}

/// Directory holding one subdirectory per module (`<root>/back/modules`).
pub fn modules_dir(root: &Path) -> PathBuf {
  MODULES_DIR.iter().fold(root.to_path_buf(), |p, part| p.join(part))
}

/// Manifest of a single module, given its directory relative to [`modules_dir`].
pub fn module_manifest_path(root: &Path, module: &Path) -> PathBuf {
  modules_dir(root).join(module).join(MODULE_MANIFEST)
}

/// Directory holding the stage/region variable files (`<root>/_meta/variables`).
pub fn variables_dir(root: &Path) -> PathBuf {
  VARIABLES_DIR.iter().fold(root.to_path_buf(), |p, part| p.join(part))
}

/// Resolve the project root.
///
/// An explicit path wins, then `SLS_PROJECT_ROOT`, then the current directory.
/// Existing paths are canonicalized; empty values are ignored.
pub fn resolve_project_root(explicit: Option<&str>) -> PathBuf {
  let chosen = explicit
    .filter(|p| !p.is_empty())
    .map(PathBuf::from)
    .or_else(|| {
      std::env::var(PROJECT_ROOT_ENV)
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
    })
    .unwrap_or_else(|| PathBuf::from("."));

  dunce::canonicalize(&chosen).unwrap_or(chosen)
}
