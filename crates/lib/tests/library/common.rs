//! Shared helpers for library integration tests.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;

use slsproj_lib::modules::{ModuleLoadError, ModuleLoader};
use slsproj_lib::project::ModuleDescriptor;

/// Create a project directory with the given manifest and module directories.
///
/// Each module directory gets an `s-module.json` holding the paired value.
pub fn create_project(manifest: &Value, modules: &[(&str, Value)]) -> TempDir {
  let temp = TempDir::new().unwrap();
  fs::write(temp.path().join("s-project.json"), manifest.to_string()).unwrap();

  let modules_dir = temp.path().join("back").join("modules");
  fs::create_dir_all(&modules_dir).unwrap();
  for (dir, module) in modules {
    let module_dir = modules_dir.join(dir);
    fs::create_dir_all(&module_dir).unwrap();
    fs::write(module_dir.join("s-module.json"), module.to_string()).unwrap();
  }

  temp
}

/// Loader that ignores the disk and returns a fixed module for every directory.
pub struct FixedLoader(pub Value);

impl ModuleLoader for FixedLoader {
  fn load(&self, _root: &Path, _module: &Path) -> Result<ModuleDescriptor, ModuleLoadError> {
    Ok(serde_json::from_value(self.0.clone()).unwrap())
  }
}
