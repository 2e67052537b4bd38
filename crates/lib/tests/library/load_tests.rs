use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use slsproj_lib::project::{LoadError, ManifestError, ProjectStore, default_template, load, load_with};

use super::common::{FixedLoader, create_project};

#[test]
fn empty_root_yields_scaffold() {
  let descriptor = load(None).unwrap();

  let id = descriptor.name.strip_prefix("serverless").unwrap();
  assert_eq!(id.len(), 6);
  assert_eq!(descriptor.version, "0.0.1");
  assert!(descriptor.modules.is_empty());
  assert_eq!(descriptor.infrastructure_template, default_template());
}

#[test]
fn manifest_name_and_discovered_module() {
  let temp = TempDir::new().unwrap();
  fs::write(temp.path().join("s-project.json"), r#"{"name":"foo","modules":{}}"#).unwrap();
  fs::create_dir_all(temp.path().join("back/modules/anything")).unwrap();

  let descriptor = load_with(Some(temp.path()), &FixedLoader(json!({ "name": "users" }))).unwrap();

  assert_eq!(descriptor.name, "foo");
  assert_eq!(descriptor.modules.len(), 1);
  assert_eq!(descriptor.modules["users"].name, "users");
}

#[test]
fn modules_come_only_from_disk() {
  let temp = create_project(
    &json!({
      "name": "foo",
      "modules": { "phantom": { "name": "phantom", "runtime": "go" } }
    }),
    &[
      ("users", json!({ "name": "users", "runtime": "nodejs" })),
      ("billing-v2", json!({ "name": "billing" })),
    ],
  );

  let descriptor = load(Some(temp.path())).unwrap();

  assert_eq!(descriptor.modules.keys().collect::<Vec<_>>(), vec!["billing", "users"]);
  for (key, module) in &descriptor.modules {
    assert_eq!(key, &module.name);
  }
}

#[test]
fn manifest_wins_for_every_shared_key() {
  let manifest = json!({
    "name": "foo",
    "version": "2.0.0",
    "profile": "custom-profile",
    "location": "https://example.com/foo",
    "author": "A. Person",
    "description": "Foo service",
    "custom": { "x": 1 },
    "plugins": ["a", "b"],
    "cloudFormation": { "Resources": {} }
  });
  let temp = create_project(&manifest, &[]);

  let descriptor = load(Some(temp.path())).unwrap();
  let merged = serde_json::to_value(&descriptor).unwrap();

  for (key, value) in manifest.as_object().unwrap() {
    assert_eq!(&merged[key], value, "key {key}");
  }
}

#[test]
fn missing_manifest_leaves_no_store() {
  let temp = TempDir::new().unwrap();
  fs::create_dir_all(temp.path().join("back/modules")).unwrap();

  let result = ProjectStore::load(Some(temp.path()));
  assert!(matches!(result, Err(LoadError::Manifest(ManifestError::NotFound { .. }))));
}

#[test]
fn module_with_template_is_rejected() {
  let temp = create_project(&json!({}), &[("users", json!({ "name": "users", "cloudFormation": {} }))]);

  let result = load(Some(temp.path()));
  assert!(matches!(result, Err(LoadError::ModuleLoad(_))));
}

#[test]
fn store_remembers_root() {
  let temp = create_project(&json!({ "name": "foo" }), &[]);
  let store = ProjectStore::load(Some(temp.path())).unwrap();

  assert_eq!(store.root(), Some(temp.path()));
  assert!(!store.is_populated());
  assert_eq!(store.get().name, "foo");
  assert_eq!(store.into_inner().name, "foo");
}

#[test]
fn relative_module_paths_are_passed_to_loader() {
  use slsproj_lib::modules::{ModuleLoadError, ModuleLoader};
  use slsproj_lib::project::ModuleDescriptor;
  use std::cell::RefCell;

  struct Recording(RefCell<Vec<String>>);

  impl ModuleLoader for Recording {
    fn load(&self, _root: &Path, module: &Path) -> Result<ModuleDescriptor, ModuleLoadError> {
      let dir = module.to_string_lossy().to_string();
      self.0.borrow_mut().push(dir.clone());
      Ok(ModuleDescriptor::new(dir))
    }
  }

  let temp = create_project(&json!({}), &[("b", json!({})), ("a", json!({}))]);
  let loader = Recording(RefCell::new(Vec::new()));

  load_with(Some(temp.path()), &loader).unwrap();
  assert_eq!(*loader.0.borrow(), vec!["a".to_string(), "b".to_string()]);
}
