//! Project and module descriptor types.
//!
//! A [`ProjectDescriptor`] is the unified view of a serverless project: the
//! defaults, the fields of `s-project.json`, and every module discovered under
//! `back/modules`. It serializes to the same camelCase JSON shape as the
//! project manifest.
//!
//! # Example
//!
//! ```json
//! {
//!   "name": "foo",
//!   "version": "0.0.1",
//!   "profile": "serverless-v0.1.0",
//!   "custom": {},
//!   "modules": { "users": { "name": "users", "runtime": "nodejs" } },
//!   "plugins": [],
//!   "cloudFormation": { "Resources": { ... } }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::util::hash::Hashable;

/// Manifest key of the infrastructure template.
pub const TEMPLATE_KEY: &str = "cloudFormation";

/// Alternate key accepted for the infrastructure template.
pub const TEMPLATE_KEY_ALIAS: &str = "infrastructureTemplate";

/// The merged descriptor of a serverless project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
  pub name: String,
  pub version: String,
  pub profile: String,
  pub location: String,
  pub author: String,
  pub description: String,

  /// User extensions. Scalar entries double as placeholder bindings.
  #[serde(default)]
  pub custom: Map<String, Value>,

  /// Discovered modules, keyed by each module's declared `name`.
  #[serde(default)]
  pub modules: BTreeMap<String, ModuleDescriptor>,

  #[serde(default)]
  pub plugins: Vec<String>,

  /// Baseline cloud resources shared by every module.
  #[serde(rename = "cloudFormation", alias = "infrastructureTemplate")]
  pub infrastructure_template: Value,

  /// Top-level manifest keys with no dedicated field, kept verbatim.
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Hashable for ProjectDescriptor {}

impl ProjectDescriptor {
  /// Returns the first module whose map key differs from its declared name.
  pub fn mismatched_module(&self) -> Option<(&str, &str)> {
    self
      .modules
      .iter()
      .find(|(key, module)| *key != &module.name)
      .map(|(key, module)| (key.as_str(), module.name.as_str()))
  }
}

/// One deployable unit, as returned by a module loader.
///
/// Only `name` is interpreted; every other field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
  pub name: String,

  #[serde(flatten)]
  pub data: Map<String, Value>,
}

impl ModuleDescriptor {
  /// Create a module with no fields beyond its name.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      data: Map::new(),
    }
  }

  /// Whether this module carries an infrastructure template of its own.
  pub fn has_template(&self) -> bool {
    self.data.contains_key(TEMPLATE_KEY) || self.data.contains_key(TEMPLATE_KEY_ALIAS)
  }
}
