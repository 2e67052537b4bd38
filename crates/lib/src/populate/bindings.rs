//! Variable bindings used to resolve placeholders.
//!
//! Bindings are layered, lowest precedence first:
//! 1. scalar entries of the descriptor's `custom` map
//! 2. `_meta/variables/s-variables-common.json`
//! 3. `_meta/variables/s-variables-<stage>.json`
//! 4. `_meta/variables/s-variables-<stage>-<region>.json`
//!
//! `stage`, `region` and `projectName` always come from the deployment
//! context and the descriptor, whatever the layers say.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::paths::variables_dir;
use crate::placeholder::Resolver;

use super::{DeploymentContext, PopulateError};

/// Resolved variable table for one population pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Bindings {
  stage: String,
  region: String,
  project_name: String,
  vars: BTreeMap<String, String>,
}

impl Bindings {
  /// Bindings with only the built-in variables.
  pub fn new(ctx: &DeploymentContext, project_name: impl Into<String>) -> Self {
    Self {
      stage: ctx.stage.clone(),
      region: ctx.region.clone(),
      project_name: project_name.into(),
      vars: BTreeMap::new(),
    }
  }

  /// Add the scalar entries of `map`, replacing earlier values.
  ///
  /// Objects, arrays and nulls are not bindable and are skipped.
  pub fn extend_from_map(&mut self, map: &Map<String, Value>) {
    for (key, value) in map {
      if key.is_empty() {
        continue;
      }
      let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => continue,
      };
      self.vars.insert(key.clone(), text);
    }
  }

  /// Layer the variable files found under `<root>/_meta/variables`.
  pub fn extend_from_files(&mut self, root: &Path, ctx: &DeploymentContext) -> Result<(), PopulateError> {
    for path in variable_files(root, ctx) {
      if let Some(map) = read_variables(&path)? {
        debug!(path = %path.display(), count = map.len(), "loaded variables");
        self.extend_from_map(&map);
      }
    }
    Ok(())
  }

  /// Look up a custom or file variable.
  pub fn get(&self, name: &str) -> Option<&str> {
    self.vars.get(name).map(String::as_str)
  }
}

impl Resolver for Bindings {
  fn resolve_stage(&self) -> Option<&str> {
    Some(&self.stage)
  }

  fn resolve_region(&self) -> Option<&str> {
    Some(&self.region)
  }

  fn resolve_project_name(&self) -> Option<&str> {
    Some(&self.project_name)
  }

  fn resolve_variable(&self, name: &str) -> Option<&str> {
    self.get(name)
  }
}

/// Variable files for a context, lowest precedence first.
pub fn variable_files(root: &Path, ctx: &DeploymentContext) -> Vec<PathBuf> {
  let dir = variables_dir(root);
  vec![
    dir.join("s-variables-common.json"),
    dir.join(format!("s-variables-{}.json", ctx.stage)),
    dir.join(format!("s-variables-{}-{}.json", ctx.stage, ctx.region)),
  ]
}

/// Read one variable file. Returns `Ok(None)` if it doesn't exist.
fn read_variables(path: &Path) -> Result<Option<Map<String, Value>>, PopulateError> {
  let content = match fs::read_to_string(path) {
    Ok(content) => content,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
    Err(e) => {
      return Err(PopulateError::Variables {
        path: path.to_path_buf(),
        message: e.to_string(),
      });
    }
  };

  match serde_json::from_str(&content) {
    Ok(Value::Object(map)) => Ok(Some(map)),
    Ok(_) => Err(PopulateError::Variables {
      path: path.to_path_buf(),
      message: "expected a JSON object".to_string(),
    }),
    Err(e) => Err(PopulateError::Variables {
      path: path.to_path_buf(),
      message: e.to_string(),
    }),
  }
}
