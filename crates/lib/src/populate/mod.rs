//! Population of deployment placeholders across a whole descriptor.
//!
//! A [`Populator`] takes the merged descriptor and a [`DeploymentContext`]
//! and returns a new descriptor with placeholders resolved. The default
//! engine, [`PlaceholderPopulator`], walks every string value of the
//! descriptor in place (modules and infrastructure template included) and
//! substitutes the variables it knows, leaving unknown placeholders
//! untouched. Keys and the descriptor's shape are never changed.
//!
//! Population is idempotent: every string is substituted until it stops
//! changing, so a second pass with the same context finds nothing to do.

mod bindings;

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::placeholder::substitute;
use crate::project::ProjectDescriptor;

pub use bindings::{Bindings, variable_files};

/// Substitution passes allowed per string before giving up.
pub const MAX_PASSES: usize = 16;

/// Where a descriptor is being deployed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeploymentContext {
  pub stage: String,
  pub region: String,
}

impl DeploymentContext {
  pub fn new(stage: impl Into<String>, region: impl Into<String>) -> Self {
    Self {
      stage: stage.into(),
      region: region.into(),
    }
  }
}

/// Errors that can occur during population.
#[derive(Debug, Error)]
pub enum PopulateError {
  #[error("stage and region must not be empty (stage: '{stage}', region: '{region}')")]
  EmptyContext { stage: String, region: String },

  #[error("invalid variables file {}: {message}", path.display())]
  Variables { path: PathBuf, message: String },

  /// Bindings keep expanding into more placeholders.
  #[error("value did not converge after {MAX_PASSES} substitution passes: {value}")]
  NonConvergent { value: String },

  /// Population changed a module's name so it no longer matches its key.
  #[error("module '{key}' was renamed to '{name}' during population")]
  ModuleKeyMismatch { key: String, name: String },
}

/// Resolves placeholders across a descriptor.
pub trait Populator {
  /// Return a populated copy of `descriptor`. `root` is the project root, if
  /// the descriptor was loaded from disk.
  fn populate(
    &self,
    descriptor: &ProjectDescriptor,
    root: Option<&Path>,
    ctx: &DeploymentContext,
  ) -> Result<ProjectDescriptor, PopulateError>;
}

/// The default population engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderPopulator;

impl Populator for PlaceholderPopulator {
  fn populate(
    &self,
    descriptor: &ProjectDescriptor,
    root: Option<&Path>,
    ctx: &DeploymentContext,
  ) -> Result<ProjectDescriptor, PopulateError> {
    if ctx.stage.is_empty() || ctx.region.is_empty() {
      return Err(PopulateError::EmptyContext {
        stage: ctx.stage.clone(),
        region: ctx.region.clone(),
      });
    }

    let mut bindings = Bindings::new(ctx, descriptor.name.clone());
    bindings.extend_from_map(&descriptor.custom);
    if let Some(root) = root {
      bindings.extend_from_files(root, ctx)?;
    }

    let mut populated = descriptor.clone();
    let changed = populate_descriptor(&mut populated, &bindings)?;

    if let Some((key, name)) = populated.mismatched_module() {
      return Err(PopulateError::ModuleKeyMismatch {
        key: key.to_string(),
        name: name.to_string(),
      });
    }

    info!(stage = %ctx.stage, region = %ctx.region, changed, "populated descriptor");
    Ok(populated)
  }
}

/// Substitute placeholders in every string field of `descriptor`, in place.
///
/// Returns how many strings changed.
pub fn populate_descriptor(descriptor: &mut ProjectDescriptor, bindings: &Bindings) -> Result<usize, PopulateError> {
  let mut changed = 0;

  for field in [
    &mut descriptor.name,
    &mut descriptor.version,
    &mut descriptor.profile,
    &mut descriptor.location,
    &mut descriptor.author,
    &mut descriptor.description,
  ] {
    changed += populate_string(field, bindings)?;
  }
  for plugin in &mut descriptor.plugins {
    changed += populate_string(plugin, bindings)?;
  }
  for value in descriptor.custom.values_mut() {
    changed += populate_value(value, bindings)?;
  }
  for module in descriptor.modules.values_mut() {
    changed += populate_string(&mut module.name, bindings)?;
    for value in module.data.values_mut() {
      changed += populate_value(value, bindings)?;
    }
  }
  changed += populate_value(&mut descriptor.infrastructure_template, bindings)?;
  for value in descriptor.extra.values_mut() {
    changed += populate_value(value, bindings)?;
  }

  Ok(changed)
}

/// Substitute placeholders in every string of `value`, in place.
///
/// Returns how many strings changed.
pub fn populate_value(value: &mut Value, bindings: &Bindings) -> Result<usize, PopulateError> {
  match value {
    Value::String(s) => populate_string(s, bindings),
    Value::Array(items) => {
      let mut changed = 0;
      for item in items {
        changed += populate_value(item, bindings)?;
      }
      Ok(changed)
    }
    Value::Object(map) => {
      let mut changed = 0;
      for item in map.values_mut() {
        changed += populate_value(item, bindings)?;
      }
      Ok(changed)
    }
    Value::Null | Value::Bool(_) | Value::Number(_) => Ok(0),
  }
}

fn populate_string(s: &mut String, bindings: &Bindings) -> Result<usize, PopulateError> {
  let resolved = resolve_string(s, bindings)?;
  if resolved == *s {
    return Ok(0);
  }
  debug!(from = %s, to = %resolved, "substituted");
  *s = resolved;
  Ok(1)
}

/// Substitute `input` until it reaches a fixed point.
pub fn resolve_string(input: &str, bindings: &Bindings) -> Result<String, PopulateError> {
  let mut current = input.to_string();
  for _ in 0..MAX_PASSES {
    let next = substitute(&current, bindings);
    if next == current {
      return Ok(current);
    }
    current = next;
  }
  Err(PopulateError::NonConvergent {
    value: input.to_string(),
  })
}
