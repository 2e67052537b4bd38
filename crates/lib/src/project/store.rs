//! The descriptor store.
//!
//! A [`ProjectStore`] owns the current descriptor of one project together
//! with a flag recording whether it has been populated. It is a plain owned
//! value: mutation needs `&mut self`, and callers sharing a store across
//! threads wrap it in a mutex themselves.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::modules::{JsonModuleLoader, ModuleLoader};
use crate::populate::{DeploymentContext, PlaceholderPopulator, PopulateError, Populator};

use super::load::{LoadError, load_with};
use super::types::ProjectDescriptor;

#[derive(Debug, Clone)]
pub struct ProjectStore {
  descriptor: ProjectDescriptor,
  root: Option<PathBuf>,
  populated: bool,
}

impl ProjectStore {
  /// Wrap an existing descriptor.
  pub fn new(descriptor: ProjectDescriptor, root: Option<PathBuf>) -> Self {
    Self {
      descriptor,
      root,
      populated: false,
    }
  }

  /// Load the project at `root` into a new store.
  ///
  /// When loading fails no store is created.
  pub fn load(root: Option<&Path>) -> Result<Self, LoadError> {
    Self::load_with(root, &JsonModuleLoader)
  }

  /// Like [`ProjectStore::load`], with a custom module loader.
  pub fn load_with(root: Option<&Path>, loader: &impl ModuleLoader) -> Result<Self, LoadError> {
    let descriptor = load_with(root, loader)?;
    Ok(Self::new(descriptor, root.map(Path::to_path_buf)))
  }

  /// The current descriptor.
  pub fn get(&self) -> &ProjectDescriptor {
    &self.descriptor
  }

  /// An owned copy of the current descriptor.
  pub fn snapshot(&self) -> ProjectDescriptor {
    self.descriptor.clone()
  }

  /// Replace the descriptor wholesale. The new descriptor is stored exactly
  /// as given and counts as unpopulated.
  pub fn set(&mut self, descriptor: ProjectDescriptor) {
    self.descriptor = descriptor;
    self.populated = false;
  }

  /// Populate the descriptor for `stage` and `region` with the default engine.
  pub fn populate(&mut self, stage: &str, region: &str) -> Result<&ProjectDescriptor, PopulateError> {
    self.populate_with(&PlaceholderPopulator, &DeploymentContext::new(stage, region))
  }

  /// Populate the descriptor with `populator`.
  ///
  /// On success the resolved descriptor replaces the stored one. On failure
  /// the store is left exactly as it was.
  pub fn populate_with(
    &mut self,
    populator: &impl Populator,
    ctx: &DeploymentContext,
  ) -> Result<&ProjectDescriptor, PopulateError> {
    let populated = populator.populate(&self.descriptor, self.root.as_deref(), ctx)?;
    self.descriptor = populated;
    self.populated = true;
    debug!(stage = %ctx.stage, region = %ctx.region, "store populated");
    Ok(&self.descriptor)
  }

  /// Whether the current descriptor went through population.
  pub fn is_populated(&self) -> bool {
    self.populated
  }

  /// Project root the descriptor was loaded from, if any.
  pub fn root(&self) -> Option<&Path> {
    self.root.as_deref()
  }

  pub fn into_inner(self) -> ProjectDescriptor {
    self.descriptor
  }
}
