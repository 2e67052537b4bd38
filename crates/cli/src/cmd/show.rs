//! Implementation of the `sls show` command.
//!
//! Loads the project descriptor, optionally populates it for a stage and
//! region, and prints a summary or the full JSON.

use anyhow::{Context, Result};
use tracing::info;

use slsproj_lib::paths::resolve_project_root;
use slsproj_lib::project::{ProjectDescriptor, ProjectStore};
use slsproj_lib::util::hash::Hashable;

use crate::output::{print_json, print_stat, print_success, print_warning, truncate_hash};

/// Deployment target requested on the command line.
pub struct Target<'a> {
  pub stage: &'a str,
  pub region: &'a str,
}

pub fn cmd_show(path: Option<&str>, target: Option<Target<'_>>, json: bool, verbose: bool) -> Result<()> {
  let root = resolve_project_root(path);
  let mut store = ProjectStore::load(Some(&root))
    .with_context(|| format!("Failed to load project: {}", root.display()))?;

  if let Some(target) = target {
    store
      .populate(target.stage, target.region)
      .with_context(|| format!("Failed to populate for {}/{}", target.stage, target.region))?;
    info!(stage = target.stage, region = target.region, "populated");
  }

  if json {
    return print_json(store.get());
  }

  print_summary(store.get(), verbose)?;
  if !store.is_populated() {
    print_warning("Descriptor is not populated; pass --stage and --region to resolve placeholders.");
  }
  Ok(())
}

pub(super) fn print_summary(descriptor: &ProjectDescriptor, verbose: bool) -> Result<()> {
  let hash = descriptor.compute_hash().context("Failed to compute descriptor hash")?;

  print_success(&format!("Project: {}", descriptor.name));
  print_stat("Version", &descriptor.version);
  print_stat("Profile", &descriptor.profile);
  print_stat("Modules", &descriptor.modules.len().to_string());
  print_stat("Plugins", &descriptor.plugins.len().to_string());
  print_stat("Hash", truncate_hash(&hash.0));

  if verbose {
    if !descriptor.description.is_empty() {
      print_stat("Description", &descriptor.description);
    }
    for name in descriptor.modules.keys() {
      println!("    - {}", name);
    }
    for plugin in &descriptor.plugins {
      println!("    + {}", plugin);
    }
  }

  Ok(())
}
