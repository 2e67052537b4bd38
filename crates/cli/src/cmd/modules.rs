//! Implementation of the `sls modules` command.

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};

use slsproj_lib::paths::resolve_project_root;
use slsproj_lib::project::ProjectStore;

use crate::output::{print_info, print_json, symbols};

/// List the modules aggregated from `back/modules`, keyed by declared name.
pub fn cmd_modules(path: Option<&str>, json: bool) -> Result<()> {
  let root = resolve_project_root(path);
  let store = ProjectStore::load(Some(&root))
    .with_context(|| format!("Failed to load project: {}", root.display()))?;
  let modules = &store.get().modules;

  if json {
    return print_json(modules);
  }

  if modules.is_empty() {
    print_info("No modules found.");
    return Ok(());
  }

  println!("Modules:");
  for (name, module) in modules {
    let fields = module.data.len();
    println!(
      "  {} {} ({} field{})",
      symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
      name,
      fields,
      if fields == 1 { "" } else { "s" }
    );
  }

  Ok(())
}
