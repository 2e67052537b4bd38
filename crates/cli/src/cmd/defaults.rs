//! Implementation of the `sls defaults` command.
//!
//! Prints the scaffold a project starts from before its manifest and modules
//! are merged in.

use anyhow::Result;

use slsproj_lib::project::load;

use super::show::print_summary;
use crate::output::print_json;

pub fn cmd_defaults(json: bool) -> Result<()> {
  let descriptor = load(None)?;

  if json {
    print_json(&descriptor)
  } else {
    print_summary(&descriptor, false)
  }
}
