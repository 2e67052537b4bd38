use slsproj_lib::consts::{APP_NAME, TOOL_VERSION};
use slsproj_lib::project::default_profile;

use crate::output::print_stat;

pub fn cmd_info() {
  println!("{}:", APP_NAME);
  print_stat("Version", TOOL_VERSION);
  print_stat("Profile", &default_profile());
}
