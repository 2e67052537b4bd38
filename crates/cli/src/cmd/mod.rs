mod defaults;
mod info;
mod modules;
mod show;

pub use defaults::cmd_defaults;
pub use info::cmd_info;
pub use modules::cmd_modules;
pub use show::{Target, cmd_show};
