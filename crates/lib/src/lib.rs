//! slsproj-lib: unified deployment descriptors for serverless projects
//!
//! This crate assembles one descriptor per project and resolves its
//! deployment placeholders:
//! - `project`: default scaffold, manifest merge, loading, and the store
//! - `modules`: discovery and loading of `back/modules/*`
//! - `populate`: stage/region population across the whole descriptor
//! - `placeholder`: `${name}` parsing and substitution

pub mod consts;
pub mod modules;
pub mod paths;
pub mod placeholder;
pub mod populate;
pub mod project;
pub mod util;
