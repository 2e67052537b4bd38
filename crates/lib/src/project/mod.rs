//! The project descriptor: defaults, manifest merge, loading, and the store.
//!
//! Loading runs as separate stages so each can be tested without the others:
//! [`build_defaults`] produces the scaffold, [`read_manifest`] and
//! [`crate::modules::aggregate_modules`] read the disk, [`apply_overrides`]
//! merges, and [`ProjectStore`] holds the result for population.

mod defaults;
mod load;
mod manifest;
mod merge;
mod store;
mod types;

pub use defaults::{build_defaults, default_profile, default_template, generate_short_id};
pub use load::{LoadError, load, load_with};
pub use manifest::{ManifestError, read_manifest};
pub use merge::apply_overrides;
pub use store::ProjectStore;
pub use types::*;
