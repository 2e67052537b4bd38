//! Shallow merge of manifest overrides onto a descriptor.
//!
//! Precedence is last-writer-wins, one level deep: every key present in the
//! overrides replaces the descriptor's value for that key wholesale. Nested
//! objects such as `custom` are never deep-merged. Keys without a dedicated
//! field land in [`ProjectDescriptor::extra`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::trace;

use super::manifest::ManifestError;
use super::types::{ProjectDescriptor, TEMPLATE_KEY, TEMPLATE_KEY_ALIAS};

/// Apply `overrides` onto `base`, field by field.
///
/// Fails with [`ManifestError::InvalidField`] when a known key has the wrong
/// shape (e.g. a numeric `name`). `base` may be partially updated on failure;
/// callers discard it.
pub fn apply_overrides(base: &mut ProjectDescriptor, overrides: Map<String, Value>) -> Result<(), ManifestError> {
  for (key, value) in overrides {
    trace!(key = %key, "override");
    match key.as_str() {
      "name" => base.name = field(&key, value)?,
      "version" => base.version = field(&key, value)?,
      "profile" => base.profile = field(&key, value)?,
      "location" => base.location = field(&key, value)?,
      "author" => base.author = field(&key, value)?,
      "description" => base.description = field(&key, value)?,
      "custom" => base.custom = field(&key, value)?,
      "modules" => base.modules = field(&key, value)?,
      "plugins" => base.plugins = field(&key, value)?,
      TEMPLATE_KEY | TEMPLATE_KEY_ALIAS => base.infrastructure_template = value,
      _ => {
        base.extra.insert(key, value);
      }
    }
  }
  Ok(())
}

fn field<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, ManifestError> {
  serde_json::from_value(value).map_err(|source| ManifestError::InvalidField {
    key: key.to_string(),
    source,
  })
}
