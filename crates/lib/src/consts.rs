//! Fixed names and layout of a serverless project on disk.

/// Application name used for environment variables and logging.
pub const APP_NAME: &str = "slsproj";

/// Version of this tool, used to compose a project's `profile`.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix of generated project names and profiles.
pub const NAME_PREFIX: &str = "serverless";

/// Length of the random id appended to generated project names.
pub const SHORT_ID_LEN: usize = 6;

/// Default version of a freshly scaffolded project.
pub const DEFAULT_PROJECT_VERSION: &str = "0.0.1";

/// Project manifest file name, at the project root.
pub const PROJECT_MANIFEST: &str = "s-project.json";

/// Module manifest file name, inside each module directory.
pub const MODULE_MANIFEST: &str = "s-module.json";

/// Modules live under `<root>/back/modules/<module>`.
pub const MODULES_DIR: [&str; 2] = ["back", "modules"];

/// Variable files live under `<root>/_meta/variables`.
pub const VARIABLES_DIR: [&str; 2] = ["_meta", "variables"];

/// Environment variable overriding the project root.
pub const PROJECT_ROOT_ENV: &str = "SLS_PROJECT_ROOT";

/// Length of the truncated descriptor hash.
pub const OBJ_HASH_PREFIX_LEN: usize = 20;
