//! Configuration path utilities for termbind.
//!
//! This module resolves the location of the definitions file and expands
//! shell variables like `~` in paths.

/// Default path for the command and option definitions file
const DEFAULT_DEFINITIONS_PATH: &str = "~/.termbind/definitions.yml";

/// Environment variable that overrides the default definitions path
pub const DEFINITIONS_PATH_ENV: &str = "TERMBIND_DEFINITIONS";

/// Resolves the definitions file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// definitions path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use termbind_core::config::get_definitions_path;
///
/// // Use default path
/// let default_path = get_definitions_path(None);
///
/// // Use custom path
/// let custom_path = get_definitions_path(Some("/path/to/definitions.yml"));
/// assert_eq!(custom_path, "/path/to/definitions.yml");
/// ```
#[must_use]
pub fn get_definitions_path(definitions_path_arg: Option<&str>) -> String {
    let definitions_path = definitions_path_arg.unwrap_or(DEFAULT_DEFINITIONS_PATH);

    shellexpand::tilde(definitions_path).to_string()
}

/// Resolves the definitions path, consulting an environment value before
/// falling back to the default.
///
/// An explicit path wins over the environment value.
#[must_use]
pub fn resolve_definitions_path(
    definitions_path_arg: Option<&str>,
    env_value: Option<&str>,
) -> String {
    get_definitions_path(definitions_path_arg.or(env_value))
}
