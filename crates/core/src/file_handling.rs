//! Reading and validation of definitions files.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use log::info;

use crate::definitions::{CommandDefinition, Definitions, OptionDefinition};
use crate::error::Error::{NonUniqueCommandName, NonUniqueOptionName};
use crate::error::{Error, Result};
use crate::input::OptionSpec;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn validate_commands(commands: &[CommandDefinition]) -> Result<()> {
    let mut names = HashSet::new();
    for command in commands {
        if !names.insert(command.name.as_str()) {
            return Err(NonUniqueCommandName(command.name.clone()));
        }
    }
    Ok(())
}

fn validate_options(options: &[OptionDefinition]) -> Result<()> {
    let mut names = HashSet::new();
    for definition in options {
        let option = OptionSpec::new(&definition.name)?;
        for name in option.names() {
            if !names.insert(name.to_string()) {
                return Err(NonUniqueOptionName(name.to_string()));
            }
        }
    }
    Ok(())
}

/// Loads and validates definitions from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The file declares no commands and no options
/// - A command name is declared twice
/// - An option name is malformed, or a short or long name is declared twice
///
/// # Examples
///
/// ```no_run
/// use termbind_core::file_handling::get_definitions;
///
/// let definitions = get_definitions("definitions.yml")?;
/// println!("Loaded {} commands", definitions.commands.len());
/// # Ok::<(), termbind_core::error::Error>(())
/// ```
pub fn get_definitions(path: &str) -> Result<Definitions> {
    let reader = get_reader("definitions", path)?;

    let definitions: Definitions = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "definitions".to_string(),
            path.to_string(),
            e,
        )
    })?;

    if definitions.is_empty() {
        return Err(Error::empty_definition(path.to_string()));
    }

    validate_commands(&definitions.commands)?;
    validate_options(&definitions.options)?;

    info!(
        "Loaded {} command(s) and {} option(s) from `{path}`",
        definitions.commands.len(),
        definitions.options.len()
    );

    Ok(definitions)
}

/// Like [`get_definitions`], but a missing file is not an error.
///
/// # Errors
///
/// Returns an error if the file exists but fails to load.
pub fn get_optional_definitions(path: &str) -> Result<Option<Definitions>> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    get_definitions(path).map(Some)
}
