use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Result;
use crate::input::{CommandSpec, OptionSpec, ValueMode};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CommandDefinition {
    pub name: String,
    #[serde(default)]
    pub value: ValueMode,
    #[serde(default, rename = "override")]
    pub is_override: bool,
    pub help: Option<String>,
}

impl CommandDefinition {
    #[must_use]
    pub fn to_spec(&self) -> CommandSpec {
        let spec = CommandSpec::with(self.name.clone(), self.value, self.is_override);
        match &self.help {
            Some(help) => spec.with_help(help.clone()),
            None => spec,
        }
    }
}

impl Display for CommandDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}`", self.name)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OptionDefinition {
    pub name: String,
    #[serde(default)]
    pub value: ValueMode,
    #[serde(default)]
    pub required: bool,
    pub help: Option<String>,
}

impl OptionDefinition {
    /// # Errors
    ///
    /// Returns an error if the option name is malformed.
    pub fn to_spec(&self) -> Result<OptionSpec> {
        let spec = OptionSpec::with(&self.name, self.value, self.required)?;
        Ok(match &self.help {
            Some(help) => spec.with_help(help.clone()),
            None => spec,
        })
    }
}

impl Display for OptionDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}`", self.name)
    }
}

/// Commands and options declared in a definitions file.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Definitions {
    #[serde(default)]
    pub commands: Vec<CommandDefinition>,
    #[serde(default)]
    pub options: Vec<OptionDefinition>,
}

/// Specs built from [`Definitions`], in declaration order.
pub type Specs = (IndexMap<String, CommandSpec>, IndexMap<String, OptionSpec>);

impl Definitions {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.options.is_empty()
    }

    /// Builds the specs, keyed the same way [`Console`](crate::console::Console)
    /// keys them.
    ///
    /// # Errors
    ///
    /// Returns an error if an option name is malformed.
    pub fn to_specs(&self) -> Result<Specs> {
        let commands = self
            .commands
            .iter()
            .map(|definition| (definition.name.clone(), definition.to_spec()))
            .collect();

        let mut options = IndexMap::new();
        for definition in &self.options {
            let spec = definition.to_spec()?;
            options.insert(spec.key().to_string(), spec);
        }

        Ok((commands, options))
    }
}
