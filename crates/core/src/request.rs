//! Matching of argument tokens against command and option specs.
//!
//! A [`Request`] is parsed once. Options are resolved first, in registration
//! order, and the tokens they consume are removed. Commands are then looked
//! up among the tokens that remain. Anything not consumed by an option is
//! left in [`Request::arguments`], including command names and their values.
//!
//! Option matching is prefix based: `-v` matches `-v`, `-vvv` and `-verbose`
//! alike, with whatever follows the prefix taken as the value.

use indexmap::IndexMap;
use log::{debug, trace, warn};

use crate::error::Result;
use crate::input::{CommandSpec, Input, OptionSpec, Value};
use crate::scanner::{ArgumentScanner, ProcessEnvironment};

/// Parse state for one invocation.
#[derive(Clone, Debug)]
pub struct Request {
    scanner: ArgumentScanner,
    commands: IndexMap<String, CommandSpec>,
    options: IndexMap<String, OptionSpec>,
    required_params_not_found: Vec<String>,
    parsed: bool,
}

fn push_not_found(not_found: &mut Vec<String>, identifier: String) {
    if !not_found.contains(&identifier) {
        debug!("Required parameter not found: `{identifier}`");
        not_found.push(identifier);
    }
}

/// Outcome of scanning the tokens for one option.
struct OptionMatch {
    found: bool,
    seen: bool,
}

impl Request {
    /// # Errors
    ///
    /// Returns [`Error::MissingArguments`](crate::error::Error::MissingArguments)
    /// if the environment carries no arguments at all.
    pub fn new(environment: ProcessEnvironment) -> Result<Self> {
        Ok(Self::from_scanner(ArgumentScanner::new(environment)?))
    }

    #[must_use]
    pub fn from_scanner(scanner: ArgumentScanner) -> Self {
        Self {
            scanner,
            commands: IndexMap::new(),
            options: IndexMap::new(),
            required_params_not_found: Vec::new(),
            parsed: false,
        }
    }

    /// Matches the remaining tokens against `commands` and `options`.
    ///
    /// Matched values are written into the specs. Options that already carry
    /// a value are skipped; commands are always assigned. Parsing twice is a
    /// no-op.
    pub fn parse(
        &mut self,
        commands: &mut IndexMap<String, CommandSpec>,
        options: &mut IndexMap<String, OptionSpec>,
    ) {
        if self.parsed {
            warn!("Request has already been parsed, ignoring");
            return;
        }

        for option in options.values_mut() {
            if option.value().is_some() {
                continue;
            }

            if self.scanner.is_empty() {
                if option.is_required() {
                    push_not_found(&mut self.required_params_not_found, option.identifier());
                }
                continue;
            }

            let OptionMatch { found, seen } = self.match_option(option);

            if found {
                for name in option.names() {
                    self.options.insert(name.to_string(), option.clone());
                }
            } else if option.is_required() || (seen && option.is_value_required()) {
                push_not_found(&mut self.required_params_not_found, option.identifier());
            }
        }

        self.scanner.compact();

        let override_triggered = self.match_commands(commands);

        if override_triggered && !self.required_params_not_found.is_empty() {
            debug!(
                "Override command found, waiving {} required parameter(s)",
                self.required_params_not_found.len()
            );
            self.required_params_not_found.clear();
        }

        self.parsed = true;
    }

    /// Scans every remaining token for the option's prefixes.
    ///
    /// The first satisfying occurrence sets the value; later ones are still
    /// consumed but leave the value alone. An occurrence with an empty value
    /// does not count when a value is required, so a later token can still
    /// satisfy the option.
    fn match_option(&mut self, option: &mut OptionSpec) -> OptionMatch {
        let prefixes: Vec<String> = option.names().map(ToString::to_string).collect();
        let snapshot: Vec<(usize, String)> = self
            .scanner
            .entries()
            .map(|(index, token)| (index, token.to_string()))
            .collect();

        let mut outcome = OptionMatch {
            found: false,
            seen: false,
        };

        for (index, token) in snapshot {
            let Some(prefix) = prefixes.iter().find(|p| token.starts_with(p.as_str())) else {
                continue;
            };
            trace!("Token `{token}` starts with `{prefix}`");
            outcome.seen = true;

            let value = if option.accepts_value() {
                let raw = match token.split_once('=') {
                    Some((_, after)) if option.has_long_name() => after,
                    _ => &token[prefix.len()..],
                };
                let value = Value::from_raw(raw, option.is_value_array());

                if (option.is_required() || option.is_value_required()) && value.is_empty() {
                    debug!("Option `{prefix}` given without a value in `{token}`");
                    continue;
                }
                value
            } else {
                Value::Flag
            };

            outcome.found = true;
            if option.value().is_none() {
                let value = value.normalized();
                debug!("Matched option `{}` with value `{value}`", option.identifier());
                option.set_value(value);
            }
            self.scanner.consume(index);
        }

        outcome
    }

    /// Looks up each command among the remaining tokens. Returns whether an
    /// override command was found.
    fn match_commands(&mut self, commands: &mut IndexMap<String, CommandSpec>) -> bool {
        let names: Vec<String> = commands
            .values()
            .map(|command| command.name().to_string())
            .collect();
        let tokens: Vec<String> = self.scanner.tokens().into_iter().map(String::from).collect();
        let mut override_triggered = false;

        for command in commands.values_mut() {
            let Some(position) = tokens.iter().position(|token| token == command.name()) else {
                continue;
            };

            if command.is_override() {
                override_triggered = true;
            }

            if command.accepts_value() {
                let candidate = tokens
                    .get(position + 1)
                    .filter(|next| {
                        !names
                            .iter()
                            .any(|name| name != command.name() && name == *next)
                    })
                    .map_or("", String::as_str);
                let value = Value::from_raw(candidate, command.is_value_array());

                if command.is_value_required() && value.is_empty() {
                    push_not_found(
                        &mut self.required_params_not_found,
                        command.name().to_string(),
                    );
                } else {
                    let value = value.normalized();
                    debug!("Matched command `{}` with value `{value}`", command.name());
                    command.set_value(value);
                }
            } else {
                debug!("Matched command `{}`", command.name());
                command.set_value(Value::Flag);
            }

            self.commands
                .insert(command.name().to_string(), command.clone());
        }

        override_triggered
    }

    #[must_use]
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.scanner.token(index)
    }

    /// Tokens not consumed by any option.
    #[must_use]
    pub fn arguments(&self) -> Vec<&str> {
        self.scanner.tokens()
    }

    #[must_use]
    pub fn env(&self, key: &str) -> Option<&str> {
        self.scanner.env(key)
    }

    #[must_use]
    pub fn envs(&self) -> &std::collections::HashMap<String, String> {
        self.scanner.envs()
    }

    #[must_use]
    pub fn script_name(&self) -> &str {
        self.scanner.script_name()
    }

    /// Matched commands, keyed by name.
    #[must_use]
    pub fn commands(&self) -> &IndexMap<String, CommandSpec> {
        &self.commands
    }

    /// Matched options, keyed by each of their dashed names.
    #[must_use]
    pub fn options(&self) -> &IndexMap<String, OptionSpec> {
        &self.options
    }

    #[must_use]
    pub fn command(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    #[must_use]
    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.get(name)
    }

    #[must_use]
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    #[must_use]
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    #[must_use]
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.required_params_not_found.is_empty()
    }

    #[must_use]
    pub fn required_params_not_found(&self) -> &[String] {
        &self.required_params_not_found
    }
}
