//! Registration point for commands and options, with lazy parsing.

use indexmap::IndexMap;
use log::debug;

use crate::input::{CommandSpec, Input, OptionSpec, Value};
use crate::request::Request;

/// Default wrap width for console output.
pub const DEFAULT_WIDTH: usize = 80;

/// Holds the registered specs and parses the request on first access.
///
/// Accessors that need parse results take `&mut self` and parse the request
/// if that has not happened yet.
#[derive(Debug)]
pub struct Console {
    request: Request,
    width: usize,
    arguments: Vec<String>,
    commands: IndexMap<String, CommandSpec>,
    options: IndexMap<String, OptionSpec>,
}

impl Console {
    #[must_use]
    pub fn new(request: Request) -> Self {
        Self {
            request,
            width: DEFAULT_WIDTH,
            arguments: Vec::new(),
            commands: IndexMap::new(),
            options: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn add_command(&mut self, command: CommandSpec) -> &mut Self {
        self.commands.insert(command.name().to_string(), command);
        self
    }

    pub fn add_commands(&mut self, commands: impl IntoIterator<Item = CommandSpec>) -> &mut Self {
        for command in commands {
            self.add_command(command);
        }
        self
    }

    /// Registers an option under its long name, or its short name if it has
    /// no long one.
    pub fn add_option(&mut self, option: OptionSpec) -> &mut Self {
        self.options.insert(option.key().to_string(), option);
        self
    }

    pub fn add_options(&mut self, options: impl IntoIterator<Item = OptionSpec>) -> &mut Self {
        for option in options {
            self.add_option(option);
        }
        self
    }

    /// Parses the request against the registered specs.
    ///
    /// On a valid request the registered commands and options are replaced by
    /// the ones that matched, and the remaining arguments are captured. An
    /// invalid request leaves the registrations as they were.
    pub fn parse_request(&mut self) {
        self.request.parse(&mut self.commands, &mut self.options);

        if self.request.is_valid() {
            self.commands = self.request.commands().clone();
            self.options = self.request.options().clone();
            self.arguments = self
                .request
                .arguments()
                .into_iter()
                .map(String::from)
                .collect();
        } else {
            debug!(
                "Request is invalid, missing: {}",
                self.request.required_params_not_found().join(", ")
            );
        }
    }

    fn ensure_parsed(&mut self) {
        if !self.request.is_parsed() {
            self.parse_request();
        }
    }

    pub fn arguments(&mut self) -> &[String] {
        self.ensure_parsed();
        &self.arguments
    }

    pub fn commands(&mut self) -> &IndexMap<String, CommandSpec> {
        self.ensure_parsed();
        &self.commands
    }

    pub fn options(&mut self) -> &IndexMap<String, OptionSpec> {
        self.ensure_parsed();
        &self.options
    }

    pub fn command_value(&mut self, name: &str) -> Option<&Value> {
        self.ensure_parsed();
        self.commands.get(name).and_then(Input::value)
    }

    pub fn option_value(&mut self, name: &str) -> Option<&Value> {
        self.ensure_parsed();
        self.options.get(name).and_then(Input::value)
    }

    pub fn required_params_not_found(&mut self) -> &[String] {
        self.ensure_parsed();
        self.request.required_params_not_found()
    }

    pub fn is_request_valid(&mut self) -> bool {
        self.ensure_parsed();
        self.request.is_valid()
    }

    #[must_use]
    pub fn has_argument(&self, argument: &str) -> bool {
        self.arguments.iter().any(|a| a == argument)
    }

    #[must_use]
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    #[must_use]
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }
}
