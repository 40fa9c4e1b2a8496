//! Command-line argument parsing for the `tb` binary.
//!
//! Besides its own flags, `tb` takes ad-hoc command and option specs so a
//! token list can be inspected without writing a definitions file.

use clap::Parser;
use crossterm::style::Color;
use termbind_core::console::DEFAULT_WIDTH;
use termbind_core::error::Result;
use termbind_core::input::{CommandSpec, OptionSpec, ValueMode};

use crate::output::color::parse_color_name;

/// Command-line arguments for the `tb` inspection tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use termbind_cli::cli_args::Args;
///
/// let args = Args::parse_from(["tb", "--command", "deploy:required", "--", "deploy", "web"]);
/// assert_eq!(args.tokens, ["deploy", "web"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the command and option definitions YAML.
    ///
    /// If not provided, `TERMBIND_DEFINITIONS` is used, then
    /// `~/.termbind/definitions.yml` if it exists.
    #[arg(long = "config", short = 'c')]
    pub config_path: Option<String>,

    /// A command to recognise, as `NAME` or `NAME:MODE`.
    ///
    /// MODE is one of none, required, optional, required_array or
    /// optional_array.
    #[arg(long = "command", action = clap::ArgAction::Append)]
    pub commands: Vec<String>,

    /// A command that makes the request valid whenever it is present.
    #[arg(long = "override-command", action = clap::ArgAction::Append)]
    pub override_commands: Vec<String>,

    /// An option to recognise, as `-o`, `--option` or `-o|--option`,
    /// optionally followed by `:MODE`.
    #[arg(long = "option", action = clap::ArgAction::Append, allow_hyphen_values = true)]
    pub options: Vec<String>,

    /// Like `--option`, but the request is invalid without it.
    #[arg(
        long = "required-option",
        action = clap::ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub required_options: Vec<String>,

    /// Wrap width for the report.
    #[arg(long, short = 'w', default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Print without colors.
    #[arg(long, action)]
    pub raw: bool,

    /// Color for command and option names in the report, such as `green` or
    /// `darkcyan`.
    #[arg(long, default_value = "green")]
    pub color: String,

    /// Clear the screen before printing the report.
    #[arg(long, action)]
    pub clear: bool,

    /// Ask whether to continue when required parameters are missing.
    #[arg(long, short = 'i', action)]
    pub interactive: bool,

    /// The tokens to parse, given after `--`.
    #[arg(last = true)]
    pub tokens: Vec<String>,
}

/// Splits `NAME:MODE` into its parts.
///
/// The suffix only counts as a mode if it names one, so option names that
/// contain a colon are left alone.
#[must_use]
pub fn split_mode(spec: &str) -> (&str, ValueMode) {
    if let Some((name, mode)) = spec.rsplit_once(':') {
        if let Ok(mode) = mode.parse() {
            return (name, mode);
        }
    }
    (spec, ValueMode::None)
}

impl Args {
    /// The color given with `--color`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a known color.
    pub fn highlight(&self) -> Result<Color> {
        parse_color_name(&self.color)
    }

    /// The commands given with `--command` and `--override-command`.
    #[must_use]
    pub fn command_specs(&self) -> Vec<CommandSpec> {
        let commands = self.commands.iter().map(|spec| {
            let (name, mode) = split_mode(spec);
            CommandSpec::with(name, mode, false)
        });
        let overrides = self.override_commands.iter().map(|spec| {
            let (name, mode) = split_mode(spec);
            CommandSpec::with(name, mode, true)
        });
        commands.chain(overrides).collect()
    }

    /// The options given with `--option` and `--required-option`.
    ///
    /// # Errors
    ///
    /// Returns an error if an option name is not a valid short or long name.
    pub fn option_specs(&self) -> Result<Vec<OptionSpec>> {
        let options = self.options.iter().map(|spec| (spec, false));
        let required = self.required_options.iter().map(|spec| (spec, true));
        options
            .chain(required)
            .map(|(spec, required)| {
                let (name, mode) = split_mode(spec);
                OptionSpec::with(name, mode, required)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termbind_core::error::Error;
    use termbind_core::input::Input;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["tb"]);

        assert!(args.config_path.is_none());
        assert!(args.commands.is_empty());
        assert!(args.override_commands.is_empty());
        assert!(args.options.is_empty());
        assert!(args.required_options.is_empty());
        assert_eq!(args.width, DEFAULT_WIDTH);
        assert!(!args.raw);
        assert!(!args.clear);
        assert_eq!(args.highlight().unwrap(), Color::Green);
        assert!(!args.interactive);
        assert!(args.tokens.is_empty());
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from(["tb", "-c", "/custom/defs.yml", "-w", "40", "--raw", "-i"]);

        assert_eq!(args.config_path, Some("/custom/defs.yml".to_string()));
        assert_eq!(args.width, 40);
        assert!(args.raw);
        assert!(args.interactive);
    }

    #[test]
    fn test_args_specs_and_tokens() {
        let args = Args::parse_from([
            "tb",
            "--command",
            "deploy:required",
            "--override-command",
            "help",
            "--option",
            "-v|--verbose",
            "--required-option",
            "--env:required",
            "--",
            "deploy",
            "web",
            "--env=prod",
        ]);

        assert_eq!(args.commands, ["deploy:required"]);
        assert_eq!(args.override_commands, ["help"]);
        assert_eq!(args.options, ["-v|--verbose"]);
        assert_eq!(args.required_options, ["--env:required"]);
        assert_eq!(args.tokens, ["deploy", "web", "--env=prod"]);
    }

    #[test]
    fn test_highlight_color() {
        let args = Args::parse_from(["tb", "--color", "DarkCyan", "--clear"]);
        assert_eq!(args.highlight().unwrap(), Color::DarkCyan);
        assert!(args.clear);

        let args = Args::parse_from(["tb", "--color", "chartreuse"]);
        assert!(matches!(args.highlight(), Err(Error::UnknownColorName(_))));
    }

    #[test]
    fn test_split_mode() {
        assert_eq!(split_mode("deploy"), ("deploy", ValueMode::None));
        assert_eq!(split_mode("deploy:required"), ("deploy", ValueMode::Required));
        assert_eq!(
            split_mode("--tags:Optional_Array"),
            ("--tags", ValueMode::OptionalArray)
        );
        assert_eq!(split_mode("db:migrate"), ("db:migrate", ValueMode::None));
    }

    #[test]
    fn test_command_specs() {
        let args = Args::parse_from([
            "tb",
            "--command",
            "deploy:required",
            "--override-command",
            "help",
        ]);

        let commands = args.command_specs();

        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].name(), "deploy");
        assert!(commands[0].is_value_required());
        assert!(!commands[0].is_override());
        assert_eq!(commands[1].name(), "help");
        assert!(commands[1].is_override());
        assert!(!commands[1].accepts_value());
    }

    #[test]
    fn test_option_specs() {
        let args = Args::parse_from([
            "tb",
            "--option",
            "-v|--verbose",
            "--required-option",
            "--tags:required_array",
        ]);

        let options = args.option_specs().unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].identifier(), "-v|--verbose");
        assert!(!options[0].is_required());
        assert_eq!(options[1].key(), "--tags");
        assert!(options[1].is_required());
        assert!(options[1].is_value_array());
    }

    #[test]
    fn test_option_specs_invalid_name() {
        let args = Args::parse_from(["tb", "--option", "verbose"]);
        assert!(matches!(args.option_specs(), Err(Error::InvalidName(_))));
    }
}
