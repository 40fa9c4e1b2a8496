use std::fmt::{Display, Formatter};

use super::{Input, ValueMode, ValueState};
use crate::error::{Error, Result};

/// A recognised option with a short (`-o`) and/or long (`--option`) name.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct OptionSpec {
    short_name: Option<String>,
    long_name: Option<String>,
    required: bool,
    help: Option<String>,
    state: ValueState,
}

fn is_short_name(name: &str) -> bool {
    name.strip_prefix('-')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c != '-' && !c.is_whitespace())
}

fn is_long_name(name: &str) -> bool {
    name.strip_prefix("--")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| !c.is_whitespace())
}

/// Splits `-o`, `--option` or `-o|--option` into its short and long parts.
fn parse_name(name: &str) -> Result<(Option<String>, Option<String>)> {
    if let Some((short, long)) = name.split_once('|') {
        let short_is_single = short.chars().count() == 2;
        let long_is_word = !long.chars().any(char::is_whitespace);
        if is_short_name(short) && short_is_single && is_long_name(long) && long_is_word {
            return Ok((Some(short.to_string()), Some(long.to_string())));
        }
    } else if is_long_name(name) {
        return Ok((None, Some(name.to_string())));
    } else if is_short_name(name) {
        return Ok((Some(name.to_string()), None));
    }

    Err(Error::InvalidName(name.to_string()))
}

impl OptionSpec {
    /// Creates an option from `-o`, `--option` or `-o|--option`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is not one of those forms.
    pub fn new(name: &str) -> Result<Self> {
        let (short_name, long_name) = parse_name(name)?;
        Ok(Self {
            short_name,
            long_name,
            required: false,
            help: None,
            state: ValueState::default(),
        })
    }

    /// Builds an option with a value mode and required flag in one go.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is malformed.
    pub fn with(name: &str, mode: ValueMode, required: bool) -> Result<Self> {
        Ok(Self::new(name)?.value_mode(mode).required(required))
    }

    #[must_use]
    pub fn value_mode(mut self, mode: ValueMode) -> Self {
        self.set_value_mode(mode);
        self
    }

    /// A required option must appear in the request.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Replaces both names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is malformed, leaving the
    /// current names untouched.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        let (short_name, long_name) = parse_name(name)?;
        self.short_name = short_name;
        self.long_name = long_name;
        Ok(())
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub fn set_help(&mut self, help: impl Into<String>) {
        self.help = Some(help.into());
    }

    #[must_use]
    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }

    #[must_use]
    pub fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    #[must_use]
    pub fn has_short_name(&self) -> bool {
        self.short_name.is_some()
    }

    #[must_use]
    pub fn has_long_name(&self) -> bool {
        self.long_name.is_some()
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// The dashed names this option is matched by, short first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.short_name
            .as_deref()
            .into_iter()
            .chain(self.long_name.as_deref())
    }

    /// `-o|--option` when both names exist, otherwise whichever one does.
    #[must_use]
    pub fn identifier(&self) -> String {
        self.names().collect::<Vec<_>>().join("|")
    }

    /// Key used when registering the option: the long name when present.
    #[must_use]
    pub fn key(&self) -> &str {
        self.long_name
            .as_deref()
            .or(self.short_name.as_deref())
            .unwrap_or_default()
    }
}

impl Input for OptionSpec {
    fn value_state(&self) -> &ValueState {
        &self.state
    }

    fn value_state_mut(&mut self) -> &mut ValueState {
        &mut self.state
    }
}

impl Display for OptionSpec {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.identifier())?;
        if let Some(help) = &self.help {
            write!(formatter, " ({help})")?;
        }
        Ok(())
    }
}
