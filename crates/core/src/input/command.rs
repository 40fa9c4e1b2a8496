use std::fmt::{Display, Formatter};

use super::{Input, ValueMode, ValueState};

/// A recognised command, such as `help` or `user edit`.
///
/// The name is matched verbatim against a single token, so a name containing
/// spaces only matches a token that itself contains those spaces.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CommandSpec {
    name: String,
    help: Option<String>,
    is_override: bool,
    state: ValueState,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: None,
            is_override: false,
            state: ValueState::default(),
        }
    }

    /// Builds a command with a value mode and override flag in one go.
    pub fn with(name: impl Into<String>, mode: ValueMode, is_override: bool) -> Self {
        Self::new(name).value_mode(mode).with_override(is_override)
    }

    #[must_use]
    pub fn value_mode(mut self, mode: ValueMode) -> Self {
        self.set_value_mode(mode);
        self
    }

    /// An override command waives every unmet required parameter of the
    /// request it is found in.
    #[must_use]
    pub fn with_override(mut self, is_override: bool) -> Self {
        self.is_override = is_override;
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_help(&mut self, help: impl Into<String>) {
        self.help = Some(help.into());
    }

    pub fn set_override(&mut self, is_override: bool) {
        self.is_override = is_override;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    #[must_use]
    pub fn is_override(&self) -> bool {
        self.is_override
    }
}

impl Input for CommandSpec {
    fn value_state(&self) -> &ValueState {
        &self.state
    }

    fn value_state_mut(&mut self) -> &mut ValueState {
        &mut self.state
    }
}

impl Display for CommandSpec {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.help {
            Some(help) => write!(formatter, "{} ({})", self.name, help),
            None => formatter.write_str(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Value, VALUE_IS_ARRAY, VALUE_NONE, VALUE_REQUIRED};

    #[test]
    fn test_new_command_defaults() {
        let command = CommandSpec::new("edit");
        assert_eq!(command.name(), "edit");
        assert!(command.help().is_none());
        assert!(!command.is_override());
        assert!(!command.accepts_value());
        assert!(command.value().is_none());
    }

    #[test]
    fn test_set_name_and_help() {
        let mut command = CommandSpec::new("hello");
        command.set_name("helloworld");
        command.set_help("Hello World");
        assert_eq!(command.name(), "helloworld");
        assert_eq!(command.help(), Some("Hello World"));
    }

    #[test]
    fn test_name_keeps_spaces() {
        let command = CommandSpec::new("user edit");
        assert_eq!(command.name(), "user edit");
    }

    #[test]
    fn test_with_sets_mode_and_override() {
        let command = CommandSpec::with("print", ValueMode::RequiredArray, true);
        assert!(command.is_override());
        assert!(command.is_value_required());
        assert!(!command.is_value_optional());
        assert!(command.is_value_array());
        assert!(command.accepts_value());
    }

    #[test]
    fn test_value_mode_bits() {
        let mut command = CommandSpec::new("print");
        command.set_value_mode_bits(VALUE_REQUIRED | VALUE_IS_ARRAY);
        assert!(command.is_value_required());
        assert!(command.is_value_array());

        // Unrecognised combination leaves the current mode alone
        command.set_value_mode_bits(VALUE_NONE | VALUE_IS_ARRAY);
        assert!(command.is_value_required());
        assert!(command.is_value_array());

        command.set_value_mode_bits(VALUE_NONE);
        assert!(!command.accepts_value());
        assert!(!command.is_value_array());
    }

    #[test]
    fn test_set_value_overwrites() {
        let mut command = CommandSpec::new("print");
        command.set_value(Value::Text("a".into()));
        command.set_value(Value::Text("b".into()));
        assert_eq!(command.value(), Some(&Value::Text("b".into())));
    }

    #[test]
    fn test_display() {
        assert_eq!(CommandSpec::new("list").to_string(), "list");
        assert_eq!(
            CommandSpec::new("list").with_help("List things").to_string(),
            "list (List things)"
        );
    }
}
