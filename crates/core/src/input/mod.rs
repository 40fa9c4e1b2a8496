//! Command and option specs.
//!
//! A spec describes a command or option the application recognises. It carries
//! the value mode (whether it takes a value, and whether that value is an
//! array) and, once a [`Request`](crate::request::Request) has been parsed, the
//! value that was matched for it.

pub mod command;
pub mod option;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::warn;
use serde::Deserialize;

use crate::error::{Error, Result};

pub use command::CommandSpec;
pub use option::OptionSpec;

/// Raw value mode bit: no value.
pub const VALUE_NONE: u8 = 1;
/// Raw value mode bit: a value is required.
pub const VALUE_REQUIRED: u8 = 2;
/// Raw value mode bit: a value is optional.
pub const VALUE_OPTIONAL: u8 = 3;
/// Raw value mode bit: the value is a comma separated list.
pub const VALUE_IS_ARRAY: u8 = 4;

/// How a command or option takes its value.
#[derive(Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValueMode {
    #[default]
    None,
    Required,
    Optional,
    RequiredArray,
    OptionalArray,
}

impl ValueMode {
    /// Resolves one of the accepted raw bit combinations.
    ///
    /// Only `VALUE_NONE`, `VALUE_REQUIRED`, `VALUE_OPTIONAL` and the last two
    /// combined with `VALUE_IS_ARRAY` are recognised.
    #[must_use]
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            VALUE_NONE => Some(Self::None),
            VALUE_REQUIRED => Some(Self::Required),
            VALUE_OPTIONAL => Some(Self::Optional),
            b if b == VALUE_REQUIRED | VALUE_IS_ARRAY => Some(Self::RequiredArray),
            b if b == VALUE_OPTIONAL | VALUE_IS_ARRAY => Some(Self::OptionalArray),
            _ => None,
        }
    }

    /// The `(optional, required, is_array)` triple for this mode.
    #[must_use]
    pub fn flags(self) -> (bool, bool, bool) {
        match self {
            Self::None => (false, false, false),
            Self::Required => (false, true, false),
            Self::Optional => (true, false, false),
            Self::RequiredArray => (false, true, true),
            Self::OptionalArray => (true, false, true),
        }
    }
}

impl FromStr for ValueMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "required" => Ok(Self::Required),
            "optional" => Ok(Self::Optional),
            "required_array" => Ok(Self::RequiredArray),
            "optional_array" => Ok(Self::OptionalArray),
            _ => Err(Error::UnknownValueMode(s.to_string())),
        }
    }
}

impl Display for ValueMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Required => "required",
            Self::Optional => "optional",
            Self::RequiredArray => "required_array",
            Self::OptionalArray => "optional_array",
        })
    }
}

/// A matched value.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Value {
    /// Present without a value.
    Flag,
    Text(String),
    List(Vec<String>),
}

impl Value {
    /// Splits a raw value on `,` when the spec takes an array.
    ///
    /// An empty raw value still produces a single empty element.
    #[must_use]
    pub fn from_raw(raw: &str, is_array: bool) -> Self {
        if is_array {
            Self::List(raw.split(',').map(ToString::to_string).collect())
        } else {
            Self::Text(raw.to_string())
        }
    }

    /// Whether this value fails a value-required check: an empty string or
    /// a list whose first element is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Flag => false,
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.first().is_some_and(String::is_empty),
        }
    }

    /// Turns an empty text value into [`Value::Flag`].
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Text(text) if text.is_empty() => Self::Flag,
            other => other,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => f.write_str("true"),
            Self::Text(text) => f.write_str(text),
            Self::List(items) => f.write_str(&items.join(",")),
        }
    }
}

/// Value-mode state shared by commands and options.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct ValueState {
    optional: bool,
    required: bool,
    is_array: bool,
    value: Option<Value>,
}

/// Common behaviour of [`CommandSpec`] and [`OptionSpec`].
pub trait Input {
    fn value_state(&self) -> &ValueState;

    fn value_state_mut(&mut self) -> &mut ValueState;

    fn set_value_mode(&mut self, mode: ValueMode) {
        let (optional, required, is_array) = mode.flags();
        let state = self.value_state_mut();
        state.optional = optional;
        state.required = required;
        state.is_array = is_array;
    }

    /// Applies a raw bit combination. Unrecognised combinations are ignored.
    fn set_value_mode_bits(&mut self, bits: u8) {
        match ValueMode::from_bits(bits) {
            Some(mode) => self.set_value_mode(mode),
            None => warn!("Ignoring unrecognised value mode bits: {bits}"),
        }
    }

    fn set_value_optional(&mut self, optional: bool) {
        self.value_state_mut().optional = optional;
    }

    fn set_value_required(&mut self, required: bool) {
        self.value_state_mut().required = required;
    }

    fn set_value_is_array(&mut self, is_array: bool) {
        self.value_state_mut().is_array = is_array;
    }

    /// Stores a value, replacing any previous one.
    fn set_value(&mut self, value: Value) {
        self.value_state_mut().value = Some(value);
    }

    fn accepts_value(&self) -> bool {
        self.is_value_optional() || self.is_value_required()
    }

    fn is_value_optional(&self) -> bool {
        self.value_state().optional
    }

    fn is_value_required(&self) -> bool {
        self.value_state().required
    }

    fn is_value_array(&self) -> bool {
        self.value_state().is_array
    }

    fn value(&self) -> Option<&Value> {
        self.value_state().value.as_ref()
    }
}
