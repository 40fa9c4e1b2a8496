//! Termbind Core Library
//!
//! This crate binds command-line tokens to declared commands and options. An
//! application declares the commands (`help`, `print`, ...) and options
//! (`-v`, `--name`, `-p|--print`) it recognises, together with how each one
//! takes a value, and a [`Request`](request::Request) matches the process
//! arguments against them.
//!
//! # Key Features
//!
//! - **Specs**: Commands and options with none, optional, required and array values
//! - **Argument Scanning**: Token lookup and consumption over an injected environment
//! - **Request Parsing**: Prefix matching for options, exact matching for commands
//! - **Validation**: Unmet required parameters reported as data, waived by override commands
//! - **Definitions**: Load specs from a YAML file
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use termbind_core::console::Console;
//! use termbind_core::input::{CommandSpec, OptionSpec, Value, ValueMode};
//! use termbind_core::request::Request;
//! use termbind_core::scanner::ProcessEnvironment;
//!
//! let environment = ProcessEnvironment::new(["app", "print", "-tdraft,final"], HashMap::new());
//! let mut console = Console::new(Request::new(environment)?);
//! console
//!     .add_command(CommandSpec::new("print"))
//!     .add_option(OptionSpec::with("-t|--tags", ValueMode::RequiredArray, false)?);
//!
//! assert!(console.is_request_valid());
//! assert_eq!(console.command_value("print"), Some(&Value::Flag));
//! assert_eq!(
//!     console.option_value("--tags"),
//!     Some(&Value::List(vec!["draft".to_string(), "final".to_string()]))
//! );
//! # Ok::<(), termbind_core::error::Error>(())
//! ```

pub mod config;
pub mod console;
pub mod definitions;
pub mod error;
pub mod file_handling;
pub mod input;
pub mod request;
pub mod scanner;
