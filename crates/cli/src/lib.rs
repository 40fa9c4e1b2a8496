//! Termbind CLI Library
//!
//! The terminal presentation layer for termbind, plus the pieces of the `tb`
//! binary that are worth testing on their own.
//!
//! # Modules
//!
//! - [`output`]: colorizing, buffered responses, wrapping, headers, alert
//!   boxes and prompts
//! - [`cli_args`]: command-line arguments of `tb`
//! - [`report`]: rendering of a parsed console
//!
//! # Examples
//!
//! `tb` parses the tokens after `--` against the commands and options it is
//! given, and prints what matched:
//!
//! ```bash
//! # Commands and options inline
//! tb --command deploy:required --option -v|--verbose -- deploy web -v
//!
//! # Commands and options from a definitions file
//! tb -c ~/.termbind/definitions.yml -- deploy web --env=prod
//!
//! # Ask before carrying on when a required option is missing
//! tb -i --required-option --env:required -- deploy web
//! ```

pub mod cli_args;
pub mod output;
pub mod report;
