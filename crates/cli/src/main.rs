use std::env;
use std::io::{stderr, stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use termbind_cli::cli_args::Args;
use termbind_cli::output::prompt::prompt;
use termbind_cli::output::response::Response;
use termbind_cli::output::screen::clear;
use termbind_cli::report;
use termbind_core::config::{resolve_definitions_path, DEFINITIONS_PATH_ENV};
use termbind_core::console::Console;
use termbind_core::definitions::Definitions;
use termbind_core::error::Result;
use termbind_core::file_handling::{get_definitions, get_optional_definitions};
use termbind_core::request::Request;
use termbind_core::scanner::ProcessEnvironment;

/// Loads the definitions file, if any.
///
/// A path given with `-c` or the environment must exist. The default path is
/// only read when present.
fn load_definitions(args: &Args) -> Result<Option<Definitions>> {
    let env_path = env::var(DEFINITIONS_PATH_ENV).ok();
    let path = resolve_definitions_path(args.config_path.as_deref(), env_path.as_deref());
    debug!("Definitions path: `{path}`");

    if args.config_path.is_some() || env_path.is_some() {
        get_definitions(&path).map(Some)
    } else {
        get_optional_definitions(&path)
    }
}

fn build_console(args: &Args) -> Result<Console> {
    let argv = std::iter::once("tb".to_string()).chain(args.tokens.iter().cloned());
    let environment = ProcessEnvironment::new(argv, env::vars().collect());
    let mut console = Console::new(Request::new(environment)?).with_width(args.width);

    if let Some(definitions) = load_definitions(args)? {
        let (commands, options) = definitions.to_specs()?;
        console.add_commands(commands.into_values());
        console.add_options(options.into_values());
    }

    console.add_commands(args.command_specs());
    console.add_options(args.option_specs()?);
    Ok(console)
}

fn execute() -> Result<ExitCode> {
    let args = Args::parse();
    let highlight = args.highlight()?;
    let mut console = build_console(&args)?;
    let mut response = Response::new();

    if !console.is_request_valid() {
        response.set_body(report::render_missing(&mut console, args.raw));
        response.send(&mut stderr())?;

        if !args.interactive {
            return Ok(ExitCode::FAILURE);
        }

        let answer = prompt(
            &mut stdin().lock(),
            &mut stdout(),
            "Continue anyway? (y/n): ",
            Some(&["y", "n"][..]),
            false,
        )?;
        if answer != "y" {
            info!("Stopped on missing required parameters");
            return Ok(ExitCode::FAILURE);
        }
    }

    if args.clear {
        clear(&mut stdout())?;
    }
    response.set_body(report::render(&mut console, highlight, args.raw));
    response.send(&mut stdout())?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
