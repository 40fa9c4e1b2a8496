//! Renders the outcome of a parsed console for display.

use crossterm::style::Color;
use itertools::Itertools;
use termbind_core::console::Console;
use termbind_core::input::Input;

use crate::output::color::{bold, colorize};
use crate::output::layout::{alert, header, write_lines};

const INDENT: &str = "  ";

fn section(title: &str, lines: &[String], width: usize, raw: bool) -> String {
    let mut out = bold(&header(title, '-', width), raw);
    if lines.is_empty() {
        out.push_str(&write_lines("(none)", width, INDENT));
    }
    for line in lines {
        out.push_str(&write_lines(line, width, INDENT));
    }
    out
}

fn entry(name: &str, value: &str, highlight: Color, raw: bool) -> String {
    format!("{} = {value}", colorize(name, Some(highlight), None, raw))
}

/// Lists the commands and options that received a value, followed by the
/// arguments left over after parsing. Names are drawn in `highlight`.
pub fn render(console: &mut Console, highlight: Color, raw: bool) -> String {
    let width = console.width();

    let commands: Vec<String> = console
        .commands()
        .values()
        .filter_map(|command| {
            command
                .value()
                .map(|value| entry(command.name(), &value.to_string(), highlight, raw))
        })
        .collect();

    let options: Vec<String> = console
        .options()
        .values()
        .unique_by(|option| option.identifier())
        .filter_map(|option| {
            option
                .value()
                .map(|value| entry(&option.identifier(), &value.to_string(), highlight, raw))
        })
        .collect();

    let arguments: Vec<String> = console
        .request()
        .arguments()
        .into_iter()
        .enumerate()
        .map(|(index, argument)| format!("{index}: {argument}"))
        .collect();

    [
        section("Commands", &commands, width, raw),
        section("Options", &options, width, raw),
        section("Arguments", &arguments, width, raw),
    ]
    .join("\n")
}

/// An alert box naming each required parameter that was not satisfied.
pub fn render_missing(console: &mut Console, raw: bool) -> String {
    let width = console.width();
    let missing = console.required_params_not_found().join(", ");
    let text = format!("The following required parameters were not found: {missing}");
    colorize(&alert(&text, width, 1), Some(Color::Red), None, raw)
}
