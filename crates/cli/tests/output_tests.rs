#[cfg(test)]
mod tests {
    use clap::Parser;
    use crossterm::style::Color;
    use std::collections::HashMap;
    use std::io::Cursor;
    use termbind_cli::cli_args::Args;
    use termbind_cli::output::layout::wrap;
    use termbind_cli::output::prompt::prompt;
    use termbind_cli::output::response::Response;
    use termbind_cli::report::{render, render_missing};
    use termbind_core::console::Console;
    use termbind_core::input::Value;
    use termbind_core::request::Request;
    use termbind_core::scanner::ProcessEnvironment;

    fn console_for(args: &Args) -> Console {
        let argv = std::iter::once("tb".to_string()).chain(args.tokens.iter().cloned());
        let request = Request::new(ProcessEnvironment::new(argv, HashMap::new())).unwrap();
        let mut console = Console::new(request).with_width(args.width);
        console.add_commands(args.command_specs());
        console.add_options(args.option_specs().unwrap());
        console
    }

    #[test]
    fn test_args_through_console() {
        let args = Args::parse_from([
            "tb",
            "--command",
            "deploy:required",
            "--option",
            "--tags:optional_array",
            "--required-option",
            "-e|--env:required",
            "--",
            "deploy",
            "web",
            "-eprod",
            "--tags=a,b",
        ]);
        let mut console = console_for(&args);

        assert!(console.is_request_valid());
        assert_eq!(
            console.command_value("deploy"),
            Some(&Value::Text("web".into()))
        );
        assert_eq!(console.option_value("-e"), Some(&Value::Text("prod".into())));
        assert_eq!(
            console.option_value("--tags"),
            Some(&Value::List(vec!["a".into(), "b".into()]))
        );
        assert_eq!(console.arguments(), ["deploy", "web"]);

        let report = render(&mut console, Color::Green, true);
        assert!(report.contains("  deploy = web\n"));
        assert!(report.contains("  -e|--env = prod\n"));
        assert!(report.contains("  --tags = a,b\n"));
    }

    #[test]
    fn test_missing_required_option_is_reported() {
        let args = Args::parse_from([
            "tb",
            "--required-option",
            "-e|--env:required",
            "--",
            "deploy",
            "-e",
        ]);
        let mut console = console_for(&args);

        assert!(!console.is_request_valid());
        assert_eq!(console.required_params_not_found(), ["-e|--env"]);

        let mut response = Response::with_body(render_missing(&mut console, true));
        let mut out = Vec::new();
        response.send(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("-e|--env"));
        assert!(out.lines().all(|line| line.chars().count() == 80));
    }

    #[test]
    fn test_override_command_skips_validation() {
        let args = Args::parse_from([
            "tb",
            "--override-command",
            "help",
            "--required-option",
            "--env:required",
            "--",
            "help",
        ]);
        let mut console = console_for(&args);

        assert!(console.is_request_valid());
        assert!(console.has_command("help"));
    }

    #[test]
    fn test_narrow_report_wraps() {
        let args = Args::parse_from(["tb", "-w", "12", "--", "a-rather-long-argument"]);
        let mut console = console_for(&args);

        let report = render(&mut console, Color::Green, true);
        assert!(report.lines().all(|line| line.chars().count() <= 12));
    }

    #[test]
    fn test_interactive_confirmation() {
        let mut reader = Cursor::new("what\nY\n");
        let mut writer = Vec::new();
        let answer = prompt(
            &mut reader,
            &mut writer,
            "Continue anyway? (y/n): ",
            Some(&["y", "n"][..]),
            false,
        )
        .unwrap();

        assert_eq!(answer, "y");
        assert_eq!(wrap(&String::from_utf8(writer).unwrap(), 0).len(), 1);
    }
}
