// Copyright (c) 2025 Nicholas D. Crosbie
use clap::{Arg, ArgAction, Command};

pub struct Args {
    pub project_dir: String,
    pub callables: Vec<String>,
    pub output_file: Option<String>,
    pub config_file: Option<String>,
    pub format: String,
    pub markdown_help: bool,
}

pub fn command() -> Command {
    Command::new("call-inspector")
        .about("Describe callables by name and definition site")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .after_help(
            "Callables: `name`, `Type::method`, `Type->method` (instance), \
             `[Type, method]` (static) or `new Type` (invokable object).\n\n\
             Copyright (c) 2025 Nicholas D. Crosbie",
        )
        .arg(
            Arg::new("project_dir")
                .help("The directory containing the Rust sources to index")
                .required_unless_present("markdown_help")
                .index(1),
        )
        .arg(
            Arg::new("callables")
                .help("Callables to describe")
                .required_unless_present("markdown_help")
                .num_args(1..)
                .index(2),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Write results to the specified file instead of stdout")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this TOML file instead of Cargo.toml metadata")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (json or text)")
                .value_name("FORMAT")
                .value_parser(["json", "text"])
                .default_value("text"),
        )
        .arg(
            Arg::new("markdown_help")
                .long("markdown-help")
                .help("Generate a markdown version of the help text")
                .action(ArgAction::SetTrue),
        )
}

pub fn parse_args() -> Args {
    args_from(command().get_matches())
}

fn args_from(matches: clap::ArgMatches) -> Args {
    Args {
        project_dir: matches
            .get_one::<String>("project_dir")
            .cloned()
            .unwrap_or_default(),
        callables: matches
            .get_many::<String>("callables")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        output_file: matches.get_one::<String>("output").cloned(),
        config_file: matches.get_one::<String>("config").cloned(),
        format: matches
            .get_one::<String>("format")
            .cloned()
            .unwrap_or_else(|| "text".to_string()),
        markdown_help: matches.get_flag("markdown_help"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(argv: &[&str]) -> Args {
        args_from(command().try_get_matches_from(argv.iter().copied()).unwrap())
    }

    #[test]
    fn collects_every_callable() {
        let args = parse(&[
            "call-inspector",
            "demo",
            "strlen",
            "Circle->area",
            "--format",
            "json",
        ]);

        assert_eq!(args.project_dir, "demo");
        assert_eq!(args.callables, vec!["strlen", "Circle->area"]);
        assert_eq!(args.format, "json");
        assert_eq!(args.output_file, None);
    }

    #[test]
    fn markdown_help_needs_no_positionals() {
        let args = parse(&["call-inspector", "--markdown-help"]);

        assert!(args.markdown_help);
        assert!(args.callables.is_empty());
    }

    #[test]
    fn callables_are_required() {
        assert!(command()
            .try_get_matches_from(["call-inspector", "demo"])
            .is_err());
    }

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }
}
