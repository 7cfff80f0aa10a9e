// Copyright (c) 2025 Nicholas D. Crosbie
mod args;

use call_inspector::analysis::parse_descriptor;
use call_inspector::output::{formatter_for, CallableReport};
use call_inspector::{Config, InspectableCallable, SourceIndex};
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = args::parse_args();

    if args.markdown_help {
        println!("{}", clap_markdown::help_markdown_command(&args::command()));
        return Ok(());
    }

    let project_dir = Path::new(&args.project_dir);
    let config = match &args.config_file {
        Some(path) => Config::from_file(Path::new(path))?,
        None => Config::discover(project_dir)?,
    };
    debug!(?config, "using config");

    let index = SourceIndex::from_project(project_dir, &config)?;

    let mut reports = Vec::new();
    for descriptor in &args.callables {
        match InspectableCallable::from_value(parse_descriptor(descriptor), &index) {
            Ok(callable) => reports.push(CallableReport::from_callable(&callable)),
            Err(err) => eprintln!("Error: {}: {}", descriptor, err),
        }
    }

    let output = formatter_for(&args.format).format_reports(&reports, project_dir)?;
    match &args.output_file {
        Some(file) => {
            let mut file_handle = File::create(file)?;
            file_handle.write_all(output.as_bytes())?;
            println!("Results written to: {}", file);
        }
        None => println!("{}", output.trim_end()),
    }

    Ok(())
}
