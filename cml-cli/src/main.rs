//! Command-line interface for CML
//!
//! Parses one `.cml` file and reports the outcome.
//!
//! Usage:
//!   cml-parse `<file>`                        - Parse, print a success line
//!   cml-parse `<file>` --summary              - Also print domain and context map counts
//!   cml-parse `<file>` --json                 - Print the full result envelope as JSON
//!   cml-parse `<file>` --config `<toml>`      - Layer a configuration file over the defaults
//!   cml-parse `<file>` --strict-references    - Treat unresolved references as errors
//!
//! Exit code is 0 when the file parsed without errors, 1 otherwise. Warnings never change the
//! exit code; they are printed to stderr with a `warning:` prefix.

mod logging;

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use cml_config::{CmlConfig, Loader};
use cml_parser::{CmlLoader, ParseResult};

fn command() -> Command {
    Command::new("cml-parse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse a Context Mapper DSL file and report the result")
        .arg(
            Arg::new("file")
                .help("Path to the .cml file")
                .index(1),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit the parse result as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Print a short success summary")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("strict-references")
                .long("strict-references")
                .help("Report unresolved references as errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
}

fn main() -> ExitCode {
    let mut command = command();
    let matches = command.get_matches_mut();

    let Some(file) = matches.get_one::<String>("file") else {
        eprintln!("{}", command.render_usage());
        return ExitCode::FAILURE;
    };

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.logging.level.raised(matches.get_count("verbose")));

    let result = parse(file, &config);
    report(file, &result, &matches, &config)
}

fn load_config(matches: &ArgMatches) -> Result<CmlConfig, cml_config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("strict-references") {
        loader = loader.set_override("build.references", "error")?;
    }
    loader.build()
}

fn parse(file: &str, config: &CmlConfig) -> ParseResult {
    match CmlLoader::from_path(file) {
        Ok(loader) => loader.with_options(config.build).parse_safe(),
        Err(error) => ParseResult::failed(error.to_diagnostic(), None, Some(file.to_string())),
    }
}

fn report(file: &str, result: &ParseResult, matches: &ArgMatches, config: &CmlConfig) -> ExitCode {
    for warning in &result.warnings {
        eprintln!("warning: {}", warning.pretty());
    }

    if !result.ok() {
        eprintln!("Error parsing {}:", file);
        for error in &result.errors {
            eprintln!("{}", error.pretty());
        }
        return ExitCode::FAILURE;
    }

    if matches.get_flag("json") {
        let json = if config.output.pretty_json {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        };
        return match json {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing result: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    println!("Successfully parsed {}", file);
    if matches.get_flag("summary") {
        let model = result.model_or_default();
        println!("Domains: {}", model.domains.len());
        println!("Context Maps: {}", model.context_maps.len());
    }
    ExitCode::SUCCESS
}
