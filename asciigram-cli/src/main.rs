//! Command-line interface for asciigram
//! This binary turns ASCII-art diagram files into figure lists in different formats.
//!
//! Usage:
//!   asciigram `<path>` [--format `<format>`] [--output `<file>`]   - Convert a diagram
//!   asciigram --list `<dir>`                                     - List the diagrams in a directory
//!   asciigram --list-formats                                     - List available output formats

mod formats;

use asciigram::diagram::loader::{list_diagrams, save_output};
use asciigram_config::{AsciigramConfig, LogLevel, Loader};
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

/// Looked up in the working directory when no `--config` is given
const LOCAL_CONFIG: &str = "asciigram.toml";

fn main() {
    let matches = Command::new("asciigram")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns ASCII-art diagrams into line and text figures")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the diagram file")
                .required_unless_present_any(["list-formats", "list"])
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: listing)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the output to this file instead of stdout"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .value_name("DIR")
                .help("List the diagrams stored in a directory")
                .conflicts_with("path"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for more detail)")
                .action(ArgAction::Count),
        )
        .get_matches();

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_logging(config.logging.level.raised(matches.get_count("verbose")));

    let registry = formats::configured_registry(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    if let Some(dir) = matches.get_one::<String>("list") {
        handle_list_command(dir);
        return;
    }

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("A diagram path is required");
        std::process::exit(1);
    };
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or(config.output.format.as_str());
    let output = matches.get_one::<String>("output");

    handle_convert_command(&registry, path, format, output.map(String::as_str));
}

fn load_config(path: Option<&String>) -> Result<AsciigramConfig, asciigram_config::ConfigError> {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };
    loader.build()
}

/// Logs go to stderr so they never mix with converted output. `RUST_LOG` wins over
/// the configured level.
fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the convert command
fn handle_convert_command(
    registry: &asciigram::diagram::formats::FormatRegistry,
    path: &str,
    format: &str,
    output: Option<&str>,
) {
    let formatted = formats::convert_file(registry, path, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match output {
        Some(output) => {
            if let Err(e) = save_output(output, &formatted) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => print!("{}", formatted),
    }
}

/// Handle the list command
fn handle_list_command(dir: &str) {
    let names = list_diagrams(dir).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    for name in names {
        println!("{}", name);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &asciigram::diagram::formats::FormatRegistry) {
    println!("Available output formats:\n");

    for formatter in registry.formatters() {
        println!("  {}", formatter.name());
        println!("    {}", formatter.description());
        println!();
    }
}
