//! Command-line interface for gherkin-lexer
//! This binary classifies every line of a feature file and prints the result in one of the
//! registered formats, or reports the first line that does not fit the grammar.
//!
//! Usage:
//!   gherkin-lex `<path>` [--format `<format>`] [--config `<file>`] [--no-context] [-v...]
//!   gherkin-lex --list-formats                                  - List all available formats
//!
//! Configuration is layered: built-in defaults, then `./gherkin.toml` if present, then the file
//! given with `--config`, then command-line flags.

use clap::{Arg, ArgAction, ArgMatches, Command};
use gherkin_config::{GherkinConfig, Loader};
use gherkin_lexer::gherkin::formats::FormatRegistry;
use gherkin_lexer::gherkin::lexing::LexError;
use gherkin_lexer::gherkin::loader::{DocumentLoader, LoaderError};

const LOCAL_CONFIG: &str = "gherkin.toml";

fn main() {
    let matches = Command::new("gherkin-lex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Classify the lines of Gherkin-style feature files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the feature file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: listing)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults and ./gherkin.toml"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-context")
                .long("no-context")
                .help("Do not print source lines around a rejected line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase logging verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    handle_scan_command(path, &config);
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn load_config(matches: &ArgMatches) -> Result<GherkinConfig, gherkin_config::Error> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(file) = matches.get_one::<String>("config") {
        log::info!("using configuration file {}", file);
        loader = loader.with_file(file);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("no-context") {
        loader = loader.set_override("output.show_context", false)?;
    }
    loader.build()
}

/// Handle the scan command
fn handle_scan_command(path: &str, config: &GherkinConfig) {
    let doc = DocumentLoader::from_path(path)
        .and_then(|loader| loader.with_options(config.scan.to_scan_options()).scan())
        .unwrap_or_else(|e| {
            report_error(&e, config.output.show_context);
            std::process::exit(1);
        });
    log::info!("{}: {} classified lines", path, doc.lines.len());

    let formatted = FormatRegistry::default()
        .render(&doc, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        });

    print!("{}", formatted);
}

fn report_error(err: &LoaderError, show_context: bool) {
    match err {
        LoaderError::LexError(LexError::UnparsableLine {
            line_number,
            expecting,
            context,
            ..
        }) => {
            eprintln!("error: line {}: {}", line_number, expecting);
            if show_context {
                eprint!("{}", context);
            }
        }
        LoaderError::LexError(lex) => eprintln!("error: {}", lex),
        LoaderError::IoError(msg) => eprintln!("error: {}", msg),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available output formats:\n");

    for format in registry.iter() {
        println!("  {}", format.name());
        println!("    {}", format.summary());
        println!();
    }
}
