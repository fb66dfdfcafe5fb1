//! Command-line interface for lexy
//! Scans markup files for tag nesting defects and prints the findings.
//!
//! Usage:
//!   lexy `<path>`... [--format `<format>`] [--config `<file>`] [--strict]  - Scan documents
//!        [--hint-distance `<n>`] [--path-policy `<policy>`]
//!   lexy --list-tags                                                  - Print the tag vocabularies
//!
//! A path of `-` reads the document from stdin.

use clap::{Arg, ArgAction, Command};
use lexy::config::{LexyConfig, Loader};
use lexy::formats::{render, Format};
use lexy::loader::DocumentLoader;
use lexy::{LexyError, MatchRules};
use std::io::Read;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("lexy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checks tag nesting in markup documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Documents to scan ('-' reads stdin)")
                .required_unless_present("list-tags")
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: report, json, yaml, treeviz, spans")
                .default_value("report"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("hint-distance")
                .long("hint-distance")
                .help("Edit distance at which an unclosed tag gets a misspelling hint")
                .value_parser(clap::value_parser!(i64).range(0..)),
        )
        .arg(
            Arg::new("path-policy")
                .long("path-policy")
                .help("Which closing tags pop the structure path")
                .value_parser(["unconditional", "matched-only"]),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit with status 2 when any document has errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-tags")
                .long("list-tags")
                .help("List the known and self-closing tag vocabularies")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log level for diagnostics on stderr (overridden by LEXY_LOG)")
                .value_parser(["trace", "debug", "info", "warn", "error"])
                .default_value("warn"),
        )
        .get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");
    init_logging(level);

    let overrides = MatchingOverrides {
        hint_distance: matches.get_one::<i64>("hint-distance").copied(),
        path_policy: matches.get_one::<String>("path-policy").cloned(),
    };
    let config = load_config(matches.get_one::<String>("config"), overrides).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if matches.get_flag("list-tags") {
        handle_list_tags_command(&config);
        return;
    }

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("report")
        .parse::<Format>()
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    let paths: Vec<&String> = matches
        .get_many::<String>("path")
        .map(|values| values.collect())
        .unwrap_or_default();

    let has_errors = handle_scan_command(&paths, format, &config);
    if has_errors && matches.get_flag("strict") {
        std::process::exit(2);
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env("LEXY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("lexy={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line values that take precedence over every configuration file
struct MatchingOverrides {
    hint_distance: Option<i64>,
    path_policy: Option<String>,
}

fn load_config(
    path: Option<&String>,
    overrides: MatchingOverrides,
) -> Result<LexyConfig, LexyError> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        debug!(path = %path, "layering configuration file");
        loader = loader.with_file(path);
    }
    if let Some(distance) = overrides.hint_distance {
        loader = loader.set_override("matching.hint_distance", distance)?;
    }
    if let Some(policy) = overrides.path_policy {
        loader = loader.set_override("matching.path_policy", policy)?;
    }
    Ok(loader.build()?)
}

/// Scan every document, print its output, and report whether any had errors
fn handle_scan_command(paths: &[&String], format: Format, config: &LexyConfig) -> bool {
    let rules = config.match_rules();
    let mut has_errors = false;

    for (i, path) in paths.iter().enumerate() {
        if paths.len() > 1 {
            if i > 0 {
                println!();
            }
            println!("==> {} <==", path);
        }

        let clean = check_document(path, format, config, &rules).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
        has_errors |= !clean;
    }
    has_errors
}

/// Scan one document and print it in `format`. Returns whether it was clean.
fn check_document(
    path: &str,
    format: Format,
    config: &LexyConfig,
    rules: &MatchRules,
) -> Result<bool, LexyError> {
    let loader = if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| LexyError::Io {
                path: "<stdin>".to_string(),
                message: e.to_string(),
            })?;
        DocumentLoader::from_string(source)
    } else {
        DocumentLoader::from_path(path)?
    };

    let result = loader.scan_with(rules);
    info!(path = %path, summary = %result.summary(), "scanned document");

    let output = render(format, loader.source(), &result, config)?;
    print!("{}", output);
    Ok(result.is_clean())
}

/// Handle the list-tags command
fn handle_list_tags_command(config: &LexyConfig) {
    println!("Known tags:\n");
    println!("  {}", config.vocabulary.known_tags().join(" "));
    println!();
    println!("Self-closing tags (never reported as unclosed):\n");
    println!("  {}", config.vocabulary.self_closing().join(" "));
}
