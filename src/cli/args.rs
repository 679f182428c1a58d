//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default location of the roadmap document, relative to the working dir.
pub const DEFAULT_DATA_PATH: &str = "data/roadmap.json";

/// Configuration from CLI arguments
#[derive(Debug)]
pub struct CliConfig {
    pub data_path: PathBuf,
    pub watch: bool,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Roadmap TUI - terminal dashboard for product roadmap tracking");
    eprintln!();
    eprintln!("Usage: roadmap-tui [data-file] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [data-file]    Path to the roadmap JSON document");
    eprintln!("                 (default: {DEFAULT_DATA_PATH})");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --no-watch     Do not reload when the document changes on disk");
    eprintln!("  -h, --help     Show this help message");
    eprintln!("  -V, --version  Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  roadmap-tui                      # Use {DEFAULT_DATA_PATH}");
    eprintln!("  roadmap-tui team/roadmap.json    # Use a specific document");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    for arg in &args {
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        }
        if arg == "-V" || arg == "--version" {
            println!("roadmap-tui {}", VERSION);
            std::process::exit(0);
        }
    }
    parse_from(&args)
}

fn parse_from(args: &[String]) -> io::Result<CliConfig> {
    let mut data_path: Option<PathBuf> = None;
    let mut watch = true;

    for arg in args {
        if arg == "--no-watch" {
            watch = false;
        } else if !arg.starts_with('-') {
            if data_path.is_some() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unexpected argument: {}", arg),
                ));
            }
            data_path = Some(PathBuf::from(arg));
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(CliConfig {
        data_path: data_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
        watch,
    })
}
