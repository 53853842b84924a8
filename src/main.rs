//! Orthoroute CLI
//!
//! Usage:
//!   orthoroute [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --format <FORMAT>  Output format: text or toml [default: text]
//!   -v, --verbose          Log routing decisions to stderr
//!   -h, --help             Print help

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use orthoroute::{format_text, format_toml, Request};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Toml,
}

#[derive(Parser)]
#[command(name = "orthoroute")]
#[command(about = "Route orthogonal connectors between rectangles")]
struct Cli {
    /// Request file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Log routing decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "orthoroute=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let request = match &cli.input {
        Some(path) => match Request::from_file(path) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error loading request '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut source = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut source) {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            }
            match Request::from_str(&source) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error parsing request: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let routes = match request.route_all() {
        Ok(routes) => routes,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let output = match cli.format {
        Format::Text => format_text(&routes),
        Format::Toml => match format_toml(&routes) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    };
    print!("{}", output);
}
