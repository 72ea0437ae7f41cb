//! Command-line interface for treedump.
//!
//! Dumps a directory tree and the contents of its files into one text file.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use treedump::dump;

/// treedump — flatten a directory tree into a single text file
#[derive(Parser)]
#[command(name = "treedump", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file, created or overwritten
    #[arg(default_value = "out.txt")]
    output: PathBuf,
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    init_logging();

    match dump(&cli.root, &cli.output) {
        Ok(report) => {
            println!("Arquivo {} gerado com sucesso!", report.output.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
