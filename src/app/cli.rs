//! CLI Adapter.

use clap::Parser;

/// All values are compiled in; the binary takes no options.
#[derive(Parser)]
#[command(name = "annotator")]
#[command(version)]
#[command(
    about = "Prepare annotator-out/ and run the annotator against the repository build",
    long_about = None
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    let Cli {} = Cli::parse();
    super::logging::init();

    if let Err(e) = crate::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
