//! Scrimshaw CLI - Render source-code type models as PlantUML class diagrams

mod cli;
mod model;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    // Logging is initialized inside run() once the CLI flags are known.
    let app = cli::ScrimshawApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
