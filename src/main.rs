//! Driftwatch CLI entry point.

use clap::Parser;

use driftwatch::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = driftwatch::cli::execute(cli).await {
        eprintln!("driftwatch: {err:#}");
        std::process::exit(1);
    }
}
