use clap::Parser;
use colored::*;

use ghstar::{app, cli, error};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = app::App::run(cli).await {
        eprintln!(
            "{} {}",
            "error:".red().bold(),
            error::format_error_chain(&err)
        );
        std::process::exit(1);
    }
}
