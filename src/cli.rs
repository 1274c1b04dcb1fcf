//! Command-line argument parsing.

use clap::Parser;

use crate::constants;

const EXAMPLES: &str = "\
Examples:
  ghstar microsoft/vscode
  ghstar jlevy/the-art-of-command-line
  ghstar -i awesome-cli -n 3
";

/// Star GitHub repos from the command line.
#[derive(Parser, Debug)]
#[command(name = "ghstar", version, about, after_help = EXAMPLES)]
pub struct Cli {
    /// Repo to star ("owner/name"), or a search term with --interactive
    pub repo: String,

    /// Search for the repo and pick one from the top matches
    #[arg(short, long)]
    pub interactive: bool,

    /// Max number of search results to choose from
    #[arg(
        short = 'n',
        long = "search-count",
        value_name = "SEARCH_COUNT",
        default_value_t = constants::search::DEFAULT_RESULT_COUNT,
        value_parser = clap::value_parser!(u8).range(1..=constants::search::MAX_RESULT_COUNT as i64)
    )]
    pub search_count: u8,
}
