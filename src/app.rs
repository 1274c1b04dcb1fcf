//! Application orchestration.
//!
//! Two modes: DIRECT stars the positional argument as an exact "owner/name",
//! INTERACTIVE searches for it, lets the user pick a candidate, and stars
//! the pick. Either way at most one star call is made per invocation.

use anyhow::Result;
use colored::*;

use crate::app_deps::{GitHubApi, PromptInterface, RealGitHubApi, RealPrompt};
use crate::cli::Cli;
use crate::config::Credentials;
use crate::github::GitHubClient;
use crate::prompt::Selection;
use crate::validation;

pub struct App;

impl App {
    /// Run with real dependencies: credentials from the environment and a
    /// basic-auth GitHub client.
    pub async fn run(cli: Cli) -> Result<()> {
        dotenv::dotenv().ok();

        let credentials = Credentials::from_env()?;
        let api = RealGitHubApi::new(GitHubClient::new(&credentials)?);

        Self::run_with_deps(&api, &RealPrompt, &cli).await
    }

    /// Core control flow with injected dependencies (for tests).
    pub async fn run_with_deps(
        api: &dyn GitHubApi,
        prompt: &dyn PromptInterface,
        cli: &Cli,
    ) -> Result<()> {
        if cli.interactive {
            Self::run_interactive(api, prompt, &cli.repo, cli.search_count).await
        } else {
            Self::run_direct(api, &cli.repo).await
        }
    }

    async fn run_direct(api: &dyn GitHubApi, full_name: &str) -> Result<()> {
        validation::validate_full_name(full_name)?;
        api.star(full_name).await?;
        print_starred(full_name);
        Ok(())
    }

    async fn run_interactive(
        api: &dyn GitHubApi,
        prompt: &dyn PromptInterface,
        term: &str,
        search_count: u8,
    ) -> Result<()> {
        let candidates = api.search(term, search_count).await?;

        if candidates.is_empty() {
            anyhow::bail!("No repos found matching '{}'.", term);
        }

        match prompt.select_candidate(&candidates)? {
            Selection::Chosen(idx) => {
                let Some(candidate) = candidates.get(idx) else {
                    anyhow::bail!(
                        "Selection {} is out of range (1-{})",
                        idx + 1,
                        candidates.len()
                    );
                };
                api.star(&candidate.full_name).await?;
                print_starred(&candidate.full_name);
                Ok(())
            }
            Selection::Aborted => {
                eprintln!("{}", "Aborted. Nothing was starred.".yellow());
                Ok(())
            }
        }
    }
}

fn print_starred(full_name: &str) {
    println!("{} {}", "Starred".green().bold(), full_name.bright_white());
}
