use anyhow::Result;
use async_trait::async_trait;

use crate::github::{self, RepoCandidate};
use crate::prompt::{self, Selection};

#[async_trait]
pub trait GitHubApi: Send + Sync {
    async fn star(&self, full_name: &str) -> Result<()>;
    async fn search(&self, term: &str, per_page: u8) -> Result<Vec<RepoCandidate>>;
}

pub struct RealGitHubApi {
    inner: github::GitHubClient,
}

impl RealGitHubApi {
    pub fn new(client: github::GitHubClient) -> Self {
        Self { inner: client }
    }
}

#[async_trait]
impl GitHubApi for RealGitHubApi {
    async fn star(&self, full_name: &str) -> Result<()> {
        Ok(self.inner.star(full_name).await?)
    }

    async fn search(&self, term: &str, per_page: u8) -> Result<Vec<RepoCandidate>> {
        Ok(self.inner.search(term, per_page).await?)
    }
}

pub trait PromptInterface: Send + Sync {
    fn select_candidate(&self, candidates: &[RepoCandidate]) -> Result<Selection>;
}

pub struct RealPrompt;

impl PromptInterface for RealPrompt {
    fn select_candidate(&self, candidates: &[RepoCandidate]) -> Result<Selection> {
        prompt::select_candidate(candidates)
    }
}
