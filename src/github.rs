use octocrab::Octocrab;
use serde::{Deserialize, Serialize};

use crate::config::Credentials;
use crate::constants;
use crate::errors::GitHubError;

/// A repository produced by a search, held only long enough for the user to
/// pick one.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoCandidate {
    /// Full repository name in the format "owner/name".
    pub full_name: String,
    /// Repository description, if the owner set one.
    #[serde(default)]
    pub description: Option<String>,
    /// Stargazer count at search time.
    #[serde(default)]
    pub stargazers_count: u64,
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    items: Vec<RepoCandidate>,
}

#[derive(Serialize)]
struct SearchQuery<'a> {
    q: &'a str,
    per_page: u8,
}

/// GitHub API client authenticated with basic auth.
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    pub fn new(credentials: &Credentials) -> Result<Self, GitHubError> {
        let octocrab = Octocrab::builder()
            .basic_auth(credentials.username.clone(), credentials.token.clone())
            .build()
            .map_err(GitHubError::from)?;

        Ok(Self { octocrab })
    }

    /// Build a client around an existing Octocrab instance (used by tests to
    /// point at a mock server).
    pub fn with_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Star a repository on behalf of the authenticated user.
    ///
    /// A 2xx response is success; the endpoint returns 204 with no body, so
    /// the status is inspected directly instead of deserializing a response.
    /// The call is never retried.
    pub async fn star(&self, full_name: &str) -> Result<(), GitHubError> {
        let path = constants::api::STAR_PATH_TEMPLATE
            .replace("{owner}/{repo}", full_name);

        let response = self
            .octocrab
            ._put(path, None::<&()>)
            .await
            .map_err(GitHubError::from)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status.as_u16() == 404 {
            return Err(GitHubError::RepoNotFound {
                repo: full_name.to_string(),
            });
        }

        match octocrab::map_github_error(response).await {
            Ok(_) => Ok(()),
            Err(err) => Err(GitHubError::from(err)),
        }
    }

    /// Search repositories matching `term`, returning at most `per_page`
    /// candidates in the service's relevance order.
    ///
    /// Zero matches is an empty vector, not an error.
    pub async fn search(
        &self,
        term: &str,
        per_page: u8,
    ) -> Result<Vec<RepoCandidate>, GitHubError> {
        let query = SearchQuery { q: term, per_page };

        let results: SearchResults = self
            .octocrab
            .get(constants::api::SEARCH_PATH, Some(&query))
            .await
            .map_err(GitHubError::from)?;

        Ok(results.items)
    }
}
