use thiserror::Error;

/// Errors that can occur when working with the GitHub API.
///
/// HTTP statuses are decoded into variants immediately after each call, so
/// downstream code never inspects raw status codes.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error(
        "Authentication failed. Check that GH_UNAME and GH_TOKEN hold your \
         GitHub username and a valid access token."
    )]
    AuthFailed,
    #[error("{repo} is not a valid repo.")]
    RepoNotFound { repo: String },
    #[error("GitHub API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },
    #[error("Network error: {0}. Please check your internet connection.")]
    HttpError(String),
    #[error("URI error: {0}")]
    UriError(String),
}

/// Errors that can occur while loading credentials.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Missing credentials: {0} is not set.\n\
         Please set the environment variables GH_UNAME and GH_TOKEN to your \
         GitHub username and access token."
    )]
    MissingCredential(&'static str),
}

impl From<octocrab::Error> for GitHubError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => {
                match source.status_code.as_u16() {
                    401 | 403 => GitHubError::AuthFailed,
                    status => GitHubError::ApiError {
                        status_code: status,
                        message: source.message,
                    },
                }
            }
            octocrab::Error::Http { source, .. } => {
                GitHubError::HttpError(source.to_string())
            }
            octocrab::Error::Uri { source, .. } => {
                GitHubError::UriError(source.to_string())
            }
            _ => GitHubError::HttpError(err.to_string()),
        }
    }
}
