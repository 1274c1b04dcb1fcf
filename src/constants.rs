//! Application constants for API endpoints, environment variables, and
//! validation rules.

/// GitHub API endpoint constants.
pub mod api {
    /// Path template for starring a repository on behalf of the
    /// authenticated user.
    pub const STAR_PATH_TEMPLATE: &str = "/user/starred/{owner}/{repo}";

    /// Path for searching repositories.
    pub const SEARCH_PATH: &str = "/search/repositories";
}

/// Environment variable names holding the credentials.
pub mod env {
    /// GitHub username used for basic authentication.
    pub const USERNAME: &str = "GH_UNAME";

    /// GitHub access token used for basic authentication.
    pub const TOKEN: &str = "GH_TOKEN";
}

/// Search defaults and limits.
pub mod search {
    /// Number of candidates requested when `--search-count` is not given.
    pub const DEFAULT_RESULT_COUNT: u8 = 5;

    /// Upper bound on `--search-count` (GitHub's per_page maximum).
    pub const MAX_RESULT_COUNT: u8 = 100;
}

/// Repository name validation constants.
pub mod repo {
    /// Maximum length for repository owner name.
    pub const MAX_OWNER_LENGTH: usize = 39; // GitHub username limit

    /// Maximum length for repository name.
    pub const MAX_REPO_NAME_LENGTH: usize = 100;

    /// Valid characters for an owner (GitHub user or organization) name.
    pub const VALID_OWNER_PATTERN: &str = r"^[a-zA-Z0-9][a-zA-Z0-9-]*$";

    /// Valid characters for a repository name.
    pub const VALID_REPO_NAME_PATTERN: &str = r"^[a-zA-Z0-9._-]+$";
}
