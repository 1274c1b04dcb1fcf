//! Credential loading.
//!
//! Credentials are read once from the environment at startup and threaded
//! through the rest of the program as an immutable value. A `.env` file in
//! the working directory is honored before the lookup.

use std::env;

use anyhow::Result;

use crate::constants;
use crate::errors::ConfigError;

/// GitHub credentials used for HTTP basic authentication.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// GitHub username.
    pub username: String,
    /// GitHub access token (or password).
    pub token: String,
}

impl Credentials {
    /// Load credentials from the `GH_UNAME` and `GH_TOKEN` environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::MissingCredential`] if either variable is
    /// unset or blank. No network call is attempted in that case.
    pub fn from_env() -> Result<Self> {
        let username = require_env(constants::env::USERNAME)?;
        let token = require_env(constants::env::TOKEN)?;
        Ok(Self { username, token })
    }
}

fn require_env(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingCredential(name).into()),
    }
}
