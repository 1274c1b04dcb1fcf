//! Input validation utilities.
//!
//! This module provides validation functions for repository names and owners
//! to ensure a "owner/name" pair is well-formed before it is passed to the
//! star endpoint.

use anyhow::{Context, Result};

use crate::constants;
use regex::Regex;

/// Validate a full repository name in the format "owner/name".
///
/// # Arguments
///
/// * `full_name` - The repository identifier to validate
///
/// # Returns
///
/// Returns `Ok(())` if the name is a well-formed "owner/name" pair, or an
/// error with a descriptive message.
pub fn validate_full_name(full_name: &str) -> Result<()> {
    let trimmed = full_name.trim();

    let Some((owner, name)) = trimmed.split_once('/') else {
        anyhow::bail!(
            "'{}' is not a valid repo name. Expected the format owner/name, \
             e.g. microsoft/vscode",
            trimmed
        );
    };

    if name.contains('/') {
        anyhow::bail!(
            "'{}' is not a valid repo name. Expected exactly one '/' \
             separating owner and name",
            trimmed
        );
    }

    validate_repo_owner(owner)?;
    validate_repo_name(name)?;

    Ok(())
}

/// Validate a repository owner name.
pub fn validate_repo_owner(owner: &str) -> Result<()> {
    let trimmed = owner.trim();

    if trimmed.is_empty() {
        anyhow::bail!("Repository owner cannot be empty");
    }

    if trimmed.len() > constants::repo::MAX_OWNER_LENGTH {
        anyhow::bail!(
            "Repository owner cannot exceed {} characters (got {})",
            constants::repo::MAX_OWNER_LENGTH,
            trimmed.len()
        );
    }

    let re = Regex::new(constants::repo::VALID_OWNER_PATTERN)
        .context("Failed to compile validation regex")?;

    if !re.is_match(trimmed) {
        anyhow::bail!(
            "Repository owner can only contain letters, numbers, and hyphens. Got: '{}'",
            trimmed
        );
    }

    Ok(())
}

/// Validate a repository name.
pub fn validate_repo_name(name: &str) -> Result<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        anyhow::bail!("Repository name cannot be empty");
    }

    if trimmed.len() > constants::repo::MAX_REPO_NAME_LENGTH {
        anyhow::bail!(
            "Repository name cannot exceed {} characters (got {})",
            constants::repo::MAX_REPO_NAME_LENGTH,
            trimmed.len()
        );
    }

    let re = Regex::new(constants::repo::VALID_REPO_NAME_PATTERN)
        .context("Failed to compile validation regex")?;

    if !re.is_match(trimmed) {
        anyhow::bail!(
            "Repository name can only contain letters, numbers, dots, \
             underscores, and hyphens. Got: '{}'",
            trimmed
        );
    }

    Ok(())
}
