//! # ghstar
//!
//! A command-line tool for starring GitHub repositories from the terminal.
//!
//! This library provides functionality to:
//! - Load credentials from the environment
//! - Star a repository by exact "owner/name"
//! - Search repositories and star an interactively selected result
//! - Validate inputs and handle errors gracefully
//!
//! ## Modules
//!
//! - [`app`] - Application orchestration
//! - [`app_deps`] - Dependency traits for testable orchestration
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Credential loading
//! - [`github`] - GitHub API client for starring and searching
//! - [`prompt`] - Interactive candidate selection
//! - [`validation`] - Input validation utilities
//! - [`error`] - Error formatting utilities
//! - [`errors`] - Structured error types
//! - [`constants`] - Application constants

pub mod app;
pub mod app_deps;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod errors;
pub mod github;
pub mod prompt;
pub mod validation;
