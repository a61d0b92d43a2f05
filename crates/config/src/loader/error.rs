//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, values).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("invalid port: {message}")]
    InvalidPort { message: String },

    #[error("invalid readiness timeout: {message}")]
    InvalidReadyTimeout { message: String },

    #[error("invalid startup grace: {message}")]
    InvalidStartupGrace { message: String },

    #[error("invalid request timeout: {message}")]
    InvalidRequestTimeout { message: String },

    #[error("invalid URL for data source '{name}': {message}")]
    InvalidDataSourceUrl { name: String, message: String },

    #[error("invalid dashboard endpoint: {message}")]
    InvalidEndpoint { message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
