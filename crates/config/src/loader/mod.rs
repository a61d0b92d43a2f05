//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and builder overrides.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Network access or readiness checks (see client crate).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
