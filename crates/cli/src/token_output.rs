//! Persisting and surfacing the issued service account token.
//!
//! Responsibilities:
//! - Write the token secret to the token file atomically.
//! - Echo the secret to stdout as a single `KEY=value` line.
//!
//! Invariants:
//! - The token file is created with owner-only permissions (0600 on Unix).
//! - The secret never passes through `tracing`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use tempfile::NamedTempFile;

/// Variable name used for the stdout echo.
pub const TOKEN_ENV_NAME: &str = "GRAFANA_SERVICE_ACCOUNT_TOKEN";

/// Write `secret` to `path`, replacing any previous token.
///
/// Writes to a temp file in the same directory, then renames it into place.
/// `NamedTempFile` creates files with mode 0600, which the rename preserves.
pub fn write_token_file(secret: &SecretString, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    if parent_dir != Path::new(".") {
        std::fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(secret.expose_secret().as_bytes())
        .context("Failed to write token to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write token file: {}", path.display()))?;

    Ok(())
}

/// Print the token as `GRAFANA_SERVICE_ACCOUNT_TOKEN=<secret>`.
pub fn echo_token<W: Write>(secret: &SecretString, out: &mut W) -> Result<()> {
    writeln!(out, "{}={}", TOKEN_ENV_NAME, secret.expose_secret())
        .context("Failed to write token to stdout")?;
    out.flush().context("Failed to flush stdout")
}
