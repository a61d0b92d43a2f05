//! Process exit codes.
//!
//! Responsibilities:
//! - Define the exit codes scripts and container orchestrators rely on.
//!
//! Does NOT handle:
//! - Deciding whether a run succeeded (see `RunSummary::exit_code`).
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Only 0 and 1 are ever returned.

/// Exit codes for grafana-provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every declared data source was reconciled.
    Success = 0,

    /// The server never became ready, configuration was invalid, or at
    /// least one data source failed.
    Failure = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
