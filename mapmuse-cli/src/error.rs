//! CLI error handling with user-friendly messages.

use std::fmt;
use std::process;

use mapmuse::source::TickError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Configuration error
    Config(String),
    /// A tick failed at the publish step
    Tick(TickError),
    /// Invalid command-line argument combination
    Args(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            // EX_TEMPFAIL: the caller (cron, systemd timer) may retry.
            CliError::Tick(TickError::RetryLater(_)) => process::exit(75),
            _ => process::exit(1),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Tick(e) => write!(f, "Tick failed: {}", e),
            CliError::Args(msg) => write!(f, "{}", msg),
        }
    }
}

impl From<TickError> for CliError {
    fn from(e: TickError) -> Self {
        Self::Tick(e)
    }
}

impl From<mapmuse::config::ConfigFileError> for CliError {
    fn from(e: mapmuse::config::ConfigFileError) -> Self {
        Self::Config(e.to_string())
    }
}
