//! Continuous scheduling loop.

use std::path::Path;
use std::time::{Duration, SystemTime};

use clap::Args;
use mapmuse::source::TickError;
use tracing::{error, info, warn};

use super::common::build_source;
use crate::error::CliError;

/// Delay before retrying after a transient publish failure.
const RETRY_DELAY: Duration = Duration::from_secs(60);

/// Arguments for the run command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Latitude override in decimal degrees
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude override in decimal degrees
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,

    /// Skip the reverse-geocoding lookup
    #[arg(long)]
    pub no_geocode: bool,

    /// Stop after this many successful ticks (default: run forever)
    #[arg(long)]
    pub ticks: Option<u64>,
}

/// Run ticks on the configured schedule until interrupted.
///
/// Transient publish failures back off for a minute and retry the same
/// tick; a permanent rejection aborts the loop.
pub fn run(config_path: &Path, args: RunArgs) -> Result<(), CliError> {
    let location = args.lat.zip(args.lon);
    let mut source = build_source(config_path, location, args.no_geocode)?;
    let mut completed = 0u64;

    loop {
        match source.tick() {
            Ok(outcome) => {
                completed += 1;
                info!(
                    token = %outcome.artwork.token,
                    tick = completed,
                    "published, sleeping {} minutes",
                    outcome.interval_minutes
                );
                if args.ticks.is_some_and(|limit| completed >= limit) {
                    return Ok(());
                }
                sleep_until(outcome.next_update);
            }
            Err(TickError::RetryLater(msg)) => {
                warn!(reason = %msg, "publish unavailable, retrying in {}s", RETRY_DELAY.as_secs());
                std::thread::sleep(RETRY_DELAY);
            }
            Err(e @ TickError::Fatal(_)) => {
                error!(error = %e, "publish rejected, stopping");
                return Err(e.into());
            }
        }
    }
}

fn sleep_until(deadline: SystemTime) {
    if let Ok(remaining) = deadline.duration_since(SystemTime::now()) {
        std::thread::sleep(remaining);
    }
}
