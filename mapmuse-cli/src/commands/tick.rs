//! Single-tick command.

use std::path::Path;
use std::time::SystemTime;

use clap::Args;
use mapmuse::source::TickOutcome;

use super::common::build_source;
use crate::error::CliError;

/// Arguments for the tick command.
#[derive(Debug, Args)]
pub struct TickArgs {
    /// Latitude override in decimal degrees
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude override in decimal degrees
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,

    /// Skip the reverse-geocoding lookup
    #[arg(long)]
    pub no_geocode: bool,
}

/// Run one wallpaper tick and print the published artwork.
pub fn run(config_path: &Path, args: TickArgs) -> Result<(), CliError> {
    let location = args.lat.zip(args.lon);
    let mut source = build_source(config_path, location, args.no_geocode)?;
    let outcome = source.tick()?;
    print_outcome(&outcome);
    Ok(())
}

fn print_outcome(outcome: &TickOutcome) {
    let artwork = &outcome.artwork;
    if !artwork.title.is_empty() {
        println!("Title:    {}", artwork.title);
    }
    if !artwork.byline.is_empty() {
        println!("Byline:   {}", artwork.byline);
    }
    println!("Image:    {}", artwork.image_url);
    println!("Viewer:   {}", artwork.view_url);
    println!("Token:    {}", artwork.token);

    let minutes = outcome.interval_minutes;
    match outcome.next_update.duration_since(SystemTime::now()) {
        Ok(d) => println!("Next update in {} minutes ({}s)", minutes, d.as_secs()),
        Err(_) => println!("Next update due now"),
    }
}
