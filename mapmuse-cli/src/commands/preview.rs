//! URL preview command.

use std::path::Path;

use clap::Args;
use mapmuse::config::{clamp_zoom, ConfigFile};
use mapmuse::coord::Coordinate;
use mapmuse::provider::UrlBuilder;
use mapmuse::theme::{resolve_theme, standard_theme};
use tracing::warn;

use crate::error::CliError;

/// Arguments for the preview command.
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Latitude in decimal degrees
    #[arg(long)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long)]
    pub lon: f64,

    /// Theme selection index (default: the configured map_mode)
    #[arg(long)]
    pub theme: Option<usize>,

    /// Zoom level override (default: the configured zoom)
    #[arg(long)]
    pub zoom: Option<u8>,
}

/// Print image and viewer URLs without publishing anything.
pub fn run(config_path: &Path, args: PreviewArgs) -> Result<(), CliError> {
    let coord = Coordinate::new(args.lat, args.lon);
    if !coord.is_valid() {
        return Err(CliError::Args(format!(
            "coordinate {},{} is outside the valid range",
            args.lat, args.lon
        )));
    }

    let config = ConfigFile::load_from(config_path)?;
    let index = args.theme.unwrap_or(config.wallpaper.map_mode);
    let zoom = clamp_zoom(args.zoom.unwrap_or(config.wallpaper.zoom));

    let theme = match standard_theme(index) {
        Some(theme) => theme,
        None => resolve_theme(&catalog_document(&config), &config.themes.titles, index),
    }
    .with_inverted(config.wallpaper.invert_lightness);

    let urls = UrlBuilder::new(
        config.provider.google_api_key.clone().unwrap_or_default(),
        config.provider.mapbox_access_token.clone().unwrap_or_default(),
    );

    println!("Theme:  {}", if theme.name.is_empty() { "default" } else { &theme.name });
    println!("Image:  {}", urls.image_url(&theme, coord, zoom));
    println!("Viewer: {}", urls.viewer_url(coord, zoom));
    Ok(())
}

fn catalog_document(config: &ConfigFile) -> String {
    let Some(path) = &config.themes.file else {
        return String::new();
    };
    match std::fs::read_to_string(path) {
        Ok(xml) => xml,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "theme catalog unreadable");
            String::new()
        }
    }
}
