//! Shared helpers for CLI commands.

use std::path::Path;

use mapmuse::coord::Coordinate;
use mapmuse::geocode::{
    Geocoder, GeocodeError, NominatimGeocoder, NullGeocoder, Place, ReqwestClient,
};
use mapmuse::location::LocationSource;
use mapmuse::source::{JsonFilePublisher, MapArtSource};

use crate::error::CliError;

/// Location source backed by an optional CLI override.
///
/// Without an override there is no reading at all, and the pipeline's
/// fallback pool takes over.
#[derive(Debug, Clone, Copy)]
pub struct CliLocation(pub Option<Coordinate>);

impl LocationSource for CliLocation {
    fn last_known(&self) -> Option<Coordinate> {
        self.0
    }
}

/// Geocoder selected by the `--no-geocode` flag.
pub enum CliGeocoder {
    Nominatim(NominatimGeocoder<ReqwestClient>),
    Null(NullGeocoder),
}

impl CliGeocoder {
    /// Builds the geocoder, falling back to the null geocoder when the HTTP
    /// client cannot be created.
    pub fn new(disabled: bool) -> Self {
        if disabled {
            return Self::Null(NullGeocoder);
        }
        match ReqwestClient::new() {
            Ok(client) => Self::Nominatim(NominatimGeocoder::new(client)),
            Err(e) => {
                tracing::warn!(error = %e, "geocoding disabled: HTTP client unavailable");
                Self::Null(NullGeocoder)
            }
        }
    }
}

impl Geocoder for CliGeocoder {
    fn reverse(&self, coord: Coordinate) -> Result<Option<Place>, GeocodeError> {
        match self {
            Self::Nominatim(g) => g.reverse(coord),
            Self::Null(g) => g.reverse(coord),
        }
    }
}

/// Builds the wallpaper source used by the tick and run commands.
pub fn build_source(
    config_path: &Path,
    location: Option<(f64, f64)>,
    no_geocode: bool,
) -> Result<MapArtSource<CliLocation, CliGeocoder, JsonFilePublisher>, CliError> {
    let location = match location {
        Some((lat, lon)) => {
            let coord = Coordinate::new(lat, lon);
            if !coord.is_valid() {
                return Err(CliError::Args(format!(
                    "coordinate {},{} is outside the valid range",
                    lat, lon
                )));
            }
            CliLocation(Some(coord))
        }
        None => CliLocation(None),
    };

    Ok(MapArtSource::new(
        location,
        CliGeocoder::new(no_geocode),
        JsonFilePublisher::at_default_path(),
    )
    .with_config_path(config_path))
}
