//! Reverse geocoding for artwork titles.
//!
//! The published artwork carries a human-readable title and byline derived
//! from the current coordinate (street for the title, locality for the
//! byline). Geocoding is strictly best-effort: a failed or empty lookup
//! degrades to empty strings with a logged warning and never fails the tick.

mod http;

pub use http::{HttpClient, HttpError, ReqwestClient};

#[cfg(test)]
pub use http::tests::MockHttpClient;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::coord::Coordinate;

/// Errors raised by reverse geocoding lookups.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The lookup request failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The service returned a payload we could not interpret.
    #[error("invalid geocoding response: {0}")]
    InvalidResponse(String),
}

/// A reverse-geocoded place description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    /// Street-level name, e.g. "Piazza del Duomo".
    pub name: String,
    /// Locality, e.g. "Milano".
    pub locality: String,
}

/// Trait for reverse geocoding services.
pub trait Geocoder {
    /// Looks up the place at a coordinate.
    ///
    /// `Ok(None)` means the service answered but knows nothing about the
    /// location (open ocean, for instance).
    fn reverse(&self, coord: Coordinate) -> Result<Option<Place>, GeocodeError>;
}

/// Derives the artwork title and byline for a coordinate.
///
/// Lookup failures and empty results degrade to empty strings; the caller
/// publishes the artwork either way.
pub fn describe<G: Geocoder>(geocoder: &G, coord: Coordinate) -> (String, String) {
    match geocoder.reverse(coord) {
        Ok(Some(place)) => (place.name, place.locality),
        Ok(None) => (String::new(), String::new()),
        Err(e) => {
            warn!(lat = coord.lat, lon = coord.lon, error = %e, "reverse geocoding failed");
            (String::new(), String::new())
        }
    }
}

/// Geocoder that always reports no result.
///
/// Used when the host runs offline or the user disables lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGeocoder;

impl Geocoder for NullGeocoder {
    fn reverse(&self, _coord: Coordinate) -> Result<Option<Place>, GeocodeError> {
        Ok(None)
    }
}

/// Reverse geocoder backed by the OSM Nominatim service.
pub struct NominatimGeocoder<C: HttpClient> {
    http_client: C,
}

const NOMINATIM_REVERSE_BASE: &str = "https://nominatim.openstreetmap.org/reverse";

/// Relevant subset of the Nominatim `jsonv2` reverse payload.
#[derive(Debug, Deserialize)]
struct ReversePayload {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    address: Option<AddressPayload>,
}

#[derive(Debug, Deserialize)]
struct AddressPayload {
    #[serde(default)]
    road: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    village: Option<String>,
}

impl<C: HttpClient> NominatimGeocoder<C> {
    /// Creates a geocoder over the given HTTP client.
    pub fn new(http_client: C) -> Self {
        Self { http_client }
    }

    fn build_url(&self, coord: Coordinate) -> String {
        format!(
            "{}?format=jsonv2&lat={}&lon={}",
            NOMINATIM_REVERSE_BASE, coord.lat, coord.lon
        )
    }
}

impl<C: HttpClient> Geocoder for NominatimGeocoder<C> {
    fn reverse(&self, coord: Coordinate) -> Result<Option<Place>, GeocodeError> {
        let body = self.http_client.get(&self.build_url(coord))?;
        let payload: ReversePayload = serde_json::from_slice(&body)
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

        let Some(address) = payload.address else {
            return Ok(None);
        };

        let locality = address
            .city
            .or(address.town)
            .or(address.village)
            .unwrap_or_default();
        let name = address
            .road
            .or_else(|| {
                // Fall back to the first display-name segment when no road
                // exists (parks, landmarks, open country).
                payload
                    .display_name
                    .as_deref()
                    .and_then(|n| n.split(',').next())
                    .map(str::to_string)
            })
            .unwrap_or_default();

        if name.is_empty() && locality.is_empty() {
            return Ok(None);
        }

        Ok(Some(Place { name, locality }))
    }
}
