//! Static map image URL assembly.
//!
//! This module turns a resolved [`Theme`](crate::theme::Theme), a coordinate
//! and a zoom level into the two URLs a tick publishes: the image-fetch URL
//! consumed by the host renderer, and the map-viewer URL opened when the
//! user taps the artwork. No network calls happen here; everything is pure
//! string assembly.
//!
//! Google and Mapbox render from differently shaped endpoints, so the
//! builder dispatches on the theme's source and never mixes fields across
//! providers.

mod google;
mod mapbox;

pub use google::google_image_url;
pub use mapbox::{mapbox_image_url, DEFAULT_MAPBOX_TILE_ID};

use crate::coord::Coordinate;
use crate::theme::{MapSource, Theme};

/// Base URL for the Google Maps web viewer.
///
/// The viewer link is always Google Maps, even for Mapbox-sourced imagery;
/// the asymmetry is intentional and part of the published contract.
pub const GOOGLE_MAPS_WEB_BASE: &str = "https://www.google.com/maps/@";

/// Builds image-fetch and viewer URLs from resolved themes.
#[derive(Debug, Clone, Default)]
pub struct UrlBuilder {
    google_api_key: String,
    mapbox_access_token: String,
}

impl UrlBuilder {
    /// Creates a builder with the configured provider credentials.
    ///
    /// An empty key simply produces a URL the provider will reject; key
    /// validation is the provider's job, not ours.
    pub fn new(
        google_api_key: impl Into<String>,
        mapbox_access_token: impl Into<String>,
    ) -> Self {
        Self {
            google_api_key: google_api_key.into(),
            mapbox_access_token: mapbox_access_token.into(),
        }
    }

    /// Builds the image-fetch URL for a theme at a coordinate and zoom.
    ///
    /// Dispatches on `theme.source` exclusively: Google themes consult
    /// `mode`, `styles` and `inverted`; Mapbox themes consult `tile_id`
    /// only. Mapbox static images have no style or inversion support, so
    /// those fields are deliberately ignored on that branch.
    pub fn image_url(&self, theme: &Theme, coord: Coordinate, zoom: u8) -> String {
        match theme.source {
            MapSource::Google => google_image_url(theme, coord, zoom, &self.google_api_key),
            MapSource::Mapbox => mapbox_image_url(theme, coord, zoom, &self.mapbox_access_token),
        }
    }

    /// Builds the map-viewer URL for a coordinate and zoom.
    ///
    /// Always Google Maps, regardless of which provider served the image.
    pub fn viewer_url(&self, coord: Coordinate, zoom: u8) -> String {
        format!("{}{},{},{}z", GOOGLE_MAPS_WEB_BASE, coord.lat, coord.lon, zoom)
    }
}
