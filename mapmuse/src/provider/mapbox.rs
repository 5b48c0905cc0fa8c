//! Mapbox static image URL construction.
//!
//! # URL Pattern
//!
//! `{base}/{tileset}/{lon},{lat},{zoom}/1024x1024.png?access_token={token}`
//!
//! Mapbox orders the position as longitude,latitude — the opposite of the
//! Google branch. The ordering is provider-mandated and must be preserved
//! exactly.
//!
//! Mapbox static images carry their styling in the tileset itself, so theme
//! style rules and the inversion flag have no effect on this branch.

use crate::coord::Coordinate;
use crate::theme::Theme;

/// Base URL for Mapbox static images.
pub const MAPBOX_TILE_BASE: &str = "https://api.tiles.mapbox.com/v4";

/// Tileset substituted when a Mapbox theme declares no `mapId`.
///
/// Keeps the tick producing a fetchable image instead of a broken URL.
pub const DEFAULT_MAPBOX_TILE_ID: &str = "mapbox.satellite";

/// Builds the image-fetch URL for a Mapbox-sourced theme.
pub fn mapbox_image_url(theme: &Theme, coord: Coordinate, zoom: u8, access_token: &str) -> String {
    let tile_id = theme.tile_id.as_deref().unwrap_or(DEFAULT_MAPBOX_TILE_ID);
    format!(
        "{}/{}/{},{},{}/1024x1024.png?access_token={}",
        MAPBOX_TILE_BASE, tile_id, coord.lon, coord.lat, zoom, access_token
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::MapSource;

    fn mapbox_theme(tile_id: Option<&str>) -> Theme {
        let builder = Theme::builder("Pencil").source(MapSource::Mapbox);
        match tile_id {
            Some(id) => builder.tile_id(id).build(),
            None => builder.build(),
        }
    }

    #[test]
    fn url_construction() {
        let theme = mapbox_theme(Some("examples.a4c252ab"));
        let url = mapbox_image_url(&theme, Coordinate::new(45.4642, 9.19), 15, "tok");
        assert_eq!(
            url,
            "https://api.tiles.mapbox.com/v4/examples.a4c252ab/9.19,45.4642,15/1024x1024.png?access_token=tok"
        );
    }

    #[test]
    fn longitude_precedes_latitude() {
        // Provider-mandated axis order, the opposite of the Google branch.
        let theme = mapbox_theme(Some("id"));
        let url = mapbox_image_url(&theme, Coordinate::new(11.0, 22.0), 10, "t");
        assert!(url.contains("/22,11,10/"));
    }

    #[test]
    fn missing_tile_id_falls_back_to_default_tileset() {
        let theme = mapbox_theme(None);
        let url = mapbox_image_url(&theme, Coordinate::new(0.0, 0.0), 10, "t");
        assert!(url.contains("/mapbox.satellite/"));
    }

    #[test]
    fn styles_and_inversion_are_ignored() {
        let theme = Theme::builder("Pencil")
            .source(MapSource::Mapbox)
            .tile_id("id")
            .style("feature:water|color:0x000000")
            .inverted(true)
            .build();
        let url = mapbox_image_url(&theme, Coordinate::new(0.0, 0.0), 10, "t");
        assert!(!url.contains("style"));
        assert!(!url.contains("invert_lightness"));
    }
}
