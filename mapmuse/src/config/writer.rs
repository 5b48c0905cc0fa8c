//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! Produces the commented INI representation written to `config.ini`.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let google_api_key = config.provider.google_api_key.as_deref().unwrap_or("");
    let mapbox_access_token = config.provider.mapbox_access_token.as_deref().unwrap_or("");
    let themes_file = config
        .themes
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let titles = config.themes.titles.join(", ");

    format!(
        r#"[wallpaper]
; Selected theme, as an index into the titles list below
; (0 = Map, 1 = Satellite, 2 = Terrain, 3 = Hybrid, 4+ = catalog themes)
map_mode = {}
; Map zoom level (1-20); 15 is roughly neighborhood scale
zoom = {}
; Invert lightness for a dark map look (Google themes only)
invert_lightness = {}
; Update frequency index: 0=15min 1=1h 2=3h 3=6h 4=12h 5=24h
update_interval = {}

[provider]
; Google Static Maps API key
; Get one at: https://console.cloud.google.com (enable Static Maps API)
google_api_key = {}
; Mapbox access token (only needed for mapbox-sourced themes)
; Get one at: https://www.mapbox.com/
mapbox_access_token = {}

[themes]
; Path to the themes XML catalog; leave empty for the built-in modes only
file = {}
; Ordered theme display names; the first four are the standard modes,
; further entries must name themes in the catalog document
titles = {}
"#,
        config.wallpaper.map_mode,
        config.wallpaper.zoom,
        config.wallpaper.invert_lightness,
        config.wallpaper.update_interval,
        google_api_key,
        mapbox_access_token,
        themes_file,
        titles,
    )
}
