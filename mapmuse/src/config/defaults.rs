//! Default values and constants for all configuration settings.

use super::settings::*;

/// Default theme selection index (the plain road map).
pub const DEFAULT_MAP_MODE: usize = 0;

/// Default zoom level.
pub const DEFAULT_ZOOM: u8 = 15;

/// Minimum meaningful zoom level.
pub const MIN_ZOOM: u8 = 1;

/// Maximum zoom level served by the static map providers.
pub const MAX_ZOOM: u8 = 20;

/// Invert lightness by default; most users pick this source for the dark
/// map look.
pub const DEFAULT_INVERT_LIGHTNESS: bool = true;

/// Default update-interval index into [`UPDATE_INTERVAL_MINUTES`] (hourly).
pub const DEFAULT_UPDATE_INTERVAL: usize = 1;

/// Fixed table mapping the update-interval index to minutes.
pub const UPDATE_INTERVAL_MINUTES: &[u64] = &[15, 60, 180, 360, 720, 1440];

/// Ordered display names of the built-in standard modes.
pub const DEFAULT_THEME_TITLES: &[&str] = &["Map", "Satellite", "Terrain", "Hybrid"];

/// Maps an update-interval index to a minutes value.
///
/// Out-of-range indices are clamped to the last table entry and logged.
pub fn update_interval_minutes(index: usize) -> u64 {
    match UPDATE_INTERVAL_MINUTES.get(index) {
        Some(minutes) => *minutes,
        None => {
            let clamped = UPDATE_INTERVAL_MINUTES[UPDATE_INTERVAL_MINUTES.len() - 1];
            tracing::warn!(
                requested = index,
                max = UPDATE_INTERVAL_MINUTES.len() - 1,
                "update interval index out of range, clamping to {} minutes",
                clamped
            );
            clamped
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            wallpaper: WallpaperSettings::default(),
            provider: ProviderSettings::default(),
            themes: ThemeSettings::default(),
        }
    }
}

impl Default for WallpaperSettings {
    fn default() -> Self {
        Self {
            map_mode: DEFAULT_MAP_MODE,
            zoom: DEFAULT_ZOOM,
            invert_lightness: DEFAULT_INVERT_LIGHTNESS,
            update_interval: DEFAULT_UPDATE_INTERVAL,
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            google_api_key: None,
            mapbox_access_token: None,
        }
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            file: None,
            titles: DEFAULT_THEME_TITLES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
