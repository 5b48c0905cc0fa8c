//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file. These are
//! pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Wallpaper options read on every tick.
    pub wallpaper: WallpaperSettings,
    /// Imagery provider credentials.
    pub provider: ProviderSettings,
    /// Theme catalog settings.
    pub themes: ThemeSettings,
}

/// Wallpaper options.
#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperSettings {
    /// Selected theme, as an index into the ordered theme titles list.
    pub map_mode: usize,
    /// Map zoom level, 1 to 20.
    pub zoom: u8,
    /// Append the invert-lightness style rule on Google themes.
    pub invert_lightness: bool,
    /// Update frequency, as an index into the fixed minutes table.
    pub update_interval: usize,
}

/// Imagery provider credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    /// Google Static Maps API key.
    pub google_api_key: Option<String>,
    /// Mapbox access token (only needed for mapbox-sourced themes).
    pub mapbox_access_token: Option<String>,
}

/// Theme catalog settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSettings {
    /// Path to the themes XML document. `None` means no custom catalog;
    /// only the built-in standard modes are available.
    pub file: Option<PathBuf>,
    /// Ordered theme display names. The first four are the standard modes;
    /// further entries name themes in the catalog document.
    pub titles: Vec<String>,
}
