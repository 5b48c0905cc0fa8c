//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module is the single place where INI key names are mapped to struct
//! fields. Parsing starts from `ConfigFile::default()` and overlays whatever
//! the file provides.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::{MAX_ZOOM, MIN_ZOOM};
use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [wallpaper] section
    if let Some(section) = ini.section(Some("wallpaper")) {
        if let Some(v) = section.get("map_mode") {
            config.wallpaper.map_mode = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "wallpaper".to_string(),
                key: "map_mode".to_string(),
                value: v.to_string(),
                reason: "must be a non-negative integer".to_string(),
            })?;
        }
        if let Some(v) = section.get("zoom") {
            let parsed: u8 = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "wallpaper".to_string(),
                key: "zoom".to_string(),
                value: v.to_string(),
                reason: format!("must be an integer between {} and {}", MIN_ZOOM, MAX_ZOOM),
            })?;
            config.wallpaper.zoom = clamp_zoom(parsed);
        }
        if let Some(v) = section.get("invert_lightness") {
            config.wallpaper.invert_lightness =
                parse_bool(v).ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "wallpaper".to_string(),
                    key: "invert_lightness".to_string(),
                    value: v.to_string(),
                    reason: "must be 'true' or 'false'".to_string(),
                })?;
        }
        if let Some(v) = section.get("update_interval") {
            config.wallpaper.update_interval =
                v.parse().map_err(|_| ConfigFileError::InvalidValue {
                    section: "wallpaper".to_string(),
                    key: "update_interval".to_string(),
                    value: v.to_string(),
                    reason: "must be a non-negative integer".to_string(),
                })?;
        }
    }

    // [provider] section
    if let Some(section) = ini.section(Some("provider")) {
        if let Some(v) = section.get("google_api_key") {
            let v = v.trim();
            if !v.is_empty() {
                config.provider.google_api_key = Some(v.to_string());
            }
        }
        if let Some(v) = section.get("mapbox_access_token") {
            let v = v.trim();
            if !v.is_empty() {
                config.provider.mapbox_access_token = Some(v.to_string());
            }
        }
    }

    // [themes] section
    if let Some(section) = ini.section(Some("themes")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.themes.file = Some(PathBuf::from(v));
            }
        }
        if let Some(v) = section.get("titles") {
            let titles: Vec<String> = v
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
            if !titles.is_empty() {
                config.themes.titles = titles;
            }
        }
    }

    Ok(config)
}

/// Clamps a zoom value to the valid range, logging when clamped.
pub fn clamp_zoom(value: u8) -> u8 {
    if value < MIN_ZOOM {
        tracing::warn!(requested = value, "zoom below minimum, clamping to {}", MIN_ZOOM);
        MIN_ZOOM
    } else if value > MAX_ZOOM {
        tracing::warn!(requested = value, "zoom above maximum, clamping to {}", MAX_ZOOM);
        MAX_ZOOM
    } else {
        value
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(content).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(parse("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn wallpaper_section_overlays_defaults() {
        let config = parse(
            "[wallpaper]\nmap_mode = 2\nzoom = 12\ninvert_lightness = false\nupdate_interval = 3\n",
        )
        .unwrap();
        assert_eq!(config.wallpaper.map_mode, 2);
        assert_eq!(config.wallpaper.zoom, 12);
        assert!(!config.wallpaper.invert_lightness);
        assert_eq!(config.wallpaper.update_interval, 3);
    }

    #[test]
    fn zoom_is_clamped_to_valid_range() {
        let config = parse("[wallpaper]\nzoom = 25\n").unwrap();
        assert_eq!(config.wallpaper.zoom, MAX_ZOOM);
        let config = parse("[wallpaper]\nzoom = 0\n").unwrap();
        assert_eq!(config.wallpaper.zoom, MIN_ZOOM);
    }

    #[test]
    fn clamp_zoom_bounds_arbitrary_values() {
        assert_eq!(clamp_zoom(0), MIN_ZOOM);
        assert_eq!(clamp_zoom(25), MAX_ZOOM);
        assert_eq!(clamp_zoom(15), 15);
    }

    #[test]
    fn non_numeric_zoom_is_rejected() {
        assert!(matches!(
            parse("[wallpaper]\nzoom = close\n"),
            Err(ConfigFileError::InvalidValue { .. })
        ));
    }

    #[test]
    fn blank_credentials_stay_unset() {
        let config = parse("[provider]\ngoogle_api_key =\nmapbox_access_token =  \n").unwrap();
        assert!(config.provider.google_api_key.is_none());
        assert!(config.provider.mapbox_access_token.is_none());
    }

    #[test]
    fn credentials_are_trimmed() {
        let config = parse("[provider]\ngoogle_api_key = abc123 \n").unwrap();
        assert_eq!(config.provider.google_api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn theme_titles_split_on_commas() {
        let config = parse("[themes]\ntitles = Map, Satellite, Dark , Pencil\n").unwrap();
        assert_eq!(config.themes.titles, vec!["Map", "Satellite", "Dark", "Pencil"]);
    }

    #[test]
    fn theme_file_path_is_read() {
        let config = parse("[themes]\nfile = /etc/mapmuse/themes.xml\n").unwrap();
        assert_eq!(
            config.themes.file,
            Some(PathBuf::from("/etc/mapmuse/themes.xml"))
        );
    }
}
