//! Configuration for the wallpaper source.
//!
//! Settings live in an INI file at `~/.mapmuse/config.ini` and are re-read
//! on every tick; the pipeline itself keeps no mutable state between ticks.
//! Settings structs live in [`settings`], constants and the `Default` impl
//! in [`defaults`], parsing in [`parser`], serialization in [`writer`] and
//! file handling in [`file`].

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    update_interval_minutes, DEFAULT_INVERT_LIGHTNESS, DEFAULT_MAP_MODE, DEFAULT_THEME_TITLES,
    DEFAULT_UPDATE_INTERVAL, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, UPDATE_INTERVAL_MINUTES,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use parser::clamp_zoom;
pub use settings::{ConfigFile, ProviderSettings, ThemeSettings, WallpaperSettings};
