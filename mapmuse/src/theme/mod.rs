//! Map theme catalog.
//!
//! A theme is a named bundle of map rendering parameters: which imagery
//! provider serves it, the map mode or tileset id, an ordered list of raw
//! style rules, and a lightness-inversion flag. Themes are defined in an XML
//! catalog document and resolved by name or by selection index.
//!
//! Resolution never fails: a missing theme, an out-of-bounds index or a
//! malformed catalog all degrade to [`Theme::default()`] (plain Google
//! roadmap) with a logged warning, so a wallpaper tick can always proceed.

mod catalog;
mod types;

pub use catalog::{resolve_theme, CatalogError, ThemeCatalog};
pub use types::{standard_theme, MapMode, MapSource, Theme, ThemeBuilder};
