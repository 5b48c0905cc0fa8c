//! The published artwork record.

use serde::{Deserialize, Serialize};

/// One published wallpaper: the record handed to the host on each tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Street-level place name; may be empty when geocoding had no answer.
    pub title: String,
    /// Locality line shown under the title; may be empty.
    pub byline: String,
    /// URL the host fetches the wallpaper image from.
    pub image_url: String,
    /// URL opened when the user asks to view the map.
    pub view_url: String,
    /// Opaque token the host compares to detect unchanged artwork.
    pub token: String,
}
