//! Google Static Maps URL construction.
//!
//! Styled maps are documented at
//! <https://developers.google.com/maps/documentation/maps-static/styling>.
//! Each style rule becomes one `&style=` query parameter, emitted in theme
//! order; the lightness-inversion rule is appended after all explicit rules.

use crate::coord::Coordinate;
use crate::theme::Theme;

/// Base URL for the Google Static Maps API.
pub const GOOGLE_STATIC_MAP_BASE: &str = "https://maps.googleapis.com/maps/api/staticmap?center=";

const MODE_PREFIX: &str = "&maptype=";
const STYLE_PREFIX: &str = "&style=";
const STYLE_INVERT_LIGHTNESS: &str = "invert_lightness:true";

/// Builds the image-fetch URL for a Google-sourced theme.
///
/// Pattern: `{base}{lat},{lon}&zoom={z}&size=1024x1024&scale=2&sensor=false{styles}&key={key}`.
pub fn google_image_url(theme: &Theme, coord: Coordinate, zoom: u8, api_key: &str) -> String {
    format!(
        "{}{},{}&zoom={}&size=1024x1024&scale=2&sensor=false{}&key={}",
        GOOGLE_STATIC_MAP_BASE,
        coord.lat,
        coord.lon,
        zoom,
        style_fragment(theme),
        api_key
    )
}

/// Renders the theme's style query fragment.
///
/// Always emits `&maptype=`; then one `&style=` per explicit rule in
/// insertion order; then, if the theme is inverted, the invert-lightness
/// rule as the final parameter. Keeping inversion last means an explicit
/// rule can never override it, which is exactly the behavior users expect
/// from the invert toggle.
fn style_fragment(theme: &Theme) -> String {
    let mut fragment = String::new();
    fragment.push_str(MODE_PREFIX);
    fragment.push_str(theme.mode.name());
    for rule in &theme.styles {
        fragment.push_str(STYLE_PREFIX);
        fragment.push_str(rule);
    }
    if theme.inverted {
        fragment.push_str(STYLE_PREFIX);
        fragment.push_str(STYLE_INVERT_LIGHTNESS);
    }
    fragment
}
