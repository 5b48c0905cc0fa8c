//! End-to-end tests for the tick pipeline over mock collaborators.

use std::path::PathBuf;

use mapmuse::coord::Coordinate;
use mapmuse::geocode::{Geocoder, GeocodeError, NullGeocoder, Place};
use mapmuse::location::{FixedLocation, LocationSource, FALLBACK_LOCATIONS};
use mapmuse::source::{
    handle_user_command, InMemoryPublisher, MapArtSource, UserCommand, UserCommandResult,
};

const MILAN: Coordinate = Coordinate {
    lat: 45.4642,
    lon: 9.19,
};

const CATALOG: &str = r#"
<themes>
    <theme name="Dark" mapSource="google" mapType="satellite">
        <style>foo:bar</style>
    </theme>
    <theme name="Pencil" mapSource="mapbox" mapId="examples.a4c252ab" />
</themes>
"#;

/// Geocoder returning a fixed place, standing in for the platform lookup.
struct CannedGeocoder;

impl Geocoder for CannedGeocoder {
    fn reverse(&self, _coord: Coordinate) -> Result<Option<Place>, GeocodeError> {
        Ok(Some(Place {
            name: "Piazza del Duomo".to_string(),
            locality: "Milano".to_string(),
        }))
    }
}

fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.ini");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn roadmap_tick_publishes_the_documented_urls() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "[wallpaper]\nmap_mode = 0\nzoom = 15\ninvert_lightness = true\n\
         [provider]\ngoogle_api_key = test_key\n",
    );

    let mut source = MapArtSource::new(FixedLocation(MILAN), CannedGeocoder, InMemoryPublisher::new())
        .with_config_path(config);
    let outcome = source.tick().unwrap();

    let image_url = &outcome.artwork.image_url;
    assert!(image_url.contains("center=45.4642,9.19"));
    assert!(image_url.contains("&maptype=roadmap"));
    assert!(image_url.contains("&zoom=15"));
    assert!(image_url.contains("&style=invert_lightness:true"));
    assert!(image_url.ends_with("&key=test_key"));

    assert_eq!(
        outcome.artwork.view_url,
        "https://www.google.com/maps/@45.4642,9.19,15z"
    );
    assert_eq!(outcome.artwork.token, "45.4642,9.19");
    assert_eq!(outcome.artwork.title, "Piazza del Duomo");
    assert_eq!(outcome.artwork.byline, "Milano");
}

#[test]
fn catalog_theme_styles_precede_the_inversion_rule() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "[wallpaper]\nmap_mode = 4\ninvert_lightness = true\n\
         [themes]\ntitles = Map, Satellite, Terrain, Hybrid, Dark\n",
    );

    let mut source = MapArtSource::new(FixedLocation(MILAN), NullGeocoder, InMemoryPublisher::new())
        .with_config_path(config)
        .with_catalog_xml(CATALOG);
    let outcome = source.tick().unwrap();

    let url = &outcome.artwork.image_url;
    let style = url.find("&style=foo:bar").expect("explicit style missing");
    let invert = url
        .find("&style=invert_lightness:true")
        .expect("inversion rule missing");
    assert!(style < invert, "inversion must come after explicit styles");
    assert!(url.contains("&maptype=satellite"));
}

#[test]
fn mapbox_theme_renders_longitude_first_but_views_in_google() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "[wallpaper]\nmap_mode = 5\nzoom = 12\n\
         [provider]\nmapbox_access_token = pk.test\n\
         [themes]\ntitles = Map, Satellite, Terrain, Hybrid, Dark, Pencil\n",
    );

    let mut source = MapArtSource::new(FixedLocation(MILAN), NullGeocoder, InMemoryPublisher::new())
        .with_config_path(config)
        .with_catalog_xml(CATALOG);
    let outcome = source.tick().unwrap();

    assert_eq!(
        outcome.artwork.image_url,
        "https://api.tiles.mapbox.com/v4/examples.a4c252ab/9.19,45.4642,12/1024x1024.png?access_token=pk.test"
    );
    assert_eq!(
        outcome.artwork.view_url,
        "https://www.google.com/maps/@45.4642,9.19,12z"
    );
}

#[test]
fn unknown_catalog_name_degrades_to_the_default_theme() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "[wallpaper]\nmap_mode = 4\ninvert_lightness = false\n\
         [themes]\ntitles = Map, Satellite, Terrain, Hybrid, Missing\n",
    );

    let mut source = MapArtSource::new(FixedLocation(MILAN), NullGeocoder, InMemoryPublisher::new())
        .with_config_path(config)
        .with_catalog_xml(CATALOG);
    let outcome = source.tick().unwrap();

    assert!(outcome.artwork.image_url.contains("&maptype=roadmap"));
    assert!(!outcome.artwork.image_url.contains("&style="));
}

#[test]
fn invalid_location_substitutes_a_fallback_pool_member() {
    struct BrokenLocation;
    impl LocationSource for BrokenLocation {
        fn last_known(&self) -> Option<Coordinate> {
            // The uninitialized sentinel a location library reports.
            Some(Coordinate::new(420.0, 420.0))
        }
    }

    let dir = tempfile::TempDir::new().unwrap();
    let config = write_config(&dir, "");

    let mut source = MapArtSource::new(BrokenLocation, NullGeocoder, InMemoryPublisher::new())
        .with_config_path(config);
    let outcome = source.tick().unwrap();

    let token = &outcome.artwork.token;
    assert!(
        FALLBACK_LOCATIONS.iter().any(|c| &c.dedup_token() == token),
        "published token {token} should come from the fallback pool"
    );
}

#[test]
fn identical_ticks_publish_identical_tokens() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_config(&dir, "");

    let mut source = MapArtSource::new(FixedLocation(MILAN), NullGeocoder, InMemoryPublisher::new())
        .with_config_path(config);
    let first = source.tick().unwrap();
    let second = source.tick().unwrap();
    assert_eq!(first.artwork.token, second.artwork.token);
}

#[test]
fn share_command_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_config(&dir, "[provider]\ngoogle_api_key = k\n");

    let mut source = MapArtSource::new(FixedLocation(MILAN), CannedGeocoder, InMemoryPublisher::new())
        .with_config_path(config);

    // Before any tick: a notice, not an error.
    assert!(matches!(
        handle_user_command(source.publisher(), UserCommand::ShareArtwork),
        UserCommandResult::Notice(_)
    ));

    source.tick().unwrap();
    let UserCommandResult::Share(text) =
        handle_user_command(source.publisher(), UserCommand::ShareArtwork)
    else {
        panic!("expected a share payload after publishing");
    };
    assert!(text.contains("'Piazza del Duomo'"));
    assert!(text.contains("Milano"));
    assert!(text.contains("https://www.google.com/maps/@45.4642,9.19,15z"));
}
