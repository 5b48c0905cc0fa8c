//! The tick pipeline.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{update_interval_minutes, ConfigFile};
use crate::geocode::{describe, Geocoder};
use crate::location::{resolve_location, LocationSource};
use crate::provider::UrlBuilder;
use crate::theme::{resolve_theme, standard_theme, Theme};

use super::artwork::Artwork;
use super::publisher::{ArtworkPublisher, PublishError};

/// Errors surfaced by a tick.
///
/// The two variants are the pipeline's only failure outcomes and map
/// directly onto the host scheduler's choices: try the same tick again
/// later, or give up until the next regular tick.
#[derive(Debug, Error)]
pub enum TickError {
    /// The publish step failed transiently; the host should retry later.
    #[error("publish unavailable, retry later: {0}")]
    RetryLater(String),

    /// The publish step failed permanently; retrying the same artwork is
    /// pointless.
    #[error("publish rejected: {0}")]
    Fatal(String),
}

/// Result of a successful tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// The artwork that was published.
    pub artwork: Artwork,
    /// When the next tick is due.
    pub next_update: SystemTime,
    /// The configured interval that produced `next_update`.
    pub interval_minutes: u64,
}

/// The wallpaper source: owns the pipeline's collaborators and runs ticks.
///
/// Options are re-read from the config file on every tick, so settings
/// changes take effect without restarting; no other state is kept between
/// ticks.
pub struct MapArtSource<L, G, P> {
    location: L,
    geocoder: G,
    publisher: P,
    config_path: PathBuf,
    catalog_xml: Option<String>,
}

impl<L, G, P> MapArtSource<L, G, P>
where
    L: LocationSource,
    G: Geocoder,
    P: ArtworkPublisher,
{
    /// Creates a source reading options from the default config path.
    pub fn new(location: L, geocoder: G, publisher: P) -> Self {
        Self {
            location,
            geocoder,
            publisher,
            config_path: crate::config::config_file_path(),
            catalog_xml: None,
        }
    }

    /// Overrides the config file path.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    /// Supplies the theme catalog document directly instead of reading the
    /// file named in the configuration.
    pub fn with_catalog_xml(mut self, xml: impl Into<String>) -> Self {
        self.catalog_xml = Some(xml.into());
        self
    }

    /// Access to the publisher, for querying the current artwork.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Runs one tick of the pipeline.
    ///
    /// Everything up to the publish step degrades to defaults on failure;
    /// only publishing can fail the tick, with the retryable/fatal split of
    /// [`TickError`].
    pub fn tick(&mut self) -> Result<TickOutcome, TickError> {
        let config = self.load_config();
        let coord = resolve_location(&self.location, &mut rand::thread_rng());
        let theme = self.resolve_active_theme(&config);

        let urls = UrlBuilder::new(
            config.provider.google_api_key.clone().unwrap_or_default(),
            config.provider.mapbox_access_token.clone().unwrap_or_default(),
        );
        let zoom = config.wallpaper.zoom;
        let (title, byline) = describe(&self.geocoder, coord);

        let artwork = Artwork {
            title,
            byline,
            image_url: urls.image_url(&theme, coord, zoom),
            view_url: urls.viewer_url(coord, zoom),
            token: coord.dedup_token(),
        };

        debug!(token = %artwork.token, theme = %theme.name, "publishing artwork");
        self.publisher.publish(&artwork).map_err(|e| match e {
            PublishError::Unavailable(msg) => TickError::RetryLater(msg),
            PublishError::Rejected(msg) => TickError::Fatal(msg),
        })?;

        let interval_minutes = update_interval_minutes(config.wallpaper.update_interval);
        let next_update = SystemTime::now() + Duration::from_secs(interval_minutes * 60);
        info!(
            token = %artwork.token,
            interval_minutes,
            "artwork published, next update scheduled"
        );

        Ok(TickOutcome {
            artwork,
            next_update,
            interval_minutes,
        })
    }

    /// Loads the configuration, degrading to defaults on any failure.
    fn load_config(&self) -> ConfigFile {
        match ConfigFile::load_from(&self.config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %self.config_path.display(), error = %e, "config unreadable, using defaults");
                ConfigFile::default()
            }
        }
    }

    /// Resolves the active theme from the selection index.
    ///
    /// Standard-mode indices bypass the catalog entirely; catalog indices go
    /// through name resolution with the default-theme fallback. The user's
    /// inversion preference overrides whatever the theme declared.
    fn resolve_active_theme(&self, config: &ConfigFile) -> Theme {
        let index = config.wallpaper.map_mode;
        let theme = match standard_theme(index) {
            Some(theme) => theme,
            None => {
                let xml = self.catalog_document(config);
                resolve_theme(&xml, &config.themes.titles, index)
            }
        };
        theme.with_inverted(config.wallpaper.invert_lightness)
    }

    /// Reads the catalog document, preferring the injected override.
    ///
    /// A missing or unreadable catalog file degrades to an empty document,
    /// which resolves every name to the default theme.
    fn catalog_document(&self, config: &ConfigFile) -> String {
        if let Some(xml) = &self.catalog_xml {
            return xml.clone();
        }
        let Some(path) = &config.themes.file else {
            return String::new();
        };
        match std::fs::read_to_string(path) {
            Ok(xml) => xml,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "theme catalog unreadable, using default theme");
                String::new()
            }
        }
    }
}
