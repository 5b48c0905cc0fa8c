//! Artwork publisher trait and implementations.
//!
//! The publisher is the host-side sink for finished artwork. Publishing is
//! the one pipeline stage whose failure is surfaced rather than swallowed,
//! split into transient ("retry later") and permanent ("do not retry")
//! outcomes.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::artwork::Artwork;

/// Errors raised by a publish attempt.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The sink is temporarily unavailable; the same artwork may succeed on
    /// a later attempt.
    #[error("publisher temporarily unavailable: {0}")]
    Unavailable(String),

    /// The sink rejected the artwork permanently; retrying is pointless.
    #[error("artwork rejected: {0}")]
    Rejected(String),
}

/// Sink accepting finished artwork records.
///
/// `current` reports the most recently published artwork, which backs the
/// share command and the host's dedup check.
pub trait ArtworkPublisher {
    /// Publishes an artwork record.
    fn publish(&mut self, artwork: &Artwork) -> Result<(), PublishError>;

    /// Returns the most recently published artwork, if any.
    fn current(&self) -> Option<Artwork>;
}

/// Publisher persisting the current artwork as JSON on disk.
///
/// Stands in for a host framework sink: the state file survives restarts,
/// so the share command works across process lifetimes.
#[derive(Debug, Clone)]
pub struct JsonFilePublisher {
    path: PathBuf,
}

impl JsonFilePublisher {
    /// Creates a publisher writing to the given state file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a publisher at the default state path
    /// (`~/.mapmuse/current.json`).
    pub fn at_default_path() -> Self {
        Self::new(crate::config::config_directory().join("current.json"))
    }

    /// Path of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArtworkPublisher for JsonFilePublisher {
    fn publish(&mut self, artwork: &Artwork) -> Result<(), PublishError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PublishError::Unavailable(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(artwork)
            .map_err(|e| PublishError::Rejected(e.to_string()))?;
        // An I/O failure here is transient: the disk may be full or the
        // directory briefly locked, and the same artwork can be retried.
        std::fs::write(&self.path, json).map_err(|e| PublishError::Unavailable(e.to_string()))?;
        debug!(path = %self.path.display(), token = %artwork.token, "artwork published");
        Ok(())
    }

    fn current(&self) -> Option<Artwork> {
        let bytes = std::fs::read(&self.path).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

/// Publisher keeping artwork in memory.
///
/// For tests and embedding hosts that manage persistence themselves. Can be
/// armed to fail the next publish attempt.
#[derive(Debug, Default)]
pub struct InMemoryPublisher {
    published: Vec<Artwork>,
    fail_next: Option<PublishError>,
}

impl InMemoryPublisher {
    /// Creates an empty publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the publisher to fail the next publish attempt with `error`.
    pub fn fail_next(&mut self, error: PublishError) {
        self.fail_next = Some(error);
    }

    /// All artwork published so far, oldest first.
    pub fn published(&self) -> &[Artwork] {
        &self.published
    }
}

impl ArtworkPublisher for InMemoryPublisher {
    fn publish(&mut self, artwork: &Artwork) -> Result<(), PublishError> {
        if let Some(error) = self.fail_next.take() {
            return Err(error);
        }
        self.published.push(artwork.clone());
        Ok(())
    }

    fn current(&self) -> Option<Artwork> {
        self.published.last().cloned()
    }
}
