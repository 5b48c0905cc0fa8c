//! The wallpaper source pipeline.
//!
//! [`MapArtSource`] ties the other modules together: on each tick it reads
//! the persisted options, resolves a publishable coordinate (substituting a
//! fallback when the reading is invalid), resolves the active theme, builds
//! the image and viewer URLs, derives a title and byline by reverse
//! geocoding, publishes the resulting [`Artwork`] and reports when the next
//! tick is due.
//!
//! Every stage before publishing degrades gracefully to a documented
//! default; only the publish step can fail a tick, and then only with a
//! retryable/fatal distinction the host scheduler acts on. Running at most
//! one tick at a time is the host's responsibility.

mod artwork;
mod command;
mod publisher;
mod tick;

pub use artwork::Artwork;
pub use command::{handle_user_command, UserCommand, UserCommandResult};
pub use publisher::{ArtworkPublisher, InMemoryPublisher, JsonFilePublisher, PublishError};
pub use tick::{MapArtSource, TickError, TickOutcome};
