//! User commands against the current artwork.

use tracing::info;

use super::publisher::ArtworkPublisher;

/// Commands a user can trigger against the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    /// Share the currently published artwork as plain text.
    ShareArtwork,
}

/// Outcome of a user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommandResult {
    /// A share payload ready for the platform share sheet.
    Share(String),
    /// Nothing to act on; the text is shown to the user as a notice.
    Notice(String),
}

/// Handles a user command against the publisher's current artwork.
///
/// Sharing with no published artwork is a bounded no-op notice, never an
/// error.
pub fn handle_user_command<P: ArtworkPublisher>(
    publisher: &P,
    command: UserCommand,
) -> UserCommandResult {
    match command {
        UserCommand::ShareArtwork => match publisher.current() {
            Some(artwork) => {
                let mut text = format!("My wallpaper today is the map '{}'", artwork.title.trim());
                let byline = artwork.byline.trim();
                if !byline.is_empty() {
                    text.push_str(" on ");
                    text.push_str(byline);
                }
                text.push_str(".\n\n");
                text.push_str(&artwork.view_url);
                UserCommandResult::Share(text)
            }
            None => {
                info!("share requested with no published artwork");
                UserCommandResult::Notice("No artwork has been published yet.".to_string())
            }
        },
    }
}
