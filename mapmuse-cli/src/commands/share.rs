//! Share command.

use mapmuse::source::{handle_user_command, JsonFilePublisher, UserCommand, UserCommandResult};

use crate::error::CliError;

/// Print the share text for the currently published artwork.
///
/// With no published artwork this prints a notice and exits cleanly; there
/// is nothing to treat as an error.
pub fn run() -> Result<(), CliError> {
    let publisher = JsonFilePublisher::at_default_path();
    match handle_user_command(&publisher, UserCommand::ShareArtwork) {
        UserCommandResult::Share(text) => println!("{}", text),
        UserCommandResult::Notice(notice) => eprintln!("{}", notice),
    }
    Ok(())
}
