//! Printing and prompting wrappers shared by the command handlers.

use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::core::CommandError;
use crate::cli::output::{self, MessageKind};
use crate::cli::ui::test_mode;

pub fn print_info(message: impl fmt::Display) {
    output::print(MessageKind::Info, message);
}

pub fn print_success(message: impl fmt::Display) {
    output::print(MessageKind::Success, message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::print(MessageKind::Warning, message);
}

pub fn print_error(message: impl fmt::Display) {
    output::print(MessageKind::Error, message);
}

/// Follow-up guidance printed after an error.
pub fn print_hint(message: impl fmt::Display) {
    output::print(MessageKind::Info, message);
}

/// Yes/no confirmation. Scripted answers installed for tests take
/// precedence over the terminal prompt.
pub fn confirm_action(prompt: &str, default: bool) -> Result<bool, CommandError> {
    if let Some(scripted) = test_mode::next_confirm(prompt) {
        return Ok(scripted);
    }
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}
