//! Styled stdout messages shared across the shell.

use std::fmt;

use colored::Colorize;

/// Visual classes a shell message can take.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

/// Prints one message in the shell's house style. Sections get a leading
/// blank line so they read as breaks between command outputs.
pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let text = message.to_string();
    let styled = match kind {
        MessageKind::Info => format!("INFO: [i] {text}").normal(),
        MessageKind::Success => format!("SUCCESS: [✓] {text}").bright_green(),
        MessageKind::Warning => format!("WARNING: [!] {text}").bright_yellow(),
        MessageKind::Error => format!("ERROR: [x] {text}").bright_red(),
        MessageKind::Section => format!("=== {} ===", text.trim()).bold(),
    };
    if kind == MessageKind::Section {
        println!("\n{styled}");
    } else {
        println!("{styled}");
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn render_table(table: &crate::cli::ui::table::Table) {
    println!("{}", table.render());
}
