use crate::cli::output::{self, section as output_section};
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::table::{Alignment, Table, TableColumn};

/// Renders the whole command table in registration order.
pub fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");

    let mut table = Table::new(vec![
        TableColumn::new("Command", Alignment::Left),
        TableColumn::new("Description", Alignment::Left),
    ]);
    for entry in registry.list() {
        table.push_row(vec![entry.name.to_string(), entry.description.to_string()]);
    }
    output::render_table(&table);

    output::info("Use `help <command>` for details.");
}

/// Renders one command's description and usage line.
pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    output::info(entry.description);
    output::info(format!("usage: {}", entry.usage));
}
