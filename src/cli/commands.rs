//! Shell command definitions and handlers.

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms::{self, ExpenseDraft};
use crate::cli::help;
use crate::cli::io;
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::countdown;
use crate::cli::ui::table::{Alignment, Table, TableColumn};
use crate::cli::ui::test_mode;
use crate::ledger::Expense;
use crate::utils::format_amount;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in definitions() {
        registry.register(entry);
    }
}

fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record a new expense",
            "add [amount category date remarks...]",
            cmd_add,
        ),
        CommandEntry::new(
            "delete",
            "Delete an expense after confirmation",
            "delete [id]",
            cmd_delete,
        ),
        CommandEntry::new("list", "Show all expenses", "list", cmd_list),
        CommandEntry::new(
            "sort-date",
            "Sort expenses by date, oldest first",
            "sort-date",
            cmd_sort_date,
        ),
        CommandEntry::new(
            "sort-amount",
            "Sort expenses by amount, smallest first",
            "sort-amount",
            cmd_sort_amount,
        ),
        CommandEntry::new("stats", "Summarize spending", "stats", cmd_stats),
        CommandEntry::new("save", "Write the ledger to disk now", "save", cmd_save),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new(
            "version",
            "Show build and data file details",
            "version",
            cmd_version,
        ),
        CommandEntry::new("exit", "Save and leave the shell", "exit", cmd_exit),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = if args.is_empty() {
        if context.mode != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(
                "usage: add <amount> <category> <YYYY-MM-DD> [remarks...]".into(),
            ));
        }
        forms::expense_form()?
    } else {
        draft_from_args(args)?
    };

    let id = context
        .manager
        .add(draft.amount, draft.category, draft.date, &draft.remarks);
    io::print_success(format!("Expense added (id {id})."));
    Ok(())
}

fn draft_from_args(args: &[&str]) -> Result<ExpenseDraft, CommandError> {
    if args.len() < 3 {
        return Err(CommandError::InvalidArguments(
            "usage: add <amount> <category> <YYYY-MM-DD> [remarks...]".into(),
        ));
    }
    Ok(ExpenseDraft {
        amount: forms::parse_amount(args[0])?,
        category: forms::parse_category(args[1])?,
        date: forms::parse_date(args[2])?,
        remarks: args[3..].join(" "),
    })
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if context.manager.records().is_empty() {
        io::print_info("No records yet.");
        return Ok(());
    }

    let id = match args.first() {
        Some(raw) => forms::parse_record_id(raw)?,
        None => {
            if context.mode != CliMode::Interactive {
                return Err(CommandError::InvalidArguments("usage: delete <id>".into()));
            }
            show_records(context, "All records");
            forms::prompt_record_id()?
        }
    };

    let Some(record) = context.manager.find(id) else {
        return Err(CommandError::Message(format!("No record with id {id}.")));
    };

    output_section("Record to delete");
    output::render_table(&records_table(std::slice::from_ref(record)));

    if !confirm_delete(context, &format!("Delete record {id}?"))? {
        io::print_info("Deletion cancelled.");
        return Ok(());
    }

    context.manager.delete(id);
    io::print_success(format!("Record {id} deleted."));
    Ok(())
}

/// Interactive deletes run the visual countdown; scripted runs consume a
/// queued answer when one is installed and otherwise pass straight through.
fn confirm_delete(context: &ShellContext, prompt: &str) -> Result<bool, CommandError> {
    match context.mode {
        CliMode::Interactive => {
            countdown::confirm_with_countdown(prompt, context.config.countdown_seconds)
                .map_err(CommandError::from)
        }
        CliMode::Script => Ok(test_mode::next_confirm(prompt).unwrap_or(true)),
    }
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    show_records(context, "All records");
    Ok(())
}

fn cmd_sort_date(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.manager.sort_by_date();
    io::print_success("Records sorted by date.");
    show_records(context, "Records by date");
    Ok(())
}

fn cmd_sort_amount(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.manager.sort_by_amount();
    io::print_success("Records sorted by amount, smallest first.");
    show_records(context, "Records by amount");
    Ok(())
}

fn cmd_stats(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let Some(stats) = context.manager.stats() else {
        io::print_info("No records to summarize.");
        return Ok(());
    };

    output_section("Spending summary");
    io::print_info(format!("Total spent: {}", format_amount(stats.total)));
    io::print_info(format!("Records: {}", stats.count));
    io::print_info(format!("Average per record: {}", format_amount(stats.average)));

    let mut breakdown = Table::new(vec![
        TableColumn::new("Category", Alignment::Left),
        TableColumn::new("Total", Alignment::Right),
        TableColumn::new("Count", Alignment::Right),
    ]);
    for (category, totals) in &stats.per_category {
        breakdown.push_row(vec![
            category.label().to_string(),
            format_amount(totals.sum),
            totals.count.to_string(),
        ]);
    }
    output::render_table(&breakdown);

    let top_total = stats
        .per_category
        .iter()
        .find(|(category, _)| *category == stats.max_category)
        .map(|(_, totals)| totals.sum)
        .expect("top category is always aggregated");
    io::print_info(format!(
        "Top category: {} ({})",
        stats.max_category.label(),
        format_amount(top_total)
    ));
    io::print_info(format!(
        "Largest single expense: {} ({}, {})",
        format_amount(stats.max_single.amount),
        stats.max_single.category.label(),
        stats.max_single.date
    ));
    Ok(())
}

fn cmd_save(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.manager.save()?;
    io::print_success(format!(
        "Saved {} records to {}.",
        context.manager.records().len(),
        context.manager.path().display()
    ));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(command) = args.first().map(|name| name.to_lowercase()) {
        if let Some(command) = context.command(&command) {
            help::print_command(command);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_version(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section(format!("Expense Core {}", env!("CARGO_PKG_VERSION")));
    io::print_info(format!("  Data file: {}", context.manager.path().display()));
    io::print_info(format!("  Records  : {}", context.manager.records().len()));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

fn show_records(context: &ShellContext, title: &str) {
    output_section(title);
    let records = context.manager.records();
    if records.is_empty() {
        io::print_info("No records yet.");
        return;
    }
    output::render_table(&records_table(records));
}

fn records_table(records: &[Expense]) -> Table {
    let mut table = Table::new(vec![
        TableColumn::new("ID", Alignment::Right),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Category", Alignment::Left),
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Remarks", Alignment::Left),
    ]);
    for record in records {
        table.push_row(vec![
            record.id.to_string(),
            format_amount(record.amount),
            record.category.label().to_string(),
            record.date.to_string(),
            record.remarks.clone(),
        ]);
    }
    table
}
