//! Field parsing and interactive entry for expense records.

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::core::CommandError;
use crate::ledger::{CalendarDate, Category};

/// A fully validated set of expense fields ready for the ledger.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub category: Category,
    pub date: CalendarDate,
    pub remarks: String,
}

pub fn parse_amount(input: &str) -> Result<f64, CommandError> {
    let value: f64 = input.trim().parse().map_err(|_| {
        CommandError::InvalidArguments(format!(
            "invalid amount `{}` (expected a number)",
            input.trim()
        ))
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(CommandError::InvalidArguments(format!(
            "amount must be zero or positive, got `{}`",
            input.trim()
        )));
    }
    Ok(value)
}

pub fn parse_category(input: &str) -> Result<Category, CommandError> {
    Category::parse(input).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "unknown category `{}` (expected one of: {})",
            input.trim(),
            category_labels().join(", ")
        ))
    })
}

pub fn parse_date(input: &str) -> Result<CalendarDate, CommandError> {
    let date = CalendarDate::parse(input).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "invalid date `{}` (use YYYY-MM-DD)",
            input.trim()
        ))
    })?;
    if !date.is_valid() {
        return Err(CommandError::InvalidArguments(format!(
            "`{date}` is not a valid calendar date"
        )));
    }
    Ok(date)
}

pub fn parse_record_id(input: &str) -> Result<u32, CommandError> {
    input.trim().parse().map_err(|_| {
        CommandError::InvalidArguments(format!(
            "invalid id `{}` (expected a number)",
            input.trim()
        ))
    })
}

/// Collects all four expense fields interactively, re-prompting until each
/// one validates.
pub fn expense_form() -> Result<ExpenseDraft, CommandError> {
    let theme = ColorfulTheme::default();

    let amount_raw: String = Input::with_theme(&theme)
        .with_prompt("Amount")
        .validate_with(|input: &String| {
            parse_amount(input).map(|_| ()).map_err(|err| err.to_string())
        })
        .interact_text()?;
    let amount = parse_amount(&amount_raw)?;

    let labels = category_labels();
    let selection = Select::with_theme(&theme)
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;
    let category = Category::ALL[selection];

    let date_raw: String = Input::with_theme(&theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(Local::now().format("%Y-%m-%d").to_string())
        .validate_with(|input: &String| {
            parse_date(input).map(|_| ()).map_err(|err| err.to_string())
        })
        .interact_text()?;
    let date = parse_date(&date_raw)?;

    let remarks: String = Input::with_theme(&theme)
        .with_prompt("Remarks")
        .allow_empty(true)
        .interact_text()?;

    Ok(ExpenseDraft {
        amount,
        category,
        date,
        remarks,
    })
}

/// Prompts for a record id, re-prompting until it parses.
pub fn prompt_record_id() -> Result<u32, CommandError> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Record id to delete")
        .validate_with(|input: &String| {
            parse_record_id(input)
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()?;
    parse_record_id(&raw)
}

fn category_labels() -> Vec<&'static str> {
    Category::ALL.iter().map(|category| category.label()).collect()
}
