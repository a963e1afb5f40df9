//! Line-oriented ledger store.
//!
//! The first line holds the id allocator; every record after it occupies
//! exactly seven lines in fixed order: id, amount, category index, year,
//! month, day, remarks. Remarks comes last so it may contain spaces, but the
//! format has no escaping, so it must never span lines.

use std::{fs, path::Path};

use tracing::warn;

use crate::errors::LedgerError;
use crate::ledger::{CalendarDate, Category, Expense, Ledger};
use crate::utils::persistence;

/// Result of reading a data file.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub ledger: Ledger,
    /// False when the file was absent or its allocator line was unreadable.
    /// Callers treat that as the first-run state, not an error.
    pub found: bool,
    /// One entry per record skipped by validation.
    pub warnings: Vec<String>,
}

impl LoadOutcome {
    fn absent() -> Self {
        Self {
            ledger: Ledger::new(),
            found: false,
            warnings: Vec::new(),
        }
    }
}

/// Reads the ledger from `path`.
///
/// A missing file or an unreadable allocator line yields `found = false`
/// with an empty ledger. A record whose date or category fails validation is
/// skipped with a warning. A truncated trailing group is dropped silently.
/// A field that does not even parse as its numeric type is corruption: the
/// whole load fails and the caller keeps nothing.
pub fn load(path: &Path) -> Result<LoadOutcome, LedgerError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(LoadOutcome::absent());
        }
        Err(err) => return Err(err.into()),
    };

    let mut lines = raw.lines().enumerate();

    let next_id = match lines.next() {
        Some((_, first)) => match first.trim().parse::<u32>() {
            Ok(value) => value,
            Err(_) => {
                let mut outcome = LoadOutcome::absent();
                push_warning(
                    &mut outcome.warnings,
                    format!(
                        "allocator line unreadable in {}; treating file as new",
                        path.display()
                    ),
                );
                return Ok(outcome);
            }
        },
        None => return Ok(LoadOutcome::absent()),
    };

    let mut ledger = Ledger::new();
    ledger.next_id = next_id;
    let mut warnings = Vec::new();

    loop {
        let Some((line_no, id_line)) = lines.next() else {
            break;
        };
        let id: u32 = parse_field(id_line, line_no, "record id")?;

        let Some((line_no, amount_line)) = lines.next() else {
            break;
        };
        let amount: f64 = parse_field(amount_line, line_no, "amount")?;

        let Some((line_no, category_line)) = lines.next() else {
            break;
        };
        let category_index: u32 = parse_field(category_line, line_no, "category index")?;

        let Some((line_no, year_line)) = lines.next() else {
            break;
        };
        let year: i32 = parse_field(year_line, line_no, "year")?;

        let Some((line_no, month_line)) = lines.next() else {
            break;
        };
        let month: i32 = parse_field(month_line, line_no, "month")?;

        let Some((line_no, day_line)) = lines.next() else {
            break;
        };
        let day: i32 = parse_field(day_line, line_no, "day")?;

        let Some((_, remarks_line)) = lines.next() else {
            break;
        };

        let date = CalendarDate::new(year, month, day);
        if !date.is_valid() {
            push_warning(
                &mut warnings,
                format!("record id {id} skipped: invalid date {date}"),
            );
            continue;
        }

        let Some(category) = Category::from_index(category_index) else {
            push_warning(
                &mut warnings,
                format!(
                    "record id {id} skipped: category index {category_index} maps to {}",
                    Category::label_for_index(category_index)
                ),
            );
            continue;
        };

        ledger
            .records
            .push(Expense::new(id, amount, category, date, remarks_line));
    }

    Ok(LoadOutcome {
        ledger,
        found: true,
        warnings,
    })
}

/// Writes the full ledger to `path`, staging to a temporary file and
/// renaming so a failed write never clobbers the previous contents.
pub fn save(path: &Path, ledger: &Ledger) -> Result<(), LedgerError> {
    let mut out = format!("{}\n", ledger.next_id);
    for record in &ledger.records {
        out.push_str(&format!(
            "{}\n{}\n{}\n{}\n{}\n{}\n{}\n",
            record.id,
            record.amount,
            record.category.index(),
            record.date.year,
            record.date.month,
            record.date.day,
            record.remarks
        ));
    }

    persistence::replace_file(path, &out)?;
    Ok(())
}

fn parse_field<T: std::str::FromStr>(
    line: &str,
    line_no: usize,
    field: &str,
) -> Result<T, LedgerError> {
    line.trim().parse().map_err(|_| LedgerError::Corrupt {
        line: line_no + 1,
        detail: format!("expected {field}, got `{}`", line.trim()),
    })
}

fn push_warning(warnings: &mut Vec<String>, message: String) {
    warn!("{message}");
    warnings.push(message);
}
