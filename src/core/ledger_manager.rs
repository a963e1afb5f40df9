use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::errors::LedgerError;
use crate::ledger::{CalendarDate, Category, Expense, Ledger, LedgerStats};
use crate::storage::flat_file;

/// Outcome of opening a data file, surfaced to the shell for display.
#[derive(Debug, Clone)]
pub struct OpenReport {
    /// False on the first-run path (missing file or unreadable allocator
    /// line) and after a corrupt load.
    pub found: bool,
    pub warnings: Vec<String>,
    /// Set when the load failed outright; the session continues empty.
    pub error: Option<String>,
}

/// Facade that owns the ledger for the process lifetime and coordinates
/// persistence against a single data file.
pub struct LedgerManager {
    ledger: Ledger,
    path: PathBuf,
}

impl LedgerManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            ledger: Ledger::new(),
            path: path.into(),
        }
    }

    /// Reads the data file. Never fails: a corrupt file is reported in the
    /// returned report and the session starts empty.
    pub fn load(&mut self) -> OpenReport {
        let report = match flat_file::load(&self.path) {
            Ok(outcome) => {
                self.ledger = outcome.ledger;
                OpenReport {
                    found: outcome.found,
                    warnings: outcome.warnings,
                    error: None,
                }
            }
            Err(err) => {
                error!("failed to load {}: {err}", self.path.display());
                self.ledger = Ledger::new();
                OpenReport {
                    found: false,
                    warnings: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        };

        if !report.found {
            // The stored counter is gone. Re-derive it from whatever was
            // recovered so future ids can never collide.
            self.ledger.next_id = self.ledger.max_id().map_or(1, |max| max + 1);
        }

        info!(
            "opened {} ({} records, next id {})",
            self.path.display(),
            self.ledger.records.len(),
            self.ledger.next_id
        );
        report
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a record and returns its id. Preconditions (amount >= 0,
    /// valid date) are enforced by the shell before calling.
    pub fn add(
        &mut self,
        amount: f64,
        category: Category,
        date: CalendarDate,
        remarks: &str,
    ) -> u32 {
        let id = self.ledger.add(amount, category, date, remarks);
        info!("added record {id} ({})", category.label());
        id
    }

    /// Removes the record with `id`, reporting whether one existed.
    pub fn delete(&mut self, id: u32) -> bool {
        let removed = self.ledger.delete(id);
        if removed {
            info!("deleted record {id}");
        }
        removed
    }

    pub fn find(&self, id: u32) -> Option<&Expense> {
        self.ledger.find(id)
    }

    pub fn sort_by_date(&mut self) {
        self.ledger.sort_by_date();
    }

    pub fn sort_by_amount(&mut self) {
        self.ledger.sort_by_amount();
    }

    pub fn stats(&self) -> Option<LedgerStats> {
        self.ledger.statistics()
    }

    /// Read-only listing snapshot in current order.
    pub fn records(&self) -> &[Expense] {
        &self.ledger.records
    }

    pub fn next_id(&self) -> u32 {
        self.ledger.next_id
    }

    /// Writes the full ledger back to the data file.
    pub fn save(&self) -> Result<(), LedgerError> {
        if let Err(err) = flat_file::save(&self.path, &self.ledger) {
            error!("failed to save {}: {err}", self.path.display());
            return Err(err);
        }
        info!(
            "saved {} records to {}",
            self.ledger.records.len(),
            self.path.display()
        );
        Ok(())
    }
}
