//! Ledger domain models, persistence-friendly types, and helpers.

pub mod date;
pub mod expense;
pub mod stats;

pub use date::CalendarDate;
pub use expense::{Category, Expense};
pub use stats::{CategoryTotal, LedgerStats};

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// In-memory expense collection plus the id allocator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    pub next_id: u32,
    pub records: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }

    /// Appends a record under a freshly allocated id and returns that id.
    ///
    /// Newlines in remarks would shift record boundaries in the data file,
    /// so they are flattened to spaces before the record is stored.
    pub fn add(
        &mut self,
        amount: f64,
        category: Category,
        date: CalendarDate,
        remarks: &str,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.records
            .push(Expense::new(id, amount, category, date, sanitize_remarks(remarks)));
        id
    }

    /// Removes the record with the given id, reporting whether one existed.
    /// The allocator is untouched, so the id is never reissued.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    pub fn find(&self, id: u32) -> Option<&Expense> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Stable ascending sort on the calendar date.
    pub fn sort_by_date(&mut self) {
        self.records.sort_by_key(|record| record.date);
    }

    /// Stable ascending sort on the amount.
    pub fn sort_by_amount(&mut self) {
        self.records
            .sort_by(|a, b| a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal));
    }

    pub fn statistics(&self) -> Option<LedgerStats> {
        LedgerStats::compute(&self.records)
    }

    /// Highest id currently present, used to repair the allocator after a
    /// damaged load.
    pub fn max_id(&self) -> Option<u32> {
        self.records.iter().map(|record| record.id).max()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn sanitize_remarks(remarks: &str) -> String {
    remarks.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
