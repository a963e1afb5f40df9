//! Persistence for the expense ledger.

pub mod flat_file;

pub use flat_file::{load, save, LoadOutcome};
