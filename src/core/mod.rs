//! Service layer coordinating ledger state and persistence.

pub mod ledger_manager;
pub mod paths;

pub use ledger_manager::{LedgerManager, OpenReport};
