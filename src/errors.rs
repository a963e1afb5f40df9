use thiserror::Error;

/// Failures raised by the ledger, its data file store, and the config layer.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed configuration: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Corrupt data file at line {line}: {detail}")]
    Corrupt { line: usize, detail: String },
}

/// Terminal error the binary reports when the shell cannot continue.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("command failed: {0}")]
    Command(String),
}
