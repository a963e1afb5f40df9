pub mod persistence;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("expense_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Formats a monetary amount with two decimal places for display.
///
/// Stored amounts keep full `f64` precision; this is presentation only.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}
