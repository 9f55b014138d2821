//! Diagnostic logging setup.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `FORMGEN_LOG=formgen_codegen=trace`.
pub const LOG_ENV: &str = "FORMGEN_LOG";

static INIT: Once = Once::new();

/// Filter used when `FORMGEN_LOG` is unset or invalid.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "formgen=debug"
    } else {
        "formgen=warn"
    }
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose),
            )
            .with(filter)
            .init();
    });
}
