//! Tracing initialization for the CLI.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "BUILDSPACE_LOG";

/// Initialize tracing on stderr. Call once at process startup.
///
/// `BUILDSPACE_LOG` takes precedence over `RUST_LOG`; without either, only
/// warnings are shown, or debug output for this crate when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "buildspace=debug" } else { "buildspace=warn" };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
