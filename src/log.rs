//! Logging setup for the `pocket` binary

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber
///
/// `verbose` forces debug output; otherwise `RUST_LOG` is honoured and the
/// default is `warn`. Everything goes to stderr so command output stays clean.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pocket=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(filter)
        .init();
}
