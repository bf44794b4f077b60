//! Log output for hosts that want to see what the helpers are doing.
//!
//! The helpers only emit `trace` and `debug` events (opens, releases, lock
//! entry, recovered panics, short-circuits). Nothing is emitted at `warn` or
//! above, and errors are always returned rather than logged.

use ::tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use with_core::{DEFAULT_LOG_FILTER, WITH_LOG_VAR};

/// Initialize a global subscriber that writes to stderr.
///
/// The filter comes from `WITH_LOG`, then `RUST_LOG`, then defaults to
/// `warn`. Fails if a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_env(WITH_LOG_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    ::tracing::event!(Level::DEBUG, "tracing initialized");
    Ok(())
}

/// Check if stderr is attached to a terminal
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}
