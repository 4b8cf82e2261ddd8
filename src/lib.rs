pub mod io;
pub mod state;
#[cfg(feature = "desktop")]
pub mod ui;

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber. `RUST_LOG` overrides the
/// default `csvsheet=info` filter. Calling it again is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("csvsheet=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
