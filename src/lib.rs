pub mod app;
pub mod config;
mod error;
pub mod store;
pub mod web;

// re-exports
pub use app::{serve, App, AppState};
pub use error::{Error, Result};
pub use store::SubscriberStore;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Tracing setup used for debug builds and tests.
/// Compact output without timestamps, defaults to `debug` unless `RUST_LOG` says otherwise.
pub fn init_dbg_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(filter)
        .compact()
        .init();
}

/// Tracing setup used for release builds.
pub fn init_production_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .init();
}
