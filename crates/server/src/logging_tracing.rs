//! # Tracing configuration setup.
//!
//! The server code is instrumented with Rust's `tracing` framework.
//!
//! Calling the `init` function will initialize a global tracing subscriber
//! based on the value of the `STOREFRONT_LOG` environment variable, which
//! follows the same conventions as `RUST_LOG`. This provides console logging.

use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

const STOREFRONT_LOG: &str = "STOREFRONT_LOG";

/// Initialize the tracing subscriber with a compact console format.
pub(super) fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer().compact();
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(STOREFRONT_LOG)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
