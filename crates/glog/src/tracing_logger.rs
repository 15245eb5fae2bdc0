//! crates/glog/src/tracing_logger.rs
//! Logger backend that forwards facade calls to the `tracing` crate.
//!
//! Hosts already instrumented with `tracing` can route legacy glog calls
//! into the same subscriber:
//!
//! ```rust,ignore
//! glog::init_tracing();
//!
//! glog::info(&[&"server listening"]);
//! glog::v(2).infof(format_args!("accepted {}", peer));
//! ```
//!
//! Events are emitted under the [`TRACING_TARGET`] target, so they can be
//! filtered with directives such as `RUST_LOG=glog=debug`.

use std::fmt;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::logger::Logger;
use crate::registry;

/// Target attached to every event emitted by [`TracingLogger`].
pub const TRACING_TARGET: &str = "glog";

/// [`Logger`] that emits one `tracing` event per delegated call.
///
/// The severity maps one-to-one onto `tracing` levels. `debug_enabled`
/// asks the current subscriber whether DEBUG events for [`TRACING_TARGET`]
/// would be recorded, so verbose handles follow the subscriber's filter.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Creates the backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn debugf(&self, args: fmt::Arguments<'_>) {
        tracing::event!(target: TRACING_TARGET, Level::DEBUG, "{}", args);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        tracing::event!(target: TRACING_TARGET, Level::INFO, "{}", args);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        tracing::event!(target: TRACING_TARGET, Level::WARN, "{}", args);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        tracing::event!(target: TRACING_TARGET, Level::ERROR, "{}", args);
    }

    fn debug_enabled(&self) -> bool {
        tracing::enabled!(target: TRACING_TARGET, Level::DEBUG)
    }
}

/// Installs a global fmt subscriber filtered by `RUST_LOG` and routes the
/// facade to it.
///
/// Panics if a global subscriber is already set, like
/// `tracing_subscriber::util::SubscriberInitExt::init`.
pub fn init_tracing() {
    let filter = EnvFilter::from_default_env();
    init_tracing_with_filter(filter);
}

/// Installs a global fmt subscriber behind `filter` and routes the facade to it.
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    registry::set_logger(Arc::new(TracingLogger::new()));
}
