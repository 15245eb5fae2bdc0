//! crates/glog/src/registry.rs
//! Process-wide slot holding the active logger.
//!
//! The slot starts out holding [`Dummy`]. Replacement takes the write lock;
//! every log call takes the read lock only long enough to clone the `Arc`, so
//! delegation itself runs unlocked and a backend that reinstalls a logger from
//! inside a log call cannot deadlock.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::logger::{Dummy, Logger};

static ACTIVE: LazyLock<RwLock<Arc<dyn Logger>>> = LazyLock::new(|| {
    let initial: Arc<dyn Logger> = Arc::new(Dummy);
    RwLock::new(initial)
});

/// Installs `logger` as the target of every subsequent facade call.
///
/// The host keeps its own clone of the `Arc` and therefore controls how long
/// the backend lives. Calls issued after this function returns never reach
/// the previously installed logger.
pub fn set_logger(logger: Arc<dyn Logger>) {
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    *slot = logger;
}

/// Installs a boxed logger for hosts that do not need to keep a handle.
pub fn set_boxed_logger(logger: Box<dyn Logger>) {
    set_logger(Arc::from(logger));
}

/// Reinstalls the no-op [`Dummy`] logger.
pub fn reset_logger() {
    set_logger(Arc::new(Dummy));
}

/// Returns the currently installed logger.
#[must_use]
pub fn logger() -> Arc<dyn Logger> {
    let slot = ACTIVE.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&slot)
}
