//! crates/glog/src/logger.rs
//! The logger capability and its built-in implementations.
//!
//! Every facade entry point lowers onto the four severity methods of
//! [`Logger`] plus the [`Logger::debug_enabled`] query used by verbose
//! handles. Hosts either implement the trait on their own type or assemble a
//! [`LoggerFunc`] from closures.

use std::fmt;

/// Capability a host logging backend must provide to receive facade calls.
///
/// Each method receives pre-built [`fmt::Arguments`]. For the `*f` entry
/// points these are the caller's format string and operands, untouched; for
/// the plain entry points they wrap the already concatenated message. The
/// implementation decides whether and where to render them.
///
/// Failures inside the backend are the backend's concern. The facade never
/// observes them.
pub trait Logger: Send + Sync {
    /// Records a debug message. Reached only through an enabled [`Verbose`](crate::Verbose) handle.
    fn debugf(&self, args: fmt::Arguments<'_>);

    /// Records an info message.
    fn infof(&self, args: fmt::Arguments<'_>);

    /// Records a warning message.
    fn warnf(&self, args: fmt::Arguments<'_>);

    /// Records an error message. Fatal and exit calls also land here.
    fn errorf(&self, args: fmt::Arguments<'_>);

    /// Reports whether debug output is currently wanted.
    ///
    /// Queried once per [`v`](crate::v) call, so flipping the answer takes
    /// effect on the next call without reinstalling the logger.
    fn debug_enabled(&self) -> bool;
}

/// Logger that discards everything and reports debug output as disabled.
///
/// Installed in the process-wide slot until the host calls
/// [`set_logger`](crate::set_logger).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Dummy;

impl Logger for Dummy {
    fn debugf(&self, _args: fmt::Arguments<'_>) {}

    fn infof(&self, _args: fmt::Arguments<'_>) {}

    fn warnf(&self, _args: fmt::Arguments<'_>) {}

    fn errorf(&self, _args: fmt::Arguments<'_>) {}

    fn debug_enabled(&self) -> bool {
        false
    }
}

type LogFn = Box<dyn Fn(fmt::Arguments<'_>) + Send + Sync>;
type EnabledFn = Box<dyn Fn() -> bool + Send + Sync>;

/// [`Logger`] assembled from independent closures.
///
/// Spares hosts a dedicated type when all they need is to route each
/// severity somewhere. Slots that are not set behave like [`Dummy`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
///
/// use glog::{Logger, LoggerFunc};
///
/// let debug = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&debug);
///
/// let logger = LoggerFunc::new()
///     .with_debug_enabled(move || flag.load(Ordering::Relaxed))
///     .with_infof(|args| println!("[INFO] {args}"))
///     .with_errorf(|args| eprintln!("[ERROR] {args}"));
///
/// assert!(!logger.debug_enabled());
/// debug.store(true, Ordering::Relaxed);
/// assert!(logger.debug_enabled());
/// logger.infof(format_args!("{} - {}", "I'm", "batman!"));
/// ```
pub struct LoggerFunc {
    debugf: LogFn,
    infof: LogFn,
    warnf: LogFn,
    errorf: LogFn,
    debug_enabled: EnabledFn,
}

impl LoggerFunc {
    /// Creates an adapter whose every slot is a no-op and whose debug query answers `false`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            debugf: Box::new(|_: fmt::Arguments<'_>| {}),
            infof: Box::new(|_: fmt::Arguments<'_>| {}),
            warnf: Box::new(|_: fmt::Arguments<'_>| {}),
            errorf: Box::new(|_: fmt::Arguments<'_>| {}),
            debug_enabled: Box::new(|| false),
        }
    }

    /// Sets the closure receiving debug messages.
    #[must_use]
    pub fn with_debugf<F>(mut self, f: F) -> Self
    where
        F: Fn(fmt::Arguments<'_>) + Send + Sync + 'static,
    {
        self.debugf = Box::new(f);
        self
    }

    /// Sets the closure receiving info messages.
    #[must_use]
    pub fn with_infof<F>(mut self, f: F) -> Self
    where
        F: Fn(fmt::Arguments<'_>) + Send + Sync + 'static,
    {
        self.infof = Box::new(f);
        self
    }

    /// Sets the closure receiving warning messages.
    #[must_use]
    pub fn with_warnf<F>(mut self, f: F) -> Self
    where
        F: Fn(fmt::Arguments<'_>) + Send + Sync + 'static,
    {
        self.warnf = Box::new(f);
        self
    }

    /// Sets the closure receiving error messages.
    #[must_use]
    pub fn with_errorf<F>(mut self, f: F) -> Self
    where
        F: Fn(fmt::Arguments<'_>) + Send + Sync + 'static,
    {
        self.errorf = Box::new(f);
        self
    }

    /// Sets the closure answering [`Logger::debug_enabled`].
    #[must_use]
    pub fn with_debug_enabled<F>(mut self, f: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.debug_enabled = Box::new(f);
        self
    }
}

impl Default for LoggerFunc {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerFunc").finish_non_exhaustive()
    }
}

impl Logger for LoggerFunc {
    fn debugf(&self, args: fmt::Arguments<'_>) {
        (self.debugf)(args);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        (self.infof)(args);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        (self.warnf)(args);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        (self.errorf)(args);
    }

    fn debug_enabled(&self) -> bool {
        (self.debug_enabled)()
    }
}
