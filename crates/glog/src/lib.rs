#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `glog` reproduces the free-function surface of the classic glog logging
//! package (info/warning/error/fatal/exit logging, verbosity handles, depth
//! variants) but forwards every call to a single [`Logger`] chosen by the
//! embedding application. Code written against the legacy calls keeps
//! compiling while its output lands in whatever backend the host prefers.
//!
//! # Design
//!
//! - [`Logger`] is the capability a backend implements: four severity methods
//!   receiving [`fmt::Arguments`](std::fmt::Arguments) plus a
//!   [`debug_enabled`](Logger::debug_enabled) query.
//! - A process-wide slot holds the active logger. It starts as [`Dummy`] and
//!   is replaced with [`set_logger`]. Reads and writes share one lock.
//! - [`LoggerFunc`] builds a backend from closures when a named type is
//!   overkill.
//! - [`v`] returns a [`Verbose`] handle. In the default build it is enabled
//!   exactly when the active logger reports debug output as enabled; the
//!   numeric [`Level`] never acts as a threshold. Building with the
//!   `static-verbosity` feature disables every handle instead.
//!
//! # Invariants
//!
//! - Every entry point makes exactly one delegated call, or none for a
//!   disabled verbose handle.
//! - Plain forms pass their concatenated operands as a literal message; `*ln`
//!   forms add exactly one trailing newline; `*f` forms never pre-render.
//! - The `fatal*` family exits with status 255 and the `exit*` family with
//!   status 1, always after delegating the message at error severity.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::Mutex;
//!
//! use glog::LoggerFunc;
//!
//! let lines = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&lines);
//!
//! glog::set_logger(Arc::new(
//!     LoggerFunc::new().with_infof(move |args| sink.lock().unwrap().push(args.to_string())),
//! ));
//!
//! glog::info(&[&"I'm Batman!"]);
//! glog::infof!("{} {}", "I'm", "Batman!");
//! glog::v(2).info(&[&"dropped: debug is disabled"]);
//!
//! assert_eq!(*lines.lock().unwrap(), ["I'm Batman!", "I'm Batman!"]);
//! glog::reset_logger();
//! ```
//!
//! # Features
//!
//! - `static-verbosity`: verbose handles are always disabled.
//! - `tracing`: [`TracingLogger`] and [`init_tracing`] route the facade into
//!   the `tracing` ecosystem.
//! - `serde`: serialization for [`Level`].

mod facade;
mod level;
mod logger;
mod macros;
mod registry;
mod render;
#[cfg(feature = "tracing")]
mod tracing_logger;

pub use facade::{
    EXIT_EXIT_CODE, FATAL_EXIT_CODE, error, error_depth, errorf, errorln, exit, exit_depth, exitf,
    exitln, fatal, fatal_depth, fatalf, fatalln, flush, info, info_depth, infof, infoln, warning,
    warning_depth, warningf, warningln,
};
pub use level::{Level, ParseLevelError, Verbose, v};
pub use logger::{Dummy, Logger, LoggerFunc};
pub use registry::{logger, reset_logger, set_boxed_logger, set_logger};
#[cfg(feature = "tracing")]
pub use tracing_logger::{TRACING_TARGET, TracingLogger, init_tracing, init_tracing_with_filter};
