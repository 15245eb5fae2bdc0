//! crates/glog/src/facade.rs
//! Free functions reproducing the legacy glog call surface.
//!
//! Each call resolves the active logger once and makes exactly one delegated
//! call. Plain forms concatenate their operands and pass the result as a
//! literal message; `*ln` forms append a trailing newline; `*f` forms pass
//! the caller's [`fmt::Arguments`] through untouched; `*_depth` forms accept
//! and ignore a stack-depth hint.
//!
//! The fatal and exit families log at error severity and then end the process
//! with [`FATAL_EXIT_CODE`] or [`EXIT_EXIT_CODE`]. They never return.

use std::fmt;
use std::process;

use crate::registry;
use crate::render::{concat, concat_line};

/// Status the process ends with after a `fatal*` call.
pub const FATAL_EXIT_CODE: i32 = 255;

/// Status the process ends with after an `exit*` call.
pub const EXIT_EXIT_CODE: i32 = 1;

/// No-op kept for signature compatibility; buffering belongs to the backend.
pub fn flush() {}

/// Logs the concatenated operands at info severity.
pub fn info(parts: &[&dyn fmt::Display]) {
    let message = concat(parts);
    registry::logger().infof(format_args!("{message}"));
}

/// Same as [`info`]; `depth` is ignored.
pub fn info_depth(_depth: usize, parts: &[&dyn fmt::Display]) {
    info(parts);
}

/// Logs the concatenated operands plus a trailing newline at info severity.
pub fn infoln(parts: &[&dyn fmt::Display]) {
    let message = concat_line(parts);
    registry::logger().infof(format_args!("{message}"));
}

/// Passes `args` to the info method unmodified.
pub fn infof(args: fmt::Arguments<'_>) {
    registry::logger().infof(args);
}

/// Logs the concatenated operands at warning severity.
pub fn warning(parts: &[&dyn fmt::Display]) {
    let message = concat(parts);
    registry::logger().warnf(format_args!("{message}"));
}

/// Same as [`warning`]; `depth` is ignored.
pub fn warning_depth(_depth: usize, parts: &[&dyn fmt::Display]) {
    warning(parts);
}

/// Logs the concatenated operands plus a trailing newline at warning severity.
pub fn warningln(parts: &[&dyn fmt::Display]) {
    let message = concat_line(parts);
    registry::logger().warnf(format_args!("{message}"));
}

/// Passes `args` to the warning method unmodified.
pub fn warningf(args: fmt::Arguments<'_>) {
    registry::logger().warnf(args);
}

/// Logs the concatenated operands at error severity.
pub fn error(parts: &[&dyn fmt::Display]) {
    let message = concat(parts);
    registry::logger().errorf(format_args!("{message}"));
}

/// Same as [`error`]; `depth` is ignored.
pub fn error_depth(_depth: usize, parts: &[&dyn fmt::Display]) {
    error(parts);
}

/// Logs the concatenated operands plus a trailing newline at error severity.
pub fn errorln(parts: &[&dyn fmt::Display]) {
    let message = concat_line(parts);
    registry::logger().errorf(format_args!("{message}"));
}

/// Passes `args` to the error method unmodified.
pub fn errorf(args: fmt::Arguments<'_>) {
    registry::logger().errorf(args);
}

/// Logs like [`error`], then exits with status 255.
pub fn fatal(parts: &[&dyn fmt::Display]) -> ! {
    error(parts);
    process::exit(FATAL_EXIT_CODE)
}

/// Logs like [`error_depth`], then exits with status 255.
pub fn fatal_depth(depth: usize, parts: &[&dyn fmt::Display]) -> ! {
    error_depth(depth, parts);
    process::exit(FATAL_EXIT_CODE)
}

/// Logs like [`errorln`], then exits with status 255.
pub fn fatalln(parts: &[&dyn fmt::Display]) -> ! {
    errorln(parts);
    process::exit(FATAL_EXIT_CODE)
}

/// Logs like [`errorf`], then exits with status 255.
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    errorf(args);
    process::exit(FATAL_EXIT_CODE)
}

/// Logs like [`error`], then exits with status 1.
pub fn exit(parts: &[&dyn fmt::Display]) -> ! {
    error(parts);
    process::exit(EXIT_EXIT_CODE)
}

/// Logs like [`error_depth`], then exits with status 1.
pub fn exit_depth(depth: usize, parts: &[&dyn fmt::Display]) -> ! {
    error_depth(depth, parts);
    process::exit(EXIT_EXIT_CODE)
}

/// Logs like [`errorln`], then exits with status 1.
pub fn exitln(parts: &[&dyn fmt::Display]) -> ! {
    errorln(parts);
    process::exit(EXIT_EXIT_CODE)
}

/// Logs like [`errorf`], then exits with status 1.
pub fn exitf(args: fmt::Arguments<'_>) -> ! {
    errorf(args);
    process::exit(EXIT_EXIT_CODE)
}
