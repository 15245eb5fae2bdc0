//! crates/glog/src/macros.rs
//! Variadic front-ends for the facade functions.
//!
//! Operand macros (`info!`, `warningln!`, ...) collect their arguments into a
//! `&[&dyn Display]` slice. Formatting macros (`infof!`, `exitf!`, ...) build
//! a [`format_args!`] value and hand it over without rendering it.

/// Log operands at info severity.
///
/// # Example
/// ```no_run
/// glog::info!("I'm", " ", "Batman!");
/// ```
#[macro_export]
macro_rules! info {
    ($($part:expr),* $(,)?) => {
        $crate::info(&[$(&$part as &dyn ::core::fmt::Display),*])
    };
}

/// Log operands at info severity with a trailing newline.
#[macro_export]
macro_rules! infoln {
    ($($part:expr),* $(,)?) => {
        $crate::infoln(&[$(&$part as &dyn ::core::fmt::Display),*])
    };
}

/// Log a format string and its arguments at info severity.
///
/// # Example
/// ```no_run
/// glog::infof!("{} - {}", "I'm", "batman!");
/// ```
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::infof(::core::format_args!($($arg)+))
    };
}

/// Log operands at warning severity.
#[macro_export]
macro_rules! warning {
    ($($part:expr),* $(,)?) => {
        $crate::warning(&[$(&$part as &dyn ::core::fmt::Display),*])
    };
}

/// Log operands at warning severity with a trailing newline.
#[macro_export]
macro_rules! warningln {
    ($($part:expr),* $(,)?) => {
        $crate::warningln(&[$(&$part as &dyn ::core::fmt::Display),*])
    };
}

/// Log a format string and its arguments at warning severity.
#[macro_export]
macro_rules! warningf {
    ($($arg:tt)+) => {
        $crate::warningf(::core::format_args!($($arg)+))
    };
}

/// Log operands at error severity.
#[macro_export]
macro_rules! error {
    ($($part:expr),* $(,)?) => {
        $crate::error(&[$(&$part as &dyn ::core::fmt::Display),*])
    };
}

/// Log operands at error severity with a trailing newline.
#[macro_export]
macro_rules! errorln {
    ($($part:expr),* $(,)?) => {
        $crate::errorln(&[$(&$part as &dyn ::core::fmt::Display),*])
    };
}

/// Log a format string and its arguments at error severity.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::errorf(::core::format_args!($($arg)+))
    };
}

/// Log operands at error severity, then exit with status 255.
#[macro_export]
macro_rules! fatal {
    ($($part:expr),* $(,)?) => {
        $crate::fatal(&[$(&$part as &dyn ::core::fmt::Display),*])
    };
}

/// Log operands plus a newline at error severity, then exit with status 255.
#[macro_export]
macro_rules! fatalln {
    ($($part:expr),* $(,)?) => {
        $crate::fatalln(&[$(&$part as &dyn ::core::fmt::Display),*])
    };
}

/// Log a format string at error severity, then exit with status 255.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::fatalf(::core::format_args!($($arg)+))
    };
}

/// Log operands at error severity, then exit with status 1.
#[macro_export]
macro_rules! exit {
    ($($part:expr),* $(,)?) => {
        $crate::exit(&[$(&$part as &dyn ::core::fmt::Display),*])
    };
}

/// Log operands plus a newline at error severity, then exit with status 1.
#[macro_export]
macro_rules! exitln {
    ($($part:expr),* $(,)?) => {
        $crate::exitln(&[$(&$part as &dyn ::core::fmt::Display),*])
    };
}

/// Log a format string at error severity, then exit with status 1.
#[macro_export]
macro_rules! exitf {
    ($($arg:tt)+) => {
        $crate::exitf(::core::format_args!($($arg)+))
    };
}

/// Log operands at debug severity if `v(level)` is enabled.
///
/// # Example
/// ```no_run
/// glog::v_info!(2, "cache miss for ", 42);
/// ```
#[macro_export]
macro_rules! v_info {
    ($level:expr $(, $part:expr)* $(,)?) => {
        $crate::v($level).info(&[$(&$part as &dyn ::core::fmt::Display),*])
    };
}

/// Log operands plus a newline at debug severity if `v(level)` is enabled.
#[macro_export]
macro_rules! v_infoln {
    ($level:expr $(, $part:expr)* $(,)?) => {
        $crate::v($level).infoln(&[$(&$part as &dyn ::core::fmt::Display),*])
    };
}

/// Log a format string at debug severity if `v(level)` is enabled.
///
/// The arguments are only rendered by the backend, and only when enabled.
#[macro_export]
macro_rules! v_infof {
    ($level:expr, $($arg:tt)+) => {
        $crate::v($level).infof(::core::format_args!($($arg)+))
    };
}
