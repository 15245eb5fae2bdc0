//! crates/glog/src/level.rs
//! Verbosity level values and the verbose handle returned by [`v`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::registry;
use crate::render::{concat, concat_line};

/// Verbosity level accepted by [`v`].
///
/// The value is carried for compatibility and diagnostics only. It is never
/// compared against a threshold; whether a verbose handle is enabled depends
/// solely on the active logger (or on the `static-verbosity` build feature).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Level(pub i32);

impl Level {
    /// Returns the raw level value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Error returned when a string cannot be parsed into a [`Level`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseLevelError {
    /// The input was empty or only whitespace.
    #[error("verbosity level is empty")]
    Empty,
    /// The input was not a signed 32-bit decimal integer.
    #[error("invalid verbosity level {input:?}")]
    Invalid {
        /// The rejected input, trimmed.
        input: String,
    },
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses flag-style input such as `"2"`, `" 3 "` or `"-1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseLevelError::Empty);
        }
        trimmed
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ParseLevelError::Invalid {
                input: trimmed.to_owned(),
            })
    }
}

/// Handle returned by [`v`], bound to a resolved enabled/disabled flag.
///
/// When disabled, every logging method returns immediately without touching
/// the active logger. When enabled, messages go to [`Logger::debugf`](crate::Logger::debugf).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct Verbose {
    level: Level,
    enabled: bool,
}

impl Verbose {
    pub(crate) const fn new(level: Level, enabled: bool) -> Self {
        Self { level, enabled }
    }

    /// Reports whether this handle forwards messages.
    ///
    /// Lets callers skip building expensive messages, like `if glog.V(2) {}`
    /// did with the legacy boolean handle.
    #[must_use]
    pub const fn enabled(self) -> bool {
        self.enabled
    }

    /// Returns the level the handle was requested with.
    #[must_use]
    pub const fn level(self) -> Level {
        self.level
    }

    /// Concatenates `parts` and logs them at debug severity.
    pub fn info(self, parts: &[&dyn fmt::Display]) {
        if self.enabled {
            let message = concat(parts);
            registry::logger().debugf(format_args!("{message}"));
        }
    }

    /// Like [`info`](Self::info) with a trailing newline appended.
    pub fn infoln(self, parts: &[&dyn fmt::Display]) {
        if self.enabled {
            let message = concat_line(parts);
            registry::logger().debugf(format_args!("{message}"));
        }
    }

    /// Passes `args` to the debug method unmodified.
    pub fn infof(self, args: fmt::Arguments<'_>) {
        if self.enabled {
            registry::logger().debugf(args);
        }
    }
}

impl From<Verbose> for bool {
    fn from(verbose: Verbose) -> Self {
        verbose.enabled
    }
}

/// Resolves a verbose handle for `level`.
///
/// In the default build the active logger's
/// [`debug_enabled`](crate::Logger::debug_enabled) is queried exactly once per
/// call and `level` is ignored. With the `static-verbosity` feature the handle
/// is always disabled and the logger is not consulted.
pub fn v(level: impl Into<Level>) -> Verbose {
    let level = level.into();
    Verbose::new(level, resolve_enabled())
}

#[cfg(not(feature = "static-verbosity"))]
fn resolve_enabled() -> bool {
    registry::logger().debug_enabled()
}

#[cfg(feature = "static-verbosity")]
const fn resolve_enabled() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::test_support::{Recorder, SlotGuard};
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    #[test]
    fn level_parses_flag_values() {
        assert_eq!("2".parse::<Level>(), Ok(Level(2)));
        assert_eq!(" 7\n".parse::<Level>(), Ok(Level(7)));
        assert_eq!("-1".parse::<Level>(), Ok(Level(-1)));
        assert_eq!("+4".parse::<Level>(), Ok(Level(4)));
    }

    #[test]
    fn level_rejects_empty_input() {
        assert_eq!("".parse::<Level>(), Err(ParseLevelError::Empty));
        assert_eq!("   ".parse::<Level>(), Err(ParseLevelError::Empty));
    }

    #[test]
    fn level_rejects_garbage() {
        let err = "two".parse::<Level>().unwrap_err();
        assert_eq!(
            err,
            ParseLevelError::Invalid {
                input: "two".to_owned()
            }
        );
        assert_eq!(err.to_string(), "invalid verbosity level \"two\"");
        assert!("99999999999".parse::<Level>().is_err());
    }

    #[test]
    fn level_displays_raw_value() {
        assert_eq!(Level(3).to_string(), "3");
        assert_eq!(format!("{:>3}", Level(5)), "  5");
        assert_eq!(i32::from(Level::from(9)), 9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn level_serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&Level(2)).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Level>("-3").unwrap(), Level(-3));
    }

    #[test]
    fn disabled_handle_never_touches_logger() {
        let _guard = SlotGuard::acquire();
        let recorder = Arc::new(Recorder::default());
        crate::set_logger(recorder.clone());

        let handle = Verbose::new(Level(1), false);
        handle.info(&[&"x"]);
        handle.infoln(&[&"x"]);
        handle.infof(format_args!("{}", "x"));

        assert!(recorder.lines().is_empty());
    }

    #[test]
    fn enabled_handle_routes_to_debugf() {
        let _guard = SlotGuard::acquire();
        let recorder = Arc::new(Recorder::default());
        crate::set_logger(recorder.clone());

        let handle = Verbose::new(Level(1), true);
        handle.info(&[&"a", &1]);
        handle.infoln(&[&"b"]);
        handle.infof(format_args!("{}-{}", "c", 2));

        assert_eq!(
            recorder.lines(),
            vec!["debugf: a1", "debugf: b\n", "debugf: c-2"]
        );
    }

    #[test]
    fn handle_carries_requested_level() {
        let _guard = SlotGuard::acquire();
        let handle = v(4);
        assert_eq!(handle.level(), Level(4));
        assert!(!bool::from(handle));
    }

    #[cfg(not(feature = "static-verbosity"))]
    #[test]
    fn v_queries_active_logger_on_every_call() {
        let _guard = SlotGuard::acquire();
        let recorder = Arc::new(Recorder::default());
        crate::set_logger(recorder.clone());

        assert!(!v(2).enabled());
        recorder.debug.store(true, Ordering::SeqCst);
        assert!(v(2).enabled());
        assert!(v(0).enabled());
        assert!(v(-5).enabled());
    }

    #[cfg(feature = "static-verbosity")]
    #[test]
    fn v_is_always_disabled() {
        let _guard = SlotGuard::acquire();
        let recorder = Arc::new(Recorder::with_debug(true));
        crate::set_logger(recorder.clone());

        assert!(!v(2).enabled());
        v(2).info(&[&"x"]);
        recorder.debug.store(false, Ordering::SeqCst);
        assert!(!v(0).enabled());
        assert!(recorder.lines().is_empty());
    }
}
