//! Termination semantics of the fatal and exit families.
//!
//! A terminating call cannot be observed in-process, so each test re-runs
//! this test binary filtered to a single child entry point. The child installs
//! a logger that writes every delegated call to stderr, performs the call, and
//! the parent checks the exit status and what was delegated before it.

use std::env;
use std::fmt;
use std::io::Write as _;
use std::process::{Command, Output};
use std::sync::Arc;

use glog::Logger;

const CHILD_ENV: &str = "GLOG_EXIT_CODES_CHILD";

struct StderrLogger;

impl StderrLogger {
    fn emit(method: &str, args: fmt::Arguments<'_>) {
        let mut stderr = std::io::stderr().lock();
        let _ = write!(stderr, "<{method}>{args}</{method}>");
        let _ = stderr.flush();
    }
}

impl Logger for StderrLogger {
    fn debugf(&self, args: fmt::Arguments<'_>) {
        Self::emit("debugf", args);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        Self::emit("infof", args);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        Self::emit("warnf", args);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        Self::emit("errorf", args);
    }

    fn debug_enabled(&self) -> bool {
        false
    }
}

/// Runs `scenario` in a child process and returns its output.
fn run_child(scenario: &str) -> Output {
    let exe = env::current_exe().expect("test binary path");
    Command::new(exe)
        .args(["child_entry_point", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, scenario)
        .output()
        .expect("spawn child test binary")
}

fn delegated(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Entry point executed only inside the child process.
#[test]
fn child_entry_point() {
    let Ok(scenario) = env::var(CHILD_ENV) else {
        return;
    };

    glog::set_logger(Arc::new(StderrLogger));

    match scenario.as_str() {
        "fatal" => glog::fatal(&[&"I'm ", &"Batman!"]),
        "fatal_depth" => glog::fatal_depth(2, &[&"I'm Batman!"]),
        "fatalln" => glog::fatalln(&[&"I'm Batman!"]),
        "fatalf" => glog::fatalf(format_args!("{} {}", "I'm", "Batman!")),
        "fatal_macro" => glog::fatalf!("{}={}", "code", 255),
        "exit" => glog::exit(&[&"I'm ", &"Batman!"]),
        "exit_depth" => glog::exit_depth(2, &[&"I'm Batman!"]),
        "exitln" => glog::exitln(&[&"I'm Batman!"]),
        "exitf" => glog::exitf(format_args!("{} {}", "I'm", "Batman!")),
        "exit_macro" => glog::exitln!("bye"),
        other => panic!("unknown scenario {other}"),
    }
}

fn assert_terminated(scenario: &str, code: i32, message: &str) {
    let output = run_child(scenario);
    assert_eq!(
        output.status.code(),
        Some(code),
        "scenario {scenario}: stderr was {:?}",
        delegated(&output)
    );

    let stderr = delegated(&output);
    let expected = format!("<errorf>{message}</errorf>");
    assert_eq!(
        stderr.matches("<errorf>").count(),
        1,
        "scenario {scenario}: {stderr:?}"
    );
    assert!(stderr.contains(&expected), "scenario {scenario}: {stderr:?}");
    assert!(!stderr.contains("<infof>"));
    assert!(!stderr.contains("<warnf>"));
    assert!(!stderr.contains("<debugf>"));
}

#[test]
fn fatal_family_exits_with_255_after_logging_an_error() {
    assert_terminated("fatal", 255, "I'm Batman!");
    assert_terminated("fatal_depth", 255, "I'm Batman!");
    assert_terminated("fatalln", 255, "I'm Batman!\n");
    assert_terminated("fatalf", 255, "I'm Batman!");
    assert_terminated("fatal_macro", 255, "code=255");
}

#[test]
fn exit_family_exits_with_1_after_logging_an_error() {
    assert_terminated("exit", 1, "I'm Batman!");
    assert_terminated("exit_depth", 1, "I'm Batman!");
    assert_terminated("exitln", 1, "I'm Batman!\n");
    assert_terminated("exitf", 1, "I'm Batman!");
    assert_terminated("exit_macro", 1, "bye\n");
}

#[test]
fn exit_codes_are_exported() {
    assert_eq!(glog::FATAL_EXIT_CODE, 255);
    assert_eq!(glog::EXIT_EXIT_CODE, 1);
}
