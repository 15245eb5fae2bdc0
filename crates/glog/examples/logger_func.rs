//! Installs a closure-based logger and drives every non-terminating entry point.
//!
//! Run with `cargo run -p noglog --example logger_func`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use glog::LoggerFunc;

fn main() {
    let debug = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&debug);

    let logger = LoggerFunc::new()
        .with_debug_enabled(move || flag.load(Ordering::Relaxed))
        .with_debugf(|args| println!("[DEBUG] {args}"))
        .with_infof(|args| println!("[INFO] {args}"))
        .with_warnf(|args| println!("[WARN] {args}"))
        .with_errorf(|args| println!("[ERROR] {args}"));

    glog::set_logger(Arc::new(logger));

    glog::info(&[&"I'm batman!"]);
    glog::info_depth(1, &[&"I'm batman!"]);
    glog::infoln(&[&"I'm batman!"]);
    glog::infof!("{} - {}", "I'm", "batman!");

    glog::warning(&[&"I'm batman!"]);
    glog::warning_depth(1, &[&"I'm batman!"]);
    glog::warningln(&[&"I'm batman!"]);
    glog::warningf!("{} - {}", "I'm", "batman!");

    glog::error(&[&"I'm batman!"]);
    glog::error_depth(1, &[&"I'm batman!"]);
    glog::errorln(&[&"I'm batman!"]);
    glog::errorf!("{} - {}", "I'm", "batman!");

    // Debug disabled: nothing is printed.
    glog::v(2).info(&[&"I'm batman!"]);
    glog::v(2).infoln(&[&"I'm batman!"]);
    glog::v(2).infof(format_args!("{} - {}", "I'm", "batman!"));

    debug.store(true, Ordering::Relaxed);
    glog::v(2).info(&[&"I'm batman!"]);
    glog::v(2).infoln(&[&"I'm batman!"]);
    glog::v_infof!(2, "{} - {}", "I'm", "batman!");

    glog::flush();
}
