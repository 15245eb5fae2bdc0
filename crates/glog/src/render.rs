//! crates/glog/src/render.rs
//! Operand concatenation shared by the non-formatting entry points.

use std::fmt::{self, Write as _};

/// Joins the display form of every operand with no separator.
pub(crate) fn concat(parts: &[&dyn fmt::Display]) -> String {
    let mut message = String::new();
    for part in parts {
        // Only a failing Display impl can error here; keep the partial text.
        let _ = write!(message, "{part}");
    }
    message
}

/// [`concat`] followed by a single trailing newline.
pub(crate) fn concat_line(parts: &[&dyn fmt::Display]) -> String {
    let mut message = concat(parts);
    message.push('\n');
    message
}
