//! Message formatters used by the tagged log calls

use std::error::Error;
use std::fmt::Write as _;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::LogResult;

/// Horizontal padding between the boundary and the widest line.
const PADDING: usize = 5;

/// Draws `message` inside a box of `boundary` characters.
///
/// Every line is centred; when a line cannot be centred exactly the extra
/// space goes to its left. All output lines have the same width.
///
/// ```text
/// **************
/// *            *
/// *     hi     *
/// *            *
/// **************
/// ```
#[must_use]
pub fn boxed(message: &str, boundary: char) -> String {
    let lines: Vec<&str> = message.split('\n').collect();
    let largest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let inner = largest + 2 * PADDING;
    let edge: String = std::iter::repeat_n(boundary, inner + 2).collect();
    let blank = format!("{boundary}{}{boundary}", " ".repeat(inner));

    let mut out = String::with_capacity((inner + 3) * (lines.len() + 4));
    let _ = writeln!(out, "{edge}");
    let _ = writeln!(out, "{blank}");
    for line in &lines {
        let diff = largest - line.chars().count();
        let right = diff / 2;
        let left = diff - right;
        let _ = writeln!(
            out,
            "{boundary}{}{line}{}{boundary}",
            " ".repeat(PADDING + left),
            " ".repeat(PADDING + right),
        );
    }
    let _ = writeln!(out, "{blank}");
    out.push_str(&edge);
    out
}

/// Re-indents a JSON document with four spaces.
pub fn pretty_json(message: &str) -> LogResult<String> {
    let value: serde_json::Value = serde_json::from_str(message)?;

    let mut buf = Vec::with_capacity(message.len() * 2);
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;

    // serde_json only writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Renders an error followed by its `source()` chain, joined by `": "`.
#[must_use]
pub fn error_chain(error: &(dyn Error + 'static)) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(out, ": {cause}");
        source = cause.source();
    }
    out
}
