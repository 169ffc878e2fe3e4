//! Fixed-width rendering of the checkout history table.

use std::collections::HashMap;
use std::fmt::Write;

/// Default number of history rows shown.
pub const DEFAULT_LIMIT: usize = 10;

const NAME_WIDTH: usize = 30;
const DESC_WIDTH: usize = 40;

/// Render at most `limit` rows of the checkout history.
///
/// Returns `None` when the history is empty so callers print nothing at
/// all. Descriptions are looked up by exact branch name; absent names
/// render as an empty cell.
pub fn render(
    checkouts: &[String],
    descriptions: &HashMap<String, String>,
    limit: usize,
) -> Option<String> {
    if checkouts.is_empty() {
        return None;
    }

    let border = format!(
        "+ --- + {} + {} +",
        "-".repeat(NAME_WIDTH),
        "-".repeat(DESC_WIDTH)
    );

    let mut out = String::new();
    let _ = writeln!(out, "{border}");
    let _ = writeln!(
        out,
        "| {:^3} | {:<NAME_WIDTH$} | {:<DESC_WIDTH$} |",
        "n", "name", "description"
    );
    let _ = writeln!(out, "{border}");

    for (ordinal, name) in checkouts.iter().take(limit).enumerate() {
        let description = descriptions.get(name).map(String::as_str).unwrap_or("");
        let _ = writeln!(
            out,
            "| {:^3} | {:<NAME_WIDTH$} | {:<DESC_WIDTH$} |",
            ordinal,
            truncate(name, NAME_WIDTH),
            truncate(description, DESC_WIDTH)
        );
    }
    out.push_str(&border);

    Some(out)
}

/// Truncate by characters, not bytes, so multi-byte names never split.
fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
