#![forbid(unsafe_code)]

//! Table name listing and table schema extraction

use crate::extract::PUBLIC_MARKER;
use regex::Regex;
use std::sync::LazyLock;

/// Marker opening the Tables section inside the public block
const TABLES_MARKER: &str = "Tables: {";

/// Marker opening the Views section, which terminates the Tables section
const VIEWS_MARKER: &str = "Views: {";

// Table entries sit at the fixed 6-space nesting level of generated output.
static TABLE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s{6}([a-z_]+):\s*\{").unwrap());

/// Lists every table name in the public Tables section, sorted
///
/// Returns an empty list when any of the section markers is missing.
/// Duplicate entries are kept as-is; generated output never contains them.
pub fn list_all(content: &str) -> Vec<String> {
    let Some(section) = tables_section(content) else {
        return Vec::new();
    };

    let mut names: Vec<String> = TABLE_ENTRY
        .captures_iter(section)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();
    names.sort();
    names
}

/// Extracts the declaration block for a single table
///
/// The match starts at `<name>: {` and runs to the first subsequent line
/// closing a brace at the 6-space nesting level, which is where generated
/// output closes a table body. Matching is not anchored to identifier
/// boundaries, so a query that is the tail of a longer name can match that
/// longer entry.
pub fn extract(content: &str, name: &str) -> Option<String> {
    let pattern = format!(r"(?m){}:\s*\{{[\s\S]*?^\s{{6}}\}}", regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    re.find(content).map(|m| m.as_str().to_string())
}

/// The span between the Tables and Views markers of the public block
fn tables_section(content: &str) -> Option<&str> {
    let public_idx = content.find(PUBLIC_MARKER)?;
    let tables_idx = public_idx + content[public_idx..].find(TABLES_MARKER)?;
    let views_idx = tables_idx + content[tables_idx..].find(VIEWS_MARKER)?;
    content.get(tables_idx..views_idx)
}
