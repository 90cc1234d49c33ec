#![forbid(unsafe_code)]

//! Enum name listing and enum definition extraction

use crate::extract::PUBLIC_MARKER;
use regex::Regex;
use std::sync::LazyLock;

/// Marker opening the Enums section inside the public block
const ENUMS_MARKER: &str = "Enums: {";

/// Marker terminating the Enums section, when present
const COMPOSITE_MARKER: &str = "CompositeTypes:";

// Enum entries sit at the fixed 6-space nesting level of generated output.
static ENUM_ENTRY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s{6}([a-z_]+):").unwrap());

/// Lists every enum name in the public Enums section, sorted
///
/// The section runs from the Enums marker to the CompositeTypes marker, or
/// to the end of the text when that marker is absent. Returns an empty list
/// when the public or Enums marker is missing.
pub fn list_all(content: &str) -> Vec<String> {
    let Some(section) = enums_section(content) else {
        return Vec::new();
    };

    let mut names: Vec<String> = ENUM_ENTRY
        .captures_iter(section)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();
    names.sort();
    names
}

/// Extracts the definition of a single enum
///
/// Matches the union-of-literals shape `<name>: "a" | "b" | ...`, including
/// the line-wrapped form where every literal starts on its own line with a
/// leading pipe. Like table lookup, matching is not anchored to identifier
/// boundaries.
pub fn extract(content: &str, name: &str) -> Option<String> {
    let pattern = format!(
        r#"{}:\s*\|?\s*"[^"]+"(?:\s*\|\s*"[^"]+")*"#,
        regex::escape(name)
    );
    let re = Regex::new(&pattern).ok()?;
    re.find(content).map(|m| m.as_str().to_string())
}

/// The span from the Enums marker to the CompositeTypes marker or end of text
fn enums_section(content: &str) -> Option<&str> {
    let public_idx = content.find(PUBLIC_MARKER)?;
    let enums_idx = public_idx + content[public_idx..].find(ENUMS_MARKER)?;
    let end_idx = content[enums_idx..]
        .find(COMPOSITE_MARKER)
        .map_or(content.len(), |i| enums_idx + i);
    content.get(enums_idx..end_idx)
}
