#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use crate::extract::SearchResults;
use regex::Regex;
use std::io::{self, Write};
use std::sync::LazyLock;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Width of the ruler printed under every header
const RULER_WIDTH: usize = 60;

// Leading identifier of a declaration line, optionally nullable (`name?:`).
static KEY_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s*)(\w+\??):").unwrap());

// Double-quoted literal.
static QUOTED_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"]*""#).unwrap());

/// Human-readable output formatter
///
/// Formats extraction results for terminal display with optional colors.
/// Every result shape has a plain `format_*` method returning the exact
/// uncolored text, and a `write_*` method that prints the same text to
/// stdout with colored spans.
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// Format a table schema as plain text
    pub fn format_table_schema(&self, name: &str, schema: &str) -> String {
        let mut output = String::new();
        output.push_str(&header_text(&format!("Table: {}", name)));
        output.push_str(schema);
        output.push('\n');
        output
    }

    /// Write a table schema to stdout with syntax highlighting
    ///
    /// Identifiers before a colon are highlighted, with the `Row`, `Insert`
    /// and `Update` section keys emphasized; double-quoted literals get
    /// their own color.
    pub fn write_table_schema(&self, name: &str, schema: &str) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        write_header(&mut stdout, &format!("Table: {}", name))?;

        for line in schema.lines() {
            write_highlighted_line(&mut stdout, line)?;
        }
        writeln!(stdout)?;
        Ok(())
    }

    /// Format an enum's values as plain bulleted text
    pub fn format_enum(&self, name: &str, definition: &str) -> String {
        let mut output = String::new();
        output.push_str(&header_text(&format!("Enum: {}", name)));
        for value in enum_values(definition) {
            output.push_str(&format!("  • \"{}\"\n", value));
        }
        output.push('\n');
        output
    }

    /// Write an enum's values to stdout, one bulleted literal per line
    pub fn write_enum(&self, name: &str, definition: &str) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        write_header(&mut stdout, &format!("Enum: {}", name))?;

        for value in enum_values(definition) {
            write_bullet(&mut stdout)?;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(stdout, "\"{}\"", value)?;
            stdout.reset()?;
            writeln!(stdout)?;
        }
        writeln!(stdout)?;
        Ok(())
    }

    /// Format a name listing (tables or enums) as plain text
    ///
    /// The heading is suffixed with the name count, e.g.
    /// `Available Tables (12)`.
    pub fn format_name_list(&self, heading: &str, names: &[String]) -> String {
        let mut output = String::new();
        output.push_str(&header_text(&format!("{} ({})", heading, names.len())));
        for name in names {
            output.push_str(&format!("  • {}\n", name));
        }
        output.push('\n');
        output
    }

    /// Write a name listing to stdout
    pub fn write_name_list(&self, heading: &str, names: &[String]) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        write_header(&mut stdout, &format!("{} ({})", heading, names.len()))?;

        for name in names {
            write_bullet(&mut stdout)?;
            writeln!(stdout, "{}", name)?;
        }
        writeln!(stdout)?;
        Ok(())
    }

    /// Format search results as plain text
    ///
    /// Each non-empty list gets its own counted section; when both lists
    /// are empty a "No results found" notice is emitted instead.
    pub fn format_search_results(&self, keyword: &str, results: &SearchResults) -> String {
        let mut output = String::new();
        output.push_str(&header_text(&format!("Search Results for \"{}\"", keyword)));

        if !results.tables.is_empty() {
            output.push_str(&format!("Tables ({}):\n", results.tables.len()));
            for name in &results.tables {
                output.push_str(&format!("  • {}\n", name));
            }
            output.push('\n');
        }
        if !results.enums.is_empty() {
            output.push_str(&format!("Enums ({}):\n", results.enums.len()));
            for name in &results.enums {
                output.push_str(&format!("  • {}\n", name));
            }
            output.push('\n');
        }
        if results.is_empty() {
            output.push_str("No results found\n");
        }

        output
    }

    /// Write search results to stdout
    pub fn write_search_results(&self, keyword: &str, results: &SearchResults) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        write_header(&mut stdout, &format!("Search Results for \"{}\"", keyword))?;

        if !results.tables.is_empty() {
            write_section(&mut stdout, "Tables", &results.tables)?;
        }
        if !results.enums.is_empty() {
            write_section(&mut stdout, "Enums", &results.enums)?;
        }
        if results.is_empty() {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            writeln!(stdout, "No results found")?;
            stdout.reset()?;
        }

        Ok(())
    }
}

/// Splits an enum definition's right-hand side into its literal values
///
/// Everything after the first colon is split on `|`; each token is trimmed
/// of surrounding whitespace and stripped of quote characters, and empty
/// tokens (from wrapped unions with leading pipes) are dropped.
pub fn enum_values(definition: &str) -> Vec<String> {
    let Some((_, rhs)) = definition.split_once(':') else {
        return Vec::new();
    };

    rhs.split('|')
        .map(|token| token.trim().replace('"', ""))
        .filter(|value| !value.is_empty())
        .collect()
}

/// Plain-text header: blank line, heading, ruler, blank line
fn header_text(heading: &str) -> String {
    format!("\n{}\n{}\n\n", heading, "=".repeat(RULER_WIDTH))
}

fn write_header(stdout: &mut StandardStream, heading: &str) -> io::Result<()> {
    writeln!(stdout)?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
    writeln!(stdout, "{}", heading)?;
    stdout.reset()?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    writeln!(stdout, "{}", "=".repeat(RULER_WIDTH))?;
    stdout.reset()?;
    writeln!(stdout)?;
    Ok(())
}

fn write_bullet(stdout: &mut StandardStream) -> io::Result<()> {
    write!(stdout, "  ")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "•")?;
    stdout.reset()?;
    write!(stdout, " ")?;
    Ok(())
}

fn write_section(stdout: &mut StandardStream, label: &str, names: &[String]) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(stdout, "{} ({}):", label, names.len())?;
    stdout.reset()?;
    for name in names {
        write_bullet(stdout)?;
        writeln!(stdout, "{}", name)?;
    }
    writeln!(stdout)?;
    Ok(())
}

/// Writes one schema line with key and string-literal spans colored
fn write_highlighted_line(stdout: &mut StandardStream, line: &str) -> io::Result<()> {
    let rest = if let Some(caps) = KEY_SPAN.captures(line) {
        let indent = caps.get(1).map_or("", |m| m.as_str());
        let key = caps.get(2).map_or("", |m| m.as_str());

        write!(stdout, "{}", indent)?;
        let mut spec = ColorSpec::new();
        // The three section keys of a table body stand out from column names.
        if matches!(key, "Row" | "Insert" | "Update") {
            spec.set_fg(Some(Color::Cyan)).set_bold(true);
        } else {
            spec.set_fg(Some(Color::Green));
        }
        stdout.set_color(&spec)?;
        write!(stdout, "{}", key)?;
        stdout.reset()?;
        write!(stdout, ":")?;

        caps.get(0).map_or(line, |m| &line[m.end()..])
    } else {
        line
    };

    write_quoted_spans(stdout, rest)?;
    writeln!(stdout)?;
    Ok(())
}

/// Writes text with every double-quoted literal colored
fn write_quoted_spans(stdout: &mut StandardStream, text: &str) -> io::Result<()> {
    let mut last = 0;
    for m in QUOTED_SPAN.find_iter(text) {
        write!(stdout, "{}", &text[last..m.start()])?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(stdout, "{}", m.as_str())?;
        stdout.reset()?;
        last = m.end();
    }
    write!(stdout, "{}", &text[last..])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> HumanFormatter {
        HumanFormatter::new(ColorChoice::Never)
    }

    #[test]
    fn test_enum_values_single_line_union() {
        let values = enum_values("user_role: \"admin\" | \"teacher\" | \"student\"");
        assert_eq!(values, vec!["admin", "teacher", "student"]);
    }

    #[test]
    fn test_enum_values_wrapped_union_with_leading_pipe() {
        let definition = "order_status:\n  | \"pending\"\n  | \"shipped\"";
        let values = enum_values(definition);
        assert_eq!(values, vec!["pending", "shipped"]);
    }

    #[test]
    fn test_enum_values_trims_whitespace() {
        let values = enum_values("status:   \"a\"   |   \"b\"  ");
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_enum_values_without_colon() {
        assert!(enum_values("not a definition").is_empty());
    }

    #[test]
    fn test_enum_values_drops_empty_tokens() {
        let values = enum_values("status: \"a\" | | \"b\"");
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_format_table_schema_layout() {
        let output = formatter().format_table_schema("students", "students: {\n  Row: {}\n}");

        assert!(output.starts_with("\nTable: students\n"));
        assert!(output.contains(&"=".repeat(RULER_WIDTH)));
        assert!(output.contains("students: {"));
        assert!(output.ends_with("}\n"));
    }

    #[test]
    fn test_format_enum_bullets_every_value() {
        let output = formatter().format_enum("user_role", "user_role: \"admin\" | \"teacher\"");

        assert!(output.contains("Enum: user_role"));
        assert!(output.contains("  • \"admin\"\n"));
        assert!(output.contains("  • \"teacher\"\n"));
    }

    #[test]
    fn test_format_name_list_includes_count() {
        let names = vec!["students".to_string(), "teachers".to_string()];
        let output = formatter().format_name_list("Available Tables", &names);

        assert!(output.contains("Available Tables (2)"));
        assert!(output.contains("  • students\n"));
        assert!(output.contains("  • teachers\n"));
    }

    #[test]
    fn test_format_name_list_empty() {
        let output = formatter().format_name_list("Available Enums", &[]);
        assert!(output.contains("Available Enums (0)"));
        assert!(!output.contains("•"));
    }

    #[test]
    fn test_format_search_results_both_sections() {
        let results = SearchResults {
            tables: vec!["learning_centers".to_string()],
            enums: vec!["center_kind".to_string()],
        };
        let output = formatter().format_search_results("center", &results);

        assert!(output.contains("Search Results for \"center\""));
        assert!(output.contains("Tables (1):"));
        assert!(output.contains("  • learning_centers\n"));
        assert!(output.contains("Enums (1):"));
        assert!(output.contains("  • center_kind\n"));
        assert!(!output.contains("No results found"));
    }

    #[test]
    fn test_format_search_results_omits_empty_sections() {
        let results = SearchResults {
            tables: vec!["students".to_string()],
            enums: vec![],
        };
        let output = formatter().format_search_results("stud", &results);

        assert!(output.contains("Tables (1):"));
        assert!(!output.contains("Enums"));
    }

    #[test]
    fn test_format_search_results_empty() {
        let results = SearchResults {
            tables: vec![],
            enums: vec![],
        };
        let output = formatter().format_search_results("missing", &results);

        assert!(output.contains("Search Results for \"missing\""));
        assert!(output.contains("No results found"));
        assert!(!output.contains("Tables"));
    }

    #[test]
    fn test_write_methods_do_not_error() {
        // We can't capture stdout in unit tests, but the write paths must
        // not fail on a plain stream.
        let formatter = formatter();
        let results = SearchResults {
            tables: vec!["students".to_string()],
            enums: vec![],
        };

        let _ = formatter.write_table_schema("students", "students: {\n  Row: {}\n}");
        let _ = formatter.write_enum("user_role", "user_role: \"admin\"");
        let _ = formatter.write_name_list("Available Tables", &["students".to_string()]);
        let _ = formatter.write_search_results("stud", &results);
    }

    #[test]
    fn test_formatter_with_different_color_choices() {
        let _never = HumanFormatter::new(ColorChoice::Never);
        let _always = HumanFormatter::new(ColorChoice::Always);
        let _auto = HumanFormatter::new(ColorChoice::Auto);
    }
}
