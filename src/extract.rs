//! Pattern-based extraction from the declaration text
//!
//! Nothing in here parses the declaration language. Sections are sliced out
//! with substring markers and regular expressions that rely on the fixed
//! indentation of generated output; non-conforming input yields empty or
//! not-found results, never an error.

pub mod enums;
pub mod search;
pub mod tables;

pub use search::{SearchResults, search};

/// Marker opening the public schema block
pub(crate) const PUBLIC_MARKER: &str = "  public: {";
