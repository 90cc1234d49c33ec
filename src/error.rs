#![forbid(unsafe_code)]

//! Error taxonomy for a single query invocation
//!
//! Every error here is terminal: it is reported once by the dispatcher and
//! the process exits non-zero. Nothing is retried.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user by the command dispatcher
#[derive(Debug, Error)]
pub enum QueryError {
    /// The declaration file was missing at the configured path and at every
    /// fallback location.
    #[error("database types file not found at {}", primary.display())]
    SourceNotFound {
        primary: PathBuf,
        searched: Vec<String>,
    },

    /// The declaration file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No table declaration matched the requested name.
    #[error("table \"{0}\" not found")]
    TableNotFound(String),

    /// No enum declaration matched the requested name.
    #[error("enum \"{0}\" not found")]
    EnumNotFound(String),

    /// Writing the report to the terminal failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl QueryError {
    /// Corrective follow-up text printed after the error message, when a
    /// next step exists that would resolve the failure.
    pub fn hint(&self) -> Option<String> {
        match self {
            QueryError::SourceNotFound { searched, .. } => {
                let mut hint = String::from("Searched paths:\n");
                for path in searched {
                    hint.push_str("  - ");
                    hint.push_str(path);
                    hint.push('\n');
                }
                hint.push_str(&format!(
                    "\nSet {} to the location of your database.types.ts file.",
                    crate::config::TYPES_PATH_ENV
                ));
                Some(hint)
            }
            QueryError::TableNotFound(_) => {
                Some("Tip: run `schemaq tables` to see all available tables".to_string())
            }
            QueryError::EnumNotFound(_) => {
                Some("Tip: run `schemaq enums` to see all available enums".to_string())
            }
            QueryError::SourceUnreadable { .. } | QueryError::Output(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_hint_lists_every_searched_path() {
        let err = QueryError::SourceNotFound {
            primary: PathBuf::from("types/database.types.ts"),
            searched: vec![
                "types/database.types.ts".to_string(),
                "src/types/database.types.ts".to_string(),
            ],
        };

        let hint = err.hint().unwrap();
        assert!(hint.contains("Searched paths:"));
        assert!(hint.contains("  - types/database.types.ts"));
        assert!(hint.contains("  - src/types/database.types.ts"));
        assert!(hint.contains("DB_TYPES_PATH"));
    }

    #[test]
    fn test_table_not_found_hint_suggests_listing() {
        let err = QueryError::TableNotFound("studnets".to_string());
        assert_eq!(
            err.hint().unwrap(),
            "Tip: run `schemaq tables` to see all available tables"
        );
    }

    #[test]
    fn test_enum_not_found_hint_suggests_listing() {
        let err = QueryError::EnumNotFound("user_rol".to_string());
        assert_eq!(
            err.hint().unwrap(),
            "Tip: run `schemaq enums` to see all available enums"
        );
    }

    #[test]
    fn test_read_failures_have_no_hint() {
        let err = QueryError::SourceUnreadable {
            path: PathBuf::from("types/database.types.ts"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_not_found_messages_name_the_query() {
        let table = QueryError::TableNotFound("students".to_string());
        assert_eq!(table.to_string(), "table \"students\" not found");

        let enum_err = QueryError::EnumNotFound("user_role".to_string());
        assert_eq!(enum_err.to_string(), "enum \"user_role\" not found");
    }
}
