#![forbid(unsafe_code)]

//! Schemaq: quick lookups into generated database type declarations
//!
//! Schemaq answers questions like "what columns does the `students` table
//! have?" by slicing the matching fragment out of a generated
//! `database.types.ts` file, so the rest of the file never has to be opened.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
