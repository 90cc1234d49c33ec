//! Terminal presentation of extraction results

pub mod human;

pub use human::{HumanFormatter, enum_values};
