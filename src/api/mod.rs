//! Session input and report output
//!
//! Sessions are read from JSON and turned into a [`Fix`](crate::fix::Fix)
//! with its ephemeris. Worked fixes are written back out as text, JSON or CSV.

pub mod formatting;
pub mod session;

pub use formatting::{CsvFormatter, JsonFormatter, ReductionReport, SightRow, TextFormatter};
pub use session::{FixEntry, LopEntry, SightEntry, SightSession};
