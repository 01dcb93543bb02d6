// Model module entry
// Typed views of the persisted JSON documents.

mod achievements;
mod catalog;

pub use achievements::Achievements;
pub use catalog::{Catalog, DayEntry, LookupError, MonthEntry, SolveOutcome};
