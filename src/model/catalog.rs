// Quiz catalog document module
// Typed view of quiz.json: an array of months, each holding its days.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Validate;

/// The whole catalog document. Serializes as the bare JSON array the
/// on-disk file contains.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub months: Vec<MonthEntry>,
}

/// One calendar month of quizzes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthEntry {
    pub month: u32,
    #[serde(rename = "solvedOne", default)]
    pub solved_one: bool,
    #[serde(default)]
    pub days: Vec<DayEntry>,
    /// Fields the API round-trips untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One day of quiz content. Only the solve-state fields are interpreted;
/// the quiz content itself stays opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntry {
    pub day: u32,
    #[serde(default)]
    pub solved: bool,
    /// Year the day was solved in, 0 while unsolved.
    #[serde(rename = "sYear", default)]
    pub solved_year: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lookup failure level, reported distinctly in error payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    MonthNotFound,
    DayNotFound,
}

impl LookupError {
    pub const fn message(self) -> &'static str {
        match self {
            Self::MonthNotFound => "Month not found",
            Self::DayNotFound => "Day not found",
        }
    }
}

/// Result of marking a day solved.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// True when the day was unsolved before this call; callers bump the
    /// solved counter only then.
    pub newly_solved: bool,
    /// Snapshot of the day after the update.
    pub day: DayEntry,
}

impl MonthEntry {
    /// Find a day by its number.
    pub fn day(&self, day: u32) -> Option<&DayEntry> {
        self.days.iter().find(|d| d.day == day)
    }

    /// True when any day in this month is marked solved.
    pub fn has_solved_day(&self) -> bool {
        self.days.iter().any(|d| d.solved)
    }
}

impl Catalog {
    /// Find a month by its calendar number.
    pub fn month(&self, month: u32) -> Option<&MonthEntry> {
        self.months.iter().find(|m| m.month == month)
    }

    fn month_mut(&mut self, month: u32) -> Option<&mut MonthEntry> {
        self.months.iter_mut().find(|m| m.month == month)
    }

    /// Mark a day solved in the given year. Re-solving an already solved
    /// day refreshes the year without counting as newly solved.
    pub fn solve_day(
        &mut self,
        month: u32,
        day: u32,
        year: u32,
    ) -> Result<SolveOutcome, LookupError> {
        let entry = self.month_mut(month).ok_or(LookupError::MonthNotFound)?;
        let day_entry = entry
            .days
            .iter_mut()
            .find(|d| d.day == day)
            .ok_or(LookupError::DayNotFound)?;

        let newly_solved = !day_entry.solved;
        day_entry.solved = true;
        day_entry.solved_year = year;
        let day = day_entry.clone();

        entry.solved_one = true;

        Ok(SolveOutcome { newly_solved, day })
    }

    /// Mark a day unsolved and clear its year. The month keeps its
    /// solved-one flag only while another solved day remains.
    pub fn unsolve_day(&mut self, month: u32, day: u32) -> Result<DayEntry, LookupError> {
        let entry = self.month_mut(month).ok_or(LookupError::MonthNotFound)?;
        let day_entry = entry
            .days
            .iter_mut()
            .find(|d| d.day == day)
            .ok_or(LookupError::DayNotFound)?;

        day_entry.solved = false;
        day_entry.solved_year = 0;
        let snapshot = day_entry.clone();

        entry.solved_one = entry.has_solved_day();

        Ok(snapshot)
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<(), String> {
        let mut months_seen = Vec::with_capacity(self.months.len());
        for entry in &self.months {
            if !(1..=12).contains(&entry.month) {
                return Err(format!("month {} out of range 1-12", entry.month));
            }
            if months_seen.contains(&entry.month) {
                return Err(format!("duplicate month {}", entry.month));
            }
            months_seen.push(entry.month);

            let mut days_seen = Vec::with_capacity(entry.days.len());
            for day in &entry.days {
                if days_seen.contains(&day.day) {
                    return Err(format!("duplicate day {} in month {}", day.day, entry.month));
                }
                days_seen.push(day.day);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(nbr: u32, solved: bool, year: u32) -> DayEntry {
        DayEntry {
            day: nbr,
            solved,
            solved_year: year,
            extra: Map::new(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog {
            months: vec![
                MonthEntry {
                    month: 1,
                    solved_one: true,
                    days: vec![day(5, false, 0), day(6, true, 2023)],
                    extra: Map::new(),
                },
                MonthEntry {
                    month: 2,
                    solved_one: false,
                    days: vec![day(1, false, 0)],
                    extra: Map::new(),
                },
            ],
        }
    }

    #[test]
    fn test_month_lookup() {
        let catalog = sample_catalog();
        assert_eq!(catalog.month(1).map(|m| m.month), Some(1));
        assert_eq!(catalog.month(2).map(|m| m.month), Some(2));
        assert!(catalog.month(99).is_none());
    }

    #[test]
    fn test_day_lookup() {
        let catalog = sample_catalog();
        let month = catalog.month(1).unwrap();
        assert_eq!(month.day(5).map(|d| d.day), Some(5));
        assert!(month.day(31).is_none());
    }

    #[test]
    fn test_solve_marks_day_and_month() {
        let mut catalog = sample_catalog();
        let outcome = catalog.solve_day(2, 1, 2024).unwrap();
        assert!(outcome.newly_solved);
        assert!(outcome.day.solved);
        assert_eq!(outcome.day.solved_year, 2024);
        assert!(catalog.month(2).unwrap().solved_one);
    }

    #[test]
    fn test_resolve_refreshes_year_without_counting() {
        let mut catalog = sample_catalog();
        let outcome = catalog.solve_day(1, 6, 2025).unwrap();
        assert!(!outcome.newly_solved);
        assert_eq!(outcome.day.solved_year, 2025);
    }

    #[test]
    fn test_unsolve_clears_day_and_recomputes_month() {
        let mut catalog = sample_catalog();
        let snapshot = catalog.unsolve_day(1, 6).unwrap();
        assert!(!snapshot.solved);
        assert_eq!(snapshot.solved_year, 0);
        // Day 6 was the only solved day in month 1.
        assert!(!catalog.month(1).unwrap().solved_one);
    }

    #[test]
    fn test_unsolve_keeps_month_while_other_days_solved() {
        let mut catalog = sample_catalog();
        catalog.solve_day(1, 5, 2024).unwrap();
        catalog.unsolve_day(1, 6).unwrap();
        assert!(catalog.month(1).unwrap().solved_one);
    }

    #[test]
    fn test_unsolve_unsolved_day_is_noop() {
        let mut catalog = sample_catalog();
        let snapshot = catalog.unsolve_day(1, 5).unwrap();
        assert!(!snapshot.solved);
        assert_eq!(snapshot.solved_year, 0);
        // Day 6 is still solved, so the month flag stays up.
        assert!(catalog.month(1).unwrap().solved_one);
    }

    #[test]
    fn test_solve_unsolve_solve_takes_latest_year() {
        let mut catalog = sample_catalog();
        catalog.solve_day(1, 5, 2023).unwrap();
        catalog.unsolve_day(1, 5).unwrap();
        let outcome = catalog.solve_day(1, 5, 2026).unwrap();
        assert!(outcome.newly_solved);
        assert!(outcome.day.solved);
        assert_eq!(outcome.day.solved_year, 2026);
    }

    #[test]
    fn test_lookup_errors_distinguish_levels() {
        let mut catalog = sample_catalog();
        assert_eq!(
            catalog.solve_day(99, 1, 2024).unwrap_err(),
            LookupError::MonthNotFound
        );
        assert_eq!(
            catalog.solve_day(1, 99, 2024).unwrap_err(),
            LookupError::DayNotFound
        );
        assert_eq!(
            catalog.unsolve_day(99, 1).unwrap_err(),
            LookupError::MonthNotFound
        );
        assert_eq!(
            catalog.unsolve_day(1, 99).unwrap_err(),
            LookupError::DayNotFound
        );
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample_catalog().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_month_out_of_range() {
        let mut catalog = sample_catalog();
        catalog.months[0].month = 13;
        let err = catalog.validate().unwrap_err();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn test_validate_rejects_duplicate_month() {
        let mut catalog = sample_catalog();
        catalog.months[1].month = 1;
        let err = catalog.validate().unwrap_err();
        assert!(err.contains("duplicate month 1"));
    }

    #[test]
    fn test_validate_rejects_duplicate_day() {
        let mut catalog = sample_catalog();
        catalog.months[0].days[1].day = 5;
        let err = catalog.validate().unwrap_err();
        assert!(err.contains("duplicate day 5"));
    }

    #[test]
    fn test_opaque_fields_survive_mutation() {
        let json = r#"[
            {
                "month": 3,
                "solvedOne": false,
                "theme": "networks",
                "days": [
                    { "day": 2, "solved": false, "sYear": 0, "question": "What does TCP stand for?" }
                ]
            }
        ]"#;
        let mut catalog: Catalog = serde_json::from_str(json).unwrap();
        catalog.solve_day(3, 2, 2024).unwrap();

        let out = serde_json::to_string_pretty(&catalog).unwrap();
        assert!(out.contains("\"theme\": \"networks\""));
        assert!(out.contains("\"question\": \"What does TCP stand for?\""));
        assert!(out.contains("\"sYear\": 2024"));
    }
}
