// Achievements document module
// Typed view of achievements.json: gamification counters and badge
// flags. The JSON key spellings are the wire and file contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Achievements {
    #[serde(rename = "nbrSolved", default)]
    pub solved_count: u64,
    #[serde(rename = "Streak", default)]
    pub streak: u64,
    /// High-water mark of `streak`, raised opportunistically.
    #[serde(rename = "BestStreak", default)]
    pub best_streak: u64,
    #[serde(rename = "nbrFailures", default)]
    pub failure_count: u64,
    #[serde(rename = "BrokenStreak", default)]
    pub broken_streak: bool,
    #[serde(rename = "EarlyBird", default)]
    pub early_bird: bool,
    #[serde(rename = "NightOwl", default)]
    pub night_owl: bool,
    #[serde(rename = "lostFragment", default)]
    pub lost_fragment: bool,
    /// Fields the API round-trips untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Achievements {
    /// Bump the solved counter; called once per newly solved day.
    pub fn record_solved(&mut self) {
        self.solved_count = self.solved_count.saturating_add(1);
    }

    /// Assign the current streak, raising the best streak when
    /// exceeded and flagging a broken streak on zero.
    pub fn set_streak(&mut self, nbr: u64) {
        self.streak = nbr;
        if nbr > self.best_streak {
            self.best_streak = nbr;
        }
        if nbr == 0 {
            self.broken_streak = true;
        }
    }
}

// Counters are u64, so negatives are rejected at parse time; nothing
// further to check structurally.
impl Validate for Achievements {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
