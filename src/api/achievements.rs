// Achievements handlers module
// Single-field setters over the achievements record. Numeric setters
// reject anything that is not a non-negative integer; flag setters
// accept only the literal true/false tokens.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::{Map, Value};

use super::handlers::store_failure;
use super::params;
use super::response::{bad_request, json_response, not_found};
use super::types::CounterUpdateResponse;
use crate::config::AppState;
use crate::model::Achievements;

/// Dump the achievements record verbatim.
pub fn handle_get(state: &AppState) -> Response<Full<Bytes>> {
    match state.achievements.load() {
        Ok(record) => json_response(StatusCode::OK, &record),
        Err(e) => store_failure(&e),
    }
}

/// Dispatch a `/api/achievements/:field/:value` setter.
pub async fn handle_set(state: &AppState, field: &str, value: &str) -> Response<Full<Bytes>> {
    match field {
        "nbrSolved" => {
            set_counter(
                state,
                value,
                "Invalid number of solved quizzes",
                "Number of solved quizzes updated",
                |record, nbr| record.solved_count = nbr,
            )
            .await
        }
        "streak" => {
            set_counter(
                state,
                value,
                "Invalid number of Streaks",
                "Current Streak updated",
                Achievements::set_streak,
            )
            .await
        }
        "bestStreak" => {
            set_counter(
                state,
                value,
                "Invalid number of Streaks",
                "Best Streak updated",
                |record, nbr| record.best_streak = nbr,
            )
            .await
        }
        "nbrFails" => {
            set_counter(
                state,
                value,
                "Invalid number of Fails",
                "Fails updated",
                |record, nbr| record.failure_count = nbr,
            )
            .await
        }
        "brokenStreak" => {
            set_flag(state, value, "Broken Streak updated", "BrokenStreak", |r, b| {
                r.broken_streak = b;
            })
            .await
        }
        "earlyBird" => {
            set_flag(state, value, "EarlyBird updated", "EarlyBird", |r, b| {
                r.early_bird = b;
            })
            .await
        }
        "nightOwl" => {
            set_flag(state, value, "NightOwl updated", "NightOwl", |r, b| {
                r.night_owl = b;
            })
            .await
        }
        // The original answers for lostFragment under the
        // BrokenFragment key with a "Broken Fragment" message; the
        // client parses exactly that, so the mismatch stays.
        "lostFragment" => {
            set_flag(
                state,
                value,
                "Broken Fragment updated",
                "BrokenFragment",
                |r, b| r.lost_fragment = b,
            )
            .await
        }
        _ => not_found("Not found"),
    }
}

async fn set_counter(
    state: &AppState,
    raw: &str,
    invalid: &'static str,
    message: &'static str,
    apply: impl FnOnce(&mut Achievements, u64),
) -> Response<Full<Bytes>> {
    let Some(nbr) = params::parse_count(raw) else {
        return bad_request(invalid);
    };

    let _guard = state.write_lock.lock().await;
    let mut record = match state.achievements.load() {
        Ok(r) => r,
        Err(e) => return store_failure(&e),
    };
    apply(&mut record, nbr);
    if let Err(e) = state.achievements.save(&record) {
        return store_failure(&e);
    }

    json_response(StatusCode::OK, &CounterUpdateResponse { message, value: nbr })
}

async fn set_flag(
    state: &AppState,
    raw: &str,
    message: &'static str,
    response_key: &'static str,
    apply: impl FnOnce(&mut Achievements, bool),
) -> Response<Full<Bytes>> {
    let Some(status) = params::parse_flag(raw) else {
        return bad_request("Invalid status value");
    };

    let _guard = state.write_lock.lock().await;
    let mut record = match state.achievements.load() {
        Ok(r) => r,
        Err(e) => return store_failure(&e),
    };
    apply(&mut record, status);
    if let Err(e) = state.achievements.save(&record) {
        return store_failure(&e);
    }

    // Response key varies per endpoint, so the body is assembled by hand.
    let mut body = Map::new();
    body.insert("message".to_string(), Value::from(message));
    body.insert(response_key.to_string(), Value::from(status));
    json_response(StatusCode::OK, &Value::Object(body))
}
