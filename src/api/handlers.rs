// Quiz catalog handlers module
// Each handler loads the relevant document, mutates it in memory if
// needed, writes it back whole, and answers with pretty-printed JSON.

use chrono::Utc;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::params;
use super::response::{bad_request, json_response, not_found, server_error};
use super::types::{DateResponse, DayUpdateResponse};
use crate::config::AppState;
use crate::logger;
use crate::model::LookupError;
use crate::store::StoreError;

/// Log a store failure and answer 500 with its description.
pub(super) fn store_failure(err: &StoreError) -> Response<Full<Bytes>> {
    logger::log_error(&err.to_string());
    server_error(&err.to_string())
}

/// Today's date in the configured fixed offset, formatted YYYY-MM-DD.
pub fn handle_date(state: &AppState) -> Response<Full<Bytes>> {
    let date = Utc::now()
        .with_timezone(&state.utc_offset)
        .format("%Y-%m-%d")
        .to_string();
    json_response(StatusCode::OK, &DateResponse { date })
}

/// Dump the leaked document verbatim.
pub fn handle_leaked(state: &AppState) -> Response<Full<Bytes>> {
    match state.leaked.load() {
        Ok(doc) => json_response(StatusCode::OK, &doc),
        Err(e) => store_failure(&e),
    }
}

/// Dump the full catalog.
pub fn handle_catalog(state: &AppState) -> Response<Full<Bytes>> {
    match state.catalog.load() {
        Ok(catalog) => json_response(StatusCode::OK, &catalog),
        Err(e) => store_failure(&e),
    }
}

pub fn handle_month(state: &AppState, month: &str) -> Response<Full<Bytes>> {
    // A non-numeric segment addresses no month.
    let Some(month) = params::parse_index(month) else {
        return not_found(LookupError::MonthNotFound.message());
    };
    let catalog = match state.catalog.load() {
        Ok(c) => c,
        Err(e) => return store_failure(&e),
    };
    match catalog.month(month) {
        Some(entry) => json_response(StatusCode::OK, entry),
        None => not_found(LookupError::MonthNotFound.message()),
    }
}

pub fn handle_day(state: &AppState, month: &str, day: &str) -> Response<Full<Bytes>> {
    let Some(month) = params::parse_index(month) else {
        return not_found(LookupError::MonthNotFound.message());
    };
    let Some(day) = params::parse_index(day) else {
        return not_found(LookupError::DayNotFound.message());
    };
    let catalog = match state.catalog.load() {
        Ok(c) => c,
        Err(e) => return store_failure(&e),
    };
    let Some(entry) = catalog.month(month) else {
        return not_found(LookupError::MonthNotFound.message());
    };
    match entry.day(day) {
        Some(day_entry) => json_response(StatusCode::OK, day_entry),
        None => not_found(LookupError::DayNotFound.message()),
    }
}

/// Mark a day solved. A newly solved day also bumps the achievements
/// counter; the two writes happen in that order under the write lock.
/// A crash between them leaves the documents inconsistent, an accepted
/// window for this single-user service.
pub async fn handle_solve(
    state: &AppState,
    month: &str,
    day: &str,
    year: &str,
) -> Response<Full<Bytes>> {
    let Some(month) = params::parse_index(month) else {
        return not_found(LookupError::MonthNotFound.message());
    };
    let Some(day) = params::parse_index(day) else {
        return not_found(LookupError::DayNotFound.message());
    };
    let Some(year) = params::parse_year(year) else {
        return bad_request("Invalid year");
    };

    let _guard = state.write_lock.lock().await;

    let mut catalog = match state.catalog.load() {
        Ok(c) => c,
        Err(e) => return store_failure(&e),
    };
    let outcome = match catalog.solve_day(month, day, year) {
        Ok(o) => o,
        Err(e) => return not_found(e.message()),
    };

    if outcome.newly_solved {
        let mut record = match state.achievements.load() {
            Ok(r) => r,
            Err(e) => return store_failure(&e),
        };
        record.record_solved();
        if let Err(e) = state.achievements.save(&record) {
            return store_failure(&e);
        }
    }

    if let Err(e) = state.catalog.save(&catalog) {
        return store_failure(&e);
    }

    json_response(
        StatusCode::OK,
        &DayUpdateResponse {
            message: "Quiz marked as solved",
            day_data: outcome.day,
        },
    )
}

/// Mark a day unsolved and clear its year.
pub async fn handle_unsolve(state: &AppState, month: &str, day: &str) -> Response<Full<Bytes>> {
    let Some(month) = params::parse_index(month) else {
        return not_found(LookupError::MonthNotFound.message());
    };
    let Some(day) = params::parse_index(day) else {
        return not_found(LookupError::DayNotFound.message());
    };

    let _guard = state.write_lock.lock().await;

    let mut catalog = match state.catalog.load() {
        Ok(c) => c,
        Err(e) => return store_failure(&e),
    };
    let day_entry = match catalog.unsolve_day(month, day) {
        Ok(d) => d,
        Err(e) => return not_found(e.message()),
    };

    if let Err(e) = state.catalog.save(&catalog) {
        return store_failure(&e);
    }

    json_response(
        StatusCode::OK,
        &DayUpdateResponse {
            message: "Quiz marked as unsolved",
            day_data: day_entry,
        },
    )
}
