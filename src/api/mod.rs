// API module entry
// Quiz/achievements REST surface over the persisted JSON documents.

mod achievements;
mod handlers;
mod params;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::logger;

/// API route handler
///
/// Dispatches to handler functions based on request method and path.
/// Every operation is a GET, mutations included; that is the contract
/// the existing client was written against.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = match method {
        Method::OPTIONS => response::options_response(),
        Method::GET | Method::HEAD => dispatch(&path, &state).await,
        _ => response::method_not_allowed(),
    };

    if state.access_log {
        logger::log_api_request(method.as_str(), &path, resp.status().as_u16());
    }

    // HEAD keeps the status and headers, drops the body.
    if method == Method::HEAD {
        let (parts, _) = resp.into_parts();
        return Ok(Response::from_parts(parts, Full::new(Bytes::new())));
    }
    Ok(resp)
}

async fn dispatch(path: &str, state: &AppState) -> Response<Full<Bytes>> {
    match params::split_segments(path).as_slice() {
        ["api", "date"] => handlers::handle_date(state),
        ["api", "leaked"] => handlers::handle_leaked(state),
        ["api", "quiz"] => handlers::handle_catalog(state),
        ["api", "quiz", month] => handlers::handle_month(state, month),
        ["api", "quiz", month, day] => handlers::handle_day(state, month, day),
        ["api", "quiz", month, day, "solve", year] => {
            handlers::handle_solve(state, month, day, year).await
        }
        ["api", "quiz", month, day, "unsolve"] => {
            handlers::handle_unsolve(state, month, day).await
        }
        ["api", "achievements"] => achievements::handle_get(state),
        ["api", "achievements", field, value] => {
            achievements::handle_set(state, field, value).await
        }
        _ => response::not_found("Not found"),
    }
}
