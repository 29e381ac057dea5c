use axum::{extract::State, http::Uri};
use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::ProxyError;
use crate::filter::{count_removed, filter_events};
use crate::metrics::{EVENTS_REMOVED, FORBIDDEN_TOTAL, RATE_LIMITED_TOTAL, REQUEST_TOTAL, UPSTREAM_ERRORS};
use crate::state::AppState;
use crate::target::parse_target;
use crate::upstream::fetch;

// GET /<percent-encoded calendar URL>
pub async fn proxy_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<String, ProxyError> {
    REQUEST_TOTAL.inc();

    // keep the raw query, an unencoded target may carry its own
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let target = parse_target(path)?;

    if let Err(e) = state.access.authorize(&target) {
        FORBIDDEN_TOTAL.inc();
        return Err(e);
    }

    if !state.rate_limiter.check() {
        RATE_LIMITED_TOTAL.inc();
        return Err(ProxyError::RateLimited);
    }

    debug!(
        url = %target,
        window_count = state.rate_limiter.current_count(),
        "fetching upstream calendar"
    );
    let ical = fetch(&state.client, &target)
        .await
        .inspect_err(|e| {
            if e.is_upstream() {
                UPSTREAM_ERRORS.inc();
            }
        })?;

    let removed = count_removed(&ical);
    EVENTS_REMOVED.inc_by(removed as f64);
    // export URLs usually embed a private token, keep them out of info logs
    let host = Url::parse(&target)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default();
    info!(host = %host, removed, "served filtered calendar");

    Ok(filter_events(&ical))
}
