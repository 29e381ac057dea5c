use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("ical_proxy_requests_total", "Total number of relay requests").unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter =
        register_counter!("ical_proxy_rate_limited_total", "Requests rejected by the rate limiter").unwrap();
    pub static ref FORBIDDEN_TOTAL: Counter =
        register_counter!("ical_proxy_forbidden_total", "Requests rejected by the allow-list").unwrap();
    pub static ref UPSTREAM_ERRORS: Counter =
        register_counter!("ical_proxy_upstream_errors_total", "Failed upstream fetches").unwrap();
    pub static ref EVENTS_REMOVED: Counter =
        register_counter!("ical_proxy_events_removed_total", "Calendar blocks dropped by the filter").unwrap();
    pub static ref UPSTREAM_LATENCY: Histogram = register_histogram!(
        "ical_proxy_upstream_latency_seconds",
        "Upstream fetch latency in seconds"
    )
    .unwrap();
}
