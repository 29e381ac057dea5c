mod health;
mod index;
mod metrics;
mod proxy;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use health::health_handler;
pub use index::index_handler;
pub use metrics::metrics_handler;
pub use proxy::proxy_handler;

// every other path is treated as an encoded target
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/{*target}", get(proxy_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
