use hyper::ext::ReasonPhrase;
use reqwest::StatusCode;
use std::time::Instant;

use crate::error::ProxyError;
use crate::metrics::UPSTREAM_LATENCY;

// GET the target and return its body as text
pub async fn fetch(client: &reqwest::Client, target: &str) -> Result<String, ProxyError> {
    let start_time = Instant::now();

    let result = client.get(target).send().await;
    UPSTREAM_LATENCY.observe(start_time.elapsed().as_secs_f64());

    let res = result.map_err(|e| ProxyError::Upstream(e.to_string()))?;

    let status = res.status();
    if status != StatusCode::OK {
        // hyper only keeps the reason phrase when it differs from the canonical one
        let reason = res
            .extensions()
            .get::<ReasonPhrase>()
            .map(|r| String::from_utf8_lossy(r.as_bytes()).into_owned())
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "Unknown".to_string());
        return Err(ProxyError::Upstream(format!(
            "HTTP Error {}: {}",
            status.as_u16(),
            reason
        )));
    }

    let bytes = res
        .bytes()
        .await
        .map_err(|e| ProxyError::Upstream(e.to_string()))?;

    String::from_utf8(bytes.to_vec()).map_err(|e| ProxyError::Unexpected(e.to_string()))
}
