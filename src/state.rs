use crate::access::AccessPolicy;
use crate::config::Config;
use crate::rate_limit::RateLimiter;

// app's shared state, one per server instance
pub struct AppState {
    pub client: reqwest::Client,
    pub access: AccessPolicy,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            access: config.access.clone(),
            rate_limiter: RateLimiter::new(config.rate_limit),
        })
    }
}
