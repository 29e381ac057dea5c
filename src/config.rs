use clap::Parser;
use std::time::Duration;

use crate::access::AccessPolicy;

// CLI argument structure, every flag can also come from the environment (or .env)
#[derive(Parser, Debug, Clone)]
#[command(name = "ical-filter-proxy")]
#[command(about = "Relay that fetches an iCal feed and drops events whose SUMMARY ends with FALSE")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    // Max requests per wall-clock minute (0 rejects everything)
    #[arg(long, env = "RATE_LIMIT", default_value_t = 60)]
    pub rate_limit: u32,

    // Upstream hosts allowed as targets (comma-separated, "*" for any)
    // Example: "neptun.example.edu,calendar.example.com"
    #[arg(short, long, env = "ALLOWED_HOSTS", default_value = "*")]
    pub allowed_hosts: String,

    // Required ending of the target URL path, empty disables the check
    #[arg(long, env = "API_SUFFIX", default_value = "")]
    pub api_suffix: String,

    // Upstream fetch timeout in seconds, unset means wait forever
    #[arg(long, env = "UPSTREAM_TIMEOUT")]
    pub upstream_timeout: Option<u64>,
}

/// Settled configuration, built once at startup and handed to `AppState::new`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rate_limit: u32,
    pub access: AccessPolicy,
    pub upstream_timeout: Option<Duration>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            port: args.port,
            rate_limit: args.rate_limit,
            access: AccessPolicy::new(&args.allowed_hosts, &args.api_suffix),
            upstream_timeout: args.upstream_timeout.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_any_host_without_timeout() {
        let args = Args::try_parse_from(["ical-filter-proxy"]).unwrap();
        let config = Config::from(args);

        assert_eq!(config.port, 8080);
        assert_eq!(config.rate_limit, 60);
        assert!(config.access.hosts().is_wildcard());
        assert!(config.upstream_timeout.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "ical-filter-proxy",
            "--port",
            "9000",
            "--rate-limit",
            "5",
            "--allowed-hosts",
            "a.example.com, B.example.com",
            "--api-suffix",
            "/export",
            "--upstream-timeout",
            "12",
        ])
        .unwrap();
        let config = Config::from(args);

        assert_eq!(config.port, 9000);
        assert_eq!(config.rate_limit, 5);
        assert!(config.access.hosts().permits("b.example.com"));
        assert!(!config.access.hosts().permits("c.example.com"));
        assert_eq!(config.upstream_timeout, Some(Duration::from_secs(12)));
    }
}
