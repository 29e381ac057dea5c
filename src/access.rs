use reqwest::Url;
use std::collections::HashSet;

use crate::error::ProxyError;

/// Hosts that may be used as fetch targets.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    hosts: HashSet<String>,
    wildcard: bool,
}

impl AllowList {
    // Create from comma-separated hosts "a.example.com, b.example.com" or "*"
    pub fn parse(hosts_str: &str) -> Self {
        let mut list = AllowList::default();
        for host in hosts_str
            .split(',')
            .map(|s| s.trim()) // remove spaces
            .filter(|s| !s.is_empty())
        {
            if host == "*" {
                list.wildcard = true;
            } else {
                list.hosts.insert(host.to_ascii_lowercase());
            }
        }
        list
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    pub fn permits(&self, host: &str) -> bool {
        self.wildcard || self.hosts.contains(&host.to_ascii_lowercase())
    }

    pub fn describe(&self) -> String {
        if self.wildcard {
            return "*".to_string();
        }
        let mut hosts: Vec<&str> = self.hosts.iter().map(String::as_str).collect();
        hosts.sort_unstable();
        hosts.join(",")
    }
}

/// Host allow-list plus the path suffix every target must end with.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    hosts: AllowList,
    api_suffix: Option<String>,
}

impl AccessPolicy {
    pub fn new(hosts_str: &str, api_suffix: &str) -> Self {
        let api_suffix = api_suffix.trim();
        Self {
            hosts: AllowList::parse(hosts_str),
            api_suffix: (!api_suffix.is_empty()).then(|| api_suffix.to_string()),
        }
    }

    pub fn hosts(&self) -> &AllowList {
        &self.hosts
    }

    pub fn api_suffix(&self) -> Option<&str> {
        self.api_suffix.as_deref()
    }

    fn is_open(&self) -> bool {
        self.hosts.is_wildcard() && self.api_suffix.is_none()
    }

    /// Checks the decoded target against the policy.
    ///
    /// With `*` and no suffix nothing is inspected, so an unparseable target
    /// is left for the fetch to reject.
    pub fn authorize(&self, target: &str) -> Result<(), ProxyError> {
        if self.is_open() {
            return Ok(());
        }

        let url = Url::parse(target)
            .map_err(|_| ProxyError::Forbidden(format!("Target is not a valid URL: {}", target)))?;
        let host = url
            .host_str()
            .ok_or_else(|| ProxyError::Forbidden(format!("Target URL has no host: {}", target)))?;

        if !self.hosts.permits(host) {
            return Err(ProxyError::Forbidden(format!("Host not allowed: {}", host)));
        }

        if let Some(suffix) = &self.api_suffix {
            if !url.path().ends_with(suffix.as_str()) {
                return Err(ProxyError::Forbidden(format!(
                    "Endpoint not allowed: {}",
                    url.path()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX: &str = "/api/Calendar/CalendarExportFileToSyncronization";

    #[test]
    fn parses_hosts_and_wildcard() {
        let list = AllowList::parse(" Neptun.Example.edu ,, other.example.com");
        assert!(list.permits("neptun.example.edu"));
        assert!(list.permits("OTHER.example.com"));
        assert!(!list.permits("evil.example.com"));
        assert!(!list.is_wildcard());
        assert_eq!(list.describe(), "neptun.example.edu,other.example.com");

        let any = AllowList::parse("foo.com,*");
        assert!(any.permits("anything.org"));
    }

    #[test]
    fn empty_list_permits_nothing() {
        let list = AllowList::parse("");
        assert!(!list.permits("example.com"));
    }

    #[test]
    fn open_policy_allows_everything() {
        let policy = AccessPolicy::new("*", "");
        assert!(policy.authorize("https://any.example.org/cal.ics").is_ok());
        assert!(policy.authorize("not a url").is_ok());
    }

    #[test]
    fn rejects_host_outside_list() {
        let policy = AccessPolicy::new("neptun.example.edu", "");
        let err = policy
            .authorize("https://evil.example.com/cal.ics")
            .unwrap_err();
        assert_eq!(err.to_string(), "Host not allowed: evil.example.com");
    }

    #[test]
    fn requires_api_suffix() {
        let policy = AccessPolicy::new("neptun.example.edu", SUFFIX);

        let ok = format!("https://neptun.example.edu/hallgato{}?id=1", SUFFIX);
        assert!(policy.authorize(&ok).is_ok());

        let err = policy
            .authorize("https://neptun.example.edu/hallgato/api/Other")
            .unwrap_err();
        assert!(matches!(err, ProxyError::Forbidden(_)));
    }

    #[test]
    fn suffix_applies_with_wildcard_hosts() {
        let policy = AccessPolicy::new("*", ".ics");
        assert!(policy.authorize("http://127.0.0.1:9/cal.ics").is_ok());
        assert!(policy.authorize("http://127.0.0.1:9/cal.txt").is_err());
    }

    #[test]
    fn unparseable_target_is_forbidden_when_restricted() {
        let policy = AccessPolicy::new("example.com", "");
        assert!(matches!(
            policy.authorize("example.com/cal.ics"),
            Err(ProxyError::Forbidden(_))
        ));
    }
}
