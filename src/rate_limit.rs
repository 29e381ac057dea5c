use chrono::{DateTime, Utc};
use std::sync::Mutex;

// Counter for the current wall-clock minute
#[derive(Debug, Default)]
struct Window {
    minute: i64,
    count: u32,
}

/// Fixed-window limiter shared by every request: at most `limit` requests per
/// wall-clock minute, counted process-wide.
#[derive(Debug)]
pub struct RateLimiter {
    limit: u32,
    window: Mutex<Window>,
}

impl RateLimiter {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            window: Mutex::new(Window::default()),
        }
    }

    // true if the request may go ahead
    pub fn check(&self) -> bool {
        self.check_at(Utc::now())
    }

    pub fn check_at(&self, now: DateTime<Utc>) -> bool {
        let minute = now.timestamp().div_euclid(60);

        // a poisoned lock only means another request panicked mid-update,
        // the counter itself is still usable
        let mut window = self
            .window
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // new minute..? start counting again
        if window.minute != minute {
            window.minute = minute;
            window.count = 0;
        }

        // over limit
        if window.count >= self.limit {
            return false;
        }

        window.count += 1;
        true
    }

    // Requests counted in the current window
    pub fn current_count(&self) -> u32 {
        self.window
            .lock()
            .map(|w| w.count)
            .unwrap_or_else(|poisoned| poisoned.into_inner().count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn third_request_in_a_minute_is_denied() {
        let limiter = RateLimiter::new(2);
        let t = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 5).unwrap();

        assert!(limiter.check_at(t));
        assert!(limiter.check_at(t + chrono::Duration::seconds(10)));
        assert!(!limiter.check_at(t + chrono::Duration::seconds(20)));
        assert_eq!(limiter.current_count(), 2);
    }

    #[test]
    fn next_minute_starts_fresh() {
        let limiter = RateLimiter::new(2);
        let t = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 59).unwrap();

        assert!(limiter.check_at(t));
        assert!(limiter.check_at(t));
        assert!(!limiter.check_at(t));

        let next = Utc.with_ymd_and_hms(2025, 3, 20, 15, 1, 0).unwrap();
        assert!(limiter.check_at(next));
        assert_eq!(limiter.current_count(), 1);
    }

    #[test]
    fn zero_limit_denies_everything() {
        let limiter = RateLimiter::new(0);
        assert!(!limiter.check());
    }

    #[test]
    fn concurrent_checks_never_exceed_the_limit() {
        let limiter = std::sync::Arc::new(RateLimiter::new(50));
        let t = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = limiter.clone();
                std::thread::spawn(move || (0..20).filter(|_| limiter.check_at(t)).count())
            })
            .collect();
        let allowed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(allowed, 50);
    }
}
