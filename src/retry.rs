//! Retry decision and backoff computation.
//!
//! Both are pure functions so they can be exercised without a server:
//!
//! - [`should_retry`] decides whether an attempt gets another go.
//! - [`backoff`] picks the wait before that next attempt.
//!
//! Rate-limited responses (429) honour `Retry-After` in whole seconds and fall
//! back to [`DEFAULT_RATE_LIMIT_WAIT`]. Server errors (5xx) use a linear
//! backoff with jitter scaled by the attempt number.

use std::time::Duration;

use rand::Rng;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;

use crate::context::Context;

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Default lower bound of the jitter window.
pub const DEFAULT_WAIT_MIN: Duration = Duration::from_millis(500);

/// Default upper bound of the jitter window.
pub const DEFAULT_WAIT_MAX: Duration = Duration::from_secs(1);

/// Wait used for a 429 without a usable `Retry-After` header.
pub const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// Retry parameters for one client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
    /// Lower bound of the jitter window for server errors.
    pub wait_min: Duration,
    /// Upper bound of the jitter window for server errors.
    pub wait_max: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            wait_min: DEFAULT_WAIT_MIN,
            wait_max: DEFAULT_WAIT_MAX,
        }
    }
}

impl RetryPolicy {
    /// Creates the default policy: 5 retries, jitter between 500ms and 1s.
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Sets the number of retries after the first attempt.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the jitter window used for server errors.
    pub fn with_wait(mut self, min: Duration, max: Duration) -> Self {
        self.wait_min = min;
        self.wait_max = max;
        self
    }

    /// Total number of requests one call may issue.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

/// Decides whether an attempt should be retried.
///
/// `status` is `None` when the attempt failed at the transport level, which is
/// never retried. A done context is never retried either. Otherwise only 429
/// and 5xx qualify.
pub fn should_retry(status: Option<StatusCode>, ctx: &Context) -> bool {
    let Some(status) = status else {
        return false;
    };
    if ctx.err().is_some() {
        return false;
    }
    is_transient(status)
}

/// 429 or any 5xx.
pub fn is_transient(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Computes the wait before the next attempt.
///
/// `attempt` is zero-based: the wait after the first failed request is
/// `backoff(policy, 0, ..)`.
pub fn backoff(policy: &RetryPolicy, attempt: u32, status: StatusCode, headers: &HeaderMap) -> Duration {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return retry_after(headers).unwrap_or(DEFAULT_RATE_LIMIT_WAIT);
    }
    let fraction = rand::thread_rng().gen::<f64>();
    linear_jitter(policy.wait_min, policy.wait_max, attempt, fraction)
}

/// Parses `Retry-After` as a whole number of seconds.
///
/// HTTP-date values and garbage both yield `None`.
pub fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Linear backoff with jitter.
///
/// Returns `(min + fraction * (max - min)) * (attempt + 1)`, or
/// `min * (attempt + 1)` when the window is empty. `fraction` is clamped to
/// `[0, 1)`.
pub fn linear_jitter(min: Duration, max: Duration, attempt: u32, fraction: f64) -> Duration {
    let scale = attempt.saturating_add(1);
    if max <= min {
        return min.saturating_mul(scale);
    }
    let fraction = fraction.clamp(0.0, 1.0 - f64::EPSILON);
    // Truncate so the jitter never rounds up to the full window.
    let jitter = Duration::from_nanos(((max - min).as_nanos() as f64 * fraction) as u64);
    (min + jitter).saturating_mul(scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers_with_retry_after(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.max_attempts(), 6);
        assert_eq!(policy.wait_min, Duration::from_millis(500));
        assert_eq!(policy.wait_max, Duration::from_secs(1));
    }

    #[test]
    fn test_should_retry_rate_limit_and_server_errors() {
        let ctx = Context::background();
        assert!(should_retry(Some(StatusCode::TOO_MANY_REQUESTS), &ctx));
        assert!(should_retry(Some(StatusCode::INTERNAL_SERVER_ERROR), &ctx));
        assert!(should_retry(Some(StatusCode::BAD_GATEWAY), &ctx));
        assert!(should_retry(Some(StatusCode::SERVICE_UNAVAILABLE), &ctx));
    }

    #[test]
    fn test_should_not_retry_client_errors_or_success() {
        let ctx = Context::background();
        assert!(!should_retry(Some(StatusCode::OK), &ctx));
        assert!(!should_retry(Some(StatusCode::NO_CONTENT), &ctx));
        assert!(!should_retry(Some(StatusCode::BAD_REQUEST), &ctx));
        assert!(!should_retry(Some(StatusCode::UNAUTHORIZED), &ctx));
        assert!(!should_retry(Some(StatusCode::NOT_FOUND), &ctx));
    }

    #[test]
    fn test_should_not_retry_transport_error() {
        assert!(!should_retry(None, &Context::background()));
    }

    #[test]
    fn test_should_not_retry_cancelled_context() {
        let (ctx, handle) = Context::background().with_cancel();
        handle.cancel();
        assert!(!should_retry(Some(StatusCode::SERVICE_UNAVAILABLE), &ctx));
    }

    #[test]
    fn test_backoff_uses_retry_after_seconds() {
        let policy = RetryPolicy::default();
        let headers = headers_with_retry_after("5");
        let delay = backoff(&policy, 0, StatusCode::TOO_MANY_REQUESTS, &headers);
        assert_eq!(delay, Duration::from_secs(5));
    }

    #[test]
    fn test_backoff_rate_limit_without_header_waits_a_minute() {
        let policy = RetryPolicy::default();
        let delay = backoff(&policy, 3, StatusCode::TOO_MANY_REQUESTS, &HeaderMap::new());
        assert_eq!(delay, Duration::from_secs(60));
    }

    #[test]
    fn test_backoff_rate_limit_unparsable_header_waits_a_minute() {
        let policy = RetryPolicy::default();
        let headers = headers_with_retry_after("Wed, 21 Oct 2015 07:28:00 GMT");
        let delay = backoff(&policy, 0, StatusCode::TOO_MANY_REQUESTS, &headers);
        assert_eq!(delay, Duration::from_secs(60));
    }

    #[test]
    fn test_backoff_server_error_ignores_retry_after() {
        let policy = RetryPolicy::default();
        let headers = headers_with_retry_after("30");
        let delay = backoff(&policy, 0, StatusCode::SERVICE_UNAVAILABLE, &headers);
        assert!(delay >= Duration::from_millis(500));
        assert!(delay < Duration::from_secs(1));
    }

    #[test]
    fn test_backoff_server_error_scales_with_attempt() {
        let policy = RetryPolicy::default();
        let delay = backoff(&policy, 2, StatusCode::INTERNAL_SERVER_ERROR, &HeaderMap::new());
        assert!(delay >= Duration::from_millis(1500));
        assert!(delay < Duration::from_secs(3));
    }

    #[test]
    fn test_linear_jitter_bounds() {
        let min = Duration::from_millis(500);
        let max = Duration::from_secs(1);
        assert_eq!(linear_jitter(min, max, 0, 0.0), Duration::from_millis(500));
        assert_eq!(linear_jitter(min, max, 0, 0.5), Duration::from_millis(750));
        assert_eq!(linear_jitter(min, max, 1, 0.0), Duration::from_secs(1));
        assert_eq!(linear_jitter(min, max, 1, 0.5), Duration::from_millis(1500));
        assert!(linear_jitter(min, max, 0, 1.0) < max);
    }

    #[test]
    fn test_linear_jitter_near_one_stays_below_max() {
        let min = Duration::from_millis(500);
        let max = Duration::from_secs(1);
        for fraction in [1.0 - f64::EPSILON, 0.999_999_999_9, 0.999_999_999] {
            assert!(linear_jitter(min, max, 0, fraction) < max, "{fraction}");
            assert!(linear_jitter(min, max, 2, fraction) < max * 3, "{fraction}");
        }
    }

    #[test]
    fn test_linear_jitter_empty_window() {
        let min = Duration::from_millis(200);
        assert_eq!(linear_jitter(min, min, 0, 0.9), Duration::from_millis(200));
        assert_eq!(linear_jitter(min, min, 4, 0.9), Duration::from_secs(1));
        assert_eq!(
            linear_jitter(min, Duration::from_millis(100), 1, 0.3),
            Duration::from_millis(400)
        );
    }

    #[test]
    fn test_retry_after_parsing() {
        assert_eq!(retry_after(&headers_with_retry_after("0")), Some(Duration::ZERO));
        assert_eq!(retry_after(&headers_with_retry_after(" 12 ")), Some(Duration::from_secs(12)));
        assert_eq!(retry_after(&headers_with_retry_after("-1")), None);
        assert_eq!(retry_after(&HeaderMap::new()), None);
    }
}
