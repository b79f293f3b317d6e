//! Configuration for the FreshService client.
//!
//! A [`Config`] is built once, validated, and then shared read-only by every
//! call made through the client.

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::FreshserviceError;
use crate::retry::RetryPolicy;

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("freshservice-rs/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for connecting to a FreshService instance.
///
/// The API key is stored but never logged; the `Debug` impl redacts it.
#[derive(Clone)]
pub struct Config {
    /// Instance subdomain, e.g. `acme` for `acme.freshservice.com`.
    domain: String,

    /// API key used as the Basic auth username.
    api_key: String,

    /// Value of the `User-Agent` header.
    pub user_agent: String,

    /// Retry parameters for 429 and 5xx responses.
    pub retry: RetryPolicy,

    /// Timeout for a single request attempt.
    pub timeout: Duration,

    /// Overrides the `https://<domain>.freshservice.com/api/v2/` base.
    base_url: Option<Url>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("domain", &self.domain)
            .field("api_key", &"[REDACTED]")
            .field("user_agent", &self.user_agent)
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .finish()
    }
}

impl Config {
    /// Creates a configuration for `domain`, authenticating with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::Config` if either value is empty or the
    /// domain is not a bare host label.
    pub fn new(domain: impl Into<String>, api_key: impl Into<String>) -> Result<Self, FreshserviceError> {
        let domain = Self::validate_domain(domain.into())?;
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(FreshserviceError::invalid_config(
                "api key was not provided but is required",
            ));
        }

        Ok(Config {
            domain,
            api_key,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry: RetryPolicy::default(),
            timeout: DEFAULT_TIMEOUT,
            base_url: None,
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FRESHSERVICE_DOMAIN` (required): instance subdomain
    /// - `FRESHSERVICE_API_KEY` (required): API key
    /// - `FRESHSERVICE_USER_AGENT` (optional): overrides the user agent
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::Config` if a required variable is missing,
    /// empty, or fails validation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, FreshserviceError> {
        let domain = Self::get_required_env("FRESHSERVICE_DOMAIN")?;
        let api_key = Self::get_required_env("FRESHSERVICE_API_KEY")?;

        let mut config = Self::new(domain, api_key)?;
        if let Ok(agent) = env::var("FRESHSERVICE_USER_AGENT") {
            if !agent.trim().is_empty() {
                config = config.with_user_agent(agent.trim());
            }
        }
        Ok(config)
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, FreshserviceError> {
        env::var(name)
            .map_err(|_| FreshserviceError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(FreshserviceError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Validates the subdomain is a single host label.
    fn validate_domain(domain: String) -> Result<String, FreshserviceError> {
        let domain = domain.trim().to_string();
        if domain.is_empty() {
            return Err(FreshserviceError::invalid_config(
                "sub-domain was not provided but is required",
            ));
        }
        if !domain
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            return Err(FreshserviceError::invalid_config(format!(
                "sub-domain {:?} must contain only letters, digits and '-'",
                domain
            )));
        }
        Ok(domain)
    }

    /// Returns the validated subdomain.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the base URL override set by [`with_base_url`](Self::with_base_url), if any.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Returns the API key.
    ///
    /// Only the transport and error sanitization should read this.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sets the `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Points the client at another base URL (a proxy or a mock server).
    ///
    /// A trailing slash is added if missing so relative paths join beneath it.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::Config` if the URL does not parse or is
    /// not http(s).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, FreshserviceError> {
        let trimmed = base_url.trim();
        let normalized = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{}/", trimmed)
        };
        let url = Url::parse(&normalized)
            .map_err(|e| FreshserviceError::invalid_config(format!("invalid base URL: {}", e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(FreshserviceError::invalid_config(
                "base URL must start with http:// or https://",
            ));
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// The URL every relative path is joined onto.
    pub fn resolved_base_url(&self) -> Result<Url, FreshserviceError> {
        if let Some(url) = &self.base_url {
            return Ok(url.clone());
        }
        let domain = Self::validate_domain(self.domain.clone())?;
        Url::parse(&format!("https://{}.freshservice.com/api/v2/", domain))
            .map_err(|e| FreshserviceError::invalid_config(format!("invalid domain: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Client;

    #[test]
    fn test_new_requires_domain() {
        let err = Config::new("", "key").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("sub-domain"));
    }

    #[test]
    fn test_new_requires_api_key() {
        let err = Config::new("acme", "   ").unwrap_err();
        assert!(err.to_string().contains("api key"));
    }

    #[test]
    fn test_new_rejects_host_in_domain() {
        assert!(Config::new("acme.freshservice.com", "key").is_err());
        assert!(Config::new("acme/evil", "key").is_err());
    }

    #[test]
    fn test_new_trims_domain() {
        let config = Config::new("  acme ", "key").unwrap();
        assert_eq!(config.domain, "acme");
    }

    #[test]
    fn test_defaults() {
        let config = Config::new("acme", "key").unwrap();
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.retry, RetryPolicy::default());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_resolved_base_url() {
        let config = Config::new("acme", "key").unwrap();
        assert_eq!(
            config.resolved_base_url().unwrap().as_str(),
            "https://acme.freshservice.com/api/v2/"
        );
    }

    #[test]
    fn test_resolved_base_url_rejects_tampered_domain() {
        let mut config = Config::new("acme", "key").unwrap();
        config.domain = "evil.example.com/x?".to_string();
        let err = config.resolved_base_url().unwrap_err();
        assert!(err.is_config());
        assert!(Client::new(&config).is_err());
    }

    #[test]
    fn test_getters_expose_validated_values() {
        let config = Config::new(" acme ", "key").unwrap();
        assert_eq!(config.domain(), "acme");
        assert!(config.base_url().is_none());

        let config = config.with_base_url("http://127.0.0.1:8080/api/v2").unwrap();
        assert_eq!(config.base_url().map(Url::as_str), Some("http://127.0.0.1:8080/api/v2/"));
    }

    #[test]
    fn test_with_base_url_adds_trailing_slash() {
        let config = Config::new("acme", "key")
            .unwrap()
            .with_base_url("http://127.0.0.1:8080/api/v2")
            .unwrap();
        assert_eq!(
            config.resolved_base_url().unwrap().as_str(),
            "http://127.0.0.1:8080/api/v2/"
        );
    }

    #[test]
    fn test_with_base_url_requires_http() {
        let result = Config::new("acme", "key").unwrap().with_base_url("ftp://example.com");
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::new("acme", "super_secret").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super_secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
