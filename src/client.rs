//! HTTP transport for the FreshService API.
//!
//! [`Client`] owns the pooled HTTP connection and the validated
//! configuration. Every resource service goes through one of its primitives:
//! [`get`](Client::get), [`list`](Client::list), [`post`](Client::post),
//! [`put`](Client::put), [`delete`](Client::delete) or the raw
//! [`execute`](Client::execute).
//!
//! # Retry Logic
//!
//! Calls are retried when the server answers 429 or 5xx, up to
//! [`RetryPolicy::max_retries`](crate::retry::RetryPolicy) extra attempts:
//! - HTTP 429: wait `Retry-After` seconds, or 60s without a usable header
//! - HTTP 5xx: linear backoff with jitter between 500ms and 1s per attempt
//!
//! Transport failures and other statuses are returned immediately.
//!
//! # Security
//!
//! The API key is only ever written into the `Authorization` header, which
//! is marked sensitive. It is never logged.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE,
    STRICT_TRANSPORT_SECURITY, USER_AGENT,
};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::context::Context;
use crate::error::FreshserviceError;
use crate::retry::{self, RetryPolicy};

/// Cache directives sent with every request.
pub const CACHE_CONTROL_VALUE: &str =
    "no-store, no-cache, must-revalidate, max-age=0, post-check=0, pre-check=0";

/// HSTS directive sent with every request.
pub const STRICT_TRANSPORT_SECURITY_VALUE: &str = "max-age=31536000; includeSubDomains";

/// Password half of the Basic credential; FreshService ignores it.
pub const BASIC_AUTH_PASSWORD: &str = "X";

/// Result alias used throughout the crate.
pub type Result<T, E = FreshserviceError> = std::result::Result<T, E>;

/// A successful response: status, headers and the decoded payload.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// Status code, always within `200..=204`.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Decoded body, raw bytes, or `true` for deletes.
    pub data: T,
}

impl<T> Response<T> {
    /// Discards the metadata and returns the payload.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Transforms the payload, keeping status and headers.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            status: self.status,
            headers: self.headers,
            data: f(self.data),
        }
    }
}

struct Inner {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    user_agent: HeaderValue,
    retry: RetryPolicy,
}

/// Authenticated, retrying HTTP client for one FreshService instance.
///
/// Cloning is cheap: clones share the connection pool and configuration.
///
/// # Example
///
/// ```ignore
/// let config = Config::new("acme", api_key)?;
/// let client = Client::new(&config)?;
///
/// let tickets: Tickets = client.list("tickets", Some(&ListOptions::page(1, 30))).await?.into_data();
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
    ctx: Context,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("retry", &self.inner.retry)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::Config` for an unusable user agent or base
    /// URL, and `FreshserviceError::HttpClient` if the HTTP client fails to
    /// initialize.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FreshserviceError::HttpClient)?;

        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            FreshserviceError::invalid_config("user agent contains characters not allowed in a header")
        })?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url: config.resolved_base_url()?,
                api_key: config.api_key().to_string(),
                user_agent,
                retry: config.retry,
            }),
            ctx: Context::background(),
        })
    }

    /// Returns a clone of this client whose calls observe `ctx`.
    pub fn with_context(&self, ctx: Context) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            ctx,
        }
    }

    /// The context calls made through this client observe.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// The base every relative path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The retry policy in force.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.inner.retry
    }

    /// Returns the API key for sanitization purposes.
    ///
    /// This should ONLY be used for sanitizing error messages, never for logging.
    pub(crate) fn api_key_for_sanitization(&self) -> &str {
        &self.inner.api_key
    }

    /// GETs `path` and decodes the JSON body.
    pub async fn get<T>(&self, path: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.decode(Method::GET, path, None::<&()>).await
    }

    /// GETs `path` with `opts` encoded as the query string and decodes the JSON body.
    pub async fn list<T, Q>(&self, path: &str, opts: Option<&Q>) -> Result<Response<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.decode(Method::GET, path, opts).await
    }

    /// POSTs `body` as JSON and decodes the JSON response.
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<Response<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.decode(Method::POST, path, body).await
    }

    /// PUTs `body` as JSON and decodes the JSON response.
    pub async fn put<T, B>(&self, path: &str, body: Option<&B>) -> Result<Response<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.decode(Method::PUT, path, body).await
    }

    /// DELETEs `path`. The payload is `true` on any status in `200..=204`.
    pub async fn delete(&self, path: &str) -> Result<Response<bool>> {
        let response = self.execute(Method::DELETE, path, None::<&()>).await?;
        Ok(response.map(|_| true))
    }

    /// Sends a request and returns the body bytes verbatim.
    ///
    /// `opts` becomes the query string for GET and the JSON body for POST and
    /// PUT; it is ignored for DELETE. Any other method fails before I/O.
    pub async fn execute<Q>(&self, method: Method, path: &str, opts: Option<&Q>) -> Result<Response<Vec<u8>>>
    where
        Q: Serialize + ?Sized,
    {
        let mut request = self.build_request(method, path, opts)?;
        self.sign(&mut request)?;
        let response = self.send(request, path).await?;
        self.finish(response, path).await
    }

    async fn decode<T, Q>(&self, method: Method, path: &str, opts: Option<&Q>) -> Result<Response<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.execute(method, path, opts).await?;
        let data = serde_json::from_slice(&response.data)?;
        Ok(Response {
            status: response.status,
            headers: response.headers,
            data,
        })
    }

    /// Builds the unsigned request for one call.
    ///
    /// # Errors
    ///
    /// - `UnsupportedMethod` for anything but GET, POST, PUT, DELETE
    /// - `InvalidPath` when `path` holds a malformed percent escape
    /// - `Serialization` when the body cannot be encoded as JSON
    /// - `Encoding` when the query options cannot be encoded
    pub fn build_request<Q>(&self, method: Method, path: &str, opts: Option<&Q>) -> Result<reqwest::Request>
    where
        Q: Serialize + ?Sized,
    {
        if !matches!(method, Method::GET | Method::POST | Method::PUT | Method::DELETE) {
            return Err(FreshserviceError::UnsupportedMethod(method));
        }

        let url = resolve_url(&self.inner.base_url, path)?;
        let mut builder = self
            .inner
            .http
            .request(method.clone(), url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, CACHE_CONTROL_VALUE)
            .header(STRICT_TRANSPORT_SECURITY, STRICT_TRANSPORT_SECURITY_VALUE)
            .header(USER_AGENT, self.inner.user_agent.clone());

        if let Some(opts) = opts {
            if method == Method::GET {
                builder = builder.query(opts);
            } else if method != Method::DELETE {
                let body = serde_json::to_vec(opts)?;
                builder = builder.header(CONTENT_TYPE, "application/json").body(body);
            }
        }

        builder
            .build()
            .map_err(|e| FreshserviceError::Encoding(e.to_string()))
    }

    /// Attaches the Basic credential.
    fn sign(&self, request: &mut reqwest::Request) -> Result<()> {
        let credential = STANDARD.encode(format!("{}:{}", self.inner.api_key, BASIC_AUTH_PASSWORD));
        let mut value = HeaderValue::from_str(&format!("Basic {}", credential)).map_err(|_| {
            FreshserviceError::invalid_config("api key cannot be encoded as a Basic credential")
        })?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Sends `request`, retrying transient statuses.
    ///
    /// Returns the last response received, successful or not.
    async fn send(&self, request: reqwest::Request, path: &str) -> Result<reqwest::Response> {
        let policy = self.inner.retry;
        let method = request.method().clone();
        let mut attempt: u32 = 0;

        loop {
            if let Some(err) = self.ctx.err() {
                return Err(err);
            }
            let attempt_request = request.try_clone().ok_or_else(|| {
                FreshserviceError::invalid_config("request body cannot be replayed")
            })?;

            tracing::debug!(
                method = %method,
                path = %path,
                attempt = attempt + 1,
                max_attempts = policy.max_attempts(),
                "Making FreshService API request"
            );

            let response = tokio::select! {
                biased;
                err = self.ctx.done() => return Err(err),
                result = self.inner.http.execute(attempt_request) => result.map_err(FreshserviceError::Http)?,
            };
            let status = response.status();

            if !retry::should_retry(Some(status), &self.ctx) {
                // A transient status only fails the predicate once the context is done.
                return match self.ctx.err() {
                    Some(err) if retry::is_transient(status) => Err(err),
                    _ => Ok(response),
                };
            }

            if attempt >= policy.max_retries {
                tracing::debug!(
                    method = %method,
                    path = %path,
                    attempts = attempt + 1,
                    status = status.as_u16(),
                    "All retry attempts exhausted"
                );
                return Ok(response);
            }

            let delay = retry::backoff(&policy, attempt, status, response.headers());
            if status == StatusCode::TOO_MANY_REQUESTS {
                tracing::warn!(path = %path, delay_ms = millis(delay), "Rate limited by FreshService");
            } else {
                tracing::warn!(path = %path, status = %status, "FreshService server error");
            }
            tracing::debug!(
                method = %method,
                path = %path,
                attempt = attempt + 1,
                max_attempts = policy.max_attempts(),
                delay_ms = millis(delay),
                "Retrying after transient error"
            );
            drop(response);

            tokio::select! {
                biased;
                err = self.ctx.done() => return Err(err),
                _ = tokio::time::sleep(delay) => {}
            }
            attempt += 1;
        }
    }

    /// Reads the body and classifies the status.
    ///
    /// The context still takes priority here: if it fires before the body
    /// has been read, the context error is returned even though a complete
    /// status line and headers have arrived.
    async fn finish(&self, response: reqwest::Response, path: &str) -> Result<Response<Vec<u8>>> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = tokio::select! {
            biased;
            err = self.ctx.done() => return Err(err),
            body = response.bytes() => body.map_err(FreshserviceError::Http)?,
        };

        if !is_successful(status) {
            let err = FreshserviceError::api(
                status,
                &String::from_utf8_lossy(&body),
                self.api_key_for_sanitization(),
            );
            tracing::debug!(path = %path, status = status.as_u16(), error = %err, "FreshService request failed");
            return Err(err);
        }

        Ok(Response {
            status,
            headers,
            data: body.to_vec(),
        })
    }
}

/// Whole milliseconds in `delay`, saturating at `u64::MAX`.
fn millis(delay: std::time::Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

/// True for `200..=204`.
pub fn is_successful(status: StatusCode) -> bool {
    (200..=204).contains(&status.as_u16())
}

/// Joins a relative path onto the base URL.
///
/// The path is percent-decoded, then each segment is escaped again, so
/// `tickets/a%20b` and `tickets/a b` produce the same URL. A `?query` suffix
/// is kept as the raw query string.
pub fn resolve_url(base: &Url, path: &str) -> Result<Url> {
    let (raw_path, raw_query) = match path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path, None),
    };

    let decoded = percent_decode(raw_path).map_err(|reason| FreshserviceError::invalid_path(path, reason))?;

    let mut segments = Vec::new();
    for segment in decoded.trim_start_matches('/').split('/') {
        if segment == "." || segment == ".." {
            return Err(FreshserviceError::invalid_path(path, "dot segments are not allowed"));
        }
        segments.push(urlencoding::encode(segment).into_owned());
    }

    let mut url = base
        .join(&segments.join("/"))
        .map_err(|e| FreshserviceError::invalid_path(path, e.to_string()))?;
    match raw_query {
        Some(query) if !query.is_empty() => url.set_query(Some(query)),
        _ => url.set_query(None),
    }
    Ok(url)
}

fn percent_decode(input: &str) -> std::result::Result<String, String> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(format!("invalid percent escape at byte {}", i));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    urlencoding::decode(input)
        .map(|s| s.into_owned())
        .map_err(|_| "percent escapes do not decode to UTF-8".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListOptions;

    fn test_client() -> Client {
        let config = Config::new("acme", "test_key").unwrap();
        Client::new(&config).unwrap()
    }

    #[test]
    fn test_get_url_for_ticket() {
        let client = test_client();
        let request = client.build_request(Method::GET, "tickets/42", None::<&()>).unwrap();
        assert_eq!(*request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "https://acme.freshservice.com/api/v2/tickets/42");
        assert!(request.body().is_none());
    }

    #[test]
    fn test_standard_headers() {
        let client = test_client();
        let request = client.build_request(Method::GET, "tickets", None::<&()>).unwrap();
        let headers = request.headers();
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[CACHE_CONTROL], CACHE_CONTROL_VALUE);
        assert_eq!(headers[STRICT_TRANSPORT_SECURITY], STRICT_TRANSPORT_SECURITY_VALUE);
        assert_eq!(headers[USER_AGENT], crate::config::DEFAULT_USER_AGENT);
        assert!(headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_list_query_string() {
        let client = test_client();
        let opts = ListOptions::page(2, 50);
        let request = client.build_request(Method::GET, "tickets", Some(&opts)).unwrap();
        assert_eq!(request.url().query(), Some("page=2&per_page=50"));
    }

    #[test]
    fn test_list_zero_pagination_is_omitted() {
        let client = test_client();
        let opts = ListOptions::default();
        let request = client.build_request(Method::GET, "tickets", Some(&opts)).unwrap();
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_no_options_means_no_query() {
        let client = test_client();
        let request = client.build_request(Method::GET, "tickets", None::<&()>).unwrap();
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_post_without_body() {
        let client = test_client();
        let request = client.build_request(Method::POST, "tickets", None::<&()>).unwrap();
        assert!(request.body().is_none());
        assert!(request.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_put_with_body_sets_content_type() {
        let client = test_client();
        let body = serde_json::json!({"subject": "Printer on fire"});
        let request = client.build_request(Method::PUT, "tickets/3", Some(&body)).unwrap();
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        let sent = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(sent, br#"{"subject":"Printer on fire"}"#);
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_delete_ignores_options() {
        let client = test_client();
        let opts = ListOptions::page(1, 10);
        let request = client.build_request(Method::DELETE, "tickets/7", Some(&opts)).unwrap();
        assert!(request.body().is_none());
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_unsupported_method() {
        let client = test_client();
        let err = client.build_request(Method::PATCH, "tickets/7", None::<&()>).unwrap_err();
        assert!(matches!(err, FreshserviceError::UnsupportedMethod(_)));
        assert!(err.is_config());
    }

    #[test]
    fn test_sign_sets_sensitive_basic_auth() {
        let client = test_client();
        let mut request = client.build_request(Method::GET, "tickets/42", None::<&()>).unwrap();
        client.sign(&mut request).unwrap();
        let value = &request.headers()[AUTHORIZATION];
        assert_eq!(value, &format!("Basic {}", STANDARD.encode("test_key:X")));
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_encoded_and_decoded_paths_match() {
        let base = Url::parse("https://acme.freshservice.com/api/v2/").unwrap();
        let raw = resolve_url(&base, "solutions/articles/a b").unwrap();
        let encoded = resolve_url(&base, "solutions/articles/a%20b").unwrap();
        assert_eq!(raw, encoded);
        assert_eq!(raw.path(), "/api/v2/solutions/articles/a%20b");
    }

    #[test]
    fn test_leading_slash_stays_under_base() {
        let base = Url::parse("https://acme.freshservice.com/api/v2/").unwrap();
        let url = resolve_url(&base, "/tickets/1").unwrap();
        assert_eq!(url.as_str(), "https://acme.freshservice.com/api/v2/tickets/1");
    }

    #[test]
    fn test_query_suffix_is_kept() {
        let base = Url::parse("https://acme.freshservice.com/api/v2/").unwrap();
        let url = resolve_url(&base, "contracts/5?operation=approve").unwrap();
        assert_eq!(url.path(), "/api/v2/contracts/5");
        assert_eq!(url.query(), Some("operation=approve"));
    }

    #[test]
    fn test_malformed_escape_is_rejected() {
        let base = Url::parse("https://acme.freshservice.com/api/v2/").unwrap();
        for path in ["tickets/%zz", "tickets/%4", "tickets/%"] {
            let err = resolve_url(&base, path).unwrap_err();
            assert!(matches!(err, FreshserviceError::InvalidPath { .. }), "{path}");
        }
    }

    #[test]
    fn test_invalid_utf8_escape_is_rejected() {
        let base = Url::parse("https://acme.freshservice.com/api/v2/").unwrap();
        let err = resolve_url(&base, "tickets/%ff").unwrap_err();
        assert!(matches!(err, FreshserviceError::InvalidPath { .. }));
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        let base = Url::parse("https://acme.freshservice.com/api/v2/").unwrap();
        assert!(resolve_url(&base, "../v1/tickets").is_err());
        assert!(resolve_url(&base, "tickets/%2E%2E/x").is_err());
    }

    #[test]
    fn test_is_successful_range() {
        assert!(is_successful(StatusCode::OK));
        assert!(is_successful(StatusCode::CREATED));
        assert!(is_successful(StatusCode::NO_CONTENT));
        assert!(!is_successful(StatusCode::RESET_CONTENT));
        assert!(!is_successful(StatusCode::MOVED_PERMANENTLY));
        assert!(!is_successful(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(std::time::Duration::from_millis(1500)), 1500);
        assert_eq!(millis(std::time::Duration::MAX), u64::MAX);
    }

    #[tokio::test]
    async fn test_cancel_before_body_read_wins() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let config = Config::new("acme", "test_key")
            .unwrap()
            .with_base_url(&server.uri())
            .unwrap();
        let client = Client::new(&config).unwrap();
        let request = client.build_request(Method::GET, "tickets", None::<&()>).unwrap();
        let response = client.send(request, "tickets").await.unwrap();

        let (ctx, handle) = Context::background().with_cancel();
        let bound = client.with_context(ctx);
        handle.cancel();
        let err = bound.finish(response, "tickets").await.unwrap_err();
        assert!(matches!(err, FreshserviceError::Cancelled));
    }

    #[test]
    fn test_with_context_shares_inner() {
        let client = test_client();
        let (ctx, _handle) = Context::background().with_cancel();
        let bound = client.with_context(ctx);
        assert!(Arc::ptr_eq(&client.inner, &bound.inner));
    }
}
