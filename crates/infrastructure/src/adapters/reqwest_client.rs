//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! Every request is resolved against one fixed base URL.

use std::collections::BTreeMap;
use std::error::Error as _;
use std::time::{Duration, Instant};

use reqres_application::{HttpClient, HttpClientError};
use reqres_domain::{HttpMethod, RequestSpec, ResponseSpec};
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use url::Url;

const MAX_REDIRECTS: usize = 10;
const API_KEY_HEADER: &str = "x-api-key";

/// Settings for building a [`ReqwestHttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Root URL every request path is appended to.
    pub base_url: Url,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// Value for the `x-api-key` header, sent only when set.
    pub api_key: Option<String>,
}

/// HTTP client implementation using reqwest.
///
/// Wraps one `reqwest::Client` bound to a base URL. Dropping it releases the
/// connection pool.
pub struct ReqwestHttpClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl ReqwestHttpClient {
    /// Creates a client from settings.
    ///
    /// Default configuration:
    /// - `Accept: application/json` on every request
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "reqres-probe/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value or the
    /// client cannot be created.
    pub fn new(settings: &ClientSettings) -> Result<Self, HttpClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = &settings.api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| HttpClientError::Other(format!("invalid API key: {e}")))?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        let client = Client::builder()
            .user_agent(concat!("reqres-probe/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(settings.timeout)
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            timeout: settings.timeout,
        })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Appends the request path and query to the base URL.
    ///
    /// The base path is kept (`https://reqres.in/api` + `/users` gives
    /// `https://reqres.in/api/users`), unlike `Url::join`.
    fn resolve_url(base: &Url, request: &RequestSpec) -> Result<Url, HttpClientError> {
        let joined = format!("{}{}", base.as_str().trim_end_matches('/'), request.path);
        let mut url = Url::parse(&joined)
            .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {joined}")))?;

        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for param in &request.query {
                pairs.append_pair(&param.key, &param.value);
            }
        }
        Ok(url)
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout: Duration) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout {
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            };
        }

        let message = error_chain(error);
        let host = error
            .url()
            .and_then(Url::host_str)
            .unwrap_or("unknown")
            .to_string();

        if error.is_connect() {
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lower.contains("refused") {
                let port = error
                    .url()
                    .and_then(Url::port_or_known_default)
                    .unwrap_or(80);
                return HttpClientError::ConnectionRefused { host, port };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        if error.is_builder() || error.is_body() {
            return HttpClientError::InvalidBody(message);
        }

        HttpClientError::Other(message)
    }
}

/// Renders an error with its source chain; reqwest keeps the useful part
/// (e.g. "Connection refused") in the sources.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
        let url = Self::resolve_url(&self.base_url, request)?;
        tracing::debug!(
            method = %request.method,
            %url,
            scenario = %request.name,
            "sending request"
        );

        let start = Instant::now();

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, self.timeout))?;

        let status = response.status().as_u16();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(&e, self.timeout))?;

        let duration = start.elapsed();
        tracing::info!(
            method = %request.method,
            path = %request.path,
            status,
            elapsed_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            "response received"
        );

        Ok(ResponseSpec::new(status, headers, &body, duration))
    }
}
