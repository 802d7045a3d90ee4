use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "default-client")]
use arc_swap::ArcSwap;
#[cfg(feature = "default-client")]
use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::{
    admin::AdminApi, auth::AuthApi, bookmark::BookmarkApi, calendar::CalendarApi, chat::ChatApi,
    home::HomeApi, notification::NotificationApi, policy::PolicyApi, user::UserApi,
};
use crate::credentials::{CredentialProvider, MemoryCredentialStore};
use crate::outcome::{empty_body, server_error_message, RequestOutcome, SERVER_ERROR_MESSAGE};
use crate::{WelfareError, WelfareResult};

#[cfg(feature = "default-client")]
static WELFARE_CLIENT: Lazy<ArcSwap<WelfareClient>> = Lazy::new(|| {
    // Create a default client using the builder's default values.
    ArcSwap::new(Arc::new(WelfareClient::default()))
});

/// Initializes the static WelfareClient instance. This should be called once
/// at the beginning of your application.
#[cfg(feature = "default-client")]
pub fn initialize(client: WelfareClient) {
    WELFARE_CLIENT.store(Arc::new(client));
}

/// Returns a reference to the static WelfareClient instance.
///
/// This function provides a thread-safe way to access the shared client. If
/// it hasn't been previously initialized it returns a default instance
/// pointed at a local development server.
#[cfg(feature = "default-client")]
pub fn instance() -> Arc<WelfareClient> {
    WELFARE_CLIENT.load_full()
}

/// Builder for the welfare API client.
///
/// This builder provides a fluent API for creating clients with validation
/// at build time.
#[derive(Default)]
pub struct WelfareClientBuilder {
    base_url: Option<String>,
    auth_prefix: Option<String>,
    error_fields: Option<Vec<String>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
    credentials: Option<Arc<dyn CredentialProvider>>,
}

impl WelfareClientBuilder {
    /// Sets the base origin every request path is resolved against.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the path prefix identifying authentication endpoints, which are
    /// dispatched without a bearer token. Defaults to `/api/v1/auth`.
    pub fn auth_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.auth_prefix = Some(prefix.into());
        self
    }

    /// Sets the field names checked, in priority order, when extracting the
    /// server's own error text from an error body. Defaults to
    /// `["message", "error"]`.
    pub fn error_fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.error_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the HTTP request timeout. Defaults to 30 seconds. A request that
    /// exceeds it resolves to the network-error outcome.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Sets the credential provider the gateway reads bearer tokens from.
    /// Defaults to an in-memory store.
    pub fn credential_provider(mut self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.credentials = Some(provider);
        self
    }

    pub fn build(self) -> WelfareResult<WelfareClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| WelfareError::ConfigurationError("Base URL is required".into()))
            .and_then(|url_str| {
                Url::parse(&url_str).map_err(|e| {
                    WelfareError::ConfigurationError(format!("Invalid base URL: {e}"))
                })
            })?;

        let auth_prefix = self.auth_prefix.unwrap_or_else(|| "/api/v1/auth".to_string());

        let error_fields = self
            .error_fields
            .unwrap_or_else(|| vec!["message".to_string(), "error".to_string()]);
        if error_fields.is_empty() {
            return Err(WelfareError::ConfigurationError(
                "At least one error field name is required".into(),
            ));
        }

        let timeout = self.timeout.unwrap_or(Duration::from_secs(30));

        let user_agent = self
            .user_agent
            .as_deref()
            .unwrap_or(concat!("welfare-client/", env!("CARGO_PKG_VERSION")));

        let http_client = if let Some(custom_client) = self.http_client {
            custom_client
        } else {
            ReqwestClient::builder()
                .timeout(timeout)
                .user_agent(user_agent)
                .build()
                .map_err(|e| {
                    WelfareError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?
        };

        let credentials = self
            .credentials
            .unwrap_or_else(|| Arc::new(MemoryCredentialStore::new()));

        Ok(WelfareClient {
            base_url,
            auth_prefix,
            error_fields,
            timeout,
            user_agent: self.user_agent,
            http_client,
            credentials,
        })
    }
}

/// Options for a single gateway call: method, query parameters, JSON body,
/// and extra headers merged over the defaults.
#[derive(Debug, Default)]
pub struct RequestOptions {
    method: Method,
    query: Vec<(String, String)>,
    body: Option<Value>,
    body_error: Option<String>,
    headers: HeaderMap,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        RequestOptions {
            method,
            ..Default::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends a query parameter when a value is present; an absent value is
    /// omitted entirely rather than serialized as a literal placeholder.
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Sets the JSON request body. A value that cannot be encoded is
    /// remembered and surfaces as a failed outcome when the call is issued.
    pub fn body(mut self, body: impl Serialize) -> Self {
        match serde_json::to_value(&body) {
            Ok(value) => self.body = Some(value),
            Err(e) => self.body_error = Some(format!("Could not encode request body: {e}")),
        }
        self
    }

    /// Adds a header merged over the defaults, replacing them on collision.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// The gateway every remote operation flows through.
///
/// Turns a server-relative path plus [`RequestOptions`] into a normalized
/// [`RequestOutcome`]: the returned future never resolves to `Err` and never
/// panics, whatever the network does. Typed endpoint handlers
/// ([`bookmarks()`](WelfareClient::bookmarks) and friends) are thin wrappers
/// over [`issue`](WelfareClient::issue).
pub struct WelfareClient {
    base_url: Url,
    auth_prefix: String,
    error_fields: Vec<String>,
    timeout: Duration,
    user_agent: Option<String>,
    http_client: ReqwestClient,
    credentials: Arc<dyn CredentialProvider>,
}

impl Default for WelfareClient {
    fn default() -> Self {
        WelfareClient {
            base_url: Url::parse("http://localhost:8080").expect("Failed to parse default URL"),
            auth_prefix: "/api/v1/auth".to_string(),
            error_fields: vec!["message".to_string(), "error".to_string()],
            timeout: Duration::from_secs(30),
            user_agent: Some(concat!("welfare-client/", env!("CARGO_PKG_VERSION")).to_string()),
            http_client: reqwest::Client::new(),
            credentials: Arc::new(MemoryCredentialStore::new()),
        }
    }
}

impl fmt::Debug for WelfareClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WelfareClient")
            .field("base_url", &self.base_url)
            .field("auth_prefix", &self.auth_prefix)
            .field("error_fields", &self.error_fields)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl WelfareClient {
    pub fn builder() -> WelfareClientBuilder {
        WelfareClientBuilder::default()
    }

    /// Issues a single API call and normalizes whatever happens into a
    /// [`RequestOutcome`].
    ///
    /// Each call is attempted exactly once: no retry, no backoff. Paths not
    /// under the configured auth prefix carry an `Authorization: Bearer`
    /// header when the credential provider holds a token; a missing token is
    /// not an error, the request simply goes out unauthenticated.
    ///
    /// # Arguments
    ///
    /// * `path` - Server-relative route (e.g. `/api/v1/bookmarks`). Must not
    ///   contain the base origin; the client owns host and port.
    /// * `options` - Method, query parameters, body, and extra headers.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use welfare_client::{RequestOptions, WelfareClient, WelfareError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), WelfareError> {
    /// let client = WelfareClient::builder()
    ///     .base_url("http://localhost:8080")
    ///     .build()?;
    ///
    /// let outcome = client.issue("/api/v1/bookmarks", RequestOptions::get()).await;
    /// if outcome.success {
    ///     println!("bookmarks: {:?}", outcome.data);
    /// } else {
    ///     eprintln!("failed ({}): {}", outcome.status, outcome.message());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn issue(&self, path: &str, options: RequestOptions) -> RequestOutcome {
        let method = options.method.clone();

        if let Some(reason) = options.body_error {
            log::warn!("{method} {path} not dispatched: {reason}");
            return RequestOutcome::invalid_request(reason);
        }

        let mut url = match self.base_url.join(path) {
            Ok(url) => url,
            Err(e) => {
                let reason = format!("Invalid request path '{path}': {e}");
                log::warn!("{method} {path} not dispatched: {reason}");
                return RequestOutcome::invalid_request(reason);
            }
        };
        if !options.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(options.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !path.starts_with(&self.auth_prefix) {
            if let Some(token) = self.credentials.get().await {
                match HeaderValue::from_str(&format!("Bearer {}", token.expose_secret())) {
                    Ok(mut value) => {
                        value.set_sensitive(true);
                        headers.insert(AUTHORIZATION, value);
                    }
                    Err(_) => log::warn!("stored bearer token is not a valid header value"),
                }
            }
        }
        for (name, value) in options.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        let mut request = self.http_client.request(method.clone(), url).headers(headers);
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("{method} {path} failed before a response arrived: {e}");
                return RequestOutcome::network_error();
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{method} {path} response body could not be read: {e}");
                return RequestOutcome::network_error();
            }
        };

        // An empty body is normal for 204-style responses; a non-empty body
        // that is not JSON is handled like a dropped connection.
        let body: Value = if text.trim().is_empty() {
            empty_body()
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("{method} {path} returned a malformed body: {e}");
                    return RequestOutcome::network_error();
                }
            }
        };

        if !status.is_success() {
            let message = server_error_message(&body, &self.error_fields)
                .unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_string());
            log::warn!("{method} {path} failed with status {status}: {message}");
            return RequestOutcome::http_error(status.as_u16(), body, message);
        }

        log::debug!("{method} {path} succeeded with status {status}");
        RequestOutcome::ok(status.as_u16(), body)
    }

    /// The configured base origin.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured auth-endpoint path prefix.
    pub fn auth_prefix(&self) -> &str {
        &self.auth_prefix
    }

    /// The credential provider holding the bearer token.
    pub fn credentials(&self) -> &Arc<dyn CredentialProvider> {
        &self.credentials
    }

    /// Gets the authentication API interface.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Gets the home-screen API interface.
    pub fn home(&self) -> HomeApi<'_> {
        HomeApi::new(self)
    }

    /// Gets the policy API interface.
    pub fn policies(&self) -> PolicyApi<'_> {
        PolicyApi::new(self)
    }

    /// Gets the bookmark API interface.
    pub fn bookmarks(&self) -> BookmarkApi<'_> {
        BookmarkApi::new(self)
    }

    /// Gets the calendar API interface.
    pub fn calendar(&self) -> CalendarApi<'_> {
        CalendarApi::new(self)
    }

    /// Gets the notification API interface.
    pub fn notifications(&self) -> NotificationApi<'_> {
        NotificationApi::new(self)
    }

    /// Gets the chatbot API interface.
    pub fn chat(&self) -> ChatApi<'_> {
        ChatApi::new(self)
    }

    /// Gets the user-profile API interface.
    pub fn users(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    /// Gets the admin-dashboard API interface.
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }
}

impl Clone for WelfareClient {
    fn clone(&self) -> Self {
        WelfareClient {
            base_url: self.base_url.clone(),
            auth_prefix: self.auth_prefix.clone(),
            error_fields: self.error_fields.clone(),
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
            http_client: self.http_client.clone(),
            credentials: self.credentials.clone(),
        }
    }
}
