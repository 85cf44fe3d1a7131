//! Buda REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::auth::{
    API_KEY_HEADER, CredentialsProvider, MillisNonce, NONCE_HEADER, NonceProvider,
    SIGNATURE_HEADER, sign_request,
};
use crate::error::BudaError;
use crate::rest::endpoints::BUDA_BASE_URL;

/// Default flat deadline applied to every request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Remove absent values from an ordered set of query parameters.
///
/// Entries whose value is `None` are dropped; everything else is kept,
/// including falsy-but-present values such as `"0"`, `"false"`, or the empty
/// string. Pure function; the input order is preserved.
pub fn compact(params: Vec<(&'static str, Option<String>)>) -> Vec<(&'static str, String)> {
    params
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
}

/// Append a compacted query string to a path.
///
/// Returns the path unchanged when every parameter was absent.
pub(crate) fn path_with_query(
    path: &str,
    params: Vec<(&'static str, Option<String>)>,
) -> Result<String, BudaError> {
    let query = serde_urlencoded::to_string(compact(params))
        .map_err(|e| BudaError::InvalidResponse(format!("Invalid query parameters: {e}")))?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{query}"))
    }
}

/// The Buda REST API client.
///
/// Handles authentication and response classification for all Buda REST
/// endpoints. Public endpoints work without credentials; private endpoints
/// require them and fail with [`BudaError::MissingCredentials`] before any
/// network I/O when they are absent.
///
/// # Example
///
/// ```rust,no_run
/// use buda_api_client::rest::RestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RestClient::new();
///     let ticker = client.ticker("btc-clp").await?;
///     println!("Last price: {}", ticker.last_price);
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use buda_api_client::rest::RestClient;
/// use buda_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = RestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let balances = client.balances().await?;
///     println!("Balances: {balances:?}");
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct RestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl RestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints. Use
    /// [`RestClient::builder()`] to configure credentials for private
    /// endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::new()
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(&self, path: &str) -> Result<T, BudaError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.dispatch(Method::GET, path.to_string(), None, false)
            .await
    }

    /// Make a public GET request with query parameters.
    pub(crate) async fn public_get_with_params<T>(
        &self,
        path: &str,
        params: Vec<(&'static str, Option<String>)>,
    ) -> Result<T, BudaError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.dispatch(Method::GET, path_with_query(path, params)?, None, false)
            .await
    }

    /// Make an authenticated GET request.
    pub(crate) async fn private_get<T>(&self, path: &str) -> Result<T, BudaError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.dispatch(Method::GET, path.to_string(), None, true)
            .await
    }

    /// Make an authenticated GET request with query parameters.
    pub(crate) async fn private_get_with_params<T>(
        &self,
        path: &str,
        params: Vec<(&'static str, Option<String>)>,
    ) -> Result<T, BudaError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.dispatch(Method::GET, path_with_query(path, params)?, None, true)
            .await
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn private_post<T, B>(&self, path: &str, body: &B) -> Result<T, BudaError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let body = serde_json::to_vec(body)?;
        self.dispatch(Method::POST, path.to_string(), Some(body), true)
            .await
    }

    /// Make an authenticated PUT request with a JSON body.
    pub(crate) async fn private_put<T, B>(&self, path: &str, body: &B) -> Result<T, BudaError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let body = serde_json::to_vec(body)?;
        self.dispatch(Method::PUT, path.to_string(), Some(body), true)
            .await
    }

    /// Make an authenticated DELETE request.
    pub(crate) async fn private_delete<T>(
        &self,
        path: &str,
        params: Vec<(&'static str, Option<String>)>,
    ) -> Result<T, BudaError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.dispatch(Method::DELETE, path_with_query(path, params)?, None, true)
            .await
    }

    /// Dispatch a request and classify its outcome.
    ///
    /// `path` carries the query string; the same string is signed and sent,
    /// so the signature stays valid for the exact request on the wire.
    async fn dispatch<T>(
        &self,
        method: Method,
        path: String,
        body: Option<Vec<u8>>,
        auth: bool,
    ) -> Result<T, BudaError>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(%method, %path, auth, "dispatching request");

        let url = url::Url::parse(&format!("{}{}", self.base_url, path))?;
        let mut request = self.http_client.request(method.clone(), url);

        if let Some(ref body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        if auth {
            let credentials = self
                .credentials
                .as_ref()
                .ok_or(BudaError::MissingCredentials)?;

            let nonce = self.nonce_provider.next_nonce();
            let headers = sign_request(
                credentials.get_credentials(),
                method.as_str(),
                &path,
                body.as_deref(),
                &nonce,
            )?;

            // The three auth headers win for their own names only; all other
            // caller-level defaults (User-Agent etc.) are preserved.
            request = request
                .header(API_KEY_HEADER, headers.api_key)
                .header(NONCE_HEADER, headers.nonce)
                .header(SIGNATURE_HEADER, headers.signature);
        }

        let response = request.send().await?;
        self.parse_response(&path, response).await
    }

    /// Classify a response from the Buda API.
    ///
    /// Buda signals errors through HTTP status codes: 404 is surfaced as
    /// [`BudaError::NotFound`], any other non-2xx as [`BudaError::Api`] with
    /// the status and body attached.
    async fn parse_response<T>(&self, path: &str, response: reqwest::Response) -> Result<T, BudaError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(%path, "resource not found");
            return Err(BudaError::NotFound {
                path: path.to_string(),
            });
        }

        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(%path, status = status.as_u16(), "upstream error");
            return Err(BudaError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            BudaError::InvalidResponse(format!("Failed to parse response: {e}. Body: {body}"))
        })
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`RestClient`].
pub struct RestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    timeout: Duration,
}

impl RestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BUDA_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the flat per-request deadline. Exceeding it surfaces as a
    /// transport error; there is no automatic retry.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> RestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("buda-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("buda-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(MillisNonce::new()));

        RestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

impl Default for RestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
