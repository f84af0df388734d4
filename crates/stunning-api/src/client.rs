use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::policy::{Navigator, PolicyAction, RedirectOnUnauthorized, ResponsePolicy};
use crate::token::{MemoryTokenStore, TokenStore};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Navigator that only logs; used when the caller supplies none.
struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "navigation requested");
    }
}

/// HTTP client for the studio backend.
///
/// Every request carries `Content-Type: application/json` unless it sends
/// a multipart or url-encoded body, and a bearer token whenever the token
/// store holds one.
pub struct ApiClient {
    base_url: String,
    http: Client,
    tokens: Arc<dyn TokenStore>,
    policy: Arc<dyn ResponsePolicy>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        tokens: Arc<dyn TokenStore>,
        policy: Arc<dyn ResponsePolicy>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        // Validate, but keep the caller's path prefix intact for concatenation.
        Url::parse(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http,
            tokens,
            policy,
            navigator,
        })
    }

    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Start a request with the stored token attached, if any.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "API request");
        let req = self.http.request(method, url);
        match self.tokens.load() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Apply the response policy, then turn non-2xx statuses into errors.
    pub(crate) async fn check_response(&self, resp: Response) -> Result<Response, ApiError> {
        let status = resp.status().as_u16();

        if let PolicyAction::ClearTokenAndRedirect { to } = self.policy.on_status(status) {
            tracing::info!(status, redirect = %to, "authorization rejected, clearing token");
            if let Err(e) = self.tokens.clear() {
                tracing::warn!(error = %e, "failed to clear stored token");
            }
            self.navigator.navigate(&to);
            return Err(ApiError::Unauthorized { status });
        }

        if resp.status().is_success() {
            Ok(resp)
        } else {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "studio API error");
            Err(ApiError::Api {
                status,
                message: body,
            })
        }
    }

    /// Send a request and decode its JSON response body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = req.send().await?;
        let resp = self.check_response(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Builder with in-memory token storage, the default 401 policy and a
/// logging navigator unless told otherwise.
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    tokens: Option<Arc<dyn TokenStore>>,
    policy: Option<Arc<dyn ResponsePolicy>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl ApiClientBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn tokens(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn policy(mut self, policy: Arc<dyn ResponsePolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn build(self) -> Result<ApiClient, ApiError> {
        ApiClient::new(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            self.tokens
                .unwrap_or_else(|| Arc::new(MemoryTokenStore::new())),
            self.policy
                .unwrap_or_else(|| Arc::new(RedirectOnUnauthorized::default())),
            self.navigator.unwrap_or_else(|| Arc::new(LogNavigator)),
        )
    }
}
