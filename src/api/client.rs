// ABOUTME: HTTP client for the Visa Guru consultation and payment backend
// Thin typed wrappers over one generic JSON request path; errors are always returned to the caller

use crate::api::error::ApiError;
use crate::api::types::{CheckoutRequest, CheckoutSession, HealthStatus, VerifyPaymentRequest};
use crate::config::ApiConfig;
use crate::models::ConsultationRequest;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Per-request overrides for [`ApiClient::request`]
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// UTF-8 JSON body
    pub body: Option<String>,
    /// Merged over the default `Content-Type: application/json`; these win on collision
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: HeaderMap::new(),
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// POST with `payload` serialized as the JSON body
    pub fn post_json<B: Serialize + ?Sized>(payload: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload).map_err(ApiError::Encode)?;
        Ok(Self {
            method: Method::POST,
            body: Some(body),
            headers: HeaderMap::new(),
        })
    }

    pub fn header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against `base_url` with no request timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::build(base_url.into(), None)
    }

    /// Create a client from the `[api]` config section
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::build(
            config.base_url.clone(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    fn build(base_url: String, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder =
            Client::builder().user_agent(concat!("visa-intake/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request against `{base_url}{path}` and decode the JSON response as `T`.
    ///
    /// Non-2xx responses become [`ApiError::Http`] with the server's `detail`
    /// message when one is present. The response shape is trusted, not validated.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        debug!("{} {}", options.method, url);

        let mut builder = self.client.request(options.method.clone(), &url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            // An unreadable error body still yields the status with the generic message
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response_body(status.as_u16(), &body);
            warn!("{} {} failed: {}", options.method, path, err);
            return Err(err);
        }

        let body = response.text().await?;
        info!("{} {} -> {}", options.method, path, status.as_u16());
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }

    pub async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.request("/api/health", RequestOptions::get()).await
    }

    /// Request a free preview. Accepts a partially filled request.
    pub async fn preview_consultation(
        &self,
        request: &ConsultationRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.request("/api/consultation/preview", RequestOptions::post_json(request)?)
            .await
    }

    pub async fn analyze_consultation(
        &self,
        request: &ConsultationRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.request("/api/consultation/analyze", RequestOptions::post_json(request)?)
            .await
    }

    pub async fn get_consultation(
        &self,
        consultation_id: &str,
    ) -> Result<serde_json::Value, ApiError> {
        self.request(
            &format!("/api/consultation/{consultation_id}"),
            RequestOptions::get(),
        )
        .await
    }

    pub async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, ApiError> {
        self.request("/api/payment/create-checkout", RequestOptions::post_json(request)?)
            .await
    }

    pub async fn verify_payment(&self, session_id: &str) -> Result<serde_json::Value, ApiError> {
        let body = VerifyPaymentRequest {
            session_id: session_id.to_string(),
        };
        self.request("/api/payment/verify", RequestOptions::post_json(&body)?)
            .await
    }
}
