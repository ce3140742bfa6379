//! Base HTTP client with shared logic

use crate::infrastructure::model::types::ModelError;
use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;

/// Decoded JSON body together with the response headers
pub struct JsonReply<T> {
    pub headers: HeaderMap,
    pub body: T,
}

/// Base HTTP client with shared functionality
#[derive(Clone)]
pub struct HttpClientBase {
    pub id: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub http: Client,
}

impl HttpClientBase {
    pub fn new(id: String, endpoint: String, api_key: Option<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!(
                    provider = id.as_str(),
                    timeout_secs = timeout.as_secs(),
                    %err,
                    "Failed to build HTTP client, falling back to defaults without timeout"
                );
                Client::new()
            });
        Self {
            id,
            endpoint,
            api_key,
            http,
        }
    }

    /// Build URL from endpoint and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Post JSON with bearer auth
    pub async fn post_with_bearer<Req, Res>(
        &self,
        url: &str,
        body: &Req,
    ) -> Result<JsonReply<Res>, ModelError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let api_key = self.require_api_key()?;
        let request = self
            .http
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(body);
        self.send(request).await
    }

    /// Post JSON with the key in a custom header plus extra static headers (Anthropic)
    pub async fn post_with_key_header<Req, Res>(
        &self,
        url: &str,
        key_header: &str,
        extra_headers: &[(&str, &str)],
        body: &Req,
    ) -> Result<JsonReply<Res>, ModelError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let api_key = self.require_api_key()?;
        let mut request = self.http.post(url).header(key_header, api_key);
        for (name, value) in extra_headers {
            request = request.header(*name, *value);
        }
        self.send(request.json(body)).await
    }

    /// Post JSON with query param auth (for Gemini)
    pub async fn post_with_query_key<Req, Res>(
        &self,
        url: &str,
        body: &Req,
    ) -> Result<JsonReply<Res>, ModelError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let api_key = self.require_api_key()?;
        let request = self.http.post(url).query(&[("key", api_key)]).json(body);
        self.send(request).await
    }

    /// Post JSON without auth (for local services like Ollama)
    pub async fn post_no_auth<Req, Res>(
        &self,
        url: &str,
        body: &Req,
    ) -> Result<JsonReply<Res>, ModelError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        self.send(self.http.post(url).json(body)).await
    }

    async fn send<Res>(&self, request: RequestBuilder) -> Result<JsonReply<Res>, ModelError>
    where
        Res: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| ModelError::network(&self.id, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::status(&self.id, status.as_u16(), body.trim()));
        }

        let headers = response.headers().clone();
        let body = response
            .json()
            .await
            .map_err(|e| ModelError::invalid_response(&self.id, e.to_string()))?;
        Ok(JsonReply { headers, body })
    }

    fn require_api_key(&self) -> Result<&str, ModelError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ModelError::missing_api_key(&self.id))
    }
}
