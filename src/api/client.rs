//! Authenticated HTTP wrapper used by every resource module.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error};
use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::ApiError;
use crate::config::ApiConfig;
use crate::storage::TokenStore;

/// HTTP verbs the admin backend is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// HTTP client that attaches the stored bearer token to every request.
///
/// The token is read from the [`TokenStore`] on each call, so a token written
/// by another process is picked up without restarting. There is no refresh
/// and no retry: a 401 surfaces as [`ApiError::Http`] like any other status.
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a new client from the `[api]` configuration section
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a request with an optional JSON body and decode the response body.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let mut builder = self.client.request(method.into(), self.build_url(path));
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send(method, path, builder).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let builder = self.client.get(self.build_url(path)).query(query);
        self.send(HttpMethod::Get, path, builder).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.client.put(self.build_url(path)).json(body);
        self.send(HttpMethod::Put, path, builder).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.client.delete(self.build_url(path));
        self.send(HttpMethod::Delete, path, builder).await
    }

    async fn bearer_token(&self) -> Result<Option<String>, ApiError> {
        self.tokens
            .token()
            .await
            .map_err(|e| ApiError::Storage(e.to_string()))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let builder = match self.bearer_token().await? {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        debug!("{} {}", method, path);

        let response = builder.send().await.map_err(|e| {
            error!("Request error: {} {}: {}", method, path, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = server_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
            error!("Request error: {} {} -> {}: {}", method, path, status.as_u16(), message);
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        decode_body(&body)
    }
}

/// Extract the server's error message from a failure body.
///
/// JSON bodies carrying `message` (string or list of strings) yield that
/// message; anything else is returned verbatim.
fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => match map.get("message") {
            Some(Value::String(message)) => Some(message.clone()),
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => Some(trimmed.to_string()),
        },
        _ => Some(trimmed.to_string()),
    }
}

/// Decode a success body; an empty body decodes as JSON `null`.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body)?
    };
    Ok(serde_json::from_value(value)?)
}
