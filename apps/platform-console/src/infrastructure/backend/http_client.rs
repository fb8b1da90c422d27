//! HTTP client wrapper for the platform backend.

use std::time::Instant;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::api_types::ErrorResponse;
use super::config::ApiConfig;
use super::error::ApiError;
use crate::domain::session::Session;

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const APPLICATION_JSON: &str = "application/json";

/// HTTP client for the platform backend.
///
/// Holds a read-only copy of the session token taken at construction.
#[derive(Clone)]
pub struct PlatformHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for PlatformHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformHttpClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl PlatformHttpClient {
    /// Create a client for `config`, authenticating as `session` when asked to.
    pub fn new(config: &ApiConfig, session: &Session) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            token: session.token().map(str::to_string),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request with query parameters.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        include_auth: bool,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path, None)?;
        self.request(Method::GET, url, query, None::<&()>, None, include_auth)
            .await
    }

    /// Make a POST request with an optional JSON body.
    #[allow(clippy::future_not_send)]
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        include_auth: bool,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path, None)?;
        self.request(Method::POST, url, &[], body, None, include_auth)
            .await
    }

    /// Make a multipart POST request.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
        include_auth: bool,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path, None)?;
        self.request(Method::POST, url, &[], None::<&()>, Some(form), include_auth)
            .await
    }

    /// Make a DELETE request to `path/segment`; `segment` is percent-encoded.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        segment: &str,
        include_auth: bool,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path, Some(segment))?;
        self.request(Method::DELETE, url, &[], None::<&()>, None, include_auth)
            .await
    }

    /// Absolute URL for `path`, with `segment` appended as one path segment.
    pub fn endpoint(&self, path: &str, segment: Option<&str>) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))?;
        if let Some(segment) = segment {
            url.path_segments_mut()
                .map_err(|()| ApiError::InvalidUrl(format!("{path}: not a hierarchical URL")))?
                .pop_if_empty()
                .push(segment);
        }
        Ok(url)
    }

    /// Headers for one request.
    ///
    /// `Accept` is always JSON. `Content-Type` is JSON unless the body is
    /// multipart, where reqwest supplies the boundary. The bearer token is
    /// attached only when asked for and present.
    fn headers(&self, include_auth: bool, multipart: bool, request_id: &Uuid) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        if !multipart {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }
        if include_auth && let Some(token) = &self.token {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    tracing::warn!("stored token is not a valid header value; sending without it");
                }
            }
        }
        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            headers.insert(REQUEST_ID_HEADER, value);
        }
        headers
    }

    /// Internal request implementation. No retries.
    #[allow(clippy::future_not_send)]
    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        query: &[(&str, String)],
        json: Option<&B>,
        multipart: Option<Form>,
        include_auth: bool,
    ) -> Result<T, ApiError> {
        let url_path = url.path().to_owned();
        let path = url_path.as_str();
        let request_id = Uuid::new_v4();
        let headers = self.headers(include_auth, multipart.is_some(), &request_id);

        let mut request = self.client.request(method.clone(), url).headers(headers);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(form) = multipart {
            request = request.multipart(form);
        } else if let Some(body) = json {
            let encoded =
                serde_json::to_vec(body).map_err(|e| ApiError::Request(e.to_string()))?;
            request = request.body(encoded);
        }

        tracing::debug!(
            method = %method,
            path,
            request_id = %request_id,
            "sending request"
        );
        let started = Instant::now();

        let response = request.send().await.map_err(|e| {
            tracing::warn!(
                method = %method,
                path,
                request_id = %request_id,
                error = %e,
                "request failed"
            );
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        tracing::debug!(
            method = %method,
            path,
            request_id = %request_id,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            "response received"
        );

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if status.is_success() {
            let body = if text.trim().is_empty() { "null" } else { &text };
            return serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()));
        }

        let message = error_message(&text);
        tracing::warn!(
            method = %method,
            path,
            request_id = %request_id,
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "backend returned an error"
        );
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

/// Server reason from an error body: a JSON `detail`/`message`/`error`
/// field, else the raw text, else nothing.
fn error_message(body: &str) -> Option<String> {
    let raw = body.trim();
    if raw.is_empty() {
        return None;
    }
    serde_json::from_str::<ErrorResponse>(raw)
        .ok()
        .and_then(ErrorResponse::into_message)
        .or_else(|| Some(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token: Option<&str>) -> PlatformHttpClient {
        let config = ApiConfig::new("http://localhost:9").unwrap();
        let session = Session {
            access_token: token.map(str::to_string),
            user: None,
        };
        PlatformHttpClient::new(&config, &session).unwrap()
    }

    #[test]
    fn bearer_only_when_requested_and_present() {
        let id = Uuid::new_v4();

        let with_token = client(Some("abc"));
        let headers = with_token.headers(true, false, &id);
        assert_eq!(headers[AUTHORIZATION], "Bearer abc");
        assert!(with_token.headers(false, false, &id).get(AUTHORIZATION).is_none());

        let anonymous = client(None);
        assert!(anonymous.headers(true, false, &id).get(AUTHORIZATION).is_none());
    }

    #[test]
    fn content_type_omitted_for_multipart() {
        let id = Uuid::new_v4();
        let c = client(None);

        let json = c.headers(false, false, &id);
        assert_eq!(json[ACCEPT], APPLICATION_JSON);
        assert_eq!(json[CONTENT_TYPE], APPLICATION_JSON);
        assert_eq!(json[REQUEST_ID_HEADER], id.to_string().as_str());

        let multipart = c.headers(false, true, &id);
        assert_eq!(multipart[ACCEPT], APPLICATION_JSON);
        assert!(multipart.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn error_message_extraction() {
        assert_eq!(
            error_message(r#"{"detail":"Not authenticated"}"#).as_deref(),
            Some("Not authenticated")
        );
        assert_eq!(error_message("Bad Gateway").as_deref(), Some("Bad Gateway"));
        assert_eq!(error_message("  "), None);
        assert_eq!(error_message("{}").as_deref(), Some("{}"));
    }

    #[test]
    fn endpoint_encodes_the_trailing_segment() {
        let c = client(None);
        assert_eq!(
            c.endpoint("/api/rag/files", None).unwrap().as_str(),
            "http://localhost:9/api/rag/files"
        );
        assert_eq!(
            c.endpoint("/api/rag/delete", Some("my report#1.pdf")).unwrap().as_str(),
            "http://localhost:9/api/rag/delete/my%20report%231.pdf"
        );
        assert_eq!(
            c.endpoint("/api/rag/delete", Some("a/b?.pdf")).unwrap().path(),
            "/api/rag/delete/a%2Fb%3F.pdf"
        );
        assert_eq!(
            c.endpoint("/api/rag/delete", Some("보고서.pdf")).unwrap().path(),
            "/api/rag/delete/%EB%B3%B4%EA%B3%A0%EC%84%9C.pdf"
        );
    }

    #[test]
    fn debug_redacts_token() {
        let debug = format!("{:?}", client(Some("secret")));
        assert!(!debug.contains("secret"));
    }
}
