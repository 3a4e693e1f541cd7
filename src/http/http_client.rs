use std::time::Duration;

use log::debug;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use url::Url;

use super::error::HttpError;
use super::headers::FallbackHeaderChain;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Form body sent with POST/PUT requests, as ordered key/value pairs.
pub(crate) type FormBody = Vec<(&'static str, String)>;

/// Low-level dispatcher shared by every endpoint method.
///
/// Performs one HTTP exchange per call: header decoration runs to completion
/// before the request is sent, and decoding happens strictly after a
/// successful response. Holds no cross-request mutable state; header maps are
/// request-scoped.
pub(crate) struct HttpClient {
    base_url: Url,
    client: reqwest_middleware::ClientWithMiddleware,
    headers: FallbackHeaderChain,
}

impl HttpClient {
    pub fn new(base_url: Url, headers: FallbackHeaderChain) -> Result<Self, anyhow::Error> {
        Self::with_config(base_url, headers, 0, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a dispatcher with an explicit transport policy.
    ///
    /// Retries are a transport concern: the dispatcher itself never loops.
    /// `max_retries` of 0 disables them entirely.
    pub fn with_config(
        base_url: Url,
        headers: FallbackHeaderChain,
        max_retries: u32,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let retry_policy = reqwest_retry::policies::ExponentialBackoff::builder().build_with_max_retries(max_retries);

        let inner_client = reqwest::Client::builder().timeout(timeout).build()?;

        let client = reqwest_middleware::ClientBuilder::new(inner_client)
            .with(reqwest_retry::RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            base_url,
            client,
            headers,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends one request and returns the decoded JSON response verbatim.
    ///
    /// `form`, when present, is sent as an `application/x-www-form-urlencoded`
    /// body (the platform's convention for POST/PUT endpoints).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        form: Option<&FormBody>,
    ) -> Result<serde_json::Value, HttpError> {
        let url = self.base_url.join(path)?;

        let mut headers = HeaderMap::new();
        self.headers.fill_header(&mut headers);

        debug!(method:% = method, path = path; "HTTP: dispatching request");

        let mut req = self.client.request(method, url).headers(headers);
        if let Some(form) = form {
            req = req.form(form);
        }

        let resp = req.send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".into());
            return Err(HttpError::ServerError { status, body });
        }

        Ok(resp.json().await?)
    }

    /// Like [`request`](Self::request), but maps the successful JSON response
    /// into `T`.
    ///
    /// The mapping step is only reached after a successful exchange; a shape
    /// mismatch surfaces as [`HttpError::MappingError`], distinct from
    /// transport and protocol failures.
    pub async fn request_mapped<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Option<&FormBody>,
    ) -> Result<T, HttpError> {
        let raw = self.request(method, path, form).await?;

        serde_json::from_value(raw).map_err(|source| HttpError::MappingError {
            target: std::any::type_name::<T>(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::http::headers::BasicHeaderDecorator;

    #[derive(Debug, Deserialize)]
    struct StatusOnly {
        #[allow(dead_code)]
        status: i32,
    }

    async fn client_for(server: &MockServer) -> HttpClient {
        let basic = BasicHeaderDecorator::default();
        let chain = FallbackHeaderChain::new(Box::new(basic.clone()), Box::new(basic));
        HttpClient::new(Url::parse(&server.uri()).unwrap(), chain).unwrap()
    }

    #[tokio::test]
    async fn raw_request_returns_json_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/c/recommend"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":0,"extra":"kept"}"#))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let value = client.request(Method::GET, "c/recommend", None).await.unwrap();

        assert_eq!(value["status"], serde_json::json!(0));
        assert_eq!(value["extra"], serde_json::json!("kept"));
    }

    #[tokio::test]
    async fn non_success_status_is_a_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .request_mapped::<StatusOnly>(Method::GET, "c/recommend", None)
            .await
            .unwrap_err();

        // The mapper is never reached on a failed exchange.
        match err {
            HttpError::ServerError { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected ServerError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn shape_mismatch_is_a_mapping_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"not a number"}"#))
            .mount(&server)
            .await;

        let client = client_for(&server).await;

        // The raw request succeeds; only the typed mapping fails.
        let raw = client.request(Method::GET, "c/recommend", None).await.unwrap();
        assert_eq!(raw["status"], serde_json::json!("not a number"));

        let err = client
            .request_mapped::<StatusOnly>(Method::GET, "c/recommend", None)
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::MappingError { .. }));
    }
}
