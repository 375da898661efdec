use std::env;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;
use url::Url;

use crate::client_logger::ClientLogger;
use crate::error::{Error, Result};
use crate::observability;
use crate::types::{ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// The transport seam between the chat controller and the service.
///
/// [`RagClient`] is the production implementation; tests substitute a mock
/// so controller behavior can be verified without a network.
#[async_trait::async_trait]
pub trait ChatEndpoint: Send + Sync {
    /// Perform one request/response exchange with the chat service.
    async fn exchange(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

/// Client for the RAG chat service.
#[derive(Clone)]
pub struct RagClient {
    base_url: String,
    client: ReqwestClient,
    timeout: Duration,
    logger: Option<Arc<dyn ClientLogger>>,
}

impl std::fmt::Debug for RagClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RagClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl RagClient {
    /// Create a new client.
    ///
    /// The base URL can be provided directly or read from the RAGLINE_URL
    /// environment variable, falling back to `http://127.0.0.1:8000/`.
    pub fn new(base_url: Option<String>) -> Result<Self> {
        Self::with_options(base_url, None)
    }

    /// Create a new client with custom settings.
    pub fn with_options(base_url: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = match base_url {
            Some(url) => url,
            None => env::var("RAGLINE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        };
        let base_url = normalize_base_url(base_url)?;

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            base_url,
            client,
            timeout,
            logger: None,
        })
    }

    /// Attach a logger that observes every exchange.
    pub fn with_logger(mut self, logger: Arc<dyn ClientLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Returns the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create and return default headers for API requests.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Process API response errors and convert to our Error type.
    async fn process_error_response(response: Response) -> Error {
        let status_code = response.status().as_u16();

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|val| val.to_str().ok())
            .and_then(|val| val.parse::<u64>().ok());

        // FastAPI-style error bodies carry a "detail" field.
        #[derive(Deserialize)]
        struct ErrorBody {
            detail: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        let detail = serde_json::from_str::<ErrorBody>(&error_body)
            .ok()
            .and_then(|body| body.detail);
        let message = detail.unwrap_or_else(|| {
            if error_body.is_empty() {
                "Something went wrong".to_string()
            } else {
                error_body.clone()
            }
        });

        match status_code {
            400 => Error::bad_request(message),
            404 => Error::not_found(message),
            429 => Error::rate_limit(message, retry_after),
            500 => Error::internal_server(message),
            502..=504 => Error::service_unavailable(message, retry_after),
            _ => Error::api(status_code, message),
        }
    }

    /// Send a chat message and return the service's answer.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}chat", self.base_url);

        observability::CLIENT_REQUESTS.click();
        if let Some(logger) = &self.logger {
            logger.log_request(request);
        }
        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::timeout(
                        format!("Request timed out: {}", e),
                        Some(self.timeout.as_secs_f64()),
                    )
                } else if e.is_connect() {
                    Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
                } else {
                    Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
                }
            });

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                self.record_failure(&err);
                return Err(err);
            }
        };

        if !response.status().is_success() {
            let err = Self::process_error_response(response).await;
            self.record_failure(&err);
            return Err(err);
        }

        let parsed = response.json::<ChatResponse>().await.map_err(|e| {
            Error::serialization(
                format!("Failed to parse response: {}", e),
                Some(Box::new(e)),
            )
        });

        match parsed {
            Ok(parsed) => {
                observability::CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());
                if let Some(logger) = &self.logger {
                    logger.log_response(&parsed);
                }
                Ok(parsed)
            }
            Err(err) => {
                self.record_failure(&err);
                Err(err)
            }
        }
    }

    fn record_failure(&self, err: &Error) {
        observability::CLIENT_REQUEST_ERRORS.click();
        if let Some(logger) = &self.logger {
            logger.log_error(err);
        }
    }
}

#[async_trait::async_trait]
impl ChatEndpoint for RagClient {
    async fn exchange(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.chat(request).await
    }
}

/// Validate a base URL and ensure it carries a trailing slash so endpoint
/// paths can be appended by concatenation.
fn normalize_base_url(base_url: String) -> Result<String> {
    Url::parse(&base_url)?;
    if base_url.ends_with('/') {
        Ok(base_url)
    } else {
        Ok(format!("{}/", base_url))
    }
}
