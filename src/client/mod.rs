//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{AccessKey, ApiErrorDetail, CreateMessage, MessageAck, ValidationError};

const DEFAULT_MESSAGES_ENDPOINT: &str = "https://rest.messagebird.com/messages";
const DEFAULT_USER_AGENT: &str = concat!("callme/", env!("CARGO_PKG_VERSION"));

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        authorization: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        authorization: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::AUTHORIZATION, authorization)
                .header(reqwest::header::ACCEPT, "application/json")
                .form(&params)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MessageBirdClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (a response carrying an `errors` array),
/// - validation/parse failures.
pub enum MessageBirdError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code without a MessageBird error payload.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// MessageBird rejected the request with one or more coded errors.
    #[error("API error: {}", summarize(.errors))]
    Api { errors: Vec<ApiErrorDetail> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured endpoint is not an absolute URL.
    #[error("invalid endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

fn summarize(errors: &[ApiErrorDetail]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone)]
/// Builder for [`MessageBirdClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct MessageBirdClientBuilder {
    access_key: AccessKey,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MessageBirdClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(access_key: AccessKey) -> Self {
        Self {
            access_key,
            endpoint: DEFAULT_MESSAGES_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the `messages` endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`MessageBirdClient`].
    pub fn build(self) -> Result<MessageBirdClient, MessageBirdError> {
        url::Url::parse(&self.endpoint).map_err(|source| MessageBirdError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        let mut builder = reqwest::Client::builder().user_agent(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
        );
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| MessageBirdError::Transport(Box::new(err)))?;

        Ok(MessageBirdClient {
            authorization: authorization_header(&self.access_key),
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level MessageBird client.
///
/// This type orchestrates form encoding, authentication and response parsing.
/// By default it posts to `https://rest.messagebird.com/messages`.
pub struct MessageBirdClient {
    authorization: String,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for MessageBirdClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageBirdClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl MessageBirdClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`MessageBirdClient::builder`].
    pub fn new(access_key: AccessKey) -> Self {
        Self {
            authorization: authorization_header(&access_key),
            endpoint: DEFAULT_MESSAGES_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(access_key: AccessKey) -> MessageBirdClientBuilder {
        MessageBirdClientBuilder::new(access_key)
    }

    /// Create (send) a message through MessageBird.
    ///
    /// Errors:
    /// - [`MessageBirdError::Api`] when the response carries an `errors` array,
    ///   whatever its HTTP status,
    /// - [`MessageBirdError::HttpStatus`] for other non-2xx responses,
    /// - [`MessageBirdError::Parse`] when a 2xx body is not a message object.
    pub async fn create_message(
        &self,
        request: CreateMessage,
    ) -> Result<MessageAck, MessageBirdError> {
        let params = crate::transport::encode_create_message_form(&request);

        let response = self
            .http
            .post_form(&self.endpoint, &self.authorization, params)
            .await
            .map_err(MessageBirdError::Transport)?;

        if let Some(errors) = crate::transport::decode_errors_json_response(&response.body) {
            return Err(MessageBirdError::Api { errors });
        }

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(MessageBirdError::HttpStatus {
                status: response.status,
                body,
            });
        }

        crate::transport::decode_message_json_response(&response.body)
            .map_err(|err| MessageBirdError::Parse(Box::new(err)))
    }
}

fn authorization_header(access_key: &AccessKey) -> String {
    format!("AccessKey {}", access_key.as_str())
}
