//! Client layer: builds authenticated requests, runs them through a transport,
//! and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use url::Url;

use crate::domain::{
    AccessToken, ApiResponse, BulkStatusResponse, CreditsResponse, DeliveryStatusResponse,
    PublicKey, SendBulkSms, SendBulkSmsResponse, SendSms, SendSmsResponse, ValidationError,
};
use crate::transport::{self, TransportError};

/// Jusibe API root used when no base URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://jusibe.com/smsapi/";

/// Whole-request timeout applied to the default HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ACCESS_TOKEN_ENV: &str = "JUSIBE_ACCESS_TOKEN";
const PUBLIC_KEY_ENV: &str = "JUSIBE_PUBLIC_KEY";
const API_BASE_URL_ENV: &str = "JUSIBE_API_BASE_URL";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Clone, PartialEq, Eq)]
/// HTTP Basic credentials attached to every request.
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone)]
/// Fully built request handed to an [`HttpTransport`].
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub auth: BasicAuth,
}

#[derive(Debug, Clone)]
/// Status code and fully read body returned by an [`HttpTransport`].
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Capability to perform one HTTP round trip.
///
/// Implementations must read the whole body before returning. The client maps
/// status codes and decodes JSON itself, so a transport only reports
/// connection-level failures as errors.
pub trait HttpTransport: Send + Sync {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let HttpRequest { method, url, auth } = request;
            let response = self
                .client
                .request(method, url)
                .basic_auth(auth.username, Some(auth.password))
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok::<_, BoxError>(HttpResponse { status, body })
        })
    }
}

#[derive(Clone, Default)]
/// Raw client configuration.
///
/// `access_token` and `public_key` are required; `base_url` falls back to
/// [`DEFAULT_API_BASE_URL`] when unset or blank. Validation happens when a
/// client is constructed.
pub struct ClientConfig {
    pub access_token: String,
    pub public_key: String,
    pub base_url: Option<String>,
}

impl ClientConfig {
    pub fn new(access_token: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            public_key: public_key.into(),
            base_url: None,
        }
    }

    /// Override the API root (e.g. a sandbox or a local mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Read `JUSIBE_ACCESS_TOKEN`, `JUSIBE_PUBLIC_KEY` and the optional
    /// `JUSIBE_API_BASE_URL`.
    ///
    /// Missing credentials are left empty so that client construction reports them.
    pub fn from_env() -> Self {
        Self {
            access_token: std::env::var(ACCESS_TOKEN_ENV).unwrap_or_default(),
            public_key: std::env::var(PUBLIC_KEY_ENV).unwrap_or_default(),
            base_url: std::env::var(API_BASE_URL_ENV).ok(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"***")
            .field("public_key", &self.public_key)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`JusibeClient`].
///
/// No error is retried internally; every variant reaches the caller as-is.
pub enum JusibeError {
    /// Missing credentials or an unusable base URL at construction time.
    #[error("invalid client configuration: {0}")]
    Config(#[source] ValidationError),

    /// An argument was rejected before any network I/O (e.g. sender id too long).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected {status} http response code")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// Endpoint URL could not be resolved against the base URL.
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
/// Builder for [`JusibeClient`].
///
/// Use this when you need to customize the timeout, user-agent, or the
/// underlying `reqwest::Client`.
pub struct JusibeClientBuilder {
    config: ClientConfig,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl JusibeClientBuilder {
    /// Create a builder with the default 10 second timeout.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: None,
            http_client: None,
        }
    }

    /// Override the API root.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disable the client-level timeout. Callers then bound requests themselves.
    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxies, custom TLS, timeouts).
    ///
    /// When set, [`timeout`](Self::timeout) and [`user_agent`](Self::user_agent)
    /// are ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build a [`JusibeClient`].
    pub fn build(self) -> Result<JusibeClient, JusibeError> {
        let settings = Settings::from_config(self.config)?;

        let client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                builder
                    .build()
                    .map_err(|err| JusibeError::Transport(Box::new(err)))?
            }
        };

        Ok(settings.into_client(Arc::new(ReqwestTransport { client })))
    }
}

struct Settings {
    base_url: Url,
    public_key: PublicKey,
    access_token: AccessToken,
}

impl Settings {
    fn from_config(config: ClientConfig) -> Result<Self, JusibeError> {
        let access_token = AccessToken::new(config.access_token).map_err(JusibeError::Config)?;
        let public_key = PublicKey::new(config.public_key).map_err(JusibeError::Config)?;
        let base_url = match config.base_url.as_deref().map(str::trim) {
            Some(base_url) if !base_url.is_empty() => {
                parse_base_url(base_url).map_err(JusibeError::Config)?
            }
            _ => parse_base_url(DEFAULT_API_BASE_URL).map_err(JusibeError::Config)?,
        };

        Ok(Self {
            base_url,
            public_key,
            access_token,
        })
    }

    fn into_client(self, http: Arc<dyn HttpTransport>) -> JusibeClient {
        JusibeClient {
            base_url: self.base_url,
            public_key: self.public_key,
            access_token: self.access_token,
            http,
        }
    }
}

fn parse_base_url(input: &str) -> Result<Url, ValidationError> {
    let invalid = || ValidationError::InvalidBaseUrl {
        input: input.to_owned(),
    };

    // Without a trailing slash `Url::join` would replace the last path segment.
    let normalized = if input.ends_with('/') {
        input.to_owned()
    } else {
        format!("{input}/")
    };
    let url = Url::parse(&normalized).map_err(|_| invalid())?;
    if url.cannot_be_a_base() {
        return Err(invalid());
    }
    Ok(url)
}

#[derive(Clone)]
/// High-level Jusibe client.
///
/// Every operation is a single authenticated request against the configured
/// base URL (default `https://jusibe.com/smsapi/`). The client holds no mutable
/// state, so one instance can serve concurrent callers; clones share the
/// underlying transport.
///
/// Operations are plain futures: drop one to cancel it, or wrap it in
/// `tokio::time::timeout` for a per-call deadline on top of the transport
/// timeout.
pub struct JusibeClient {
    base_url: Url,
    public_key: PublicKey,
    access_token: AccessToken,
    http: Arc<dyn HttpTransport>,
}

impl JusibeClient {
    /// Create a client backed by a `reqwest::Client` with a 10 second timeout.
    ///
    /// For more customization, use [`JusibeClient::builder`].
    pub fn new(config: ClientConfig) -> Result<Self, JusibeError> {
        JusibeClientBuilder::new(config).build()
    }

    /// Create a client backed by the given `reqwest::Client`.
    pub fn with_http_client(
        config: ClientConfig,
        client: reqwest::Client,
    ) -> Result<Self, JusibeError> {
        JusibeClientBuilder::new(config).http_client(client).build()
    }

    /// Create a client backed by a custom [`HttpTransport`].
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, JusibeError> {
        Ok(Settings::from_config(config)?.into_client(transport))
    }

    /// Start building a client with custom settings.
    pub fn builder(config: ClientConfig) -> JusibeClientBuilder {
        JusibeClientBuilder::new(config)
    }

    /// API root every endpoint path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send an SMS to a single recipient (`POST send_sms`).
    ///
    /// Errors:
    /// - [`JusibeError::Validation`] if `from` is longer than 11 characters
    ///   (no request is made),
    /// - [`JusibeError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`JusibeError::Parse`] if the body is not the expected JSON.
    pub async fn send_sms(
        &self,
        to: impl Into<String>,
        from: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<ApiResponse<SendSmsResponse>, JusibeError> {
        let request = SendSms::new(to, from, message)?;
        let http_request = self.build_request(
            Method::POST,
            transport::SEND_SMS_PATH,
            &transport::encode_send_sms_query(&request),
        )?;
        self.execute(http_request, transport::decode_send_sms_json_response)
            .await
    }

    /// Send one message to many recipients (`POST bulk/send_sms`).
    ///
    /// Recipients are joined with commas into the `to` parameter. Errors are the
    /// same as for [`send_sms`](Self::send_sms).
    pub async fn send_bulk_sms<I, S>(
        &self,
        recipients: I,
        from: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<ApiResponse<SendBulkSmsResponse>, JusibeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = SendBulkSms::new(recipients, from, message)?;
        let http_request = self.build_request(
            Method::POST,
            transport::SEND_BULK_SMS_PATH,
            &transport::encode_send_bulk_sms_query(&request),
        )?;
        self.execute(http_request, transport::decode_send_bulk_sms_json_response)
            .await
    }

    /// Check the remaining SMS credits (`GET get_credits`).
    pub async fn check_credits(&self) -> Result<ApiResponse<CreditsResponse>, JusibeError> {
        let http_request = self.build_request(
            Method::GET,
            transport::CREDITS_PATH,
            &transport::encode_credits_query(),
        )?;
        self.execute(http_request, transport::decode_credits_json_response)
            .await
    }

    /// Check delivery status of a message sent with [`send_sms`](Self::send_sms)
    /// (`GET delivery_status`).
    pub async fn check_delivery_status(
        &self,
        message_id: &str,
    ) -> Result<ApiResponse<DeliveryStatusResponse>, JusibeError> {
        let http_request = self.build_request(
            Method::GET,
            transport::DELIVERY_STATUS_PATH,
            &transport::encode_delivery_status_query(message_id),
        )?;
        self.execute(http_request, transport::decode_delivery_status_json_response)
            .await
    }

    /// Check processing status of a bulk submission (`GET bulk/status`).
    pub async fn check_bulk_status(
        &self,
        bulk_message_id: &str,
    ) -> Result<ApiResponse<BulkStatusResponse>, JusibeError> {
        let http_request = self.build_request(
            Method::GET,
            transport::BULK_STATUS_PATH,
            &transport::encode_bulk_status_query(bulk_message_id),
        )?;
        self.execute(http_request, transport::decode_bulk_status_json_response)
            .await
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
    ) -> Result<HttpRequest, JusibeError> {
        let mut url = self.base_url.join(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(HttpRequest {
            method,
            url,
            auth: BasicAuth {
                username: self.public_key.as_str().to_owned(),
                password: self.access_token.as_str().to_owned(),
            },
        })
    }

    async fn execute<T>(
        &self,
        request: HttpRequest,
        decode: fn(&str) -> Result<T, TransportError>,
    ) -> Result<ApiResponse<T>, JusibeError> {
        let method = request.method.clone();
        let path = request.url.path().to_owned();
        tracing::debug!(%method, %path, "sending jusibe request");

        let response = self
            .http
            .send(request)
            .await
            .map_err(JusibeError::Transport)?;
        tracing::debug!(%method, %path, status = response.status, "received jusibe response");

        if !(200..=299).contains(&response.status) {
            tracing::warn!(%method, %path, status = response.status, "unexpected http status");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(JusibeError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let data = decode(&response.body).map_err(|err| JusibeError::Parse(Box::new(err)))?;
        Ok(ApiResponse {
            status: response.status,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::domain::DeliveryStatus;

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<HttpRequest>,
        response_status: u16,
        response_body: String,
        fail: bool,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                    fail: false,
                })),
            }
        }

        fn failing() -> Self {
            let transport = Self::new(0, "");
            transport.state.lock().unwrap().fail = true;
            transport
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().requests.len()
        }

        fn last_request(&self) -> HttpRequest {
            self.state
                .lock()
                .unwrap()
                .requests
                .last()
                .cloned()
                .expect("no request recorded")
        }
    }

    impl HttpTransport for FakeTransport {
        fn send<'a>(
            &'a self,
            request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                if state.fail {
                    return Err(BoxError::from("connection refused"));
                }
                Ok(HttpResponse {
                    status: state.response_status,
                    body: state.response_body.clone(),
                })
            })
        }
    }

    fn config() -> ClientConfig {
        ClientConfig::new("some_access_token", "some_public_key")
    }

    fn make_client(transport: FakeTransport) -> JusibeClient {
        JusibeClient::with_transport(config(), Arc::new(transport)).unwrap()
    }

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn construction_requires_both_credentials() {
        let cases = [
            ClientConfig::new("", "some_public_key"),
            ClientConfig::new("some_access_token", ""),
            ClientConfig::new("", ""),
            ClientConfig::new("   ", "some_public_key"),
        ];

        for cfg in cases {
            let transport = Arc::new(FakeTransport::new(200, "{}"));
            let err = JusibeClient::with_transport(cfg.clone(), transport)
                .err()
                .expect("construction should fail");
            assert!(
                matches!(err, JusibeError::Config(ValidationError::Empty { .. })),
                "unexpected error for {cfg:?}: {err:?}"
            );
            assert!(JusibeClient::new(cfg).is_err());
        }
    }

    #[test]
    fn construction_defaults_base_url() {
        let client = JusibeClient::new(config()).unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_API_BASE_URL);

        let client = JusibeClient::new(config().with_base_url("  ")).unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn construction_uses_supplied_base_url() {
        let client = JusibeClient::new(config().with_base_url("https://jusibe.com/")).unwrap();
        assert_eq!(client.base_url().as_str(), "https://jusibe.com/");

        let client = JusibeClient::builder(config())
            .base_url("http://localhost:8080/smsapi")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/smsapi/");
    }

    #[test]
    fn construction_rejects_unusable_base_url() {
        let err = JusibeClient::new(config().with_base_url("not a url"))
            .err()
            .expect("construction should fail");
        assert!(matches!(
            err,
            JusibeError::Config(ValidationError::InvalidBaseUrl { .. })
        ));

        assert!(JusibeClient::new(config().with_base_url("mailto:ops@example.com")).is_err());
    }

    #[test]
    fn builder_applies_default_timeout() {
        let builder = JusibeClient::builder(config());
        assert_eq!(builder.timeout, Some(DEFAULT_TIMEOUT));
        assert_eq!(builder.no_timeout().timeout, None);

        let builder = JusibeClient::builder(config()).timeout(Duration::from_secs(3));
        assert_eq!(builder.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn with_http_client_accepts_custom_client() {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();
        let client = JusibeClient::with_http_client(config(), http).unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn config_debug_hides_access_token() {
        let rendered = format!("{:?}", config());
        assert!(!rendered.contains("some_access_token"));
        assert!(rendered.contains("some_public_key"));
    }

    #[tokio::test]
    async fn send_sms_builds_authenticated_request_and_parses_response() {
        let json = r#"
        {
          "status": "Sent",
          "message_id": "xyz123",
          "sms_credits_used": 1
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let response = client
            .send_sms("09001000101", "test_user", "Hello World!")
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.data.status, "Sent");
        assert_eq!(response.data.known_status(), Some(DeliveryStatus::Sent));
        assert_eq!(response.data.message_id, "xyz123");
        assert_eq!(response.data.sms_credits_used, 1);

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url.as_str(),
            "https://jusibe.com/smsapi/send_sms?to=09001000101&from=test_user&message=Hello+World%21"
        );
        assert_eq!(
            query_map(&request.url),
            HashMap::from([
                ("to".to_owned(), "09001000101".to_owned()),
                ("from".to_owned(), "test_user".to_owned()),
                ("message".to_owned(), "Hello World!".to_owned()),
            ])
        );
        assert_eq!(request.auth.username, "some_public_key");
        assert_eq!(request.auth.password, "some_access_token");
    }

    #[tokio::test]
    async fn send_sms_rejects_long_sender_id_without_network_call() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        let err = client
            .send_sms("09001000101", "sender_is_too_long", "Hello World!")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            JusibeError::Validation(ValidationError::SenderIdTooLong { max: 11, .. })
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn send_bulk_sms_joins_recipients_and_parses_response() {
        let json = r#"
        {
          "status": "Submitted",
          "bulk_message_id": "xeqd6rs3d26"
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let response = client
            .send_bulk_sms(
                ["09001000101", "08030000000", "09050000000"],
                "test_user",
                "Hello World!",
            )
            .await
            .unwrap();
        assert_eq!(response.data.status, "Submitted");
        assert_eq!(response.data.bulk_message_id, "xeqd6rs3d26");

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/smsapi/bulk/send_sms");
        let query = query_map(&request.url);
        assert_eq!(query["to"], "09001000101,08030000000,09050000000");
        assert_eq!(query["from"], "test_user");
        assert_eq!(query["message"], "Hello World!");
    }

    #[tokio::test]
    async fn send_bulk_sms_rejects_long_sender_id_without_network_call() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        let err = client
            .send_bulk_sms(vec!["09001000101".to_owned()], "sender_is_too_long", "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, JusibeError::Validation(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn check_credits_uses_get_without_query() {
        let transport = FakeTransport::new(200, r#"{"sms_credits": "100"}"#);
        let client = make_client(transport.clone());

        let response = client.check_credits().await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.data.sms_credits, "100");

        let request = transport.last_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.as_str(), "https://jusibe.com/smsapi/get_credits");
    }

    #[tokio::test]
    async fn check_delivery_status_parses_response() {
        let json = r#"
        {
          "message_id": "xyz123",
          "status": "Delivered",
          "date_sent": "2015-05-19 04:34:48",
          "date_delivered": "2015-05-19 04:35:05"
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let response = client.check_delivery_status("xyz123").await.unwrap();
        assert_eq!(response.data.message_id, "xyz123");
        assert_eq!(response.data.status, "Delivered");
        assert_eq!(response.data.date_sent, "2015-05-19 04:34:48");
        assert_eq!(response.data.date_delivered, "2015-05-19 04:35:05");

        let request = transport.last_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.url.as_str(),
            "https://jusibe.com/smsapi/delivery_status?message_id=xyz123"
        );
    }

    #[tokio::test]
    async fn check_bulk_status_parses_response() {
        let json = r#"
        {
          "bulk_message_id": "xeqd6rs3d26",
          "status": "Completed",
          "created": "2019-04-02 15:23:13",
          "processed": "2019-04-02 15:25:03",
          "total_numbers": "2",
          "total_unique_numbers": "2",
          "total_valid_numbers": "2",
          "total_invalid_numbers": "0"
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let response = client.check_bulk_status("xeqd6rs3d26").await.unwrap();
        assert_eq!(response.data.bulk_message_id, "xeqd6rs3d26");
        assert_eq!(response.data.status, "Completed");
        assert_eq!(response.data.total_numbers, "2");
        assert_eq!(response.data.total_invalid_numbers, "0");

        let request = transport.last_request();
        assert_eq!(
            request.url.as_str(),
            "https://jusibe.com/smsapi/bulk/status?bulk_message_id=xeqd6rs3d26"
        );
    }

    #[tokio::test]
    async fn custom_base_url_prefixes_endpoint_paths() {
        let transport = FakeTransport::new(200, r#"{"sms_credits": "5"}"#);
        let client = JusibeClient::with_transport(
            config().with_base_url("http://localhost:9000/api"),
            Arc::new(transport.clone()),
        )
        .unwrap();

        client.check_credits().await.unwrap();
        assert_eq!(
            transport.last_request().url.as_str(),
            "http://localhost:9000/api/get_credits"
        );
    }

    #[derive(Debug, Clone, Copy)]
    enum Operation {
        SendSms,
        SendBulkSms,
        CheckCredits,
        CheckDeliveryStatus,
        CheckBulkStatus,
    }

    const ALL_OPERATIONS: [Operation; 5] = [
        Operation::SendSms,
        Operation::SendBulkSms,
        Operation::CheckCredits,
        Operation::CheckDeliveryStatus,
        Operation::CheckBulkStatus,
    ];

    async fn run(client: &JusibeClient, operation: Operation) -> Result<u16, JusibeError> {
        match operation {
            Operation::SendSms => client
                .send_sms("09001000101", "test_user", "hi")
                .await
                .map(|response| response.status),
            Operation::SendBulkSms => client
                .send_bulk_sms(["09001000101", "08030000000"], "test_user", "hi")
                .await
                .map(|response| response.status),
            Operation::CheckCredits => client.check_credits().await.map(|response| response.status),
            Operation::CheckDeliveryStatus => client
                .check_delivery_status("xyz123")
                .await
                .map(|response| response.status),
            Operation::CheckBulkStatus => client
                .check_bulk_status("xeqd6rs3d26")
                .await
                .map(|response| response.status),
        }
    }

    #[tokio::test]
    async fn non_success_status_maps_to_http_status_error() {
        for operation in ALL_OPERATIONS {
            for status in [404_u16, 500] {
                let transport = FakeTransport::new(status, "oops");
                let client = make_client(transport.clone());

                match run(&client, operation).await {
                    Err(JusibeError::HttpStatus { status: got, body }) => {
                        assert_eq!(got, status, "{operation:?}");
                        assert_eq!(body.as_deref(), Some("oops"), "{operation:?}");
                    }
                    other => panic!("{operation:?} with {status}: unexpected result {other:?}"),
                }
                assert_eq!(transport.calls(), 1);
            }
        }
    }

    #[tokio::test]
    async fn non_json_body_maps_to_parse_error() {
        for operation in ALL_OPERATIONS {
            let transport = FakeTransport::new(200, "<html>maintenance</html>");
            let client = make_client(transport);

            let result = run(&client, operation).await;
            assert!(
                matches!(result, Err(JusibeError::Parse(_))),
                "{operation:?}: unexpected result {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn mismatched_json_shape_maps_to_parse_error() {
        let bodies = [
            r#"["Sent", "xyz123", 1]"#,
            "null",
            r#""Delivered""#,
            "42",
        ];

        for operation in ALL_OPERATIONS {
            for body in bodies {
                let transport = FakeTransport::new(200, body);
                let client = make_client(transport);

                let result = run(&client, operation).await;
                assert!(
                    matches!(result, Err(JusibeError::Parse(_))),
                    "{operation:?} with {body}: unexpected result {result:?}"
                );
            }
        }
    }

    #[tokio::test]
    async fn wrongly_typed_fields_map_to_parse_error() {
        let cases = [
            (Operation::SendSms, r#"{"status": "Sent", "sms_credits_used": "2"}"#),
            (Operation::SendBulkSms, r#"{"bulk_message_id": 99}"#),
            (Operation::CheckCredits, r#"{"sms_credits": 42}"#),
            (Operation::CheckDeliveryStatus, r#"{"date_sent": 1432010088}"#),
            (Operation::CheckBulkStatus, r#"{"total_numbers": 2}"#),
        ];

        for (operation, body) in cases {
            let transport = FakeTransport::new(200, body);
            let client = make_client(transport);

            let result = run(&client, operation).await;
            assert!(
                matches!(result, Err(JusibeError::Parse(_))),
                "{operation:?} with {body}: unexpected result {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn credentials_are_sent_as_configured() {
        let transport = FakeTransport::new(200, r#"{"sms_credits": "1"}"#);
        let client = JusibeClient::with_transport(
            ClientConfig::new(" token ", "key "),
            Arc::new(transport.clone()),
        )
        .unwrap();

        client.check_credits().await.unwrap();
        let auth = transport.last_request().auth;
        assert_eq!(auth.username, "key ");
        assert_eq!(auth.password, " token ");
    }

    #[tokio::test]
    async fn non_success_status_with_blank_body_has_no_body() {
        let transport = FakeTransport::new(503, "   ");
        let client = make_client(transport);

        let err = client.check_delivery_status("xyz123").await.unwrap_err();
        assert!(matches!(
            err,
            JusibeError::HttpStatus {
                status: 503,
                body: None
            }
        ));
        assert_eq!(err.to_string(), "unexpected 503 http response code");
    }

    #[tokio::test]
    async fn transport_failure_maps_to_transport_error() {
        let transport = FakeTransport::failing();
        let client = make_client(transport.clone());

        let err = client.check_credits().await.unwrap_err();
        assert!(matches!(err, JusibeError::Transport(_)));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn client_serves_concurrent_callers() {
        let transport = FakeTransport::new(200, r#"{"sms_credits": "100"}"#);
        let client = make_client(transport.clone());
        let other = client.clone();

        let (a, b) = tokio::join!(client.check_credits(), other.check_credits());
        assert_eq!(a.unwrap().data.sms_credits, "100");
        assert_eq!(b.unwrap().into_data().sms_credits, "100");
        assert_eq!(transport.calls(), 2);
    }
}
