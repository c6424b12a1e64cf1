//! Typed Rust client for the Jusibe SMS HTTP API.
//!
//! The crate has three layers: a domain layer of plain records and validated
//! values, a transport layer for wire-format details, and a small client layer
//! that builds authenticated requests and runs them through an
//! [`HttpTransport`].
//!
//! ```rust,no_run
//! use jusibe::{ClientConfig, JusibeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jusibe::JusibeError> {
//!     let client = JusibeClient::new(ClientConfig::new("access_token", "public_key"))?;
//!
//!     let sent = client.send_sms("08000000000", "Azeez", "Hello World").await?;
//!     let delivery = client.check_delivery_status(&sent.data.message_id).await?;
//!     println!("{:?}", delivery.data);
//!
//!     let credits = client.check_credits().await?;
//!     println!("credits: {}", credits.data.sms_credits);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BasicAuth, BoxError, BoxFuture, ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT,
    HttpRequest, HttpResponse, HttpTransport, JusibeClient, JusibeClientBuilder, JusibeError,
};
pub use domain::{
    AccessToken, ApiResponse, BulkStatusResponse, CreditsResponse, DeliveryStatus,
    DeliveryStatusResponse, PublicKey, SendBulkSms, SendBulkSmsResponse, SendSms,
    SendSmsResponse, SenderId, ValidationError,
};
