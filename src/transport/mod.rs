//! Transport layer: wire-format details (query encoding, JSON decoding).

mod account;
mod send_sms;
mod status;

use serde::de::DeserializeOwned;

pub use account::{CREDITS_PATH, decode_credits_json_response, encode_credits_query};
pub use send_sms::{
    SEND_BULK_SMS_PATH, SEND_SMS_PATH, decode_send_bulk_sms_json_response,
    decode_send_sms_json_response, encode_send_bulk_sms_query, encode_send_sms_query,
};
pub use status::{
    BULK_STATUS_PATH, DELIVERY_STATUS_PATH, decode_bulk_status_json_response,
    decode_delivery_status_json_response, encode_bulk_status_query,
    encode_delivery_status_query,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

/// Decode a response body that must be a JSON object.
///
/// Derived struct deserializers also accept JSON arrays by position, so the
/// top-level shape is checked before mapping fields.
fn decode_object<T: DeserializeOwned>(json: &str) -> Result<T, TransportError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let found = match value {
        serde_json::Value::Object(map) => {
            return Ok(serde_json::from_value(serde_json::Value::Object(map))?);
        }
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
    };
    Err(TransportError::NotAnObject { found })
}
