use serde::Deserialize;

use super::{TransportError, decode_object};
use crate::domain::{SendBulkSms, SendBulkSmsResponse, SendSms, SendSmsResponse, SenderId};

pub const SEND_SMS_PATH: &str = "send_sms";
pub const SEND_BULK_SMS_PATH: &str = "bulk/send_sms";

const TO_FIELD: &str = "to";
const MESSAGE_FIELD: &str = "message";

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    sms_credits_used: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
struct SendBulkSmsJsonResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    bulk_message_id: Option<String>,
}

pub fn encode_send_sms_query(request: &SendSms) -> Vec<(String, String)> {
    encode_message_query(request.to().to_owned(), request.from(), request.message())
}

pub fn encode_send_bulk_sms_query(request: &SendBulkSms) -> Vec<(String, String)> {
    encode_message_query(
        request.recipients().join(","),
        request.from(),
        request.message(),
    )
}

fn encode_message_query(to: String, from: &SenderId, message: &str) -> Vec<(String, String)> {
    vec![
        (TO_FIELD.to_owned(), to),
        (SenderId::FIELD.to_owned(), from.as_str().to_owned()),
        (MESSAGE_FIELD.to_owned(), message.to_owned()),
    ]
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = decode_object(json)?;
    Ok(SendSmsResponse {
        status: parsed.status.unwrap_or_default(),
        message_id: parsed.message_id.unwrap_or_default(),
        sms_credits_used: parsed.sms_credits_used.unwrap_or_default(),
    })
}

pub fn decode_send_bulk_sms_json_response(
    json: &str,
) -> Result<SendBulkSmsResponse, TransportError> {
    let parsed: SendBulkSmsJsonResponse = decode_object(json)?;
    Ok(SendBulkSmsResponse {
        status: parsed.status.unwrap_or_default(),
        bulk_message_id: parsed.bulk_message_id.unwrap_or_default(),
    })
}
