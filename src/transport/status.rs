use serde::Deserialize;

use super::{TransportError, decode_object};
use crate::domain::{BulkStatusResponse, DeliveryStatusResponse};

pub const DELIVERY_STATUS_PATH: &str = "delivery_status";
pub const BULK_STATUS_PATH: &str = "bulk/status";

const MESSAGE_ID_FIELD: &str = "message_id";
const BULK_MESSAGE_ID_FIELD: &str = "bulk_message_id";

#[derive(Debug, Clone, Deserialize)]
struct DeliveryStatusJsonResponse {
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    date_sent: Option<String>,
    #[serde(default)]
    date_delivered: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct BulkStatusJsonResponse {
    #[serde(default)]
    bulk_message_id: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    created: Option<String>,
    #[serde(default)]
    processed: Option<String>,
    #[serde(default)]
    total_numbers: Option<String>,
    #[serde(default)]
    total_unique_numbers: Option<String>,
    #[serde(default)]
    total_valid_numbers: Option<String>,
    #[serde(default)]
    total_invalid_numbers: Option<String>,
}

pub fn encode_delivery_status_query(message_id: &str) -> Vec<(String, String)> {
    vec![(MESSAGE_ID_FIELD.to_owned(), message_id.to_owned())]
}

pub fn encode_bulk_status_query(bulk_message_id: &str) -> Vec<(String, String)> {
    vec![(BULK_MESSAGE_ID_FIELD.to_owned(), bulk_message_id.to_owned())]
}

pub fn decode_delivery_status_json_response(
    json: &str,
) -> Result<DeliveryStatusResponse, TransportError> {
    let parsed: DeliveryStatusJsonResponse = decode_object(json)?;
    Ok(DeliveryStatusResponse {
        message_id: parsed.message_id.unwrap_or_default(),
        status: parsed.status.unwrap_or_default(),
        date_sent: parsed.date_sent.unwrap_or_default(),
        date_delivered: parsed.date_delivered.unwrap_or_default(),
    })
}

pub fn decode_bulk_status_json_response(json: &str) -> Result<BulkStatusResponse, TransportError> {
    let parsed: BulkStatusJsonResponse = decode_object(json)?;
    Ok(BulkStatusResponse {
        bulk_message_id: parsed.bulk_message_id.unwrap_or_default(),
        status: parsed.status.unwrap_or_default(),
        created: parsed.created.unwrap_or_default(),
        processed: parsed.processed.unwrap_or_default(),
        total_numbers: parsed.total_numbers.unwrap_or_default(),
        total_unique_numbers: parsed.total_unique_numbers.unwrap_or_default(),
        total_valid_numbers: parsed.total_valid_numbers.unwrap_or_default(),
        total_invalid_numbers: parsed.total_invalid_numbers.unwrap_or_default(),
    })
}
