use serde::Deserialize;

use super::{TransportError, decode_object};
use crate::domain::CreditsResponse;

pub const CREDITS_PATH: &str = "get_credits";

#[derive(Debug, Clone, Deserialize)]
struct CreditsJsonResponse {
    #[serde(default)]
    sms_credits: Option<String>,
}

pub fn encode_credits_query() -> Vec<(String, String)> {
    Vec::new()
}

pub fn decode_credits_json_response(json: &str) -> Result<CreditsResponse, TransportError> {
    let parsed: CreditsJsonResponse = decode_object(json)?;
    Ok(CreditsResponse {
        sms_credits: parsed.sms_credits.unwrap_or_default(),
    })
}
