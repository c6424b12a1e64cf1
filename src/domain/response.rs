/// Delivery and submission status tags reported by Jusibe.
///
/// Response records keep the raw `status` string; this enum is only a
/// convenience for comparing against the values Jusibe documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryStatus {
    Rejected,
    Sent,
    Delivered,
    Submitted,
    Completed,
}

impl DeliveryStatus {
    /// Map a raw wire value to a known tag. Unrecognised values return `None`.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Rejected" => Some(Self::Rejected),
            "Sent" => Some(Self::Sent),
            "Delivered" => Some(Self::Delivered),
            "Submitted" => Some(Self::Submitted),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rejected => "Rejected",
            Self::Sent => "Sent",
            Self::Delivered => "Delivered",
            Self::Submitted => "Submitted",
            Self::Completed => "Completed",
        }
    }
}

impl PartialEq<DeliveryStatus> for str {
    fn eq(&self, other: &DeliveryStatus) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<DeliveryStatus> for String {
    fn eq(&self, other: &DeliveryStatus) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Decoded body plus the HTTP status code it arrived with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendSmsResponse {
    pub status: String,
    pub message_id: String,
    pub sms_credits_used: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendBulkSmsResponse {
    pub status: String,
    pub bulk_message_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditsResponse {
    pub sms_credits: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryStatusResponse {
    pub message_id: String,
    pub status: String,
    pub date_sent: String,
    pub date_delivered: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkStatusResponse {
    pub bulk_message_id: String,
    pub status: String,
    pub created: String,
    pub processed: String,
    pub total_numbers: String,
    pub total_unique_numbers: String,
    pub total_valid_numbers: String,
    pub total_invalid_numbers: String,
}

macro_rules! impl_known_status {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Known tag for the raw `status` field, if Jusibe sent a documented value.
                pub fn known_status(&self) -> Option<DeliveryStatus> {
                    DeliveryStatus::from_wire(&self.status)
                }
            }
        )+
    };
}

impl_known_status!(
    SendSmsResponse,
    SendBulkSmsResponse,
    DeliveryStatusResponse,
    BulkStatusResponse,
);
