//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SendBulkSms, SendSms};
pub use response::{
    ApiResponse, BulkStatusResponse, CreditsResponse, DeliveryStatus, DeliveryStatusResponse,
    SendBulkSmsResponse, SendSmsResponse,
};
pub use validation::ValidationError;
pub use value::{AccessToken, PublicKey, SenderId};
