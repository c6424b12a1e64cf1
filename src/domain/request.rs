use crate::domain::validation::ValidationError;
use crate::domain::value::SenderId;

/// Single-recipient message for `send_sms`.
#[derive(Debug, Clone)]
pub struct SendSms {
    to: String,
    from: SenderId,
    message: String,
}

/// Multi-recipient message for `bulk/send_sms`.
#[derive(Debug, Clone)]
pub struct SendBulkSms {
    recipients: Vec<String>,
    from: SenderId,
    message: String,
}

impl SendSms {
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            to: to.into(),
            from: SenderId::new(from)?,
            message: message.into(),
        })
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn from(&self) -> &SenderId {
        &self.from
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl SendBulkSms {
    pub fn new<I, S>(
        recipients: I,
        from: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            recipients: recipients.into_iter().map(Into::into).collect(),
            from: SenderId::new(from)?,
            message: message.into(),
        })
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub fn from(&self) -> &SenderId {
        &self.from
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
