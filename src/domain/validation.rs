use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    SenderIdTooLong { max: usize, actual: usize },
    InvalidBaseUrl { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::SenderIdTooLong { max, actual } => {
                write!(
                    f,
                    "from (sender id) allows at most {max} characters, got {actual}"
                )
            }
            Self::InvalidBaseUrl { input } => write!(f, "invalid API base URL: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
