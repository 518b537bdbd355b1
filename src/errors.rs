use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Missing API credential: {0}")]
    ConfigError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to decode API response: {0}")]
    DecodeError(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            SummarizeError::DecodeError(error.to_string())
        } else {
            SummarizeError::HttpError(error.to_string())
        }
    }
}
