use std::env;

use crate::errors::SummarizeError;

/// Fixed endpoint of the hosted summarization model.
pub const API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Environment variable holding the bearer token.
pub const TOKEN_VAR: &str = "HF_API_TOKEN";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_token: String,
}

impl AppConfig {
    /// Loads a `.env` file if one is present, then resolves the bearer token.
    ///
    /// The token is resolved once and held for the process lifetime. A
    /// missing or empty variable is a configuration error; callers decide
    /// whether to continue without a usable credential.
    ///
    /// # Errors
    ///
    /// Returns `SummarizeError::ConfigError` if `HF_API_TOKEN` is unset or
    /// empty.
    pub fn from_env() -> Result<Self, SummarizeError> {
        dotenvy::dotenv().ok();

        let api_token = env::var(TOKEN_VAR)
            .map_err(|e| SummarizeError::ConfigError(format!("{TOKEN_VAR}: {e}")))?;
        if api_token.is_empty() {
            return Err(SummarizeError::ConfigError(format!(
                "{TOKEN_VAR} is set but empty"
            )));
        }

        Ok(Self { api_token })
    }
}
