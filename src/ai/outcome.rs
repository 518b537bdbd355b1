//! Classification of summarization responses.
//!
//! A 2xx response from the inference endpoint is expected to be a JSON array
//! of objects, each with a `summary_text` string field. Only the first
//! element is consulted. Anything else is well-formed but unusable, and maps
//! to [`Outcome::EmptyResult`] rather than an error.

use serde_json::Value;

/// Why a well-formed response produced no usable summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The body was empty, not an array, or a zero-length array.
    NoEntries,
    /// The first element carried no non-empty `summary_text` string.
    MissingSummaryText,
}

/// Result of a single summarization attempt.
///
/// Every failure path is a variant rather than an error, so callers cannot
/// skip handling one. `HttpFailure` and `TransportFailure` carry the
/// human-readable description shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The first array element held a non-empty `summary_text`.
    Success(String),
    /// Structurally valid response without a usable summary.
    EmptyResult(EmptyReason),
    /// The endpoint answered with a non-2xx status.
    HttpFailure { status: u16, message: String },
    /// The request never produced a decodable response.
    TransportFailure { message: String },
}

impl Outcome {
    /// The line rendered on the interactive surface for this outcome.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Outcome::Success(text) => text.clone(),
            Outcome::EmptyResult(EmptyReason::NoEntries) => {
                "Failed to generate a summary. Please try again.".to_string()
            }
            Outcome::EmptyResult(EmptyReason::MissingSummaryText) => {
                "No summary text found.".to_string()
            }
            Outcome::HttpFailure { status, message } => {
                format!("HTTP error occurred: {status}: {message}")
            }
            Outcome::TransportFailure { message } => {
                format!("An error occurred: {message}")
            }
        }
    }
}

/// Classifies the JSON body of a 2xx response.
///
/// A shape mismatch is never an error here: the caller has already ruled out
/// transport and decoding failures, so whatever remains is an unusable but
/// delivered response.
pub(crate) fn classify_body(body: &Value) -> Outcome {
    let Some(entries) = body.as_array() else {
        return Outcome::EmptyResult(EmptyReason::NoEntries);
    };
    let Some(first) = entries.first() else {
        return Outcome::EmptyResult(EmptyReason::NoEntries);
    };

    match first.get("summary_text").and_then(Value::as_str) {
        Some(text) if !text.is_empty() => Outcome::Success(text.to_string()),
        _ => Outcome::EmptyResult(EmptyReason::MissingSummaryText),
    }
}
