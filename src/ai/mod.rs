//! Summarization client and outcome classification.

pub mod client;
pub mod outcome;

// Re-export main types for convenience
pub use client::SummaryClient;
pub use outcome::{EmptyReason, Outcome};
