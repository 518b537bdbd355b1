/// précis - an interactive text summarization form backed by the Hugging
/// Face Inference API.
///
/// The program collects a block of text plus two length bounds from the
/// user, posts them to the hosted `facebook/bart-large-cnn` model with a
/// bearer token, and renders the returned summary. One call is in flight at
/// most; there is no retry, no caching, and no persistence.
///
/// # Architecture
///
/// - `core::config` resolves the bearer token from the environment once at
///   startup (a missing token is surfaced but not fatal)
/// - `ai::SummaryClient` issues the single POST and classifies the result
///   into an `ai::Outcome`
/// - the `precis` binary drives a terminal form loop around those two pieces
///
/// # Example
///
/// ```no_run
/// use precis::SummaryClient;
/// use precis::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     precis::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let client = SummaryClient::new(&config)?;
///
///     let outcome = client.summarize("Some long article text.", 30, 100).await;
///     println!("{}", outcome.user_message());
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;

pub use ai::client::SummaryClient;
pub use ai::outcome::{EmptyReason, Outcome};
pub use errors::SummarizeError;

/// Configure structured logging for terminal sessions.
///
/// Uses a compact formatter filtered through `RUST_LOG`, defaulting to
/// `warn` so diagnostics never interleave with the form output unless asked
/// for. The interactive surface stays the only user-facing error sink.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer().compact().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
