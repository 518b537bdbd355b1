//! Interactive terminal form for the summarization client.
//!
//! One user action at a time: read a text block and two length bounds,
//! submit, render the outcome, repeat. The submit step awaits the single
//! in-flight call, so the loop is blocked for its duration.

use std::io::{self, Write as _};

use anyhow::Result;
use precis::SummaryClient;
use precis::core::config::AppConfig;
use tracing::warn;

/// Upper bound of the length inputs, matching the original form's sliders.
const LENGTH_LIMIT: u32 = 150;
const DEFAULT_MIN_LENGTH: u32 = 30;
const DEFAULT_MAX_LENGTH: u32 = 100;

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}");
    io::stdout().flush()
}

/// Reads a multi-line text block terminated by a lone `.` line.
///
/// Returns `None` when the user types `quit` as the first line or when
/// stdin is exhausted before any content arrives.
fn read_text_block(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<String>> {
    let mut block = String::new();
    let mut first = true;

    loop {
        let Some(line) = lines.next() else {
            return Ok(if block.is_empty() { None } else { Some(block) });
        };
        let line = line?;

        if first && line.trim() == "quit" {
            return Ok(None);
        }
        first = false;

        if line.trim() == "." {
            return Ok(Some(block));
        }

        if !block.is_empty() {
            block.push('\n');
        }
        block.push_str(&line);
    }
}

/// Reads one bounded length value, falling back to `default` on a blank or
/// non-numeric line and clamping to the form's upper bound.
fn read_length(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
    default: u32,
) -> Result<u32> {
    prompt(&format!("{label} (0-{LENGTH_LIMIT}, default {default}): "))?;

    let Some(line) = lines.next() else {
        return Ok(default);
    };
    let trimmed = line?.trim().to_string();
    if trimmed.is_empty() {
        return Ok(default);
    }

    match trimmed.parse::<u32>() {
        Ok(value) => Ok(value.min(LENGTH_LIMIT)),
        Err(_) => {
            println!("Not a number, using {default}.");
            Ok(default)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    precis::setup_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!("Configuration error: {e}");
            println!("API token not found! Please check your .env file.");
            // Later calls still go out, with an empty bearer credential.
            AppConfig {
                api_token: String::new(),
            }
        }
    };
    let client = SummaryClient::new(&config)?;

    println!("Text Summarization");
    println!(
        "This is a simple program to demonstrate text summarization using the Hugging Face API."
    );

    let mut lines = io::stdin().lines();
    loop {
        println!();
        println!(
            "Enter the text you want to summarize, finish with a single '.' line ('quit' to exit):"
        );
        let Some(text) = read_text_block(&mut lines)? else {
            break;
        };

        let min_length = read_length(
            &mut lines,
            "Minimum length of the summary",
            DEFAULT_MIN_LENGTH,
        )?;
        let max_length = read_length(
            &mut lines,
            "Maximum length of the summary",
            DEFAULT_MAX_LENGTH,
        )?;

        let outcome = client.summarize(&text, min_length, max_length).await;
        println!("{}", outcome.user_message());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(lines: &[&str]) -> impl Iterator<Item = io::Result<String>> {
        lines
            .iter()
            .map(|s| Ok((*s).to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_read_text_block_joins_lines_until_dot() {
        let mut lines = feed(&["first line", "second line", ".", "leftover"]);
        let block = read_text_block(&mut lines).unwrap();
        assert_eq!(block, Some("first line\nsecond line".to_string()));
    }

    #[test]
    fn test_read_text_block_quit_and_eof() {
        let mut lines = feed(&["quit"]);
        assert_eq!(read_text_block(&mut lines).unwrap(), None);

        let mut lines = feed(&[]);
        assert_eq!(read_text_block(&mut lines).unwrap(), None);

        // EOF after content still submits what was typed.
        let mut lines = feed(&["dangling text"]);
        assert_eq!(
            read_text_block(&mut lines).unwrap(),
            Some("dangling text".to_string())
        );
    }

    #[test]
    fn test_read_length_defaults_and_clamps() {
        let mut lines = feed(&[""]);
        assert_eq!(read_length(&mut lines, "Min", 30).unwrap(), 30);

        let mut lines = feed(&["abc"]);
        assert_eq!(read_length(&mut lines, "Min", 30).unwrap(), 30);

        let mut lines = feed(&["9000"]);
        assert_eq!(read_length(&mut lines, "Max", 100).unwrap(), LENGTH_LIMIT);

        let mut lines = feed(&["42"]);
        assert_eq!(read_length(&mut lines, "Max", 100).unwrap(), 42);
    }
}
