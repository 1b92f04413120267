//! CLI argument definitions
//!
//! Flag parsing and model-key validation. Each token side must come from
//! exactly one source (an explicit count or a text to tokenize); clap arg
//! groups enforce this before any computation runs.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::pricing::registry;

#[derive(Parser)]
#[command(name = "tokcost")]
#[command(about = "Estimate LLM API call costs from token counts or raw text", version)]
#[command(group(ArgGroup::new("input").required(true)))]
#[command(group(ArgGroup::new("output").required(true)))]
pub(crate) struct Cli {
    /// Model to price (e.g. "gpt4", "claude-sonnet")
    #[arg(short, long, value_parser = parse_model_key, value_name = "KEY")]
    pub(crate) model: String,

    /// Number of input tokens
    #[arg(long, group = "input", value_name = "N")]
    pub(crate) input_tokens: Option<u64>,

    /// Text to count input tokens from
    #[arg(long, group = "input", value_name = "TEXT")]
    pub(crate) input_text: Option<String>,

    /// Number of output tokens
    #[arg(long, group = "output", value_name = "N")]
    pub(crate) output_tokens: Option<u64>,

    /// Text to count output tokens from
    #[arg(long, group = "output", value_name = "TEXT")]
    pub(crate) output_text: Option<String>,

    /// Export the result to a fresh CSV file (header included)
    #[arg(short, long, value_name = "PATH")]
    pub(crate) export: Option<PathBuf>,

    /// Append the result to an existing CSV ledger (no header written)
    #[arg(short, long, value_name = "PATH", conflicts_with = "export")]
    pub(crate) append: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long)]
    pub(crate) json: bool,
}

/// Reject unregistered model keys at parse time, listing the valid ones
fn parse_model_key(key: &str) -> Result<String, String> {
    if registry::contains(key) {
        Ok(key.to_string())
    } else {
        Err(format!(
            "\"{key}\" is not a known model. Available: {}",
            registry::model_keys().join(", ")
        ))
    }
}
