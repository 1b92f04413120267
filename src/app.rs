//! Driver logic
//!
//! Resolves token counts from their flag sources, runs the calculation, and
//! handles printing and CSV export.

use crate::cli::Cli;
use crate::error::AppError;
use crate::output::{append_csv, export_csv, output_result_json, render_report};
use crate::pricing::calculate;
use crate::tokenizer::count_tokens;

/// Resolve a token count from its explicit flag or its text flag
///
/// clap guarantees exactly one source per side; the error arm covers any
/// non-CLI caller. An explicit 0 is a valid count.
fn resolve_tokens(explicit: Option<u64>, text: Option<&str>, model: &str) -> Result<u64, AppError> {
    match (explicit, text) {
        (Some(n), _) => Ok(n),
        (None, Some(t)) => Ok(count_tokens(t, model)? as u64),
        (None, None) => Err(AppError::MissingTokenSource),
    }
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let input_tokens = resolve_tokens(cli.input_tokens, cli.input_text.as_deref(), &cli.model)?;
    let output_tokens = resolve_tokens(cli.output_tokens, cli.output_text.as_deref(), &cli.model)?;

    let result = calculate(&cli.model, input_tokens, output_tokens)?;

    if cli.json {
        println!("{}", output_result_json(&result)?);
    } else {
        println!("{}", render_report(&result));
    }

    // Confirmation lines are suppressed under --json to keep stdout parseable
    if let Some(path) = &cli.export {
        export_csv(std::slice::from_ref(&result), path)?;
        if !cli.json {
            println!("Results exported to {}", path.display());
        }
    }
    if let Some(path) = &cli.append {
        append_csv(&result, path)?;
        if !cli.json {
            println!("Result appended to {}", path.display());
        }
    }

    Ok(())
}
