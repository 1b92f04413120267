//! Token counting via tiktoken-rs
//!
//! Model-aware BPE encoding with a cl100k_base fallback for models the
//! backend does not recognize (the Claude keys among them).

use std::sync::OnceLock;

use tiktoken_rs::CoreBPE;

use crate::error::AppError;

// Loading a BPE ranks file is expensive; the fallback is shared per process.
static FALLBACK: OnceLock<CoreBPE> = OnceLock::new();

fn fallback_bpe() -> Result<&'static CoreBPE, AppError> {
    if let Some(bpe) = FALLBACK.get() {
        return Ok(bpe);
    }
    let bpe = tiktoken_rs::cl100k_base().map_err(|e| AppError::Tokenizer(e.to_string()))?;
    Ok(FALLBACK.get_or_init(|| bpe))
}

/// Count tokens in `text` using the encoding for `model`
///
/// Unknown model names fall back to cl100k_base rather than failing. An
/// empty string is always 0 tokens.
pub(crate) fn count_tokens(text: &str, model: &str) -> Result<usize, AppError> {
    match tiktoken_rs::get_bpe_from_model(model) {
        Ok(bpe) => Ok(bpe.encode_with_special_tokens(text).len()),
        Err(_) => Ok(fallback_bpe()?.encode_with_special_tokens(text).len()),
    }
}
