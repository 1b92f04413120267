//! Static model price table
//!
//! Prices are USD per 1,000 tokens (as of January 2025). The table is fixed
//! at build time and read-only for the life of the process.

use crate::error::AppError;

/// Display name and per-1K-token prices for one model
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModelInfo {
    pub(crate) name: &'static str,
    pub(crate) input_price: f64,
    pub(crate) output_price: f64,
}

/// Registration order is the order shown in error messages
#[rustfmt::skip]
static MODELS: &[(&str, ModelInfo)] = &[
    ("gpt4",          ModelInfo { name: "GPT-4",             input_price: 0.03,    output_price: 0.06 }),
    ("gpt4-turbo",    ModelInfo { name: "GPT-4 Turbo",       input_price: 0.01,    output_price: 0.03 }),
    ("gpt35",         ModelInfo { name: "GPT-3.5 Turbo",     input_price: 0.0015,  output_price: 0.002 }),
    ("claude-sonnet", ModelInfo { name: "Claude 3.5 Sonnet", input_price: 0.003,   output_price: 0.015 }),
    ("claude-haiku",  ModelInfo { name: "Claude 3 Haiku",    input_price: 0.00025, output_price: 0.00125 }),
    ("claude-opus",   ModelInfo { name: "Claude 3 Opus",     input_price: 0.015,   output_price: 0.075 }),
];

/// Look up pricing for a model key
pub(crate) fn lookup(key: &str) -> Result<&'static ModelInfo, AppError> {
    MODELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, info)| info)
        .ok_or_else(|| AppError::UnknownModel {
            key: key.to_string(),
            available: model_keys().join(", "),
        })
}

/// All registered model keys, in registration order
pub(crate) fn model_keys() -> Vec<&'static str> {
    MODELS.iter().map(|(k, _)| *k).collect()
}

pub(crate) fn contains(key: &str) -> bool {
    MODELS.iter().any(|(k, _)| *k == key)
}
