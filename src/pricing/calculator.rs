//! Cost calculation
//!
//! Converts token counts into dollar costs using the static price table.

use serde::Serialize;

use crate::error::AppError;

use super::registry;

/// Cost breakdown for one API call
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CalculationResult {
    pub(crate) model: String,
    pub(crate) input_tokens: u64,
    pub(crate) output_tokens: u64,
    pub(crate) total_tokens: u64,
    pub(crate) input_cost: f64,
    pub(crate) output_cost: f64,
    pub(crate) total_cost: f64,
}

/// Round to micro-dollar precision (6 decimal places)
fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// Calculate the cost of a call against a registered model
///
/// Prices are per 1,000 tokens. Fails with `UnknownModel` for keys absent
/// from the registry.
pub(crate) fn calculate(
    model_key: &str,
    input_tokens: u64,
    output_tokens: u64,
) -> Result<CalculationResult, AppError> {
    let info = registry::lookup(model_key)?;

    let input_cost = input_tokens as f64 / 1000.0 * info.input_price;
    let output_cost = output_tokens as f64 / 1000.0 * info.output_price;
    let total_cost = input_cost + output_cost;

    Ok(CalculationResult {
        model: info.name.to_string(),
        input_tokens,
        output_tokens,
        total_tokens: input_tokens + output_tokens,
        input_cost: round6(input_cost),
        output_cost: round6(output_cost),
        total_cost: round6(total_cost),
    })
}
