//! JSON output for scripting consumers

use crate::error::AppError;
use crate::pricing::CalculationResult;

/// Serialize one result as pretty-printed JSON
pub(crate) fn output_result_json(result: &CalculationResult) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn json_fields_match_result() {
        let result = CalculationResult {
            model: "Claude 3 Haiku".to_string(),
            input_tokens: 2000,
            output_tokens: 1000,
            total_tokens: 3000,
            input_cost: 0.0005,
            output_cost: 0.00125,
            total_cost: 0.00175,
        };

        let json = output_result_json(&result).expect("serialize");
        let value: Value = serde_json::from_str(&json).expect("valid JSON");

        assert_eq!(value["model"], "Claude 3 Haiku");
        assert_eq!(value["input_tokens"], 2000);
        assert_eq!(value["total_tokens"], 3000);
        assert_eq!(value["total_cost"], 0.00175);
    }
}
