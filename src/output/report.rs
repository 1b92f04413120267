//! Human-readable cost report
//!
//! Renders one calculation as a bordered table block.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use crate::pricing::CalculationResult;

use super::format::{format_cost, format_number};

/// Render the cost breakdown as a bordered text block
pub(crate) fn render_report(result: &CalculationResult) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Model".to_string(),
            result.model.clone(),
            String::new(),
        ]);

    table.add_row(vec![
        "Input tokens".to_string(),
        format_number(result.input_tokens),
        format_cost(result.input_cost),
    ]);
    table.add_row(vec![
        "Output tokens".to_string(),
        format_number(result.output_tokens),
        format_cost(result.output_cost),
    ]);
    table.add_row(vec![
        "Total tokens".to_string(),
        format_number(result.total_tokens),
        String::new(),
    ]);
    table.add_row(vec![
        "TOTAL COST".to_string(),
        String::new(),
        format_cost(result.total_cost),
    ]);

    table.to_string()
}
