mod csv;
mod format;
mod json;
mod report;

pub(crate) use csv::{append_csv, export_csv};
pub(crate) use json::output_result_json;
pub(crate) use report::render_report;
