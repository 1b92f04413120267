//! CSV export
//!
//! One row per calculation, timestamped at write time. `export_csv` and
//! `append_csv` share a fixed column order; only `export_csv` writes the
//! header.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::error::ExportError;
use crate::pricing::CalculationResult;

pub(crate) const CSV_HEADER: &str =
    "timestamp,model,input_tokens,output_tokens,total_tokens,input_cost,output_cost,total_cost";

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// ISO-8601 local time, microsecond precision
fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Build one CSV row from a result and an already-generated timestamp
fn record_row(result: &CalculationResult, timestamp: &str) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        csv_escape(timestamp),
        csv_escape(&result.model),
        result.input_tokens,
        result.output_tokens,
        result.total_tokens,
        result.input_cost,
        result.output_cost,
        result.total_cost,
    )
}

fn io_err(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Write results to a fresh CSV file, header first
///
/// Each row gets its own timestamp, generated at write time. Truncates any
/// existing file at `path`. Exporting zero results is a caller error.
pub(crate) fn export_csv(results: &[CalculationResult], path: &Path) -> Result<(), ExportError> {
    if results.is_empty() {
        return Err(ExportError::Empty);
    }

    let file = File::create(path).map_err(|e| io_err(path, e))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{CSV_HEADER}").map_err(|e| io_err(path, e))?;
    for result in results {
        writeln!(out, "{}", record_row(result, &now_timestamp())).map_err(|e| io_err(path, e))?;
    }
    out.flush().map_err(|e| io_err(path, e))
}

/// Append one freshly timestamped row to an existing CSV file
///
/// Never writes or checks for a header; creating the file with one is
/// `export_csv`'s job.
pub(crate) fn append_csv(result: &CalculationResult, path: &Path) -> Result<(), ExportError> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| io_err(path, e))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{}", record_row(result, &now_timestamp())).map_err(|e| io_err(path, e))?;
    out.flush().map_err(|e| io_err(path, e))
}
