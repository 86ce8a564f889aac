use std::io::Write;

use log::{error, info, warn};
use serde_json::{Map, Value};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::error::DashboardError;

pub const HEADERS: [&str; 8] = [
    "CHROM", "POS", "ID", "REF", "ALT", "QUAL", "GENE", "IMPACT",
];

/// One record that could not be turned into a row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSkip {
    pub index: usize,
    pub reason: String,
}

/// What a render actually produced, so callers and tests can check counts
/// and skips without scraping log output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub displayed: usize,
    pub skipped: Vec<RowSkip>,
}

/// Turn the annotated payload into 8-cell rows plus a skip report.
///
/// The payload must be a list of records. Records that are field mappings
/// become rows in input order, with defaults for anything missing; records
/// of any other shape cannot satisfy field access and are skipped with a
/// warning. Only a non-list payload is an error.
pub fn build_rows(records: &Value) -> Result<(Vec<Vec<String>>, Vec<RowSkip>), DashboardError> {
    let list = match records {
        Value::Array(list) => list,
        other => return Err(DashboardError::InvalidInput(describe(other).to_string())),
    };

    let mut rows = Vec::new();
    let mut skipped = Vec::new();

    for (index, entry) in list.iter().enumerate() {
        match entry {
            Value::Object(record) => rows.push(build_row(record)),
            other => {
                let reason = format!("record is {}, not a field mapping", describe(other));
                warn!("skipping record {index}: {reason}");
                skipped.push(RowSkip { index, reason });
            }
        }
    }

    Ok((rows, skipped))
}

/// Render the annotated payload as a grid table written to `writer`.
///
/// An empty list renders nothing and is not an error. Row order equals
/// input order, modulo skipped records. The table is built in full before
/// any byte is written.
pub fn render_to<W: Write>(
    records: &Value,
    writer: &mut W,
) -> Result<RenderReport, DashboardError> {
    let (rows, skipped) = build_rows(records)?;

    if rows.is_empty() && skipped.is_empty() {
        info!("no variants to display");
        return Ok(RenderReport {
            displayed: 0,
            skipped,
        });
    }

    let mut builder = Builder::default();
    builder.push_record(HEADERS);
    for row in &rows {
        builder.push_record(row.iter().map(String::as_str));
    }
    let mut table = builder.build();
    table.with(Style::ascii());

    writeln!(writer, "{table}").map_err(|e| {
        error!("failed to write variant table: {e}");
        DashboardError::Io(e)
    })?;

    info!("displayed {} variants", rows.len());
    Ok(RenderReport {
        displayed: rows.len(),
        skipped,
    })
}

/// `render_to` bound to standard output.
pub fn render(records: &Value) -> Result<RenderReport, DashboardError> {
    let stdout = std::io::stdout();
    render_to(records, &mut stdout.lock())
}

fn build_row(record: &Map<String, Value>) -> Vec<String> {
    vec![
        cell(record, "CHROM", "N/A"),
        cell(record, "POS", "N/A"),
        cell(record, "ID", "."),
        cell(record, "REF", "N/A"),
        alt_cell(record),
        cell(record, "QUAL", "."),
        cell(record, "GENE", "Unknown"),
        cell(record, "IMPACT", "Unknown"),
    ]
}

fn cell(record: &Map<String, Value>, key: &str, default: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(value) => scalar_text(value),
    }
}

/// ALT is comma-joined when it is a list; any other shape renders as N/A.
fn alt_cell(record: &Map<String, Value>) -> String {
    match record.get("ALT") {
        Some(Value::Array(alleles)) => alleles
            .iter()
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(","),
        _ => "N/A".to_string(),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a single mapping",
    }
}
