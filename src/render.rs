//! Output rendering for resolved configuration records.

use std::fmt;

use thiserror::Error;

use crate::inventory::IpConfiguration;

/// Number of table columns.
const COLUMNS: usize = 7;

/// Table column headers, in display order.
const HEADERS: [&str; COLUMNS] = [
    "Adapter",
    "Type",
    "Status",
    "IP address",
    "Subnet mask",
    "MAC address",
    "DNS domain",
];

/// Output format for resolved records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Error type for rendering failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON encoding failed.
    #[error("Failed to encode records as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders records in the requested format.
///
/// # Errors
///
/// Returns [`RenderError`] if JSON encoding fails.
pub fn render(records: &[IpConfiguration], format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Table => Ok(render_table(records)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}

/// Renders records as an aligned table with a header and separator row.
fn render_table(records: &[IpConfiguration]) -> String {
    let rows: Vec<[String; COLUMNS]> = records.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(str::len);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADERS.map(str::to_string), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for cells in &rows {
        lines.push(format_row(cells, &widths));
    }
    lines.join("\n")
}

fn row_cells(record: &IpConfiguration) -> [String; COLUMNS] {
    [
        record.adapter_name.clone(),
        record.adapter_type.clone(),
        record.status.to_string(),
        record.ip_address.clone(),
        record.subnet_mask.clone(),
        record.mac_address.clone(),
        record.dns_domain.clone(),
    ]
}

fn format_row(cells: &[String; COLUMNS], widths: &[usize; COLUMNS]) -> String {
    let mut parts = Vec::with_capacity(COLUMNS);
    for (cell, width) in cells.iter().zip(widths) {
        let width = *width;
        parts.push(format!("{cell:<width$}"));
    }
    parts.join("  ").trim_end().to_string()
}
