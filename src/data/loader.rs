use std::path::Path;

use anyhow::{Context, Result};

use super::model::{Dataset, Row};
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a CSV file from disk and parse it with [`parse_csv`].
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected. A
/// leading byte-order mark is dropped.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let bytes = std::fs::read(path)
        .map_err(|e| DashboardError::io(path, e))
        .context("reading CSV file")?;
    let decoded = String::from_utf8_lossy(&bytes);
    let text = decoded.strip_prefix('\u{feff}').unwrap_or(&decoded);
    Ok(parse_csv(text))
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// Parse comma-separated text into a [`Dataset`].
///
/// * Lines are split on `\n`; whitespace-only lines are discarded.
/// * The first remaining line is the header; every cell is trimmed.
/// * Data lines are split on `,` without quote handling and each field is
///   trimmed.
/// * A line with fewer fields than headers is dropped; extra fields are
///   ignored.
/// * A repeated header name is one column: it keeps the position of its
///   first occurrence and takes the value of its last occurrence.
///
/// Never fails. Empty input gives a dataset with no headers and no rows.
pub fn parse_csv(text: &str) -> Dataset {
    let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Dataset::default();
    };

    let raw_headers: Vec<String> = header_line
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();

    // Raw header position -> column slot in the deduplicated header list.
    let mut headers: Vec<String> = Vec::with_capacity(raw_headers.len());
    let mut slot_of: Vec<usize> = Vec::with_capacity(raw_headers.len());
    for name in &raw_headers {
        let slot = match headers.iter().position(|h| h == name) {
            Some(existing) => existing,
            None => {
                headers.push(name.clone());
                headers.len() - 1
            }
        };
        slot_of.push(slot);
    }

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for line in lines {
        let values: Vec<&str> = line.split(',').map(str::trim).collect();
        if values.len() < raw_headers.len() {
            dropped += 1;
            continue;
        }

        let mut fields = vec![String::new(); headers.len()];
        for (raw_idx, &slot) in slot_of.iter().enumerate() {
            fields[slot] = values[raw_idx].to_string();
        }
        rows.push(Row::new(fields));
    }

    if dropped > 0 {
        log::debug!("Dropped {dropped} short CSV line(s)");
    }

    Dataset::new(headers, rows)
}
