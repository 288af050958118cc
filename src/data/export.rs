use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::model::Dataset;
use super::stats::AnalysisReport;
use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Filtered rows -> CSV
// ---------------------------------------------------------------------------

/// Write the header row and the rows at `indices` as CSV.
///
/// Unlike the reader, the writer quotes fields that need it, so values
/// containing commas survive the round trip into other tools.
pub fn write_rows_csv<W: Write>(dataset: &Dataset, indices: &[usize], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(&dataset.headers)?;
    for &idx in indices {
        if let Some(row) = dataset.rows.get(idx) {
            writer.write_record(&row.fields)?;
        }
    }
    writer
        .flush()
        .map_err(|e| DashboardError::Csv(csv::Error::from(e)))?;
    Ok(())
}

pub fn export_rows_csv(dataset: &Dataset, indices: &[usize], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| DashboardError::io(path, e))?;
    write_rows_csv(dataset, indices, file)?;
    log::info!("Exported {} rows to {}", indices.len(), path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Analysis report -> JSON
// ---------------------------------------------------------------------------

/// Pretty JSON; NaN statistics are written as `null`.
pub fn report_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn export_report_json(report: &AnalysisReport, path: &Path) -> Result<()> {
    let json = report_json(report)?;
    std::fs::write(path, json).map_err(|e| DashboardError::io(path, e))?;
    log::info!("Exported analysis report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::data::columns::ColumnRoles;
    use crate::data::loader::parse_csv;

    #[test]
    fn writes_selected_rows_with_header() {
        let ds = parse_csv("id,label\n1,normal\n2,stress\n3,normal");
        let mut buf = Vec::new();
        write_rows_csv(&ds, &[0, 2], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "id,label\n1,normal\n3,normal\n");
    }

    #[test]
    fn quotes_fields_that_need_it() {
        let ds = parse_csv("note,hr\n\"a,70");
        let mut buf = Vec::new();
        write_rows_csv(&ds, &[0], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("\"\"\"a\",70\n"), "got {text:?}");
    }

    #[test]
    fn report_json_writes_nan_as_null() {
        let ds = parse_csv("label,hr\nnormal,x");
        let roles = ColumnRoles::infer(&ds.headers);
        let report = AnalysisReport::build(&ds, &roles, &DashboardConfig::default());

        let value: serde_json::Value = serde_json::from_str(&report_json(&report).unwrap()).unwrap();
        assert!(value["heart_rate"]["mean"].is_null());
        assert_eq!(value["class_counts"]["normal"], 1);
        assert_eq!(value["class_column"], "label");
        assert_eq!(value["recommendations"]["dataset_size"], "Small");
    }

    #[test]
    fn export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        let ds = parse_csv("a\n1\n2");
        export_rows_csv(&ds, &[1], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\n2\n");
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("rows.csv");
        let ds = parse_csv("a\n1");
        let err = export_rows_csv(&ds, &[0], &path).unwrap_err();
        assert!(matches!(err, DashboardError::Io { .. }));
    }
}
