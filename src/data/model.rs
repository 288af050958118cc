use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Row – one data line of the CSV
// ---------------------------------------------------------------------------

/// A single record. Fields are aligned with [`Dataset::headers`] and kept as
/// raw strings; numeric and categorical readings happen at use time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field at column `index`, if the column exists.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Field at an optional column; an absent column reads as "".
    pub fn text_at(&self, index: Option<usize>) -> &str {
        index.and_then(|i| self.get(i)).unwrap_or("")
    }

    /// Numeric reading of an optional column; absent or unparseable is NaN.
    pub fn number_at(&self, index: Option<usize>) -> f64 {
        index
            .and_then(|i| self.get(i))
            .map(parse_number)
            .unwrap_or(f64::NAN)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// Header list plus rows, replaced wholesale on every load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Unique column names in first-occurrence order.
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

// ---------------------------------------------------------------------------
// ClassLabel – the three recognised rhythm classes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ClassLabel {
    Normal,
    Arrhythmia,
    Stress,
}

impl ClassLabel {
    pub const ALL: [ClassLabel; 3] = [ClassLabel::Normal, ClassLabel::Arrhythmia, ClassLabel::Stress];

    /// Lowercase canonical name as it appears in label columns.
    pub fn canonical(self) -> &'static str {
        match self {
            ClassLabel::Normal => "normal",
            ClassLabel::Arrhythmia => "arrhythmia",
            ClassLabel::Stress => "stress",
        }
    }

    /// Numeric code used by encoded label columns.
    pub fn code(self) -> &'static str {
        match self {
            ClassLabel::Normal => "0",
            ClassLabel::Arrhythmia => "1",
            ClassLabel::Stress => "2",
        }
    }

    /// Exact match after trimming and lowercasing: canonical name or code.
    pub fn matches(self, raw: &str) -> bool {
        let value = raw.trim().to_lowercase();
        value == self.canonical() || value == self.code()
    }

    pub fn from_value(raw: &str) -> Option<ClassLabel> {
        ClassLabel::ALL.into_iter().find(|c| c.matches(raw))
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClassLabel::Normal => "Normal",
            ClassLabel::Arrhythmia => "Arrhythmia",
            ClassLabel::Stress => "Stress",
        };
        write!(f, "{label}")
    }
}

// ---------------------------------------------------------------------------
// Lenient numeric reading
// ---------------------------------------------------------------------------

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("numeric prefix pattern is valid")
});

/// Read the longest leading decimal number of `s` (after leading
/// whitespace), so `"72bpm"` reads as 72. Anything without a numeric
/// prefix, including the empty string, is NaN.
pub fn parse_number(s: &str) -> f64 {
    let s = s.trim_start();
    NUMERIC_PREFIX
        .find(s)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_reads_numeric_prefix() {
        assert_eq!(parse_number("72"), 72.0);
        assert_eq!(parse_number("  72.5"), 72.5);
        assert_eq!(parse_number("72bpm"), 72.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("-3e2"), -300.0);
        assert_eq!(parse_number("1e"), 1.0);
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
    }

    #[test]
    fn parse_number_stops_at_non_ascii_digits() {
        assert_eq!(parse_number("1\u{663}"), 1.0);
        assert!(parse_number("\u{663}").is_nan());
    }

    #[test]
    fn parse_number_is_nan_without_digits() {
        assert!(parse_number("").is_nan());
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number("bpm72").is_nan());
    }

    #[test]
    fn class_label_matches_name_or_code() {
        assert_eq!(ClassLabel::from_value("0"), Some(ClassLabel::Normal));
        assert_eq!(ClassLabel::from_value("Normal "), Some(ClassLabel::Normal));
        assert_eq!(ClassLabel::from_value(" ARRHYTHMIA"), Some(ClassLabel::Arrhythmia));
        assert_eq!(ClassLabel::from_value("2"), Some(ClassLabel::Stress));
        assert_eq!(ClassLabel::from_value("abnormal"), None);
        assert_eq!(ClassLabel::from_value("3"), None);
    }

    #[test]
    fn absent_column_reads_as_blank_and_nan() {
        let row = Row::new(vec!["x".into(), "61".into()]);
        assert_eq!(row.text_at(None), "");
        assert!(row.number_at(None).is_nan());
        assert_eq!(row.number_at(Some(1)), 61.0);
        assert!(row.number_at(Some(0)).is_nan());
    }
}
