use std::fmt;

use super::columns::ColumnRoles;
use super::model::{parse_number, ClassLabel, Dataset, Row};

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// Class drop-down selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassFilter {
    #[default]
    All,
    Only(ClassLabel),
}

impl ClassFilter {
    pub const OPTIONS: [ClassFilter; 4] = [
        ClassFilter::All,
        ClassFilter::Only(ClassLabel::Normal),
        ClassFilter::Only(ClassLabel::Arrhythmia),
        ClassFilter::Only(ClassLabel::Stress),
    ];

    fn matches(self, raw: &str) -> bool {
        match self {
            ClassFilter::All => true,
            ClassFilter::Only(label) => label.matches(raw),
        }
    }
}

impl fmt::Display for ClassFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassFilter::All => write!(f, "All Classes"),
            ClassFilter::Only(label) => write!(f, "{label}"),
        }
    }
}

/// Everything the explorer filters on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring searched in every field. Empty = no search.
    pub search: String,
    pub class: ClassFilter,
    /// Inclusive heart-rate bounds. `Some(NaN)` is a bound no row satisfies.
    pub hr_min: Option<f64>,
    pub hr_max: Option<f64>,
}

impl FilterCriteria {
    /// Interpret a bound input box: empty text means "no bound", anything
    /// else is read leniently and may be NaN.
    pub fn parse_bound(text: &str) -> Option<f64> {
        if text.is_empty() {
            None
        } else {
            Some(parse_number(text))
        }
    }

    pub fn is_pass_through(&self) -> bool {
        self.search.is_empty()
            && self.class == ClassFilter::All
            && self.hr_min.is_none()
            && self.hr_max.is_none()
    }

    fn matches(&self, row: &Row, needle: &str, roles: &ColumnRoles) -> bool {
        let matches_search =
            needle.is_empty() || row.fields.iter().any(|v| v.to_lowercase().contains(needle));

        let matches_class = self.class.matches(row.text_at(roles.class_index()));

        let hr = row.number_at(roles.heart_rate_index());
        let matches_range =
            self.hr_min.map_or(true, |min| hr >= min) && self.hr_max.map_or(true, |max| hr <= max);

        matches_search && matches_class && matches_range
    }
}

// ---------------------------------------------------------------------------
// Filter application
// ---------------------------------------------------------------------------

/// Indices of rows passing all criteria, in dataset order.
///
/// Pure: the same dataset and criteria always give the same view.
pub fn apply_filters(dataset: &Dataset, roles: &ColumnRoles, criteria: &FilterCriteria) -> Vec<usize> {
    let needle = criteria.search.to_lowercase();
    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| criteria.matches(row, &needle, roles))
        .map(|(i, _)| i)
        .collect()
}
