use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::columns::ColumnRoles;
use super::model::{ClassLabel, Dataset};
use crate::config::DashboardConfig;

// ---------------------------------------------------------------------------
// Class counts
// ---------------------------------------------------------------------------

/// Rows per recognised class. Values matching no class are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassCounts {
    pub normal: usize,
    pub arrhythmia: usize,
    pub stress: usize,
}

impl ClassCounts {
    /// Exact (trimmed, case-insensitive) match on name or numeric code.
    pub fn tally(dataset: &Dataset, roles: &ColumnRoles) -> Self {
        let class_idx = roles.class_index();
        let mut counts = ClassCounts::default();
        for row in &dataset.rows {
            match ClassLabel::from_value(row.text_at(class_idx)) {
                Some(ClassLabel::Normal) => counts.normal += 1,
                Some(ClassLabel::Arrhythmia) => counts.arrhythmia += 1,
                Some(ClassLabel::Stress) => counts.stress += 1,
                None => {}
            }
        }
        counts
    }

    pub fn get(&self, label: ClassLabel) -> usize {
        match label {
            ClassLabel::Normal => self.normal,
            ClassLabel::Arrhythmia => self.arrhythmia,
            ClassLabel::Stress => self.stress,
        }
    }
}

// ---------------------------------------------------------------------------
// Data quality
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DataQuality {
    pub total_records: usize,
    /// Empty cells over all rows and columns.
    pub missing_values: usize,
    /// Rows minus distinct rows (exact field-by-field equality).
    pub duplicate_rows: usize,
    pub columns: usize,
}

impl DataQuality {
    pub fn assess(dataset: &Dataset) -> Self {
        let missing_values = dataset
            .rows
            .iter()
            .flat_map(|row| row.fields.iter())
            .filter(|v| v.is_empty())
            .count();

        let unique: HashSet<&Vec<String>> = dataset.rows.iter().map(|r| &r.fields).collect();

        DataQuality {
            total_records: dataset.len(),
            missing_values,
            duplicate_rows: dataset.len() - unique.len(),
            columns: dataset.column_count(),
        }
    }
}

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Summary of a numeric sample. Every field is NaN for an empty sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    /// Element at `count / 2` of the ascending sort; the upper of the two
    /// middle elements when `count` is even.
    pub median: f64,
    /// Population standard deviation (divides by `count`).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl DescriptiveStats {
    pub fn compute(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let median = sorted.get(sorted.len() / 2).copied().unwrap_or(f64::NAN);

        let std_dev = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();

        DescriptiveStats {
            count: values.len(),
            mean,
            median,
            std_dev,
            min: values.iter().copied().fold(f64::NAN, f64::min),
            max: values.iter().copied().fold(f64::NAN, f64::max),
        }
    }

    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }
}

/// Parseable heart-rate values of every row, in order.
pub fn heart_rate_values(dataset: &Dataset, roles: &ColumnRoles) -> Vec<f64> {
    let hr_idx = roles.heart_rate_index();
    dataset
        .rows
        .iter()
        .map(|row| row.number_at(hr_idx))
        .filter(|v| !v.is_nan())
        .collect()
}

/// Mean heart rate of rows whose class value contains "normal" anywhere,
/// case-insensitively. Looser than [`ClassCounts::tally`]: "Abnormal"
/// qualifies here.
pub fn normal_group_mean(dataset: &Dataset, roles: &ColumnRoles) -> f64 {
    let class_idx = roles.class_index();
    let hr_idx = roles.heart_rate_index();
    let values: Vec<f64> = dataset
        .rows
        .iter()
        .filter(|row| row.text_at(class_idx).to_lowercase().contains("normal"))
        .map(|row| row.number_at(hr_idx))
        .filter(|v| !v.is_nan())
        .collect();
    values.iter().sum::<f64>() / values.len() as f64
}

// ---------------------------------------------------------------------------
// Analysis report
// ---------------------------------------------------------------------------

/// Class shares in percent of all records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassShares {
    pub normal: f64,
    pub arrhythmia: f64,
    pub stress: f64,
}

impl ClassShares {
    pub fn from_counts(counts: &ClassCounts, total: usize) -> Self {
        let pct = |n: usize| n as f64 / total as f64 * 100.0;
        ClassShares {
            normal: pct(counts.normal),
            arrhythmia: pct(counts.arrhythmia),
            stress: pct(counts.stress),
        }
    }

    pub fn get(&self, label: ClassLabel) -> f64 {
        match label {
            ClassLabel::Normal => self.normal,
            ClassLabel::Arrhythmia => self.arrhythmia,
            ClassLabel::Stress => self.stress,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeartRateInsights {
    pub overall_mean: f64,
    pub normal_mean: f64,
    pub min: f64,
    pub max: f64,
    pub variance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeRating {
    Good,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BalanceRating {
    Balanced,
    Imbalanced,
}

/// Fixed at `Good`; blanks and duplicates only show up in [`DataQuality`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QualityRating {
    Good,
}

impl fmt::Display for SizeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SizeRating::Good => "Good",
            SizeRating::Small => "Small",
        })
    }
}

impl fmt::Display for BalanceRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BalanceRating::Balanced => "Balanced",
            BalanceRating::Imbalanced => "Imbalanced",
        })
    }
}

impl fmt::Display for QualityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QualityRating::Good => "Good",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub dataset_size: SizeRating,
    pub class_balance: BalanceRating,
    pub data_quality: QualityRating,
}

/// Everything the Overview and Analysis sections show, computed once per
/// load over the full dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub class_column: Option<String>,
    pub heart_rate_column: Option<String>,
    pub qrs_column: Option<String>,
    pub heart_rate: DescriptiveStats,
    pub class_counts: ClassCounts,
    pub class_shares: ClassShares,
    pub quality: DataQuality,
    pub insights: HeartRateInsights,
    pub recommendations: Recommendations,
}

impl AnalysisReport {
    pub fn build(dataset: &Dataset, roles: &ColumnRoles, config: &DashboardConfig) -> Self {
        let heart_rate = DescriptiveStats::compute(&heart_rate_values(dataset, roles));
        let class_counts = ClassCounts::tally(dataset, roles);
        let class_shares = ClassShares::from_counts(&class_counts, dataset.len());
        let quality = DataQuality::assess(dataset);

        let insights = HeartRateInsights {
            overall_mean: heart_rate.mean,
            normal_mean: normal_group_mean(dataset, roles),
            min: heart_rate.min,
            max: heart_rate.max,
            variance: heart_rate.variance(),
        };

        // Balance is judged on the share as displayed (one decimal).
        let normal_pct = (class_shares.normal * 10.0).round() / 10.0;
        let balanced = (normal_pct - config.balance_target_pct).abs() < config.balance_tolerance_pct;

        let recommendations = Recommendations {
            dataset_size: if dataset.len() > config.large_dataset_threshold {
                SizeRating::Good
            } else {
                SizeRating::Small
            },
            class_balance: if balanced {
                BalanceRating::Balanced
            } else {
                BalanceRating::Imbalanced
            },
            data_quality: QualityRating::Good,
        };

        AnalysisReport {
            class_column: roles.class.as_ref().map(|c| c.name.clone()),
            heart_rate_column: roles.heart_rate.as_ref().map(|c| c.name.clone()),
            qrs_column: roles.qrs.as_ref().map(|c| c.name.clone()),
            heart_rate,
            class_counts,
            class_shares,
            quality,
            insights,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    fn load(text: &str) -> (Dataset, ColumnRoles) {
        let ds = parse_csv(text);
        let roles = ColumnRoles::infer(&ds.headers);
        (ds, roles)
    }

    #[test]
    fn descriptive_stats_of_four_values() {
        let stats = DescriptiveStats::compute(&[90.0, 60.0, 80.0, 70.0]);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 75.0);
        assert!((stats.std_dev - 11.1803).abs() < 1e-3, "std_dev = {}", stats.std_dev);
        assert_eq!(stats.median, 80.0, "upper-middle element for even counts");
        assert_eq!(stats.min, 60.0);
        assert_eq!(stats.max, 90.0);
        assert!((stats.variance() - 125.0).abs() < 1e-9);
    }

    #[test]
    fn median_of_odd_count_is_middle() {
        let stats = DescriptiveStats::compute(&[5.0, 1.0, 3.0]);
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn empty_sample_is_all_nan() {
        let stats = DescriptiveStats::compute(&[]);
        assert_eq!(stats.count, 0);
        for v in [stats.mean, stats.median, stats.std_dev, stats.min, stats.max] {
            assert!(v.is_nan());
        }
    }

    #[test]
    fn heart_rate_values_skip_unparseable() {
        let (ds, roles) = load("hr,label\n60,normal\n,normal\nx,stress\n70,stress");
        assert_eq!(heart_rate_values(&ds, &roles), vec![60.0, 70.0]);
    }

    #[test]
    fn class_counts_use_exact_match() {
        let (ds, roles) = load(
            "label,hr\n0,60\nnormal,61\nNormal ,62\n1,90\nARRHYTHMIA,91\n2,120\nabnormal,70\n3,70",
        );
        let counts = ClassCounts::tally(&ds, &roles);
        assert_eq!(
            counts,
            ClassCounts {
                normal: 3,
                arrhythmia: 2,
                stress: 1
            }
        );
    }

    #[test]
    fn class_counts_without_class_column_are_zero() {
        let (ds, roles) = load("hr\n60\n70");
        assert_eq!(ClassCounts::tally(&ds, &roles), ClassCounts::default());
    }

    #[test]
    fn normal_mean_uses_substring_match() {
        let (ds, roles) = load("label,hr\nnormal,60\nAbnormal,80\n0,100\nnormal,bad\nstress,200");
        // "0" counts as normal for tallies but not here; "Abnormal" does.
        assert_eq!(normal_group_mean(&ds, &roles), 70.0);
    }

    #[test]
    fn normal_mean_is_nan_without_matches() {
        let (ds, roles) = load("label,hr\nstress,60");
        assert!(normal_group_mean(&ds, &roles).is_nan());
    }

    #[test]
    fn data_quality_counts_blanks_and_duplicates() {
        let (ds, _) = load("a,b\n1,2\n1,2\n,2\n1,\n1,2\n2,1");
        let q = DataQuality::assess(&ds);
        assert_eq!(q.total_records, 6);
        assert_eq!(q.missing_values, 2);
        assert_eq!(q.duplicate_rows, 2);
        assert_eq!(q.columns, 2);
    }

    #[test]
    fn quality_recommendation_stays_good_with_duplicates() {
        let (ds, roles) = load("label,hr\nnormal,70\nnormal,70\nstress,");
        let report = AnalysisReport::build(&ds, &roles, &DashboardConfig::default());
        assert_eq!(report.quality.duplicate_rows, 1);
        assert_eq!(report.quality.missing_values, 1);
        assert_eq!(report.recommendations.data_quality, QualityRating::Good);
    }

    #[test]
    fn report_for_balanced_three_rows() {
        let (ds, roles) = load("Class,Heart_Rate\nNormal,70\nArrhythmia,110\nStress,130");
        let report = AnalysisReport::build(&ds, &roles, &DashboardConfig::default());

        assert_eq!(
            report.class_counts,
            ClassCounts {
                normal: 1,
                arrhythmia: 1,
                stress: 1
            }
        );
        assert!((report.class_shares.normal - 33.333).abs() < 1e-2);
        assert_eq!(report.insights.normal_mean, 70.0);
        assert_eq!(report.recommendations.class_balance, BalanceRating::Balanced);
        assert_eq!(report.recommendations.dataset_size, SizeRating::Small);
        assert_eq!(report.recommendations.data_quality, QualityRating::Good);
        assert_eq!(report.heart_rate_column.as_deref(), Some("Heart_Rate"));
        assert_eq!(report.qrs_column, None);
    }

    #[test]
    fn report_on_empty_dataset_degrades_to_nan() {
        let (ds, roles) = load("label,hr\n");
        let report = AnalysisReport::build(&ds, &roles, &DashboardConfig::default());
        assert!(report.heart_rate.mean.is_nan());
        assert!(report.class_shares.normal.is_nan());
        assert!(report.insights.normal_mean.is_nan());
        assert_eq!(report.quality.total_records, 0);
        assert_eq!(report.recommendations.class_balance, BalanceRating::Imbalanced);
    }
}
