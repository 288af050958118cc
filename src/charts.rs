use crate::config::DashboardConfig;
use crate::data::columns::ColumnRoles;
use crate::data::model::{ClassLabel, Dataset};
use crate::data::stats::ClassCounts;

// ---------------------------------------------------------------------------
// Chart data, one type per chart kind
// ---------------------------------------------------------------------------

/// Class distribution: one segment per class, in `ClassLabel::ALL` order.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub segments: Vec<(ClassLabel, usize)>,
}

impl PieChart {
    pub fn from_counts(counts: &ClassCounts) -> Self {
        Self {
            segments: ClassLabel::ALL.iter().map(|&c| (c, counts.get(c))).collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.segments.iter().map(|(_, n)| n).sum()
    }

    /// Fraction of the circle per segment; empty when nothing was counted.
    pub fn fractions(&self) -> Vec<(ClassLabel, f64)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        self.segments
            .iter()
            .map(|&(c, n)| (c, n as f64 / total as f64))
            .collect()
    }
}

/// Heart-rate histogram over fixed buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub buckets: Vec<(String, usize)>,
}

impl BarChart {
    /// Buckets are `< e0`, `[e0, e1)`, ..., `>= e_last`. A reading that
    /// compares below no edge lands in the last bucket, NaN included.
    pub fn heart_rate_histogram(dataset: &Dataset, roles: &ColumnRoles, edges: &[f64]) -> Self {
        let mut buckets = bucket_labels(edges)
            .into_iter()
            .map(|label| (label, 0usize))
            .collect::<Vec<_>>();

        let hr_idx = roles.heart_rate_index();
        for row in &dataset.rows {
            let hr = row.number_at(hr_idx);
            let slot = edges.iter().position(|&edge| hr < edge).unwrap_or(edges.len());
            buckets[slot].1 += 1;
        }

        Self { buckets }
    }
}

fn bucket_labels(edges: &[f64]) -> Vec<String> {
    let mut labels = Vec::with_capacity(edges.len() + 1);
    if let Some(first) = edges.first() {
        labels.push(format!("<{first}"));
    }
    for pair in edges.windows(2) {
        labels.push(format!("{}-{}", pair[0], pair[1]));
    }
    match edges.last() {
        Some(last) => labels.push(format!("{last}+")),
        None => labels.push("all".to_string()),
    }
    labels
}

/// Heart rate of the leading rows; x is the 1-based row number.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub points: Vec<[f64; 2]>,
}

impl LineChart {
    pub fn heart_rate_trend(dataset: &Dataset, roles: &ColumnRoles, rows: usize) -> Self {
        let hr_idx = roles.heart_rate_index();
        let points = dataset
            .rows
            .iter()
            .take(rows)
            .enumerate()
            .map(|(i, row)| [(i + 1) as f64, row.number_at(hr_idx)])
            .collect();
        Self { points }
    }

    /// Contiguous stretches without NaN; a NaN reading leaves a gap.
    pub fn runs(&self) -> Vec<Vec<[f64; 2]>> {
        self.points
            .split(|p| p[1].is_nan())
            .filter(|run| !run.is_empty())
            .map(<[[f64; 2]]>::to_vec)
            .collect()
    }
}

/// (heart rate, QRS duration) pairs of the leading rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub points: Vec<[f64; 2]>,
}

impl ScatterChart {
    pub fn heart_rate_vs_qrs(dataset: &Dataset, roles: &ColumnRoles, rows: usize) -> Self {
        let hr_idx = roles.heart_rate_index();
        let qrs_idx = roles.qrs_index();
        let points = dataset
            .rows
            .iter()
            .take(rows)
            .map(|row| [row.number_at(hr_idx), row.number_at(qrs_idx)])
            .filter(|p| !p[0].is_nan() && !p[1].is_nan())
            .collect();
        Self { points }
    }
}

// ---------------------------------------------------------------------------
// ChartSlot – at most one live chart per kind
// ---------------------------------------------------------------------------

/// Owns the chart currently shown in one place of the UI.
///
/// `generation` changes on every replacement; plots salt their widget id with
/// it, so zoom and bounds of the previous chart are not carried over.
#[derive(Debug, Clone)]
pub struct ChartSlot<T> {
    name: &'static str,
    chart: Option<T>,
    generation: u64,
}

impl<T> ChartSlot<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            chart: None,
            generation: 0,
        }
    }

    /// Release the current chart, then install `chart`.
    pub fn replace(&mut self, chart: T) {
        if self.chart.take().is_some() {
            log::debug!("Released {} chart (generation {})", self.name, self.generation);
        }
        self.generation += 1;
        self.chart = Some(chart);
    }

    pub fn clear(&mut self) {
        self.chart = None;
    }

    pub fn get(&self) -> Option<&T> {
        self.chart.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Widget id for the plot showing this slot's current chart.
    pub fn plot_id(&self) -> (&'static str, u64) {
        (self.name, self.generation)
    }
}

/// The four chart slots of the dashboard.
#[derive(Debug, Clone)]
pub struct ChartSet {
    pub pie: ChartSlot<PieChart>,
    pub bar: ChartSlot<BarChart>,
    pub line: ChartSlot<LineChart>,
    pub scatter: ChartSlot<ScatterChart>,
}

impl Default for ChartSet {
    fn default() -> Self {
        Self {
            pie: ChartSlot::new("pie"),
            bar: ChartSlot::new("bar"),
            line: ChartSlot::new("line"),
            scatter: ChartSlot::new("scatter"),
        }
    }
}

impl ChartSet {
    /// Rebuild every chart from the full dataset.
    pub fn rebuild(
        &mut self,
        dataset: &Dataset,
        roles: &ColumnRoles,
        counts: &ClassCounts,
        config: &DashboardConfig,
    ) {
        self.pie.replace(PieChart::from_counts(counts));
        self.bar
            .replace(BarChart::heart_rate_histogram(dataset, roles, &config.hr_bucket_edges));
        self.line
            .replace(LineChart::heart_rate_trend(dataset, roles, config.line_chart_rows));
        self.scatter
            .replace(ScatterChart::heart_rate_vs_qrs(dataset, roles, config.scatter_rows));
    }
}
