// ---------------------------------------------------------------------------
// Dashboard limits and thresholds
// ---------------------------------------------------------------------------

/// Fixed limits used by the table, charts and analysis panels.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Rows per table page.
    pub page_size: usize,
    /// Page buttons rendered below the table; later pages have no button.
    pub page_button_limit: usize,
    /// Leading rows plotted in the heart-rate line chart.
    pub line_chart_rows: usize,
    /// Leading rows considered for the HR vs QRS scatter.
    pub scatter_rows: usize,
    /// Upper (exclusive) edges of the heart-rate histogram buckets.
    /// Values at or above the last edge go into the open-ended bucket.
    pub hr_bucket_edges: [f64; 4],
    /// Datasets strictly larger than this are rated "Good" in size.
    pub large_dataset_threshold: usize,
    /// Normal-class share (percent) of a balanced three-class dataset.
    pub balance_target_pct: f64,
    /// Allowed distance from `balance_target_pct` still called balanced.
    pub balance_tolerance_pct: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: 50,
            page_button_limit: 10,
            line_chart_rows: 100,
            scatter_rows: 200,
            hr_bucket_edges: [80.0, 100.0, 120.0, 140.0],
            large_dataset_threshold: 500,
            balance_target_pct: 33.3,
            balance_tolerance_pct: 10.0,
        }
    }
}
