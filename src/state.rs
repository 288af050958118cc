use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::charts::ChartSet;
use crate::config::DashboardConfig;
use crate::data::columns::ColumnRoles;
use crate::data::export;
use crate::data::filter::{apply_filters, ClassFilter, FilterCriteria};
use crate::data::loader;
use crate::data::model::Dataset;
use crate::data::pagination::Pager;
use crate::data::stats::AnalysisReport;
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Overview,
    Explorer,
    Visualization,
    Analysis,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::Explorer,
        Section::Visualization,
        Section::Analysis,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Explorer => "Data Explorer",
            Section::Visualization => "Visualization",
            Section::Analysis => "Analysis",
        }
    }
}

// ---------------------------------------------------------------------------
// Filter form
// ---------------------------------------------------------------------------

/// What the user typed into the explorer filter bar.
///
/// The heart-rate bounds are kept as text and only read when filters are
/// applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterForm {
    pub search: String,
    pub class: ClassFilter,
    pub hr_min: String,
    pub hr_max: String,
}

impl FilterForm {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            class: self.class,
            hr_min: FilterCriteria::parse_bound(&self.hr_min),
            hr_max: FilterCriteria::parse_bound(&self.hr_max),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// Path of the loaded file, for the top bar.
    pub source: Option<PathBuf>,

    /// Class / heart-rate / QRS columns of `dataset`.
    pub roles: ColumnRoles,

    pub filter_form: FilterForm,

    /// Indices of rows passing the current filters.
    pub visible_indices: Vec<usize>,

    pub pager: Pager,

    pub charts: ChartSet,

    /// Statistics over the full dataset.
    pub report: Option<AnalysisReport>,

    pub section: Section,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            pager: Pager::new(config.page_size),
            config,
            dataset: None,
            source: None,
            roles: ColumnRoles::default(),
            filter_form: FilterForm::default(),
            visible_indices: Vec::new(),
            charts: ChartSet::default(),
            report: None,
            section: Section::default(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset: resolve roles, reset the filters to
    /// pass-through and rebuild statistics and charts. The active section
    /// is kept.
    pub fn set_dataset(&mut self, dataset: Dataset, source: Option<&Path>) {
        let roles = ColumnRoles::infer(&dataset.headers);
        if roles.class.is_none() {
            log::warn!("No class/label column among {:?}", dataset.headers);
        }
        if roles.heart_rate.is_none() {
            log::warn!("No heart-rate column among {:?}", dataset.headers);
        }
        if roles.qrs.is_none() {
            log::warn!("No QRS column among {:?}", dataset.headers);
        }

        let report = AnalysisReport::build(&dataset, &roles, &self.config);
        self.charts
            .rebuild(&dataset, &roles, &report.class_counts, &self.config);

        self.filter_form = FilterForm::default();
        self.visible_indices = (0..dataset.len()).collect();
        self.pager.reset();

        self.roles = roles;
        self.report = Some(report);
        self.dataset = Some(dataset);
        self.source = source.map(Path::to_path_buf);
        self.status_message = None;
    }

    /// Recompute `visible_indices` from the filter form and go back to the
    /// first page.
    pub fn apply_filters(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        let criteria = self.filter_form.criteria();
        self.visible_indices = apply_filters(ds, &self.roles, &criteria);
        self.pager.reset();
        log::debug!(
            "Filters {criteria:?} -> {} of {} rows",
            self.visible_indices.len(),
            ds.len()
        );
    }

    /// Move the table to `page`; nothing else is recomputed.
    pub fn go_to_page(&mut self, page: usize) {
        self.pager.go_to(page);
    }

    /// Row indices on the current table page.
    pub fn current_page(&self) -> &[usize] {
        self.pager.page_of(&self.visible_indices)
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.visible_indices.len())
    }

    pub fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Read and ingest a CSV file. On failure the current dataset stays.
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let dataset =
            loader::load_file(path).with_context(|| format!("loading {}", path.display()))?;
        log::info!(
            "Loaded {} rows with columns {:?} from {}",
            dataset.len(),
            dataset.headers,
            path.display()
        );
        self.set_dataset(dataset, Some(path));
        log::info!(
            "Column roles: class={:?} heart_rate={:?} qrs={:?}",
            self.roles.class.as_ref().map(|c| &c.name),
            self.roles.heart_rate.as_ref().map(|c| &c.name),
            self.roles.qrs.as_ref().map(|c| &c.name)
        );
        Ok(())
    }

    /// Write the rows of the current filtered view as CSV.
    pub fn export_visible_rows(&self, path: &Path) -> Result<()> {
        let ds = self.dataset.as_ref().ok_or(DashboardError::NoDataset)?;
        export::export_rows_csv(ds, &self.visible_indices, path).context("exporting filtered rows")
    }

    /// Write the analysis report as JSON.
    pub fn export_report(&self, path: &Path) -> Result<()> {
        let report = self.report.as_ref().ok_or(DashboardError::NoDataset)?;
        export::export_report_json(report, path).context("exporting analysis report")
    }

    /// Log an error and show it in the top bar.
    pub fn report_error(&mut self, err: anyhow::Error) {
        log::error!("{err:#}");
        self.status_message = Some(format!("Error: {err:#}"));
    }
}
