//! Desktop dashboard for ECG feature tables: load a CSV, detect the class,
//! heart-rate and QRS columns, then browse statistics, a filterable table and
//! charts.

pub mod app;
pub mod args;
pub mod charts;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;

pub use app::EcgDashboardApp;
pub use args::Arguments;
pub use config::DashboardConfig;
pub use error::DashboardError;
pub use state::{AppState, Section};
