//! Data layer: parsing, column detection, filtering, statistics, export.
//!
//! Architecture:
//! ```text
//!      .csv text
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  split lines/fields → Dataset (raw strings)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ columns   │  header names → ColumnRoles (class, heart rate, QRS)
//!   └──────────┘
//!        │
//!        ├──────────────────────┐
//!        ▼                      ▼
//!   ┌──────────┐          ┌──────────┐
//!   │  filter   │          │  stats    │  full dataset → AnalysisReport
//!   └──────────┘          └──────────┘
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ pagination │  filtered indices → current page
//!   └────────────┘
//! ```

pub mod columns;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pagination;
pub mod stats;
