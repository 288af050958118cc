use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the ECG dashboard.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// CSV file to open at startup.
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,
}

impl Arguments {
    pub fn build() -> Self {
        Arguments::parse()
    }
}
