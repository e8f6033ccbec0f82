pub mod analyze;
pub mod snapshot;
pub mod tokenize;

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use ritrends::models::{load_reports, Report, ReportFilter};

// Re-export command functions for convenience
pub use analyze::analyze;
pub use snapshot::snapshot;
pub use tokenize::tokenize;

/// Report file and filter flags shared by the analysis commands
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// JSON file holding an array of report records
    #[arg(short, long)]
    pub input: PathBuf,

    /// Case-insensitive title substring
    #[arg(short, long)]
    pub query: Option<String>,

    /// Institute name (ALL for every institute)
    #[arg(long)]
    pub institute: Option<String>,

    /// First year (inclusive)
    #[arg(long)]
    pub from: Option<i32>,

    /// Last year (inclusive)
    #[arg(long)]
    pub to: Option<i32>,
}

impl FilterArgs {
    pub fn filter(&self) -> ReportFilter {
        ReportFilter {
            query: self.query.clone(),
            institute: self.institute.clone(),
            year_from: self.from,
            year_to: self.to,
        }
    }

    pub fn load(&self) -> Result<Vec<Report>> {
        let reports = load_reports(&self.input)
            .with_context(|| format!("Failed to read reports from {}", self.input.display()))?;
        tracing::info!(reports = reports.len(), "Loaded reports");
        Ok(reports)
    }
}
