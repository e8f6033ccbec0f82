//! ritrends - Research report keyword trends
//!
//! Title-based trend analytics over research report metadata: keyword
//! frequencies, themes, rising and burst keywords, keyword co-occurrence and
//! an institute x keyword heatmap.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`analytics`] - Tokenizer, aggregation, trend and relational views
//! - [`config`] - Configuration management and settings
//! - [`models`] - Report records, input normalization and filtering
//! - [`error`] - Unified error type for the input and config boundary
//!
//! # Example
//!
//! ```no_run
//! use ritrends::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let reports = load_reports(Path::new("reports.json"))?;
//!     let dashboard = Analyzer::from_config(&config).analyze(&reports, &ReportFilter::default());
//!     println!("{:?}", dashboard.top_keyword());
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod error;
pub mod models;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{Analyzer, Dashboard, Tokenizer, TrendSnapshot, YearRange};
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, Result, TrendsErrorTrait};
    pub use crate::models::{load_reports, normalize_reports, Report, ReportFilter};
}

// Direct re-exports for convenience
pub use analytics::{Analyzer, Dashboard};
pub use models::{Report, ReportFilter};
