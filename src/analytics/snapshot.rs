//! Exportable JSON summary of a trend analysis

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use super::keyword_trends::YearRange;
use crate::error::Result;
use crate::models::{ReportFilter, ALL_INSTITUTES};

/// Filters recorded in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotFilters {
    pub q: String,
    pub institute: String,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
}

impl SnapshotFilters {
    /// Record `filter` with the effective year range
    #[must_use]
    pub fn new(filter: &ReportFilter, range: Option<YearRange>) -> Self {
        Self {
            q: filter.query().unwrap_or_default().to_string(),
            institute: filter
                .institute()
                .unwrap_or(ALL_INSTITUTES)
                .to_string(),
            year_from: range.map(|r| r.from),
            year_to: range.map(|r| r.to),
        }
    }
}

/// Top keywords, bigrams and themes plus five-year keyword bins
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSnapshot {
    pub generated_at: DateTime<Utc>,
    pub filters: SnapshotFilters,
    pub total: usize,
    pub top_keywords: Vec<(String, u64)>,
    pub top_bigrams: Vec<(String, u64)>,
    pub themes: Vec<(String, u64)>,
    pub five_year_top_keywords: BTreeMap<String, Vec<(String, u64)>>,
}

impl TrendSnapshot {
    /// Default export file name, e.g. `ri_trends_2018-2024_ALL.json`
    #[must_use]
    pub fn file_name(&self) -> String {
        let years = match (self.filters.year_from, self.filters.year_to) {
            (Some(from), Some(to)) => format!("{from}-{to}"),
            _ => String::from("all"),
        };
        format!(
            "ri_trends_{years}_{}.json",
            file_name_component(&self.filters.institute)
        )
    }

    /// Pretty-printed JSON document
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Replace characters that cannot appear in a single path component
fn file_name_component(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
