// Core data structures for ritrends

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::analytics::keyword_trends::YearRange;
use crate::error::{Error, Result};

/// Institute filter value meaning "no institute filter"
pub const ALL_INSTITUTES: &str = "ALL";

/// Research report as consumed by the analytics pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: Option<String>,
    pub year: Option<i32>, // None when missing or non-numeric
    pub title: String,
    pub authors: String,
    pub institute: String,
    pub url: String,
}

impl Report {
    /// Normalize one JSON record, accepting legacy field names
    ///
    /// | field     | accepted keys                                   |
    /// |-----------|-------------------------------------------------|
    /// | id        | `id`, `reportId`                                |
    /// | year      | `year`, `YEARS`, `prodYear`, `productionYear`   |
    /// | title     | `title`, `name`                                 |
    /// | authors   | `authors` (string or array), `author`           |
    /// | institute | `institute`, `org`                              |
    /// | url       | `url`, `link`                                   |
    ///
    /// Returns `None` for anything that is not a JSON object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let field = |keys: &[&str]| -> Option<&Value> {
            keys.iter()
                .filter_map(|key| obj.get(*key))
                .find(|v| !v.is_null())
        };

        let authors = match field(&["authors", "author"]) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(value_to_string)
                .collect::<Vec<_>>()
                .join(", "),
            Some(v) => value_to_string(v).unwrap_or_default(),
            None => String::new(),
        };

        Some(Self {
            id: field(&["id", "reportId"])
                .and_then(value_to_string)
                .filter(|s| !s.is_empty()),
            year: field(&["year", "YEARS", "prodYear", "productionYear"]).and_then(coerce_year),
            title: field(&["title", "name"])
                .and_then(value_to_string)
                .unwrap_or_default(),
            authors,
            institute: field(&["institute", "org"])
                .and_then(value_to_string)
                .unwrap_or_default(),
            url: field(&["url", "link"])
                .and_then(value_to_string)
                .unwrap_or_default(),
        })
    }
}

/// Coerce a JSON year to an integer
///
/// Numbers and numeric strings are accepted when finite, integral and
/// non-zero. Everything else (text, booleans, 0, fractions) is `None`.
#[must_use]
pub fn coerce_year(value: &Value) -> Option<i32> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !n.is_finite() || n.fract() != 0.0 || n == 0.0 {
        return None;
    }
    if n < f64::from(i32::MIN) || n > f64::from(i32::MAX) {
        return None;
    }
    Some(n as i32)
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Normalize a JSON array of report records
///
/// Non-object entries are skipped. Any other top-level shape yields an
/// empty list.
pub fn normalize_reports(value: &Value) -> Vec<Report> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    let reports: Vec<Report> = items.iter().filter_map(Report::from_value).collect();
    let skipped = items.len() - reports.len();
    if skipped > 0 {
        tracing::warn!(skipped = skipped, "Skipped non-object report records");
    }

    let undated = reports.iter().filter(|r| r.year.is_none()).count();
    tracing::debug!(
        reports = reports.len(),
        undated = undated,
        "Normalized report records"
    );

    reports
}

/// Load and normalize reports from a JSON file holding an array of records
pub fn load_reports(path: &Path) -> Result<Vec<Report>> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;

    if !value.is_array() {
        return Err(Error::input(
            path.display().to_string(),
            "expected a JSON array of report records",
        ));
    }

    Ok(normalize_reports(&value))
}

/// Caller-side report filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Case-insensitive title substring
    pub query: Option<String>,

    /// Exact institute name; `"ALL"` or empty means any
    pub institute: Option<String>,

    /// Inclusive lower year bound
    pub year_from: Option<i32>,

    /// Inclusive upper year bound
    pub year_to: Option<i32>,
}

impl ReportFilter {
    /// Trimmed non-empty query
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Trimmed institute, `None` for empty or `"ALL"`
    #[must_use]
    pub fn institute(&self) -> Option<&str> {
        self.institute
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty() && *i != ALL_INSTITUTES)
    }

    /// Normalized year range when both bounds are set
    #[must_use]
    pub fn year_range(&self) -> Option<YearRange> {
        match (self.year_from, self.year_to) {
            (Some(a), Some(b)) => Some(YearRange::new(a, b)),
            _ => None,
        }
    }

    /// Check whether a report passes the filter
    ///
    /// Reports without a year are never excluded by the year bounds.
    #[must_use]
    pub fn matches(&self, report: &Report) -> bool {
        if let Some(year) = report.year {
            let (lo, hi) = match self.year_range() {
                Some(range) => (Some(range.from), Some(range.to)),
                None => (self.year_from, self.year_to),
            };
            if lo.is_some_and(|lo| year < lo) || hi.is_some_and(|hi| year > hi) {
                return false;
            }
        }

        if let Some(institute) = self.institute() {
            if report.institute.trim() != institute {
                return false;
            }
        }

        if let Some(query) = self.query() {
            let title = report.title.trim().to_lowercase();
            if !title.contains(&query.to_lowercase()) {
                return false;
            }
        }

        true
    }

    /// Reports passing the filter, in input order
    #[must_use]
    pub fn apply(&self, reports: &[Report]) -> Vec<Report> {
        reports
            .iter()
            .filter(|report| self.matches(report))
            .cloned()
            .collect()
    }
}
