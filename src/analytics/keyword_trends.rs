//! Keyword trend analysis over yearly report counts
//!
//! This module provides functionality for:
//! - Per-year keyword rates normalized per 100 reports
//! - Rising keywords from an early/late split of the year range
//! - Burst keywords from the largest year-over-year rate jump
//!
//! Short or empty inputs never fail; the result carries an [`Insufficient`]
//! reason and a human-readable `meta` line instead.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

use super::counters::{per_hundred, round1, Counters};
use crate::config::{BurstConfig, RisingConfig};

/// Why a trend view could not be computed
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insufficient {
    #[error("표시할 데이터가 없습니다")]
    NoData,

    #[error("연도 범위가 너무 짧아 급상승 분석을 할 수 없습니다 ({from}–{to})")]
    RangeTooShort { from: i32, to: i32 },

    #[error("연도 구간이 너무 짧아 버스트 분석이 어렵습니다 (연도 {found}개)")]
    TooFewYears { found: usize },
}

/// Inclusive year range with normalized bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    /// Create a range, swapping reversed bounds
    #[must_use]
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            from: a.min(b),
            to: a.max(b),
        }
    }

    /// Check whether `year` is inside the range
    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        (self.from..=self.to).contains(&year)
    }

    /// Display label like `2018–2024`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}–{}", self.from, self.to)
    }
}

/// Early and late halves of a year range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitWindows {
    pub early: YearRange,
    pub late: YearRange,
}

impl SplitWindows {
    /// Split at `mid = floor((from + to) / 2)`
    ///
    /// Returns `None` when the late window `[mid + 1, to]` is empty.
    #[must_use]
    pub fn split(range: YearRange) -> Option<Self> {
        if range.from >= range.to {
            return None;
        }
        // from < to, so mid < to and mid + 1 cannot overflow
        let mid = (i64::from(range.from) + i64::from(range.to)).div_euclid(2) as i32;
        Some(Self {
            early: YearRange {
                from: range.from,
                to: mid,
            },
            late: YearRange {
                from: mid + 1,
                to: range.to,
            },
        })
    }
}

/// Keyword whose late-window count exceeds its early-window count
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RisingKeyword {
    pub keyword: String,
    pub early: u64,
    pub late: u64,
    pub delta: i64,
    pub ratio: f64,
}

/// Result of the rising keyword analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RisingKeywords {
    /// Description of the comparison, or the insufficiency reason
    pub meta: String,

    /// Windows compared, when the range allowed a split
    pub windows: Option<SplitWindows>,

    /// Ranked keywords (empty when insufficient)
    pub items: Vec<RisingKeyword>,

    /// Set when the analysis could not run
    pub insufficient: Option<Insufficient>,
}

impl RisingKeywords {
    pub(crate) fn insufficient(reason: Insufficient) -> Self {
        Self {
            meta: reason.to_string(),
            windows: None,
            items: Vec::new(),
            insufficient: Some(reason),
        }
    }
}

/// Compare early vs late halves of `range` by raw keyword occurrences
///
/// Keywords with fewer than `min_late_count` late occurrences, or with no
/// increase, are dropped. Ranking is by `(late + 1) / (early + 1)` then by
/// delta, both descending; remaining ties keep keyword insertion order.
pub fn rising_keywords(
    counters: &Counters,
    range: YearRange,
    config: &RisingConfig,
) -> RisingKeywords {
    let Some(windows) = SplitWindows::split(range) else {
        tracing::debug!(from = range.from, to = range.to, "Range too short for rising keywords");
        return RisingKeywords::insufficient(Insufficient::RangeTooShort {
            from: range.from,
            to: range.to,
        });
    };

    let mut items: Vec<RisingKeyword> = counters
        .keyword
        .iter()
        .filter_map(|(keyword, _)| {
            let early =
                counters.keyword_in_window(keyword, windows.early.from, windows.early.to);
            let late = counters.keyword_in_window(keyword, windows.late.from, windows.late.to);
            if late < config.min_late_count {
                return None;
            }

            let delta = late as i64 - early as i64;
            if delta <= 0 {
                return None;
            }

            Some(RisingKeyword {
                keyword: keyword.to_string(),
                early,
                late,
                delta,
                ratio: (late + 1) as f64 / (early + 1) as f64,
            })
        })
        .collect();

    items.sort_by(|a, b| {
        b.ratio
            .partial_cmp(&a.ratio)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.delta.cmp(&a.delta))
    });
    items.truncate(config.limit);

    RisingKeywords {
        meta: format!(
            "전반({}) 대비 후반({}) 증가분(후반-전반)",
            windows.early.label(),
            windows.late.label()
        ),
        windows: Some(windows),
        items,
        insufficient: None,
    }
}

/// Largest single-step rate increase of a keyword
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstKeyword {
    pub keyword: String,

    /// Year reached by the largest positive transition
    pub best_year: i32,

    /// Rate increase (per 100 reports) of that transition
    pub best_delta: f64,

    /// Rate in the first year of the range
    pub first_rate: f64,

    /// Rate in the last year of the range
    pub last_rate: f64,

    /// Rate for every year of the range
    pub rates: Vec<f64>,
}

/// Result of the burst analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstKeywords {
    pub meta: String,

    /// Years the rates refer to, ascending
    pub years: Vec<i32>,

    pub items: Vec<BurstKeyword>,

    pub insufficient: Option<Insufficient>,
}

impl BurstKeywords {
    pub(crate) fn insufficient(reason: Insufficient) -> Self {
        Self {
            meta: reason.to_string(),
            years: Vec::new(),
            items: Vec::new(),
            insufficient: Some(reason),
        }
    }

    /// Rate lines for the top `n` burst keywords, rounded for display
    #[must_use]
    pub fn chart_series(&self, n: usize) -> Vec<RateSeries> {
        self.items
            .iter()
            .take(n)
            .map(|item| RateSeries {
                label: item.keyword.clone(),
                values: item.rates.iter().copied().map(round1).collect(),
            })
            .collect()
    }
}

/// Find keywords with the sharpest year-over-year rate increase
///
/// Rates are occurrences per 100 reports of that year, computed over the
/// distinct years present in `counters`. For each keyword the first maximal
/// positive transition wins.
pub fn burst_keywords(counters: &Counters, config: &BurstConfig) -> BurstKeywords {
    if counters.reports == 0 {
        return BurstKeywords::insufficient(Insufficient::NoData);
    }

    let years = counters.years();
    if years.len() < 2 {
        return BurstKeywords::insufficient(Insufficient::TooFewYears { found: years.len() });
    }

    let mut items = Vec::new();
    for (keyword, overall) in counters.keyword.iter() {
        if overall < config.min_overall || !counters.keyword_by_year.contains_key(keyword) {
            continue;
        }

        let rates: Vec<f64> = years
            .iter()
            .map(|&year| counters.rate_per_hundred(keyword, year))
            .collect();

        let mut best_delta = f64::NEG_INFINITY;
        let mut best_year = years[1];
        for (i, pair) in rates.windows(2).enumerate() {
            let delta = pair[1] - pair[0];
            if delta > best_delta {
                best_delta = delta;
                best_year = years[i + 1];
            }
        }

        if best_delta <= config.min_delta {
            continue;
        }

        items.push(BurstKeyword {
            keyword: keyword.to_string(),
            best_year,
            best_delta,
            first_rate: rates.first().copied().unwrap_or(0.0),
            last_rate: rates.last().copied().unwrap_or(0.0),
            rates,
        });
    }

    items.sort_by(|a, b| {
        b.best_delta
            .partial_cmp(&a.best_delta)
            .unwrap_or(Ordering::Equal)
    });
    items.truncate(config.limit);

    tracing::debug!(years = years.len(), bursts = items.len(), "Computed burst keywords");

    let span = YearRange::new(years[0], years[years.len() - 1]);
    BurstKeywords {
        meta: format!(
            "{} · Top {}(증가폭 기준) · 단위: 100건당 등장",
            span.label(),
            config.limit
        ),
        years,
        items,
        insufficient: None,
    }
}

/// Per-year values of one keyword
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// Per-100 rate lines for the top `n` keywords over the years present
///
/// Values are rounded to one decimal place.
#[must_use]
pub fn keyword_rate_series(counters: &Counters, n: usize) -> Vec<RateSeries> {
    let years = counters.years();
    counters
        .keyword
        .top_keys(n)
        .into_iter()
        .map(|keyword| {
            let values = years
                .iter()
                .map(|&year| {
                    round1(per_hundred(
                        counters.keyword_in_year(&keyword, year),
                        counters.reports_in_year(year),
                    ))
                })
                .collect();
            RateSeries {
                label: keyword,
                values,
            }
        })
        .collect()
}
