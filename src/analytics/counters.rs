//! Frequency counters built from tokenized report titles
//!
//! All rankings are by count descending; equal counts keep the order in
//! which keys were first counted, so identical input order always yields
//! identical rankings.

use std::collections::{BTreeMap, HashMap};

use super::tokenizer::{bigrams, Tokenizer};
use crate::models::Report;

/// Occurrence counter with first-insertion tie breaking
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl Counter {
    /// Create an empty counter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `key`
    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    /// Add `n` occurrences of `key`
    pub fn add(&mut self, key: &str, n: u64) {
        if let Some(count) = self.counts.get_mut(key) {
            *count += n;
        } else {
            self.counts.insert(key.to_string(), n);
            self.order.push(key.to_string());
        }
    }

    /// Count for `key` (0 when absent)
    #[must_use]
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Whether `key` has been counted
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when nothing has been counted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Keys with counts in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.order
            .iter()
            .map(move |key| (key.as_str(), self.get(key)))
    }

    /// All entries ranked by count descending, ties in first-insertion order
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Top `n` entries as owned pairs
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(key, count)| (key.to_string(), count))
            .collect()
    }

    /// Top `n` keys only
    #[must_use]
    pub fn top_keys(&self, n: usize) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(key, _)| key.to_string())
            .collect()
    }
}

/// Aggregated counters for one filtered report set
#[derive(Debug, Clone, Default)]
pub struct Counters {
    /// Region-filtered keyword occurrences (all reports, with or without year)
    pub keyword: Counter,

    /// Adjacent token pairs `"a b"` with no region token on either side
    pub bigram: Counter,

    /// Theme hits; a title can hit several themes
    pub theme: Counter,

    /// Reports per resolvable year
    pub by_year: BTreeMap<i32, u64>,

    /// Keyword occurrences per year (reports with a resolvable year only)
    pub keyword_by_year: HashMap<String, BTreeMap<i32, u64>>,

    /// Reports per non-empty institute name
    pub by_institute: Counter,

    /// Number of reports aggregated
    pub reports: usize,
}

impl Counters {
    /// Distinct years present, ascending
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.by_year.keys().copied().collect()
    }

    /// Reports in `year`
    #[must_use]
    pub fn reports_in_year(&self, year: i32) -> u64 {
        self.by_year.get(&year).copied().unwrap_or(0)
    }

    /// Occurrences of `keyword` in `year`
    #[must_use]
    pub fn keyword_in_year(&self, keyword: &str, year: i32) -> u64 {
        self.keyword_by_year
            .get(keyword)
            .and_then(|years| years.get(&year))
            .copied()
            .unwrap_or(0)
    }

    /// Occurrences of `keyword` over the inclusive year window
    #[must_use]
    pub fn keyword_in_window(&self, keyword: &str, from: i32, to: i32) -> u64 {
        if from > to {
            return 0;
        }
        self.keyword_by_year
            .get(keyword)
            .map(|years| years.range(from..=to).map(|(_, count)| count).sum())
            .unwrap_or(0)
    }

    /// First and last year present
    #[must_use]
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.by_year.keys().next()?;
        let last = self.by_year.keys().next_back()?;
        Some((*first, *last))
    }

    /// Rate per 100 reports of `keyword` in `year` (0 when the year has no reports)
    #[must_use]
    pub fn rate_per_hundred(&self, keyword: &str, year: i32) -> f64 {
        per_hundred(self.keyword_in_year(keyword, year), self.reports_in_year(year))
    }
}

/// `count / base * 100`, or 0 when `base` is 0
#[must_use]
pub fn per_hundred(count: u64, base: u64) -> f64 {
    if base == 0 {
        0.0
    } else {
        count as f64 / base as f64 * 100.0
    }
}

/// Round to one decimal place for display
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Build every counter from the given reports in one pass
pub fn build_counters(rows: &[Report], tokenizer: &Tokenizer) -> Counters {
    let mut counters = Counters {
        reports: rows.len(),
        ..Default::default()
    };
    let mut undated = 0usize;

    for report in rows {
        let title = report.title.trim();
        let year = report.year;

        match year {
            Some(y) => *counters.by_year.entry(y).or_insert(0) += 1,
            None => undated += 1,
        }

        let institute = report.institute.trim();
        if !institute.is_empty() {
            counters.by_institute.increment(institute);
        }

        let tokens = tokenizer.tokenize(title);
        for token in &tokens {
            if tokenizer.is_region_token(token) {
                continue;
            }
            counters.keyword.increment(token);
            if let Some(y) = year {
                *counters
                    .keyword_by_year
                    .entry(token.clone())
                    .or_default()
                    .entry(y)
                    .or_insert(0) += 1;
            }
        }

        for (a, b) in bigrams(&tokens) {
            if tokenizer.is_region_token(a) || tokenizer.is_region_token(b) {
                continue;
            }
            counters.bigram.increment(&format!("{a} {b}"));
        }

        for theme in tokenizer.themes_of(title) {
            counters.theme.increment(theme);
        }
    }

    tracing::debug!(
        reports = rows.len(),
        undated = undated,
        keywords = counters.keyword.len(),
        bigrams = counters.bigram.len(),
        years = counters.by_year.len(),
        institutes = counters.by_institute.len(),
        "Built counters"
    );

    counters
}

/// Keyword counters grouped into fixed five-year bins
#[derive(Debug, Clone, Default)]
pub struct FiveYearBins {
    /// Bin start year -> region-filtered keyword counter
    pub bins: BTreeMap<i32, Counter>,

    /// Bin start year -> report count
    pub reports: BTreeMap<i32, u64>,
}

impl FiveYearBins {
    /// Bin start years, ascending
    #[must_use]
    pub fn starts(&self) -> Vec<i32> {
        self.bins.keys().copied().collect()
    }

    /// Label like `2020-2024`
    #[must_use]
    pub fn label(start: i32) -> String {
        format!("{start}-{}", start.saturating_add(4))
    }

    /// Top `n` keywords for each bin keyed by label
    #[must_use]
    pub fn top_by_label(&self, n: usize) -> BTreeMap<String, Vec<(String, u64)>> {
        self.bins
            .iter()
            .map(|(start, counter)| (Self::label(*start), counter.top(n)))
            .collect()
    }
}

/// First year of the five-year bin containing `year` (2001 -> 2000)
#[must_use]
pub fn five_year_start(year: i32) -> i32 {
    year.saturating_sub(year.rem_euclid(5))
}

/// Group dated reports into five-year bins
pub fn build_five_year_bins(rows: &[Report], tokenizer: &Tokenizer) -> FiveYearBins {
    let mut bins = FiveYearBins::default();

    for report in rows {
        let Some(year) = report.year else {
            continue;
        };
        let start = five_year_start(year);
        *bins.reports.entry(start).or_insert(0) += 1;

        let counter = bins.bins.entry(start).or_default();
        for token in tokenizer.tokenize(report.title.trim()) {
            if tokenizer.is_region_token(&token) {
                continue;
            }
            counter.increment(&token);
        }
    }

    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(year: Option<i32>, title: &str, institute: &str) -> Report {
        Report {
            year,
            title: title.to_string(),
            institute: institute.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_counter_ranking_ties_first_seen() {
        let mut counter = Counter::new();
        counter.increment("나");
        counter.increment("가");
        counter.increment("다");
        counter.increment("다");

        let ranked = counter.ranked();
        assert_eq!(ranked, vec![("다", 2), ("나", 1), ("가", 1)]);
        assert_eq!(counter.total(), 4);
        assert_eq!(counter.get("없음"), 0);
    }

    #[test]
    fn test_counter_top() {
        let mut counter = Counter::new();
        counter.add("a", 3);
        counter.add("b", 5);
        counter.add("a", 3);
        assert_eq!(counter.top(1), vec![("a".to_string(), 6)]);
        assert_eq!(counter.top_keys(5), vec!["a", "b"]);
    }

    #[test]
    fn test_build_counters_basic() {
        let tokenizer = Tokenizer::default();
        let rows = vec![
            report(Some(2020), "청년 일자리 창출", "A연구원"),
            report(Some(2021), "청년 주거 지원", "A연구원"),
            report(None, "청년 복지", " B연구원 "),
        ];

        let counters = build_counters(&rows, &tokenizer);
        assert_eq!(counters.reports, 3);
        assert_eq!(counters.keyword.get("청년"), 3);
        assert_eq!(counters.keyword_in_window("청년", 2000, 2100), 2);
        assert_eq!(counters.by_year.len(), 2);
        assert_eq!(counters.by_institute.get("B연구원"), 1);
        assert_eq!(counters.bigram.get("청년 일자리"), 1);
        assert_eq!(counters.theme.get("인구·청년·고령화"), 3);
    }

    #[test]
    fn test_region_excluded_from_keywords_and_bigrams() {
        let tokenizer = Tokenizer::default();
        let rows = vec![report(Some(2020), "서울시 청년 주거", "")];
        let counters = build_counters(&rows, &tokenizer);

        assert!(!counters.keyword.contains("서울시"));
        assert!(!counters.bigram.contains("서울시 청년"));
        assert!(counters.bigram.contains("청년 주거"));
        assert!(counters.by_institute.is_empty());
    }

    #[test]
    fn test_empty_rows() {
        let counters = build_counters(&[], &Tokenizer::default());
        assert!(counters.keyword.is_empty());
        assert!(counters.year_span().is_none());
        assert_eq!(counters.rate_per_hundred("x", 2020), 0.0);
    }

    #[test]
    fn test_five_year_bins() {
        assert_eq!(five_year_start(2001), 2000);
        assert_eq!(five_year_start(2005), 2005);
        assert_eq!(five_year_start(2009), 2005);

        let tokenizer = Tokenizer::default();
        let rows = vec![
            report(Some(2019), "탄소 중립", ""),
            report(Some(2021), "탄소 배출", ""),
            report(Some(2024), "탄소 시장", ""),
            report(None, "탄소 거래", ""),
        ];
        let bins = build_five_year_bins(&rows, &tokenizer);
        assert_eq!(bins.starts(), vec![2015, 2020]);
        assert_eq!(bins.reports.get(&2020), Some(&2));

        let top = bins.top_by_label(1);
        assert_eq!(top["2020-2024"], vec![("탄소".to_string(), 2)]);
    }

    #[test]
    fn test_five_year_bins_extreme_years() {
        assert_eq!(five_year_start(i32::MIN), i32::MIN);
        assert_eq!(
            FiveYearBins::label(five_year_start(i32::MAX)),
            format!("{}-{}", i32::MAX - 2, i32::MAX)
        );

        let rows = vec![
            report(Some(i32::MAX), "탄소 중립", ""),
            report(Some(i32::MIN), "탄소 시장", ""),
        ];
        let bins = build_five_year_bins(&rows, &Tokenizer::default());
        assert_eq!(bins.top_by_label(5).len(), 2);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(33.333), 33.3);
        assert_eq!(round1(66.666), 66.7);
    }
}
