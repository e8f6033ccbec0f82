//! One-pass dashboard over a filtered report set
//!
//! [`Analyzer`] owns the tokenizer and the analysis limits. It holds no
//! per-call state: every call derives all counters and views from the
//! reports it is given.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::cooccurrence::{build_cooccurrence, build_heatmap, CoocGraph, HeatMatrix};
use super::counters::{build_counters, build_five_year_bins, Counters, FiveYearBins};
use super::keyword_trends::{
    burst_keywords, keyword_rate_series, rising_keywords, BurstKeywords, Insufficient,
    RateSeries, RisingKeywords, YearRange,
};
use super::lexicon::Lexicon;
use super::snapshot::{SnapshotFilters, TrendSnapshot};
use super::titles::{related_titles, RelatedTitles};
use super::tokenizer::Tokenizer;
use crate::config::{AnalysisConfig, Config};
use crate::models::{Report, ReportFilter};

/// Per-year rate lines for the top keywords
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendLines {
    pub years: Vec<i32>,
    pub series: Vec<RateSeries>,
}

/// Every view of the trends screen for one filtered report set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Reports after filtering
    pub total: usize,

    /// First and last year present
    pub year_span: Option<YearRange>,

    pub keywords: Vec<(String, u64)>,
    pub bigrams: Vec<(String, u64)>,
    pub themes: Vec<(String, u64)>,
    pub trend: TrendLines,
    pub volume_by_year: Vec<(i32, u64)>,
    pub institutes: Vec<(String, u64)>,
    pub rising: RisingKeywords,
    pub burst: BurstKeywords,
    pub burst_series: Vec<RateSeries>,
    pub word_cloud: Vec<(String, u64)>,
    pub cooccurrence: CoocGraph,
    pub heatmap: HeatMatrix,

    /// Reports behind the top keyword
    pub related: RelatedTitles,
}

impl Dashboard {
    /// Most frequent keyword, if any
    #[must_use]
    pub fn top_keyword(&self) -> Option<&(String, u64)> {
        self.keywords.first()
    }
}

/// Trend analysis pipeline: tokenize, aggregate, derive views
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    tokenizer: Tokenizer,
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create an analyzer with explicit limits and word lists
    #[must_use]
    pub fn new(config: AnalysisConfig, lexicon: Lexicon) -> Self {
        Self {
            tokenizer: Tokenizer::new(lexicon),
            config,
        }
    }

    /// Create an analyzer from the full application configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut lexicon =
            Lexicon::default().with_extra_stopwords(&config.lexicon.extra_stopwords);
        if !config.lexicon.themes.is_empty() {
            lexicon = lexicon.with_themes(config.lexicon.themes.clone());
        }
        Self::new(config.analysis.clone(), lexicon)
    }

    /// Tokenizer in use
    #[must_use]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Analysis limits in use
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Aggregate counters for already-filtered rows
    #[must_use]
    pub fn build_counters(&self, rows: &[Report]) -> Counters {
        build_counters(rows, &self.tokenizer)
    }

    /// Rising keywords over `range`, or over the years present when `None`
    #[must_use]
    pub fn rising(&self, counters: &Counters, range: Option<YearRange>) -> RisingKeywords {
        let range = range.or_else(|| {
            counters
                .year_span()
                .map(|(first, last)| YearRange::new(first, last))
        });
        match range {
            Some(range) => rising_keywords(counters, range, &self.config.rising),
            None => RisingKeywords::insufficient(Insufficient::NoData),
        }
    }

    /// Burst keywords over the years present
    #[must_use]
    pub fn burst(&self, counters: &Counters) -> BurstKeywords {
        burst_keywords(counters, &self.config.burst)
    }

    /// Co-occurrence graph of the top keywords
    #[must_use]
    pub fn cooccurrence(&self, rows: &[Report], counters: &Counters) -> CoocGraph {
        build_cooccurrence(rows, counters, &self.tokenizer, &self.config.cooccurrence)
    }

    /// Institute x keyword heatmap
    #[must_use]
    pub fn heatmap(&self, rows: &[Report], counters: &Counters) -> HeatMatrix {
        build_heatmap(rows, counters, &self.tokenizer, &self.config.heatmap)
    }

    /// Reports whose title contains `keyword`, newest first
    #[must_use]
    pub fn related_titles(&self, rows: &[Report], keyword: Option<&str>) -> RelatedTitles {
        related_titles(rows, keyword, self.config.related_titles)
    }

    /// Five-year keyword bins
    #[must_use]
    pub fn five_year_bins(&self, rows: &[Report]) -> FiveYearBins {
        build_five_year_bins(rows, &self.tokenizer)
    }

    /// Filter `reports` and compute every view
    #[must_use]
    pub fn analyze(&self, reports: &[Report], filter: &ReportFilter) -> Dashboard {
        let rows = filter.apply(reports);
        tracing::info!(
            total = reports.len(),
            filtered = rows.len(),
            "Analyzing report titles"
        );
        self.analyze_rows(&rows, filter.year_range())
    }

    /// Compute every view for rows the caller has already filtered
    #[must_use]
    pub fn analyze_rows(&self, rows: &[Report], range: Option<YearRange>) -> Dashboard {
        let counters = self.build_counters(rows);
        let config = &self.config;

        let burst = self.burst(&counters);
        let burst_series = burst.chart_series(config.burst.chart_lines);

        let keywords = counters.keyword.top(config.top_keywords);
        let related = self.related_titles(rows, keywords.first().map(|(k, _)| k.as_str()));

        Dashboard {
            total: rows.len(),
            year_span: counters
                .year_span()
                .map(|(first, last)| YearRange::new(first, last)),
            keywords,
            bigrams: counters.bigram.top(config.top_bigrams),
            themes: counters.theme.top(config.top_themes),
            trend: TrendLines {
                years: counters.years(),
                series: keyword_rate_series(&counters, config.trend_lines),
            },
            volume_by_year: counters.by_year.iter().map(|(y, n)| (*y, *n)).collect(),
            institutes: counters.by_institute.top(config.top_institutes),
            rising: self.rising(&counters, range),
            burst,
            burst_series,
            word_cloud: counters.keyword.top(config.word_cloud_size()),
            cooccurrence: self.cooccurrence(rows, &counters),
            heatmap: self.heatmap(rows, &counters),
            related,
        }
    }

    /// Filter `reports` and build the export snapshot
    #[must_use]
    pub fn snapshot(
        &self,
        reports: &[Report],
        filter: &ReportFilter,
        generated_at: DateTime<Utc>,
    ) -> TrendSnapshot {
        let rows = filter.apply(reports);
        let counters = self.build_counters(&rows);
        let bins = self.five_year_bins(&rows);
        let top = self.config.snapshot.top;

        let range = filter.year_range().or_else(|| {
            counters
                .year_span()
                .map(|(first, last)| YearRange::new(first, last))
        });

        TrendSnapshot {
            generated_at,
            filters: SnapshotFilters::new(filter, range),
            total: rows.len(),
            top_keywords: counters.keyword.top(top),
            top_bigrams: counters.bigram.top(top),
            themes: counters.theme.top(top),
            five_year_top_keywords: bins.top_by_label(self.config.snapshot.bin_top),
        }
    }
}
