//! Configuration management for ritrends
//!
//! This module handles loading and validating configuration from environment variables
//! and TOML files. Every section has defaults, so a file only needs the keys it changes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::analytics::lexicon::ThemeRule;
use crate::error::Error;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Analysis limits and thresholds
    pub analysis: AnalysisConfig,

    /// Tokenizer word-list overrides
    pub lexicon: LexiconConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Display limits and nested per-view settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Keywords in the ranked keyword list
    pub top_keywords: usize,

    /// Bigrams in the ranked bigram list
    pub top_bigrams: usize,

    /// Themes in the theme breakdown
    pub top_themes: usize,

    /// Keywords drawn as per-year rate lines
    pub trend_lines: usize,

    /// Institutes in the volume-by-institute list
    pub top_institutes: usize,

    /// Word cloud size (clamped to 10..=200)
    pub word_cloud_top: usize,

    /// Related titles listed for the selected keyword
    pub related_titles: usize,

    /// Split-window rising keyword settings
    pub rising: RisingConfig,

    /// Year-over-year burst settings
    pub burst: BurstConfig,

    /// Co-occurrence graph settings
    pub cooccurrence: CooccurrenceConfig,

    /// Institute x keyword heatmap settings
    pub heatmap: HeatmapConfig,

    /// Export snapshot settings
    pub snapshot: SnapshotConfig,
}

/// Rising keyword settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RisingConfig {
    /// Late-window occurrences below this are noise
    pub min_late_count: u64,

    /// Maximum number of rising keywords returned
    pub limit: usize,
}

/// Burst keyword settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    /// Overall occurrences below this are noise
    pub min_overall: u64,

    /// Best rate delta (per 100 reports) at or below this is insignificant
    pub min_delta: f64,

    /// Maximum number of burst keywords returned
    pub limit: usize,

    /// Burst keywords drawn as rate lines
    pub chart_lines: usize,
}

/// Co-occurrence graph settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CooccurrenceConfig {
    /// Top keywords forming the graph vocabulary
    pub vocabulary: usize,

    /// Pairs seen fewer times are dropped
    pub min_pair_count: u64,

    /// Maximum number of links kept
    pub max_links: usize,
}

/// Heatmap settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    /// Top institutes (rows)
    pub institutes: usize,

    /// Top keywords (columns)
    pub keywords: usize,
}

/// Snapshot export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Entries in each top keyword/bigram/theme list
    pub top: usize,

    /// Keywords per five-year bin
    pub bin_top: usize,
}

/// Word-list overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Stopwords appended to the built-in list
    pub extra_stopwords: Vec<String>,

    /// Theme dictionary replacing the built-in one when non-empty
    pub themes: Vec<ThemeRule>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_keywords: 20,
            top_bigrams: 20,
            top_themes: 12,
            trend_lines: 5,
            top_institutes: 15,
            word_cloud_top: 50,
            related_titles: 200,
            rising: RisingConfig::default(),
            burst: BurstConfig::default(),
            cooccurrence: CooccurrenceConfig::default(),
            heatmap: HeatmapConfig::default(),
            snapshot: SnapshotConfig::default(),
        }
    }
}

impl Default for RisingConfig {
    fn default() -> Self {
        Self {
            min_late_count: 5,
            limit: 20,
        }
    }
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            min_overall: 4,
            min_delta: 0.2,
            limit: 20,
            chart_lines: 5,
        }
    }
}

impl Default for CooccurrenceConfig {
    fn default() -> Self {
        Self {
            vocabulary: 30,
            min_pair_count: 2,
            max_links: 220,
        }
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            institutes: 12,
            keywords: 20,
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self { top: 50, bin_top: 20 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl AnalysisConfig {
    /// Word cloud size clamped to the supported range
    #[must_use]
    pub fn word_cloud_size(&self) -> usize {
        self.word_cloud_top.clamp(10, 200)
    }
}

impl Config {
    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path` when given, else from the environment, then validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `RITRENDS_*` environment variables
    fn apply_env(&mut self) {
        if let Some(v) = env_parse::<usize>("RITRENDS_TOP_KEYWORDS") {
            self.analysis.top_keywords = v;
        }
        if let Some(v) = env_parse::<usize>("RITRENDS_WORD_CLOUD_TOP") {
            self.analysis.word_cloud_top = v;
        }
        if let Some(v) = env_parse::<u64>("RITRENDS_RISING_MIN_LATE") {
            self.analysis.rising.min_late_count = v;
        }
        if let Some(v) = env_parse::<u64>("RITRENDS_BURST_MIN_OVERALL") {
            self.analysis.burst.min_overall = v;
        }
        if let Some(v) = env_parse::<f64>("RITRENDS_BURST_MIN_DELTA") {
            self.analysis.burst.min_delta = v;
        }
        if let Some(v) = env_parse::<usize>("RITRENDS_COOC_MAX_LINKS") {
            self.analysis.cooccurrence.max_links = v;
        }
        if let Ok(words) = std::env::var("RITRENDS_EXTRA_STOPWORDS") {
            self.lexicon.extra_stopwords.extend(
                words
                    .split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(String::from),
            );
        }
        if let Ok(level) = std::env::var("RITRENDS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("RITRENDS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> crate::error::Result<()> {
        let analysis = &self.analysis;

        if analysis.top_keywords == 0 {
            return Err(Error::config("top_keywords must be greater than 0"));
        }

        if analysis.cooccurrence.vocabulary < 2 {
            return Err(Error::config("cooccurrence.vocabulary must be at least 2"));
        }

        if analysis.cooccurrence.max_links == 0 {
            return Err(Error::config("cooccurrence.max_links must be greater than 0"));
        }

        if analysis.heatmap.institutes == 0 || analysis.heatmap.keywords == 0 {
            return Err(Error::config("heatmap dimensions must be greater than 0"));
        }

        if !analysis.burst.min_delta.is_finite() || analysis.burst.min_delta < 0.0 {
            return Err(Error::config("burst.min_delta must be a non-negative number"));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(Error::config("logging.format must be 'text' or 'json'"));
        }

        if let Some(rule) = self
            .lexicon
            .themes
            .iter()
            .find(|rule| rule.key.trim().is_empty() || rule.terms.is_empty())
        {
            return Err(Error::config(format!(
                "lexicon theme '{}' needs a key and at least one term",
                rule.key
            )));
        }

        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}
