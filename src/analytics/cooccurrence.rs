//! Keyword relationships for visualization
//!
//! This module provides functionality for:
//! - Co-occurrence graph of top keywords appearing in the same title
//! - Institute x keyword heatmap normalized per 100 reports
//!
//! Vocabulary and link caps bound the pair counting and the rendered graph.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::counters::{per_hundred, Counter, Counters};
use super::tokenizer::Tokenizer;
use crate::config::{CooccurrenceConfig, HeatmapConfig};
use crate::models::Report;

/// Keyword node weighted by overall occurrences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoocNode {
    pub id: String,
    pub weight: u64,
}

/// Undirected link between two keywords, `source < target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoocLink {
    pub source: String,
    pub target: String,
    pub weight: u64,
}

/// Keyword co-occurrence graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoocGraph {
    pub nodes: Vec<CoocNode>,
    pub links: Vec<CoocLink>,

    /// Links above the pair threshold dropped by the link cap
    pub truncated: usize,
}

impl CoocGraph {
    /// True when there is nothing to draw
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Weight of the link between `a` and `b` in either order
    #[must_use]
    pub fn link_weight(&self, a: &str, b: &str) -> Option<u64> {
        let (source, target) = if a <= b { (a, b) } else { (b, a) };
        self.links
            .iter()
            .find(|link| link.source == source && link.target == target)
            .map(|link| link.weight)
    }

    /// Neighbors of `keyword` with link weights, strongest first
    #[must_use]
    pub fn neighbors(&self, keyword: &str) -> Vec<(&str, u64)> {
        self.links
            .iter()
            .filter_map(|link| {
                if link.source == keyword {
                    Some((link.target.as_str(), link.weight))
                } else if link.target == keyword {
                    Some((link.source.as_str(), link.weight))
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Build the co-occurrence graph of the top keywords
///
/// Each title contributes at most once per keyword pair. Pairs seen fewer
/// than `min_pair_count` times are dropped, and only the `max_links`
/// strongest links are kept (ties in first-seen order).
pub fn build_cooccurrence(
    rows: &[Report],
    counters: &Counters,
    tokenizer: &Tokenizer,
    config: &CooccurrenceConfig,
) -> CoocGraph {
    let top = counters.keyword.top(config.vocabulary);
    if top.is_empty() {
        return CoocGraph::default();
    }
    let vocabulary: HashSet<&str> = top.iter().map(|(keyword, _)| keyword.as_str()).collect();

    let mut pairs = Counter::new();
    for report in rows {
        let mut tokens: Vec<String> = tokenizer
            .tokenize(&report.title)
            .into_iter()
            .filter(|token| vocabulary.contains(token.as_str()))
            .collect();
        tokens.sort();
        tokens.dedup();
        if tokens.len() < 2 {
            continue;
        }

        for i in 0..tokens.len() {
            for j in (i + 1)..tokens.len() {
                pairs.increment(&pair_key(&tokens[i], &tokens[j]));
            }
        }
    }

    let eligible: Vec<(&str, u64)> = pairs
        .ranked()
        .into_iter()
        .filter(|(_, weight)| *weight >= config.min_pair_count)
        .collect();
    let eligible_count = eligible.len();

    let links: Vec<CoocLink> = eligible
        .into_iter()
        .take(config.max_links)
        .filter_map(|(key, weight)| {
            let (source, target) = key.split_once('|')?;
            Some(CoocLink {
                source: source.to_string(),
                target: target.to_string(),
                weight,
            })
        })
        .collect();

    let truncated = eligible_count - links.len();
    if truncated > 0 {
        tracing::debug!(
            eligible = eligible_count,
            max_links = config.max_links,
            "Co-occurrence links truncated"
        );
    }

    let nodes = top
        .into_iter()
        .map(|(id, weight)| CoocNode { id, weight })
        .collect();

    CoocGraph {
        nodes,
        links,
        truncated,
    }
}

fn pair_key(a: &str, b: &str) -> String {
    format!("{a}|{b}")
}

/// Institute x keyword rate matrix
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeatMatrix {
    /// Institutes, by report count descending
    pub rows: Vec<String>,

    /// Keywords, by overall count descending
    pub cols: Vec<String>,

    /// `cells[row][col]`: occurrences per 100 reports of that institute
    pub cells: Vec<Vec<f64>>,

    /// Largest cell value (0 when empty)
    pub max: f64,
}

impl HeatMatrix {
    /// True when there are no rows or no columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    /// Cell value for an institute and keyword
    #[must_use]
    pub fn value(&self, institute: &str, keyword: &str) -> Option<f64> {
        let row = self.rows.iter().position(|r| r == institute)?;
        let col = self.cols.iter().position(|c| c == keyword)?;
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }
}

/// Build the institute x keyword heatmap
///
/// Rows are the top institutes by report count, columns the top keywords.
/// A cell counts every occurrence of the keyword in that institute's titles,
/// divided by the institute's report count, times 100.
pub fn build_heatmap(
    rows: &[Report],
    counters: &Counters,
    tokenizer: &Tokenizer,
    config: &HeatmapConfig,
) -> HeatMatrix {
    let institutes = counters.by_institute.top(config.institutes);
    let keywords = counters.keyword.top_keys(config.keywords);
    if institutes.is_empty() || keywords.is_empty() {
        return HeatMatrix::default();
    }

    let row_index: HashMap<&str, usize> = institutes
        .iter()
        .enumerate()
        .map(|(i, (name, _))| (name.as_str(), i))
        .collect();
    let col_index: HashMap<&str, usize> = keywords
        .iter()
        .enumerate()
        .map(|(i, keyword)| (keyword.as_str(), i))
        .collect();

    let mut hits = vec![vec![0u64; keywords.len()]; institutes.len()];
    for report in rows {
        let Some(&row) = row_index.get(report.institute.trim()) else {
            continue;
        };
        for token in tokenizer.tokenize(&report.title) {
            if let Some(&col) = col_index.get(token.as_str()) {
                hits[row][col] += 1;
            }
        }
    }

    let mut max = 0.0_f64;
    let cells: Vec<Vec<f64>> = hits
        .iter()
        .zip(&institutes)
        .map(|(row_hits, (_, reports))| {
            row_hits
                .iter()
                .map(|&count| {
                    let rate = per_hundred(count, *reports);
                    max = max.max(rate);
                    rate
                })
                .collect()
        })
        .collect();

    HeatMatrix {
        rows: institutes.into_iter().map(|(name, _)| name).collect(),
        cols: keywords,
        cells,
        max,
    }
}
