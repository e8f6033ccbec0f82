//! Title-based trend analytics
//!
//! Pipeline: [`tokenizer`] turns titles into keywords, [`counters`]
//! aggregates them, [`keyword_trends`] finds rising and burst keywords,
//! [`cooccurrence`] builds the relational views, [`titles`] lists the
//! reports behind a keyword and [`dashboard`] bundles everything for one
//! filtered report set.

pub mod cooccurrence;
pub mod counters;
pub mod dashboard;
pub mod keyword_trends;
pub mod lexicon;
pub mod snapshot;
pub mod titles;
pub mod tokenizer;

pub use cooccurrence::{CoocGraph, CoocLink, CoocNode, HeatMatrix};
pub use counters::{Counter, Counters, FiveYearBins};
pub use dashboard::{Analyzer, Dashboard, TrendLines};
pub use keyword_trends::{
    BurstKeyword, BurstKeywords, Insufficient, RateSeries, RisingKeyword, RisingKeywords,
    SplitWindows, YearRange,
};
pub use lexicon::{Lexicon, ThemeRule};
pub use snapshot::{SnapshotFilters, TrendSnapshot};
pub use titles::RelatedTitles;
pub use tokenizer::Tokenizer;
