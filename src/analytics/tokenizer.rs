//! Title tokenization for keyword trend analysis
//!
//! Titles are split on whitespace after stripping punctuation; there is no
//! morphological analysis. Pieces are normalized with a few heuristics:
//! - English-only and digit-only pieces are dropped
//! - ASCII is lowercased
//! - One trailing Korean particle is stripped from pure-Hangul pieces,
//!   except region names
//! - Short pieces and stopwords are dropped

use regex::Regex;
use std::sync::OnceLock;

use super::lexicon::Lexicon;

/// Whitespace tokenizer with stopword and particle handling
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    lexicon: Lexicon,
}

impl Tokenizer {
    /// Create a tokenizer over the given lexicon
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Lexicon backing this tokenizer
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Tokenize a report title
    ///
    /// Word order is preserved and duplicates are kept. Region names are
    /// *not* removed here; see [`Tokenizer::is_region_token`].
    #[must_use]
    pub fn tokenize(&self, title: &str) -> Vec<String> {
        let cleaned = clean_title(title);
        if cleaned.is_empty() {
            return Vec::new();
        }

        let mut tokens = Vec::new();
        for raw in cleaned.split(' ') {
            if raw.is_empty() || is_english_only(raw) || is_numeric(raw) {
                continue;
            }

            let lowered = raw.to_ascii_lowercase();
            if self.lexicon.is_stopword(&lowered) {
                continue;
            }

            // 충청북도 keeps its 도
            let token = if self.lexicon.is_region_token(&lowered) {
                lowered.as_str()
            } else {
                self.lexicon.strip_particle(&lowered)
            };
            if token.chars().count() < 2 || self.lexicon.is_stopword(token) {
                continue;
            }

            tokens.push(token.to_string());
        }

        tokens
    }

    /// Check if a token is a region/administrative name
    #[must_use]
    pub fn is_region_token(&self, token: &str) -> bool {
        self.lexicon.is_region_token(token)
    }

    /// Theme keys for a title
    #[must_use]
    pub fn themes_of(&self, title: &str) -> Vec<&str> {
        self.lexicon.themes_of(title)
    }
}

/// Consecutive token pairs joined by a single space
#[must_use]
pub fn bigrams(tokens: &[String]) -> Vec<(&str, &str)> {
    tokens
        .windows(2)
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .collect()
}

/// Replace everything but ASCII alphanumerics, Hangul syllables and
/// whitespace with a space, then collapse and trim whitespace
#[must_use]
pub fn clean_title(title: &str) -> String {
    static STRIP_RE: OnceLock<Regex> = OnceLock::new();
    static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

    let strip =
        STRIP_RE.get_or_init(|| Regex::new(r"[^0-9A-Za-z가-힣\s]").expect("Invalid regex pattern"));
    let whitespace =
        WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid regex pattern"));

    let stripped = strip.replace_all(title, " ");
    whitespace.replace_all(&stripped, " ").trim().to_string()
}

fn is_english_only(piece: &str) -> bool {
    piece.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_numeric(piece: &str) -> bool {
    piece.bytes().all(|b| b.is_ascii_digit())
}
