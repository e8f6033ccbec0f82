//! Word lists driving title tokenization
//!
//! Everything the tokenizer treats specially lives here as plain data:
//! - Stopwords (report boilerplate and connectives)
//! - Korean particle (조사) suffixes, ordered longest first
//! - Words whose trailing syllable looks like a particle but belongs to the root
//! - Region names and the administrative-suffix patterns
//! - Theme dictionary for coarse title classification

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Theme key assigned to titles that match no theme rule
pub const OTHER_THEME: &str = "기타";

/// Boilerplate words excluded from every token stream
pub const STOPWORDS: &[&str] = &[
    // connectives
    "및", "위한", "대한", "관한", "따른", "통한", "관련", "중심으로", "대상", "방향", "현황",
    "사례", "비교", "적용", "검토", "평가", "조사", "분석", "연구",
    // plan / commission vocabulary
    "방안", "대응방안", "발전방안", "개선", "개선방안", "전략", "계획", "기본계획", "기본구상",
    "수립", "용역", "연구용역", "기초연구", "타당성", "타당성검토", "마스터플랜",
    // generic predicates
    "효율적", "미치는", "필요", "추진", "활용", "활성화", "활성화를", "제고", "강화", "확대",
    // rounds
    "1차", "2차", "3차", "4차", "5차",
    "최근", "시사점", "활용방안", "국내", "구축방안", "이후", "관리방안", "향후", "제고를",
    "대응한", "활용을", "추진방안", "고려한", "대응들", "활용한", "전략과", "시대", "분석을",
    "정책과", "정책방안", "영향", "정책방향", "정책과제", "정책적", "대응전략", "대응", "주요",
    "특성", "제고방안", "효과", "분석과", "한국의", "중국의", "제2권", "제1권", "우리의",
    "우리나라", "발전방향", "실현을", "현황과", "시대의", "전망과", "평가와", "대응의",
    "강화를", "대응을", "전망", "발전", "구조", "사례를", "기반의", "영향과", "변화에",
    // frequent but weak for topic separation
    "운영", "구축", "조성", "도입", "확산", "활성화방안", "개발", "관리", "개편", "정비",
    "모형", "모델", "지표", "실태", "진단", "연계", "거점", "체계", "로드맵", "시범", "대책",
    "과제",
];

/// Particle suffixes, longest first. `로` alone is left out: too many roots end in it.
pub const PARTICLE_SUFFIXES: &[&str] = &[
    "으로써", "으로서", "에게서",
    "로써", "로서", "께서", "에서", "에게", "한테", "부터", "까지", "으로",
    "에", "은", "는", "이", "가", "을", "를", "과", "와", "도", "만", "의",
];

/// Words never particle-stripped (the trailing syllable is part of the word)
pub const PARTICLE_EXCEPTIONS: &[&str] = &[
    "회의", "정의", "의의", "강의", "협의", "합의", "결의", "건의", "심의", "논의", "의회",
];

/// Provinces, metropolitan cities and their common short forms
pub const REGION_WORDS: &[&str] = &[
    "서울", "부산", "대구", "인천", "광주", "대전", "울산", "세종",
    "경기", "강원", "충북", "충남", "전북", "전남", "경북", "경남", "제주",
    "서울시", "부산시", "대구시", "인천시", "광주시", "대전시", "울산시", "세종시",
    "경기도", "강원도", "충청북도", "충청남도", "전라북도", "전라남도", "경상북도", "경상남도",
    "제주도",
];

const DEFAULT_THEMES: &[(&str, &[&str])] = &[
    (
        "인구·청년·고령화",
        &["인구", "저출산", "저출생", "출산", "고령", "고령화", "청년", "노인", "인구감소", "정주", "이주", "귀농", "귀촌"],
    ),
    (
        "지역경제·산업·일자리",
        &["경제", "산업", "기업", "일자리", "고용", "투자", "수출", "상권", "소상공인", "관광", "혁신", "창업", "특구"],
    ),
    (
        "도시·주거·공간",
        &["도시", "도시재생", "주거", "주택", "정비", "재개발", "재건축", "토지", "공간", "스마트시티", "도시계획", "생활권"],
    ),
    (
        "교통·물류",
        &["교통", "도로", "철도", "버스", "지하철", "환승", "물류", "항만", "공항", "주차", "모빌리티"],
    ),
    (
        "환경·기후·에너지",
        &["환경", "기후", "탄소", "온실가스", "에너지", "재생에너지", "태양광", "풍력", "미세먼지", "폐기물", "수질", "하수", "생태", "산림"],
    ),
    (
        "복지·보건·돌봄",
        &["복지", "보건", "의료", "건강", "돌봄", "장애", "아동", "가족", "보육", "사회서비스"],
    ),
    (
        "교육·문화·관광",
        &["교육", "학교", "대학", "평생교육", "문화", "예술", "체육", "콘텐츠", "축제", "관광"],
    ),
    (
        "안전·재난",
        &["안전", "재난", "방재", "홍수", "산사태", "지진", "감염병", "재해", "위기"],
    ),
    (
        "행정·거버넌스·재정",
        &["행정", "거버넌스", "재정", "예산", "조직", "제도", "규제", "협력", "정책", "성과", "민원", "공공"],
    ),
    (
        "농림·해양",
        &["농업", "농촌", "농산물", "축산", "스마트팜", "산림", "임업", "어업", "수산", "해양"],
    ),
];

/// Dictionary-based theme rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRule {
    /// Theme label reported in the theme counter
    pub key: String,

    /// Substrings that select this theme
    pub terms: Vec<String>,
}

impl ThemeRule {
    /// Create a rule from a key and its terms
    pub fn new<I, S>(key: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether any term occurs in the (already trimmed) title
    #[must_use]
    pub fn matches(&self, title: &str) -> bool {
        self.terms.iter().any(|term| title.contains(term.as_str()))
    }
}

/// The built-in theme dictionary
#[must_use]
pub fn default_themes() -> Vec<ThemeRule> {
    DEFAULT_THEMES
        .iter()
        .map(|(key, terms)| ThemeRule::new(*key, terms.iter().copied()))
        .collect()
}

/// Lookup tables used by the tokenizer and the aggregator
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<String>,
    particles: Vec<String>,
    exceptions: HashSet<String>,
    regions: HashSet<String>,
    themes: Vec<ThemeRule>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stopwords: STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
            particles: PARTICLE_SUFFIXES.iter().map(|s| (*s).to_string()).collect(),
            exceptions: PARTICLE_EXCEPTIONS.iter().map(|w| (*w).to_string()).collect(),
            regions: REGION_WORDS.iter().map(|w| (*w).to_string()).collect(),
            themes: default_themes(),
        }
    }
}

impl Lexicon {
    /// Append extra stopwords (ASCII is lowercased to match token normalization)
    #[must_use]
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.stopwords.insert(word.to_ascii_lowercase());
            }
        }
        self
    }

    /// Replace the theme dictionary
    #[must_use]
    pub fn with_themes(mut self, themes: Vec<ThemeRule>) -> Self {
        self.themes = themes;
        self
    }

    /// Check if a token is a stopword
    #[must_use]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Number of stopwords in the set
    #[must_use]
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Strip one trailing particle from a pure-Hangul token
    ///
    /// The longest matching suffix wins, but only if at least two syllables
    /// remain. Exception words and tokens containing anything other than
    /// Hangul syllables come back unchanged.
    #[must_use]
    pub fn strip_particle<'a>(&self, token: &'a str) -> &'a str {
        if !is_hangul_word(token) || self.exceptions.contains(token) {
            return token;
        }

        let len = token.chars().count();
        for suffix in &self.particles {
            if len <= suffix.chars().count() + 1 {
                continue;
            }
            if let Some(stem) = token.strip_suffix(suffix.as_str()) {
                return stem;
            }
        }

        token
    }

    /// Check if a token names a region or an administrative unit
    ///
    /// Matches the region list, `..시/군/구` with at least two syllables before
    /// the suffix, and `..도` with at least three (shorter `..도` words such as
    /// 용도 or 수도 are common nouns).
    #[must_use]
    pub fn is_region_token(&self, token: &str) -> bool {
        static DISTRICT_RE: OnceLock<Regex> = OnceLock::new();
        static PROVINCE_RE: OnceLock<Regex> = OnceLock::new();

        if token.is_empty() {
            return false;
        }
        if self.regions.contains(token) {
            return true;
        }

        let district = DISTRICT_RE
            .get_or_init(|| Regex::new(r"[가-힣]{2,}[시군구]$").expect("Invalid regex pattern"));
        if district.is_match(token) {
            return true;
        }

        let province = PROVINCE_RE
            .get_or_init(|| Regex::new(r"[가-힣]{3,}도$").expect("Invalid regex pattern"));
        province.is_match(token)
    }

    /// Theme keys matched by a title, or [`OTHER_THEME`] when none match
    #[must_use]
    pub fn themes_of(&self, title: &str) -> Vec<&str> {
        let title = title.trim();
        let hits: Vec<&str> = self
            .themes
            .iter()
            .filter(|rule| rule.matches(title))
            .map(|rule| rule.key.as_str())
            .collect();

        if hits.is_empty() {
            vec![OTHER_THEME]
        } else {
            hits
        }
    }

    /// Configured theme rules
    #[must_use]
    pub fn themes(&self) -> &[ThemeRule] {
        &self.themes
    }
}

/// True when every char is a Hangul syllable (가..힣) and the string is non-empty
#[must_use]
pub fn is_hangul_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_hangul_syllable)
}

/// Hangul syllable block U+AC00..=U+D7A3
#[must_use]
pub fn is_hangul_syllable(c: char) -> bool {
    ('가'..='힣').contains(&c)
}
