//! Report titles behind a keyword

use serde::Serialize;
use std::cmp::Ordering;

use crate::models::Report;

/// Reports whose title contains a keyword, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTitles {
    /// Keyword matched; `None` lists every report
    pub keyword: Option<String>,

    /// Matching reports before the limit
    pub total: usize,

    pub items: Vec<Report>,

    /// Matches left out by the limit
    pub more: usize,
}

/// List reports whose trimmed title contains `keyword` (ASCII case ignored)
///
/// Sorted by year descending, with year-less reports last, then by title.
/// A missing or blank keyword matches every report.
pub fn related_titles(rows: &[Report], keyword: Option<&str>, limit: usize) -> RelatedTitles {
    let keyword = keyword
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<&Report> = rows
        .iter()
        .filter(|report| match &keyword {
            Some(kw) => report.title.trim().to_lowercase().contains(kw.as_str()),
            None => true,
        })
        .collect();
    matched.sort_by(|a, b| newest_first(a, b));

    let total = matched.len();
    let items: Vec<Report> = matched.into_iter().take(limit).cloned().collect();

    RelatedTitles {
        keyword,
        total,
        more: total - items.len(),
        items,
    }
}

fn newest_first(a: &Report, b: &Report) -> Ordering {
    match (a.year, b.year) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.title.trim().cmp(b.title.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(year: Option<i32>, title: &str) -> Report {
        Report {
            year,
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_related_titles_order() {
        let rows = vec![
            report(Some(2020), "탄소 중립 도시"),
            report(None, "탄소 배출권"),
            report(Some(2022), "탄소 시장"),
            report(Some(2022), "농촌 탄소"),
            report(Some(2021), "교통 수요"),
        ];
        let related = related_titles(&rows, Some(" 탄소 "), 200);

        let titles: Vec<&str> = related.items.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["농촌 탄소", "탄소 시장", "탄소 중립 도시", "탄소 배출권"]);
        assert_eq!(related.keyword.as_deref(), Some("탄소"));
        assert_eq!(related.total, 4);
        assert_eq!(related.more, 0);
    }

    #[test]
    fn test_related_titles_limit() {
        let rows: Vec<Report> = (2000..2010).map(|y| report(Some(y), "탄소 중립")).collect();
        let related = related_titles(&rows, Some("탄소"), 3);
        assert_eq!(related.items.len(), 3);
        assert_eq!(related.items[0].year, Some(2009));
        assert_eq!(related.total, 10);
        assert_eq!(related.more, 7);
    }

    #[test]
    fn test_related_titles_without_keyword() {
        let rows = vec![report(Some(2020), "교통"), report(Some(2021), "주택")];
        let related = related_titles(&rows, None, 200);
        assert!(related.keyword.is_none());
        assert_eq!(related.total, 2);
        assert_eq!(related.items[0].title, "주택");

        assert_eq!(related_titles(&rows, Some("  "), 200).total, 2);
    }

    #[test]
    fn test_related_titles_ignores_ascii_case() {
        let rows = vec![report(Some(2020), "ESG경영 도입")];
        assert_eq!(related_titles(&rows, Some("esg경영"), 200).total, 1);
    }
}
