//! End-to-end tests for the trend analytics pipeline

mod common;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use ritrends::analytics::counters::build_counters;
use ritrends::analytics::keyword_trends::burst_keywords;
use ritrends::analytics::{Analyzer, Insufficient, Tokenizer, YearRange};
use ritrends::config::{AnalysisConfig, BurstConfig};
use ritrends::models::{Report, ReportFilter, ALL_INSTITUTES};

use common::{carbon_scenario, drone_spike, report};

#[test]
fn test_carbon_burst_end_to_end() {
    let config = AnalysisConfig {
        burst: BurstConfig {
            min_overall: 3,
            ..Default::default()
        },
        ..Default::default()
    };
    let analyzer = Analyzer::new(config, Default::default());
    let dashboard = analyzer.analyze(&carbon_scenario(), &ReportFilter::default());

    assert_eq!(dashboard.total, 5);
    assert_eq!(dashboard.burst.years, vec![2020, 2021, 2022]);
    assert!(dashboard.burst.insufficient.is_none());

    let top = &dashboard.burst.items[0];
    assert_eq!(top.keyword, "탄소");
    assert_eq!(top.best_year, 2022);
    assert_eq!(top.best_delta, 300.0);
    assert_eq!(top.rates, vec![0.0, 0.0, 300.0]);
    assert_eq!(dashboard.burst_series[0].label, "탄소");
}

#[test]
fn test_carbon_below_default_noise_floor() {
    let dashboard = Analyzer::default().analyze(&carbon_scenario(), &ReportFilter::default());
    assert!(dashboard.burst.items.iter().all(|item| item.keyword != "탄소"));
    assert_eq!(dashboard.top_keyword(), Some(&("탄소".to_string(), 3)));
}

#[test]
fn test_burst_spike_year() {
    let tokenizer = Tokenizer::default();
    let counters = build_counters(&drone_spike(), &tokenizer);
    let burst = burst_keywords(&counters, &BurstConfig::default());

    assert_eq!(burst.years, vec![2019, 2020, 2021, 2022]);
    let drone = burst
        .items
        .iter()
        .find(|item| item.keyword == "드론")
        .unwrap();
    assert_eq!(drone.best_year, 2021);
    assert_eq!(drone.best_delta, 100.0);
    assert_eq!(drone.first_rate, 0.0);
    assert_eq!(drone.last_rate, 0.0);

    // equal deltas keep first-seen order
    let keywords: Vec<&str> = burst.items.iter().map(|i| i.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["드론", "배송"]);
}

#[test]
fn test_burst_single_year() {
    let rows = vec![report(Some(2020), "탄소 중립", "A"); 5];
    let dashboard = Analyzer::default().analyze(&rows, &ReportFilter::default());
    assert_eq!(
        dashboard.burst.insufficient,
        Some(Insufficient::TooFewYears { found: 1 })
    );
    assert!(dashboard.burst.items.is_empty());
}

#[test]
fn test_rising_single_year_guard() {
    let rows = vec![report(Some(2020), "탄소 중립", "A"); 6];
    let dashboard = Analyzer::default().analyze(&rows, &ReportFilter::default());

    assert!(dashboard.rising.items.is_empty());
    assert_eq!(
        dashboard.rising.insufficient,
        Some(Insufficient::RangeTooShort {
            from: 2020,
            to: 2020
        })
    );
    assert!(dashboard.rising.meta.contains("급상승"));
}

#[test]
fn test_rising_keywords() {
    let mut rows = vec![
        report(Some(2018), "교통 수요", "A"),
        report(Some(2019), "교통 수요", "A"),
    ];
    rows.extend(vec![report(Some(2020), "탄소 중립", "A"); 2]);
    rows.extend(vec![report(Some(2021), "탄소 중립", "A"); 3]);

    let dashboard = Analyzer::default().analyze(&rows, &ReportFilter::default());
    let rising = &dashboard.rising;
    let windows = rising.windows.unwrap();
    assert_eq!(windows.early, YearRange::new(2018, 2019));
    assert_eq!(windows.late, YearRange::new(2020, 2021));

    let keywords: Vec<&str> = rising.items.iter().map(|i| i.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["탄소", "중립"]);
    assert_eq!(rising.items[0].early, 0);
    assert_eq!(rising.items[0].late, 5);
    assert_eq!(rising.items[0].delta, 5);
    assert_eq!(rising.items[0].ratio, 6.0);
}

#[test]
fn test_heatmap_halving() {
    let rows = vec![
        report(Some(2020), "탄소 중립", "A연구원"),
        report(Some(2020), "탄소 시장", "A연구원"),
        report(Some(2021), "교통 수요", "A연구원"),
        report(Some(2021), "주택 공급", "A연구원"),
        report(Some(2020), "탄소 중립", "B연구원"),
        report(Some(2021), "탄소 시장", "B연구원"),
    ];
    let heat = Analyzer::default()
        .analyze(&rows, &ReportFilter::default())
        .heatmap;

    assert_eq!(heat.rows, vec!["A연구원", "B연구원"]);
    let a = heat.value("A연구원", "탄소").unwrap();
    let b = heat.value("B연구원", "탄소").unwrap();
    assert_eq!(a, 50.0);
    assert_eq!(b, 100.0);
    assert_eq!(a * 2.0, b);
    assert_eq!(heat.max, 100.0);
}

#[test]
fn test_region_exclusion() {
    let rows = vec![
        report(Some(2020), "서울시 교통 정책", "A"),
        report(Some(2020), "서울시 교통 정책", "A"),
        report(Some(2021), "부산 교통 정책", "A"),
    ];
    let analyzer = Analyzer::default();
    let counters = analyzer.build_counters(&rows);

    assert!(analyzer.tokenizer().tokenize(&rows[0].title).contains(&"서울시".to_string()));
    assert!(!counters.keyword.contains("서울시"));
    assert!(!counters.keyword.contains("부산"));
    assert_eq!(counters.keyword.get("교통"), 3);
    assert!(!counters.bigram.contains("서울시 교통"));
    assert_eq!(counters.bigram.get("교통 정책"), 3);

    let dashboard = analyzer.analyze(&rows, &ReportFilter::default());
    assert!(dashboard.cooccurrence.nodes.iter().all(|n| n.id != "서울시"));
    assert_eq!(dashboard.cooccurrence.link_weight("정책", "교통"), Some(3));
    assert!(!dashboard.heatmap.cols.contains(&"서울시".to_string()));
    assert!(dashboard.word_cloud.iter().all(|(k, _)| k != "서울시"));
}

#[test]
fn test_province_names_stay_whole() {
    let rows = vec![
        report(Some(2020), "충청북도 교통 수요", "A"),
        report(Some(2021), "경상남도 교통 수요", "A"),
    ];
    let counters = Analyzer::default().build_counters(&rows);

    for name in ["충청북도", "충청북", "경상남도", "경상남"] {
        assert!(!counters.keyword.contains(name), "{name} counted as keyword");
    }
    assert!(!counters.bigram.contains("충청북도 교통"));
    assert!(!counters.bigram.contains("충청북 교통"));
    assert_eq!(counters.bigram.get("교통 수요"), 2);
    assert_eq!(counters.keyword.get("교통"), 2);
}

#[test]
fn test_related_titles_follow_filter() {
    let rows = vec![
        report(Some(2020), "탄소 중립 전략", "A"),
        report(Some(2022), "탄소 시장 동향", "A"),
        report(Some(2021), "교통 수요", "B"),
    ];
    let dashboard = Analyzer::default().analyze(&rows, &ReportFilter::default());

    assert_eq!(dashboard.related.keyword.as_deref(), Some("탄소"));
    assert_eq!(dashboard.related.total, 2);
    assert_eq!(dashboard.related.items[0].title, "탄소 시장 동향");
    assert_eq!(dashboard.related.more, 0);
}

#[test]
fn test_yearless_asymmetry() {
    let rows = vec![
        report(None, "탄소 중립", "X연구원"),
        report(Some(2020), "탄소 시장", "Y연구원"),
    ];
    let counters = Analyzer::default().build_counters(&rows);

    assert_eq!(counters.reports, 2);
    assert_eq!(counters.keyword.get("탄소"), 2);
    assert_eq!(counters.keyword_in_year("탄소", 2020), 1);
    assert_eq!(counters.by_year.values().sum::<u64>(), 1);
    assert_eq!(counters.by_institute.get("X연구원"), 1);
    assert!(!counters.keyword_by_year.contains_key("중립"));
}

#[test]
fn test_year_filter_keeps_yearless() {
    let rows = vec![
        report(None, "탄소 중립", "A"),
        report(Some(2020), "탄소 시장", "A"),
        report(Some(2022), "교통 수요", "A"),
    ];
    let filter = ReportFilter {
        year_from: Some(2022),
        year_to: Some(2021),
        ..Default::default()
    };
    let kept = filter.apply(&rows);
    assert_eq!(kept.len(), 2);
    assert!(kept[0].year.is_none());
    assert_eq!(kept[1].year, Some(2022));
}

#[test]
fn test_ranking_ties_keep_first_seen_order() {
    let rows = vec![
        report(Some(2020), "나무 가지", "B"),
        report(Some(2020), "뿌리", "A"),
    ];
    let dashboard = Analyzer::default().analyze(&rows, &ReportFilter::default());
    assert_eq!(
        dashboard.keywords,
        vec![
            ("나무".to_string(), 1),
            ("가지".to_string(), 1),
            ("뿌리".to_string(), 1)
        ]
    );
    assert_eq!(
        dashboard.institutes,
        vec![("B".to_string(), 1), ("A".to_string(), 1)]
    );
}

#[test]
fn test_volume_and_trend_lines() {
    let rows = vec![
        report(Some(2020), "탄소 중립", "A"),
        report(Some(2020), "교통 수요", "A"),
        report(Some(2021), "탄소 시장", "B"),
    ];
    let dashboard = Analyzer::default().analyze(&rows, &ReportFilter::default());

    assert_eq!(dashboard.volume_by_year, vec![(2020, 2), (2021, 1)]);
    assert_eq!(dashboard.trend.years, vec![2020, 2021]);
    assert_eq!(dashboard.trend.series[0].label, "탄소");
    assert_eq!(dashboard.trend.series[0].values, vec![50.0, 100.0]);
    assert_eq!(dashboard.year_span, Some(YearRange::new(2020, 2021)));
}

#[test]
fn test_snapshot_export() {
    let rows = vec![
        report(Some(2017), "탄소 중립", "A"),
        report(Some(2019), "탄소 시장", "A"),
        report(Some(2022), "교통 수요", "B"),
        report(None, "주택 공급", "B"),
    ];
    let filter = ReportFilter {
        institute: Some(ALL_INSTITUTES.to_string()),
        ..Default::default()
    };
    let generated_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let snapshot = Analyzer::default().snapshot(&rows, &filter, generated_at);

    assert_eq!(snapshot.total, 4);
    assert_eq!(snapshot.file_name(), "ri_trends_2017-2022_ALL.json");
    assert_eq!(
        snapshot.five_year_top_keywords.keys().collect::<Vec<_>>(),
        vec!["2015-2019", "2020-2024"]
    );
    assert_eq!(
        snapshot.five_year_top_keywords["2015-2019"][0],
        ("탄소".to_string(), 2)
    );
    assert_eq!(snapshot.top_keywords[0], ("탄소".to_string(), 2));

    let json: serde_json::Value =
        serde_json::from_str(&snapshot.to_json_pretty().unwrap()).unwrap();
    assert_eq!(json["filters"]["institute"], "ALL");
    assert_eq!(json["filters"]["yearFrom"], 2017);
    assert_eq!(json["generatedAt"], "2024-05-01T09:00:00Z");
}

#[test]
fn test_extreme_years_do_not_overflow() {
    let rows = vec![
        report(Some(2020), "탄소 중립", "A"),
        report(Some(i32::MAX), "탄소 시장", "A"),
        report(Some(i32::MAX), "교통 수요", "A"),
    ];
    let analyzer = Analyzer::default();
    let dashboard = analyzer.analyze(&rows, &ReportFilter::default());
    assert_eq!(dashboard.year_span, Some(YearRange::new(2020, i32::MAX)));
    assert_eq!(dashboard.volume_by_year, vec![(2020, 1), (i32::MAX, 2)]);

    let generated_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let snapshot = analyzer.snapshot(&rows, &ReportFilter::default(), generated_at);
    assert_eq!(snapshot.total, 3);
    assert_eq!(snapshot.five_year_top_keywords.len(), 2);

    let single = vec![report(Some(i32::MAX), "탄소 시장", "A")];
    let dashboard = analyzer.analyze(&single, &ReportFilter::default());
    assert_eq!(dashboard.total, 1);
    assert!(dashboard.burst.items.is_empty());
}

#[test]
fn test_institute_filter() {
    let rows = vec![
        report(Some(2020), "탄소 중립", "A"),
        report(Some(2020), "교통 수요", "B"),
    ];
    let filter = ReportFilter {
        institute: Some("B".to_string()),
        ..Default::default()
    };
    let dashboard = Analyzer::default().analyze(&rows, &filter);
    assert_eq!(dashboard.total, 1);
    assert_eq!(dashboard.top_keyword().map(|(k, _)| k.as_str()), Some("교통"));
}

const WORDS: &[&str] = &[
    "탄소", "중립", "교통", "주택", "정책을", "서울시", "회의", "청년", "분석", "2024년", "AI",
    "드론", "수요", "공급",
];

fn arb_report() -> impl Strategy<Value = Report> {
    (
        prop::option::of(2015i32..2025),
        prop::collection::vec(prop::sample::select(WORDS.to_vec()), 0..6),
        prop::sample::select(vec!["A연구원", "B연구원", "C연구원", ""]),
    )
        .prop_map(|(year, words, institute)| report(year, &words.join(" "), institute))
}

proptest! {
    #[test]
    fn prop_analyze_is_idempotent(rows in prop::collection::vec(arb_report(), 0..30)) {
        let analyzer = Analyzer::default();
        let filter = ReportFilter::default();
        let first = serde_json::to_string(&analyzer.analyze(&rows, &filter)).unwrap();
        let second = serde_json::to_string(&analyzer.analyze(&rows, &filter)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_cooccurrence_is_bounded(rows in prop::collection::vec(arb_report(), 0..30)) {
        let dashboard = Analyzer::default().analyze(&rows, &ReportFilter::default());
        let graph = &dashboard.cooccurrence;
        prop_assert!(graph.nodes.len() <= 30);
        prop_assert!(graph.links.len() <= 220);
        for link in &graph.links {
            prop_assert!(link.weight >= 2);
            prop_assert!(link.source < link.target);
        }
    }
}
