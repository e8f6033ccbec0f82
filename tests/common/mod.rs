//! Common test utilities

use ritrends::models::Report;
use serde_json::{json, Value};

/// Create a report with the fields the analytics read
#[allow(dead_code)]
pub fn report(year: Option<i32>, title: &str, institute: &str) -> Report {
    Report {
        year,
        title: title.to_string(),
        institute: institute.to_string(),
        ..Default::default()
    }
}

/// Five reports over 2020-2022 where "탄소" appears only in the 2022 title
#[allow(dead_code)]
pub fn carbon_scenario() -> Vec<Report> {
    vec![
        report(Some(2020), "교통 수요 예측", "A연구원"),
        report(Some(2020), "주택 공급 정책", "A연구원"),
        report(Some(2021), "교통 안전 정책", "B연구원"),
        report(Some(2021), "주택 시장 동향", "B연구원"),
        report(Some(2022), "탄소 중립 도시 탄소 배출 탄소 감축", "A연구원"),
    ]
}

/// Reports over 2019-2022 where "드론" appears only in 2021
#[allow(dead_code)]
pub fn drone_spike() -> Vec<Report> {
    let mut rows = vec![
        report(Some(2019), "교통 수요", "A"),
        report(Some(2019), "주택 공급", "A"),
        report(Some(2020), "교통 수요", "A"),
        report(Some(2020), "주택 공급", "A"),
        report(Some(2022), "교통 수요", "A"),
        report(Some(2022), "주택 공급", "A"),
    ];
    for _ in 0..4 {
        rows.push(report(Some(2021), "드론 배송", "A"));
    }
    rows
}

/// Raw records using every legacy field name
#[allow(dead_code)]
pub fn legacy_records() -> Value {
    json!([
        {
            "id": "r-1",
            "year": 2021,
            "title": "청년 일자리 정책",
            "authors": ["홍길동", "김철수"],
            "institute": "A연구원",
            "url": "https://example.org/r-1"
        },
        {
            "reportId": "r-2",
            "YEARS": "2022",
            "name": "스마트 교통 체계",
            "author": "이영희",
            "org": "B연구원",
            "link": "https://example.org/r-2"
        },
        {
            "id": "r-3",
            "prodYear": "미상",
            "title": "탄소 중립 도시",
            "institute": "A연구원"
        },
        {
            "id": "r-4",
            "productionYear": 2020.0,
            "title": "고령화 대응 돌봄",
            "institute": "C연구원"
        }
    ])
}
