//! Tests for report loading and normalization

mod common;

use ritrends::error::{Error, ErrorCategory, TrendsErrorTrait};
use ritrends::models::{load_reports, normalize_reports};
use std::fs;

use common::legacy_records;

#[test]
fn test_normalize_legacy_records() {
    let reports = normalize_reports(&legacy_records());
    assert_eq!(reports.len(), 4);

    assert_eq!(reports[0].id.as_deref(), Some("r-1"));
    assert_eq!(reports[0].authors, "홍길동, 김철수");

    assert_eq!(reports[1].id.as_deref(), Some("r-2"));
    assert_eq!(reports[1].year, Some(2022));
    assert_eq!(reports[1].title, "스마트 교통 체계");
    assert_eq!(reports[1].institute, "B연구원");
    assert_eq!(reports[1].url, "https://example.org/r-2");

    // non-numeric year becomes None instead of failing
    assert!(reports[2].year.is_none());
    assert_eq!(reports[3].year, Some(2020));
}

#[test]
fn test_load_reports_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports.json");
    fs::write(&path, serde_json::to_string(&legacy_records()).unwrap()).unwrap();

    let reports = load_reports(&path).unwrap();
    assert_eq!(reports.len(), 4);
    assert_eq!(reports[0].title, "청년 일자리 정책");
}

#[test]
fn test_load_reports_rejects_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports.json");
    fs::write(&path, r#"{"title": "탄소 중립"}"#).unwrap();

    let err = load_reports(&path).unwrap_err();
    assert!(matches!(err, Error::Input { .. }));
    assert_eq!(err.category(), ErrorCategory::Input);
}

#[test]
fn test_load_reports_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports.json");
    fs::write(&path, "[{").unwrap();

    let err = load_reports(&path).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_reports(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.category(), ErrorCategory::Storage);
}
