//! 操作層の統合テスト
//!
//! オペレータ入力の解釈・表示内容・エラー時の非破壊性を検証

use details_store::commands;
use details_store::{RecordStore, StoreError};
use serde_json::{json, Value};
use tempfile::tempdir;

const BOLT: &str = r#"{"name":"bolt","production_date":"2024-03-04","details_cost":50}"#;
const NUT: &str = r#"{"name":"nut","production_date":"2024-03-11","details_cost":30}"#;

fn seeded_store(dir: &std::path::Path) -> RecordStore {
    let store = RecordStore::new(dir.join("details_data.json"));
    commands::add_record(&store, BOLT, &mut Vec::new()).expect("追加失敗");
    commands::add_record(&store, NUT, &mut Vec::new()).expect("追加失敗");
    store
}

fn text(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("UTF-8ではない")
}

/// 追加成功時のメッセージ
#[test]
fn test_add_reports_success() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = RecordStore::new(dir.path().join("details_data.json"));

    let mut out = Vec::new();
    commands::add_record(&store, BOLT, &mut out).unwrap();
    assert_eq!(text(out), "Record added successfully.\n");
}

/// 不正なJSON入力では追加しない
#[test]
fn test_add_malformed_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = seeded_store(dir.path());

    let mut out = Vec::new();
    let err = commands::add_record(&store, "{ not json", &mut out).unwrap_err();
    assert!(matches!(err, StoreError::JsonParse(_)));
    assert!(err.to_string().starts_with("Error decoding JSON"));

    let err = commands::add_record(&store, "42", &mut out).unwrap_err();
    assert!(matches!(err, StoreError::NotAnObject(_)));

    assert!(out.is_empty());
    assert_eq!(store.load().unwrap().len(), 2);
}

/// 書き込めないパスでは成功メッセージを出さない
#[test]
fn test_add_and_delete_unwritable_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    // ディレクトリをデータファイルとして指定すると書き込みに失敗する
    let store = RecordStore::new(dir.path());

    let mut out = Vec::new();
    let err = commands::add_record(&store, BOLT, &mut out).unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
    assert!(err.to_string().starts_with("Error writing to file"));

    let err = commands::delete_record(&store, "0", &mut out).unwrap_err();
    assert!(matches!(err, StoreError::InvalidIndex { len: 0, .. }));

    let out = text(out);
    assert!(!out.contains("Record added successfully."));
    assert!(!out.contains("Record deleted successfully."));
}

/// 数値でないインデックスは削除しない
#[test]
fn test_delete_non_numeric_index() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = seeded_store(dir.path());

    let mut out = Vec::new();
    let err = commands::delete_record(&store, "first", &mut out).unwrap_err();
    assert_eq!(err.to_string(), "Invalid record index.");
    assert_eq!(store.load().unwrap().len(), 2);

    commands::delete_record(&store, " 0 ", &mut out).unwrap();
    assert_eq!(text(out), "Record deleted successfully.\n");

    let records = store.load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("name"), Some(&json!("nut")));
}

/// 表示は見出しと2スペースインデントのJSON
#[test]
fn test_display_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = RecordStore::new(dir.path().join("details_data.json"));
    commands::add_record(&store, r#"{"a":1}"#, &mut Vec::new()).unwrap();

    let mut out = Vec::new();
    commands::display_contents(&store, &mut out).unwrap();
    assert_eq!(text(out), "Contents of the JSON file:\n[\n  {\n    \"a\": 1\n  }\n]\n");
}

/// 検索結果の見出しと結果ファイルへの保存
#[test]
fn test_search_save_results() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = seeded_store(dir.path());
    let results_path = dir.path().join("results.json");

    let value = commands::parse_search_value("30", true);
    let mut out = Vec::new();
    let save_to = Some(results_path.as_path());
    let results = commands::search_records(&store, "details_cost", &value, save_to, &mut out)
        .expect("検索失敗");
    assert_eq!(results.len(), 1);
    assert!(text(out).starts_with("Search results for details_cost = 30:\n"));

    let saved: Value =
        serde_json::from_str(&std::fs::read_to_string(&results_path).unwrap()).unwrap();
    assert_eq!(saved, json!([{"name":"nut","production_date":"2024-03-11","details_cost":30}]));
}

/// 文字列として比較した場合、数値フィールドには一致しない
#[test]
fn test_search_as_text() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = seeded_store(dir.path());

    let value = commands::parse_search_value("bolt", false);
    let mut out = Vec::new();
    let results = commands::search_records(&store, "name", &value, None, &mut out).unwrap();
    assert_eq!(results.len(), 1);
    assert!(text(out).starts_with("Search results for name = bolt:\n"));

    let value = commands::parse_search_value("30", false);
    let results =
        commands::search_records(&store, "details_cost", &value, None, &mut Vec::new()).unwrap();
    assert!(results.is_empty());
}

/// 週次集計: 合計は整数なら小数点なしで表示
#[test]
fn test_weekly_cost_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = seeded_store(dir.path());

    let mut out = Vec::new();
    let result = commands::weekly_cost(&store, "2024-03-06", &mut out).unwrap();
    assert_eq!(result.total, 50.0);
    assert_eq!(text(out), "Total cost of details for the week of 2024-03-06: 50\n");

    let mut out = Vec::new();
    let result = commands::weekly_cost(&store, "2024-03-17", &mut out).unwrap();
    assert_eq!(result.total, 30.0);
    assert!(text(out).ends_with(": 30\n"));
}

/// 週次集計: 基準日の形式が不正なら集計しない
#[test]
fn test_weekly_cost_date_input() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = seeded_store(dir.path());

    let mut out = Vec::new();
    let err = commands::weekly_cost(&store, "2024-3-32", &mut out).unwrap_err();
    assert!(matches!(err, StoreError::InvalidDate(_)));
    assert!(out.is_empty());
}

/// 週次集計: 日付範囲の端の入力でも落ちずにエラーを返す
#[test]
fn test_weekly_cost_extreme_dates() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = seeded_store(dir.path());

    for input in ["+262142-12-31", "-262143-01-01", "+262142-12-30"] {
        let err = commands::weekly_cost(&store, input, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidDate(_)), "{}: {:?}", input, err);
    }

    let result = commands::weekly_cost(&store, "9999-12-31", &mut Vec::new()).unwrap();
    assert_eq!(result.total, 0.0);
}

/// 表示はファイルがなくても失敗しない
#[test]
fn test_display_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = RecordStore::new(dir.path().join("nothing.json"));

    let mut out = Vec::new();
    assert!(commands::display_contents(&store, &mut out).is_ok());
    assert_eq!(text(out), "Contents of the JSON file:\n[]\n");
    assert!(!store.path().exists());
}
