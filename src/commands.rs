//! 各操作の実行と結果表示
//!
//! 対話メニューとサブコマンドの両方から呼ばれる。入力の解釈もここで行う。
//! 表示先は呼び出し側が渡す（通常はstdout）。

use crate::error::{Result, StoreError};
use crate::record::{self, Record};
use crate::store::{self, RecordStore};
use crate::week::WeekTotal;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// 1. ファイル内容を表示
pub fn display_contents<W: Write>(store: &RecordStore, out: &mut W) -> Result<()> {
    let records = store.load_or_empty();
    writeln!(out, "Contents of the JSON file:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
    Ok(())
}

/// 2. JSON文字列からレコードを追加
pub fn add_record<W: Write>(store: &RecordStore, input: &str, out: &mut W) -> Result<()> {
    let record = Record::from_json_str(input)?;
    // 保存に失敗した場合は成功メッセージを出さずにエラーを返す
    store.add(record)?;
    writeln!(out, "Record added successfully.")?;
    Ok(())
}

/// 3. インデックス文字列を解釈してレコードを削除
pub fn delete_record<W: Write>(store: &RecordStore, input: &str, out: &mut W) -> Result<()> {
    delete_at(store, parse_index(input)?, out)
}

pub fn delete_at<W: Write>(store: &RecordStore, index: i64, out: &mut W) -> Result<()> {
    store.delete(index)?;
    writeln!(out, "Record deleted successfully.")?;
    Ok(())
}

/// 4. フィールド検索（`save_to` 指定時は結果をファイルにも保存）
pub fn search_records<W: Write>(
    store: &RecordStore,
    field: &str,
    value: &Value,
    save_to: Option<&Path>,
    out: &mut W,
) -> Result<Vec<Record>> {
    let results = store.search(field, value);

    writeln!(out, "Search results for {} = {}:", field, value_label(value))?;
    writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;

    if let Some(path) = save_to {
        store::write_pretty(path, &results)?;
        writeln!(out, "Results saved to {}", path.display())?;
    }

    Ok(results)
}

/// 5. 基準日を含む週のコスト合計
pub fn weekly_cost<W: Write>(
    store: &RecordStore,
    date_input: &str,
    out: &mut W,
) -> Result<WeekTotal> {
    let cutoff = record::parse_date(date_input)?;
    let result = store.total_cost_for_week(cutoff)?;

    if !result.skipped.is_empty() {
        writeln!(
            out,
            "Skipped {} record(s) with an invalid production_date: {:?}",
            result.skipped.len(),
            result.skipped
        )?;
    }
    writeln!(out, "Total cost of details for the week of {}: {}", cutoff, result.total)?;

    Ok(result)
}

pub fn parse_index(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| StoreError::InvalidIndexInput(trimmed.to_string()))
}

/// 検索値の解釈
///
/// 既定は文字列として比較する。`as_json` の場合はJSONリテラルとして
/// 解釈し、解釈できなければ文字列として扱う。
pub fn parse_search_value(raw: &str, as_json: bool) -> Value {
    if as_json {
        if let Ok(value) = serde_json::from_str::<Value>(raw) {
            return value;
        }
    }
    Value::String(raw.to_string())
}

fn value_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
