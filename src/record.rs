//! レコード（部品1件）の型付きビュー
//!
//! 中身は自由形式のJSONオブジェクトのまま保持し、未知のフィールドも
//! 読み書きで失われないようにする。既知フィールドだけアクセサを用意する。

use crate::error::{Result, StoreError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PRODUCTION_DATE: &str = "production_date";
pub const DETAILS_COST: &str = "details_cost";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// オペレータ入力（1行のJSON）からレコードを生成
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(StoreError::NotAnObject(other.to_string())),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// フィールドが存在し、値が完全一致する場合のみtrue
    pub fn matches(&self, field: &str, value: &Value) -> bool {
        self.get(field) == Some(value)
    }

    /// 製造日
    ///
    /// - 未設定・null・空文字 → `None`
    /// - `YYYY-MM-DD` として解釈できない → `Some(Err(..))`
    pub fn production_date(&self) -> Option<Result<NaiveDate>> {
        match self.get(PRODUCTION_DATE)? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(parse_date(s)),
            other => Some(Err(StoreError::InvalidDate(other.to_string()))),
        }
    }

    /// 部品コスト（未設定・数値以外は0）
    pub fn details_cost(&self) -> f64 {
        self.get(DETAILS_COST)
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }
}

/// `YYYY-MM-DD` 形式の日付を解析
///
/// 年は4桁（0001〜9999）のみ。月・日は1〜2桁を受け付ける。
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let invalid = || StoreError::InvalidDate(trimmed.to_string());

    let mut parts = trimmed.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let all_digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !all_digits(year, 4, 4)
        || year == "0000"
        || !all_digits(month, 1, 2)
        || !all_digits(day, 1, 2)
    {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}
