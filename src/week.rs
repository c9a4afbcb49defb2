//! 週単位のコスト集計
//!
//! 週は月曜始まり・日曜終わり（両端を含む）。

use crate::error::{Result, StoreError};
use crate::record::Record;
use chrono::{Datelike, Days, NaiveDate};
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Week {
    /// 指定日を含む月曜〜日曜の週
    ///
    /// 週がchronoの日付範囲からはみ出す場合は `None`。
    pub fn containing(date: NaiveDate) -> Option<Self> {
        let offset = u64::from(date.weekday().num_days_from_monday());
        let start = date.checked_sub_days(Days::new(offset))?;
        let end = start.checked_add_days(Days::new(6))?;
        Some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// 集計結果
#[derive(Debug, Clone, PartialEq)]
pub struct WeekTotal {
    pub week: Week,
    pub total: f64,
    /// 週内として加算したレコード数
    pub counted: usize,
    /// 製造日を解釈できずスキップしたレコードのインデックス
    pub skipped: Vec<usize>,
}

pub fn total_cost_for_week(records: &[Record], cutoff: NaiveDate) -> Result<WeekTotal> {
    let week =
        Week::containing(cutoff).ok_or_else(|| StoreError::InvalidDate(cutoff.to_string()))?;
    let mut total = 0.0;
    let mut counted = 0;
    let mut skipped = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        let date = match record.production_date() {
            Some(Ok(date)) => date,
            Some(Err(e)) => {
                warn!("record {} skipped: {:?}", idx, e);
                skipped.push(idx);
                continue;
            }
            None => continue,
        };

        if week.contains(date) {
            total += record.details_cost();
            counted += 1;
        }
    }

    Ok(WeekTotal { week, total, counted, skipped })
}
