//! レコードストア
//!
//! JSON配列1ファイルをバックエンドとする。操作のたびにファイル全体を
//! 読み込み、変更系の操作はファイル全体を書き戻す（キャッシュは持たない）。

use crate::error::{Result, StoreError};
use crate::record::Record;
use crate::week::{self, WeekTotal};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイル全体を読み込み
    pub fn load(&self) -> Result<Vec<Record>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::FileNotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        debug!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// 読み込みに失敗した場合は空のコレクションとして扱う
    ///
    /// 失敗内容はオペレータに表示する。
    pub fn load_or_empty(&self) -> Vec<Record> {
        match self.load() {
            Ok(records) => records,
            Err(StoreError::FileNotFound(path)) => {
                println!("File {} not found.", path);
                Vec::new()
            }
            Err(e) => {
                warn!("failed to read {}: {}", self.path.display(), e);
                println!("Error reading file {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// 2スペースインデントで全体を上書き保存
    pub fn save(&self, records: &[Record]) -> Result<()> {
        write_pretty(&self.path, records).map_err(|e| match e {
            StoreError::Io(source) => StoreError::Write {
                path: self.path.display().to_string(),
                source,
            },
            other => other,
        })?;
        debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    /// 末尾に追加して保存。追加後の件数を返す
    pub fn add(&self, record: Record) -> Result<usize> {
        let mut records = self.load_or_empty();
        records.push(record);
        self.save(&records)?;
        info!("record appended at index {}", records.len() - 1);
        Ok(records.len())
    }

    /// 位置指定で削除して保存
    ///
    /// 範囲外のインデックスはファイルに触れずに `InvalidIndex` を返す。
    pub fn delete(&self, index: i64) -> Result<Record> {
        let mut records = self.load_or_empty();
        let len = records.len();

        let idx = usize::try_from(index)
            .ok()
            .filter(|&i| i < len)
            .ok_or(StoreError::InvalidIndex { index, len })?;

        let removed = records.remove(idx);
        self.save(&records)?;
        info!("record {} deleted", idx);
        Ok(removed)
    }

    /// フィールド値が完全一致するレコードを元の順序で返す
    pub fn search(&self, field: &str, value: &Value) -> Vec<Record> {
        self.load_or_empty()
            .into_iter()
            .filter(|r| r.matches(field, value))
            .collect()
    }

    /// 指定日を含む週の部品コスト合計
    pub fn total_cost_for_week(&self, cutoff: NaiveDate) -> Result<WeekTotal> {
        let records = self.load_or_empty();
        week::total_cost_for_week(&records, cutoff)
    }
}

/// JSONを2スペースインデントで書き出す（親ディレクトリがなければ作成）
pub fn write_pretty<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
