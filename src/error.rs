use thiserror::Error;

/// ストア操作のエラー
///
/// Displayの文言はそのままオペレータに表示される。
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("File {0} not found.")]
    FileNotFound(String),

    #[error("Error decoding JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error writing to file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error decoding JSON: expected a JSON object, got {0}")]
    NotAnObject(String),

    /// 範囲外のインデックス
    #[error("Invalid record index.")]
    InvalidIndex { index: i64, len: usize },

    /// 数値として読めないインデックス入力
    #[error("Invalid record index.")]
    InvalidIndexInput(String),

    #[error("Invalid date format. Please enter date in YYYY-MM-DD format.")]
    InvalidDate(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
