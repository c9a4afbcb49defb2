use crate::error::{Result, StoreError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "details_data.json";
pub const DEFAULT_RESULTS_FILE: &str = "results.json";

/// データファイルを上書きする環境変数
pub const DATA_FILE_ENV: &str = "DETAILS_STORE_FILE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            results_file: default_results_file(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_results_file() -> PathBuf {
    PathBuf::from(DEFAULT_RESULTS_FILE)
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 設定を読み込む。読めない場合は警告してデフォルトを使う
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                warn!("{}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!("ignoring config {}: {}", path.display(), e);
            eprintln!("Config file {} could not be read ({}); using defaults.", path.display(), e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        crate::store::write_pretty(path, self)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| StoreError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("details-store").join("config.json"))
    }

    /// 使用するデータファイル
    ///
    /// 優先順位: コマンドライン > 環境変数 > 設定ファイル
    pub fn resolve_data_file(&self, cli_override: Option<PathBuf>) -> PathBuf {
        resolve_with_env(cli_override, std::env::var(DATA_FILE_ENV).ok(), &self.data_file)
    }

    pub fn set_data_file(&mut self, path: PathBuf) -> Result<()> {
        self.data_file = path;
        self.save()
    }

    pub fn set_results_file(&mut self, path: PathBuf) -> Result<()> {
        self.results_file = path;
        self.save()
    }
}

fn resolve_with_env(
    cli_override: Option<PathBuf>,
    env_value: Option<String>,
    configured: &Path,
) -> PathBuf {
    cli_override
        .or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| configured.to_path_buf())
}
