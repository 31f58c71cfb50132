use crate::error::{DeskError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// データファイルを上書き指定する環境変数
pub const DATA_FILE_ENV: &str = "INVENTORY_DESK_DATA";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 既定のデータファイル
    pub data_file: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("config loaded from {}", path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DeskError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("inventory-desk").join("config.json"))
    }

    /// 使用するデータファイルを決定する（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_data_file(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        let env = std::env::var(DATA_FILE_ENV).ok().filter(|v| !v.is_empty());
        self.resolve_data_file_with(arg, env)
    }

    pub fn resolve_data_file_with(&self, arg: Option<PathBuf>, env: Option<String>) -> Result<PathBuf> {
        let path = arg
            .or_else(|| env.map(PathBuf::from))
            .or_else(|| self.data_file.clone())
            .ok_or(DeskError::MissingDataFile)?;

        if !path.exists() {
            return Err(DeskError::FileNotFound(path.display().to_string()));
        }
        Ok(path)
    }
}
