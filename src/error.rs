use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データファイルが指定されていません。`inventory-desk config --set-data-file PATH` で設定してください")]
    MissingDataFile,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("カテゴリが見つかりません: {0}")]
    UnknownCategory(String),

    #[error("データ読み込みエラー: {0}")]
    Data(#[from] inventory_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeskError>;
