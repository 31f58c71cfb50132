//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 永続化処理がアプリケーション側で未接続
    #[error("Not wired: {0} has no persistence implementation")]
    NotWired(&'static str),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
