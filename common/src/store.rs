//! 永続化処理のインターフェース
//!
//! 保存・削除の実装はアプリケーション側が供給する。未接続のままだと
//! UnwiredStore が必ずエラーを返す。

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::types::{ContactRecord, ProductRecord, RecordId};

#[async_trait(?Send)]
pub trait ContactStore {
    async fn save_contact(&self, record: &ContactRecord) -> Result<()>;
    async fn delete_contact(&self, id: &RecordId) -> Result<()>;
}

#[async_trait(?Send)]
pub trait ProductStore {
    async fn save_product(&self, record: &ProductRecord) -> Result<()>;
}

/// 未接続の永続化処理
#[derive(Debug, Clone, Copy, Default)]
pub struct UnwiredStore;

#[async_trait(?Send)]
impl ContactStore for UnwiredStore {
    async fn save_contact(&self, _record: &ContactRecord) -> Result<()> {
        Err(Error::NotWired("saveContact"))
    }

    async fn delete_contact(&self, _id: &RecordId) -> Result<()> {
        Err(Error::NotWired("deleteContact"))
    }
}

#[async_trait(?Send)]
impl ProductStore for UnwiredStore {
    async fn save_product(&self, _record: &ProductRecord) -> Result<()> {
        Err(Error::NotWired("saveProduct"))
    }
}
