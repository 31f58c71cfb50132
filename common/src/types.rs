//! レコードの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ContactRecord: 連絡先
//! - ProductRecord: 商品
//! - Category / Subcategory: 商品分類（外部から供給される参照データ）

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 不透明なレコードID
///
/// JSONでは文字列・整数のどちらでも受け付け、文字列として保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Uint(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Int(n) => Self(n.to_string()),
            RawId::Uint(n) => Self(n.to_string()),
        })
    }
}

/// 連絡先
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRecord {
    pub id: RecordId,
    pub name: String,
    pub mobile1: String,          // 電話番号（主）
    pub mobile2: String,          // 電話番号（副）
    pub email: String,
    pub address: String,
    pub location: String,
}

/// 商品
///
/// 数値項目（価格・最小在庫・現在庫）は入力値のまま文字列で保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRecord {
    /// 未設定なら新規
    pub id: Option<RecordId>,
    pub serial_no: String,
    pub item_name: String,
    pub alias: String,
    pub part_no: String,
    pub model: String,
    pub remarks: String,
    pub stock_group: String,
    pub product_name: String,
    pub brand: String,
    pub category: Option<RecordId>,
    pub subcategory: Option<RecordId>,
    pub price: String,
    pub min_stock: String,
    pub current_stock: String,
    /// 保存済み画像のURL
    pub image_url: Option<String>,
}

/// 商品カテゴリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: RecordId,
    pub name: String,
}

/// サブカテゴリ（所属カテゴリへの参照を持つ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: RecordId,
    pub name: String,
    #[serde(alias = "categoryRef")]
    pub category_id: RecordId,
}
