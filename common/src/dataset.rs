//! データソース（JSON）の読み込み

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::product::ProductCatalog;
use crate::types::{Category, ContactRecord, ProductRecord, Subcategory};

/// 画面に供給されるデータ一式
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub contacts: Vec<ContactRecord>,
    pub products: Vec<ProductRecord>,
    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
}

impl Dataset {
    /// JSONファイルから読み込み
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json_str(content: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(content)?;
        log::debug!(
            "dataset loaded: {} contacts, {} products, {} categories, {} subcategories",
            dataset.contacts.len(),
            dataset.products.len(),
            dataset.categories.len(),
            dataset.subcategories.len()
        );
        Ok(dataset)
    }

    pub fn catalog(&self) -> ProductCatalog {
        ProductCatalog::new(self.categories.clone(), self.subcategories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "contacts": [{"id": 1, "name": "Alice", "mobile1": "555", "mobile2": "",
                          "email": "a@x.com", "address": "1 St", "location": "NY"}],
            "categories": [{"id": "c1", "name": "Hardware"}],
            "subcategories": [{"id": "s1", "name": "Bolts", "categoryId": "c1"}]
        }"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.contacts.len(), 1);
        assert!(dataset.products.is_empty());
        let catalog = dataset.catalog();
        assert_eq!(catalog.subcategory_options(Some(&"c1".into())).len(), 1);
    }

    #[test]
    fn test_contacts_keep_input_order() {
        let json = r#"{"contacts": [{"id": "b"}, {"id": "a"}, {"id": 3}]}"#;
        let ids: Vec<String> = Dataset::from_json_str(json)
            .unwrap()
            .contacts
            .iter()
            .map(|c| c.id.to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a", "3"]);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Dataset::from_json_str("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Dataset::from_file(Path::new("/nonexistent/inventory/data.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
