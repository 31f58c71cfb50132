//! プレビュー表示テスト
//!
//! データファイルから一覧・カテゴリを整形した結果を検証

use inventory_common::Dataset;
use inventory_desk::config::OutputFormat;
use inventory_desk::error::DeskError;
use inventory_desk::preview::{render_catalog, render_contacts, render_products, summarize_products};
use tempfile::tempdir;

const DATA: &str = r#"{
    "contacts": [
        {"id": 1, "name": "Alice", "mobile1": "555", "mobile2": "", "email": "a@x.com", "address": "1 St", "location": "NY"},
        {"id": 2, "name": "Bob", "mobile1": "777", "mobile2": "888", "email": "b@y.com", "address": "2 Ave", "location": "LA"}
    ],
    "categories": [
        {"id": "c1", "name": "Hardware"},
        {"id": "c2", "name": "Paint"}
    ],
    "subcategories": [
        {"id": "s1", "name": "Bolts", "categoryId": "c1"},
        {"id": "s2", "name": "Gloss", "categoryId": "c2"},
        {"id": "s3", "name": "Nuts", "categoryId": "c1"}
    ],
    "products": [
        {"id": "p1", "serialNo": "SN-1", "productName": "Bolt", "category": "c1", "subcategory": "s1",
         "imageUrl": "https://cdn.example/p1.png"},
        {"id": "p2", "serialNo": "SN-2", "productName": "Odd", "category": "c2", "subcategory": "s1"}
    ]
}"#;

fn dataset() -> Dataset {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("data.json");
    std::fs::write(&path, DATA).unwrap();
    Dataset::from_file(&path).expect("データ読み込み失敗")
}

/// 連絡先は1件につき1行、値はそのまま
#[test]
fn test_contacts_table_one_row_per_record() {
    let out = render_contacts(&dataset().contacts, OutputFormat::Table).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    // ヘッダー + 区切り + 2行
    assert_eq!(lines.len(), 4);
    for value in ["Alice", "555", "a@x.com", "1 St", "NY"] {
        assert!(lines[2].contains(value), "missing {value}");
    }
    assert!(lines[3].starts_with("2 "));
    assert!(lines[3].contains("888"));
}

/// JSON出力は入力と同じ値
#[test]
fn test_contacts_json_is_verbatim() {
    let data = dataset();
    let out = render_contacts(&data.contacts, OutputFormat::Json).unwrap();
    let parsed: Vec<inventory_common::ContactRecord> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, data.contacts);
}

/// カテゴリ指定でサブカテゴリを絞り込む
#[test]
fn test_catalog_filters_subcategories() {
    let catalog = dataset().catalog();
    let out = render_catalog(&catalog, Some("c1"), OutputFormat::Table).unwrap();
    assert!(out.contains("Bolts"));
    assert!(out.contains("Nuts"));
    assert!(!out.contains("Gloss"));
}

/// カテゴリ一覧
#[test]
fn test_catalog_lists_categories() {
    let catalog = dataset().catalog();
    let out = render_catalog(&catalog, None, OutputFormat::Table).unwrap();
    assert!(out.contains("Hardware"));
    assert!(out.contains("Paint"));
}

/// 存在しないカテゴリ
#[test]
fn test_catalog_unknown_category() {
    let catalog = dataset().catalog();
    let result = render_catalog(&catalog, Some("zz"), OutputFormat::Table);
    assert!(matches!(result, Err(DeskError::UnknownCategory(ref c)) if c == "zz"));
}

/// カテゴリに属さないサブカテゴリは印を付けるだけで値は変えない
#[test]
fn test_products_mark_stale_subcategory() {
    let data = dataset();
    let summaries = summarize_products(&data.catalog(), &data.products);
    assert_eq!(summaries.len(), 2);
    assert!(!summaries[0].stale_subcategory);
    assert_eq!(summaries[0].image.as_deref(), Some("https://cdn.example/p1.png"));
    assert!(summaries[1].stale_subcategory);
    assert_eq!(summaries[1].subcategory, "Bolts");

    let out = render_products(&data.catalog(), &data.products, OutputFormat::Table).unwrap();
    assert!(out.contains("Bolts (*)"));
}
