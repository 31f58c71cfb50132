//! データソースのプレビュー表示
//!
//! 画面と同じ行データ・サブカテゴリ絞り込みを使って文字列に整形する。

use crate::config::OutputFormat;
use crate::error::{DeskError, Result};
use inventory_common::{
    table_rows, ContactField, ContactRecord, ProductCatalog, ProductForm, ProductRecord, RecordId,
};
use serde::Serialize;

/// 列幅を揃えた表を作る（値は切り詰めない）
fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(header.to_vec())];
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-"));
    for row in rows {
        lines.push(format_row(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_contacts(records: &[ContactRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(records),
        OutputFormat::Table => {
            let mut header = vec!["ID"];
            header.extend(ContactField::ALL.iter().map(|f| f.label()));
            let rows: Vec<Vec<String>> = table_rows(records)
                .into_iter()
                .map(|row| {
                    let mut cells = vec![row.id.to_string()];
                    cells.extend(row.cells);
                    cells
                })
                .collect();
            Ok(render_table(&header, &rows))
        }
    }
}

pub fn render_catalog(
    catalog: &ProductCatalog,
    category: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let Some(category) = category else {
        return match format {
            OutputFormat::Json => to_json(&catalog.categories),
            OutputFormat::Table => {
                let rows: Vec<Vec<String>> = catalog
                    .categories
                    .iter()
                    .map(|c| vec![c.id.to_string(), c.name.clone()])
                    .collect();
                Ok(render_table(&["ID", "カテゴリ"], &rows))
            }
        };
    };

    let id = RecordId::new(category);
    if catalog.category(&id).is_none() {
        return Err(DeskError::UnknownCategory(category.to_string()));
    }
    let options = catalog.subcategory_options(Some(&id));
    match format {
        OutputFormat::Json => to_json(&options),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = options
                .iter()
                .map(|s| vec![s.id.to_string(), s.name.clone()])
                .collect();
            Ok(render_table(&["ID", "サブカテゴリ"], &rows))
        }
    }
}

/// 商品一覧の1行
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: Option<RecordId>,
    pub serial_no: String,
    pub product_name: String,
    pub category: String,
    pub subcategory: String,
    /// サブカテゴリがカテゴリに属していない
    pub stale_subcategory: bool,
    pub image: Option<String>,
}

pub fn summarize_products(catalog: &ProductCatalog, products: &[ProductRecord]) -> Vec<ProductSummary> {
    let name_of_category = |id: Option<&RecordId>| {
        id.map(|id| catalog.category(id).map_or_else(|| id.to_string(), |c| c.name.clone()))
            .unwrap_or_default()
    };
    let name_of_subcategory = |id: Option<&RecordId>| {
        id.map(|id| {
            catalog
                .subcategories
                .iter()
                .find(|s| &s.id == id)
                .map_or_else(|| id.to_string(), |s| s.name.clone())
        })
        .unwrap_or_default()
    };

    products
        .iter()
        .map(|p| {
            let form = ProductForm::edit(p.clone());
            ProductSummary {
                id: p.id.clone(),
                serial_no: p.serial_no.clone(),
                product_name: p.product_name.clone(),
                category: name_of_category(form.category()),
                subcategory: name_of_subcategory(form.subcategory()),
                stale_subcategory: catalog.is_subcategory_stale(&form),
                image: form.displayed_image().map(str::to_string),
            }
        })
        .collect()
}

pub fn render_products(
    catalog: &ProductCatalog,
    products: &[ProductRecord],
    format: OutputFormat,
) -> Result<String> {
    let summaries = summarize_products(catalog, products);
    match format {
        OutputFormat::Json => to_json(&summaries),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = summaries
                .into_iter()
                .map(|s| {
                    let subcategory = if s.stale_subcategory {
                        format!("{} (*)", s.subcategory)
                    } else {
                        s.subcategory
                    };
                    vec![
                        s.id.map(|id| id.to_string()).unwrap_or_else(|| "(新規)".to_string()),
                        s.serial_no,
                        s.product_name,
                        s.category,
                        subcategory,
                        s.image.unwrap_or_default(),
                    ]
                })
                .collect();
            Ok(render_table(
                &["ID", "シリアル番号", "商品名", "カテゴリ", "サブカテゴリ", "画像"],
                &rows,
            ))
        }
    }
}
