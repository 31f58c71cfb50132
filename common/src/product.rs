//! 商品編集フォームの状態
//!
//! フォームの値はすべて呼び出し側が所有し、ダイアログはこの構造体を
//! 読み書きするだけ。数値項目も入力値のまま保持する。

use crate::types::{Category, ProductRecord, RecordId, Subcategory};

/// 入力欄の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
        }
    }
}

/// 商品フォームのテキスト入力項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    SerialNo,
    ItemName,
    Alias,
    PartNo,
    Model,
    Remarks,
    StockGroup,
    ProductName,
    Brand,
    Price,
    MinStock,
    CurrentStock,
}

impl ProductField {
    /// フォーム表示順
    pub const ALL: [ProductField; 12] = [
        ProductField::SerialNo,
        ProductField::ItemName,
        ProductField::Alias,
        ProductField::PartNo,
        ProductField::Model,
        ProductField::Remarks,
        ProductField::StockGroup,
        ProductField::ProductName,
        ProductField::Brand,
        ProductField::Price,
        ProductField::MinStock,
        ProductField::CurrentStock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::SerialNo => "serialNo",
            ProductField::ItemName => "itemName",
            ProductField::Alias => "alias",
            ProductField::PartNo => "partNo",
            ProductField::Model => "model",
            ProductField::Remarks => "remarks",
            ProductField::StockGroup => "stockGroup",
            ProductField::ProductName => "productName",
            ProductField::Brand => "brand",
            ProductField::Price => "price",
            ProductField::MinStock => "minStock",
            ProductField::CurrentStock => "currentStock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductField::SerialNo => "シリアル番号",
            ProductField::ItemName => "品目名",
            ProductField::Alias => "別名",
            ProductField::PartNo => "部品番号",
            ProductField::Model => "型式",
            ProductField::Remarks => "備考",
            ProductField::StockGroup => "在庫グループ",
            ProductField::ProductName => "商品名",
            ProductField::Brand => "ブランド",
            ProductField::Price => "価格",
            ProductField::MinStock => "最小在庫",
            ProductField::CurrentStock => "現在庫",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            ProductField::Price | ProductField::MinStock | ProductField::CurrentStock => {
                InputKind::Number
            }
            _ => InputKind::Text,
        }
    }
}

/// 商品フォームの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    record: ProductRecord,
    /// アップロード直後のプレビュー（Data URL など）
    image_preview: Option<String>,
}

impl ProductForm {
    /// 新規作成用の空フォーム
    pub fn new_record() -> Self {
        Self::default()
    }

    /// 既存商品の編集
    pub fn edit(record: ProductRecord) -> Self {
        Self { record, image_preview: None }
    }

    pub fn is_new(&self) -> bool {
        self.record.id.is_none()
    }

    pub fn get(&self, field: ProductField) -> &str {
        let r = &self.record;
        match field {
            ProductField::SerialNo => &r.serial_no,
            ProductField::ItemName => &r.item_name,
            ProductField::Alias => &r.alias,
            ProductField::PartNo => &r.part_no,
            ProductField::Model => &r.model,
            ProductField::Remarks => &r.remarks,
            ProductField::StockGroup => &r.stock_group,
            ProductField::ProductName => &r.product_name,
            ProductField::Brand => &r.brand,
            ProductField::Price => &r.price,
            ProductField::MinStock => &r.min_stock,
            ProductField::CurrentStock => &r.current_stock,
        }
    }

    /// 入力値をそのまま設定する（変換・範囲チェックなし）
    pub fn set(&mut self, field: ProductField, value: impl Into<String>) {
        let r = &mut self.record;
        let slot = match field {
            ProductField::SerialNo => &mut r.serial_no,
            ProductField::ItemName => &mut r.item_name,
            ProductField::Alias => &mut r.alias,
            ProductField::PartNo => &mut r.part_no,
            ProductField::Model => &mut r.model,
            ProductField::Remarks => &mut r.remarks,
            ProductField::StockGroup => &mut r.stock_group,
            ProductField::ProductName => &mut r.product_name,
            ProductField::Brand => &mut r.brand,
            ProductField::Price => &mut r.price,
            ProductField::MinStock => &mut r.min_stock,
            ProductField::CurrentStock => &mut r.current_stock,
        };
        *slot = value.into();
    }

    pub fn category(&self) -> Option<&RecordId> {
        self.record.category.as_ref()
    }

    /// カテゴリを変更する。選択済みサブカテゴリは残したまま。
    pub fn set_category(&mut self, category: Option<RecordId>) {
        self.record.category = category;
    }

    pub fn subcategory(&self) -> Option<&RecordId> {
        self.record.subcategory.as_ref()
    }

    pub fn set_subcategory(&mut self, subcategory: Option<RecordId>) {
        self.record.subcategory = subcategory;
    }

    pub fn stage_image_preview(&mut self, preview: impl Into<String>) {
        self.image_preview = Some(preview.into());
    }

    /// 表示する画像。プレビューを優先し、なければ保存済みURL。
    pub fn displayed_image(&self) -> Option<&str> {
        self.image_preview
            .as_deref()
            .or(self.record.image_url.as_deref())
    }

    pub fn record(&self) -> &ProductRecord {
        &self.record
    }

    pub fn into_record(self) -> ProductRecord {
        self.record
    }
}

/// カテゴリとサブカテゴリの参照データ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
}

impl ProductCatalog {
    pub fn new(categories: Vec<Category>, subcategories: Vec<Subcategory>) -> Self {
        Self { categories, subcategories }
    }

    pub fn category(&self, id: &RecordId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// 選択中カテゴリに属するサブカテゴリ（供給順）。未選択なら空。
    pub fn subcategory_options(&self, selected: Option<&RecordId>) -> Vec<&Subcategory> {
        let Some(selected) = selected else {
            return Vec::new();
        };
        self.subcategories
            .iter()
            .filter(|s| &s.category_id == selected)
            .collect()
    }

    /// 選択中サブカテゴリが選択中カテゴリに属していないか（値は変更しない）
    pub fn is_subcategory_stale(&self, form: &ProductForm) -> bool {
        match form.subcategory() {
            None => false,
            Some(sub) => !self
                .subcategory_options(form.category())
                .iter()
                .any(|s| &s.id == sub),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ProductCatalog {
        let cat = |id: &str, name: &str| Category { id: id.into(), name: name.to_string() };
        let sub = |id: &str, name: &str, c: &str| Subcategory {
            id: id.into(),
            name: name.to_string(),
            category_id: c.into(),
        };
        ProductCatalog::new(
            vec![cat("c1", "Hardware"), cat("c2", "Paint")],
            vec![
                sub("s1", "Bolts", "c1"),
                sub("s2", "Gloss", "c2"),
                sub("s3", "Nuts", "c1"),
                sub("s4", "Matte", "c2"),
            ],
        )
    }

    #[test]
    fn test_subcategory_options_exact_filter() {
        let catalog = catalog();
        let c1 = RecordId::from("c1");
        let ids: Vec<&str> = catalog
            .subcategory_options(Some(&c1))
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["s1", "s3"]);
        for s in catalog.subcategory_options(Some(&c1)) {
            assert_eq!(s.category_id, c1);
        }
    }

    #[test]
    fn test_subcategory_options_none_selected() {
        assert!(catalog().subcategory_options(None).is_empty());
        assert!(catalog().subcategory_options(Some(&"zz".into())).is_empty());
    }

    #[test]
    fn test_changing_category_does_not_clear_subcategory() {
        let catalog = catalog();
        let mut form = ProductForm::new_record();
        form.set_category(Some("c1".into()));
        form.set_subcategory(Some("s1".into()));
        assert!(!catalog.is_subcategory_stale(&form));

        form.set_category(Some("c2".into()));
        assert_eq!(form.subcategory(), Some(&RecordId::from("s1")));
        assert!(catalog.is_subcategory_stale(&form));
    }

    #[test]
    fn test_numeric_fields_pass_through() {
        let mut form = ProductForm::new_record();
        form.set(ProductField::Price, "1e3");
        form.set(ProductField::MinStock, "-5");
        form.set(ProductField::CurrentStock, "");
        assert_eq!(form.get(ProductField::Price), "1e3");
        assert_eq!(form.get(ProductField::MinStock), "-5");
        assert_eq!(form.record().current_stock, "");
    }

    #[test]
    fn test_every_field_round_trips_through_setter() {
        let mut form = ProductForm::new_record();
        for field in ProductField::ALL {
            form.set(field, field.as_str());
        }
        for field in ProductField::ALL {
            assert_eq!(form.get(field), field.as_str());
        }
    }

    #[test]
    fn test_input_kinds() {
        assert_eq!(ProductField::Price.input_kind(), InputKind::Number);
        assert_eq!(ProductField::CurrentStock.input_kind(), InputKind::Number);
        assert_eq!(ProductField::Brand.input_kind(), InputKind::Text);
    }

    #[test]
    fn test_displayed_image_prefers_preview() {
        let record = ProductRecord {
            id: Some("p1".into()),
            image_url: Some("https://cdn.example/p1.png".to_string()),
            ..Default::default()
        };
        let mut form = ProductForm::edit(record);
        assert!(!form.is_new());
        assert_eq!(form.displayed_image(), Some("https://cdn.example/p1.png"));
        form.stage_image_preview("data:image/png;base64,AAAA");
        assert_eq!(form.displayed_image(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_into_record_drops_unsaved_preview() {
        let mut form = ProductForm::new_record();
        form.set(ProductField::ItemName, "Bolt");
        form.set_category(Some("c1".into()));
        form.stage_image_preview("data:image/png;base64,AAAA");
        let record = form.into_record();
        assert_eq!(record.item_name, "Bolt");
        assert_eq!(record.category, Some(RecordId::from("c1")));
        assert_eq!(record.image_url, None);
    }

    #[test]
    fn test_new_record_has_no_image() {
        let form = ProductForm::new_record();
        assert!(form.is_new());
        assert_eq!(form.displayed_image(), None);
    }
}
