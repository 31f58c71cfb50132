//! Inventory Desk Common Library
//!
//! CLIとWeb(WASM)で共有される型と編集状態

pub mod types;
pub mod error;
pub mod notification;
pub mod contacts;
pub mod product;
pub mod store;
pub mod dataset;

pub use types::{Category, ContactRecord, ProductRecord, RecordId, Subcategory};
pub use error::{Error, Result};
pub use notification::{DismissReason, HideTicket, NotificationState, Severity, AUTO_HIDE_MS};
pub use contacts::{table_rows, ContactEditor, ContactField, ContactRow};
pub use product::{InputKind, ProductCatalog, ProductField, ProductForm};
pub use store::{ContactStore, ProductStore, UnwiredStore};
pub use dataset::Dataset;
