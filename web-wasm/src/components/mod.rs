pub mod header;
pub mod contact_table;
pub mod edit_contact_dialog;
pub mod delete_contact_dialog;
pub mod notification_bar;
pub mod product_form_dialog;
