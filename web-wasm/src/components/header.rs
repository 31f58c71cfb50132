//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Inventory Desk - 連絡先・商品管理"</h1>
        </header>
    }
}
