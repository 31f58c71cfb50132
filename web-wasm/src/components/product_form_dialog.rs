//! 商品編集ダイアログ
//!
//! 値はすべて呼び出し側の ProductForm が持つ。保存・閉じる・画像読み込みは
//! 呼び出し側のハンドラに任せる。

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};
use inventory_common::{ProductCatalog, ProductField, ProductForm, RecordId};

/// セレクトボックスの値をIDに変換（空なら未選択）
fn selected_id(value: String) -> Option<RecordId> {
    if value.is_empty() {
        None
    } else {
        Some(RecordId::new(value))
    }
}

#[component]
pub fn ProductFormDialog<FU, FS, FC>(
    form: RwSignal<ProductForm>,
    catalog: ReadSignal<ProductCatalog>,
    on_image_upload: FU,
    on_save: FS,
    on_close: FC,
) -> impl IntoView
where
    FU: Fn(File) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let is_category_selected = move |id: &RecordId| {
        form.with(|f| f.category() == Some(id))
    };
    let is_subcategory_selected = move |id: &RecordId| {
        form.with(|f| f.subcategory() == Some(id))
    };

    let category_options = move || {
        catalog
            .get()
            .categories
            .into_iter()
            .map(|c| {
                let selected = {
                    let id = c.id.clone();
                    move || is_category_selected(&id)
                };
                view! { <option value=c.id.to_string() selected=selected>{c.name}</option> }
            })
            .collect_view()
    };

    let subcategory_options = move || {
        let selected_category = form.with(|f| f.category().cloned());
        catalog
            .with(|c| {
                c.subcategory_options(selected_category.as_ref())
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .into_iter()
            .map(|s| {
                let selected = {
                    let id = s.id.clone();
                    move || is_subcategory_selected(&id)
                };
                view! { <option value=s.id.to_string() selected=selected>{s.name}</option> }
            })
            .collect_view()
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_image_upload(file);
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal modal-wide" role="dialog">
                <h2>{move || if form.with(|f| f.is_new()) { "商品の追加" } else { "商品の編集" }}</h2>

                <div class="settings-grid">
                    {ProductField::ALL
                        .into_iter()
                        .map(|field| {
                            view! {
                                <div class="form-group">
                                    <label for=field.as_str()>{field.label()}</label>
                                    <input
                                        type=field.input_kind().as_str()
                                        id=field.as_str()
                                        prop:value=move || form.with(|f| f.get(field).to_string())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| f.set(field, value));
                                        }
                                    />
                                </div>
                            }
                        })
                        .collect_view()}

                    <div class="form-group">
                        <label for="category">"カテゴリ"</label>
                        <select
                            id="category"
                            on:change=move |ev| {
                                let id = selected_id(event_target_value(&ev));
                                form.update(|f| f.set_category(id));
                            }
                        >
                            <option value="">"選択してください"</option>
                            {category_options}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="subcategory">"サブカテゴリ"</label>
                        <select
                            id="subcategory"
                            on:change=move |ev| {
                                let id = selected_id(event_target_value(&ev));
                                form.update(|f| f.set_subcategory(id));
                            }
                        >
                            <option value="">"選択してください"</option>
                            {subcategory_options}
                        </select>
                    </div>
                </div>

                <div class="form-group">
                    <label for="product-image">"商品画像"</label>
                    <input type="file" id="product-image" accept="image/*" on:change=on_file_change />
                    {move || {
                        form.with(|f| f.displayed_image().map(str::to_string))
                            .map(|src| view! { <img class="product-image" src=src alt="商品画像" /> })
                    }}
                </div>

                <div class="modal-actions">
                    <button
                        class="btn btn-secondary"
                        on:click={
                            let on_close = on_close.clone();
                            move |_| on_close(())
                        }
                    >
                        "閉じる"
                    </button>
                    <button
                        class="btn btn-primary"
                        on:click={
                            let on_save = on_save.clone();
                            move |_| on_save(())
                        }
                    >
                        "保存"
                    </button>
                </div>
            </div>
        </div>
    }
}
