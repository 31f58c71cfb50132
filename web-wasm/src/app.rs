//! メインアプリケーションコンポーネント

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;
use inventory_common::{
    ContactEditor, ContactRecord, ContactStore, Dataset, HideTicket, NotificationState,
    ProductForm, ProductRecord, ProductStore, RecordId, Result, Severity, UnwiredStore,
    AUTO_HIDE_MS,
};

use crate::components::{
    contact_table::ContactTable,
    delete_contact_dialog::DeleteContactDialog,
    edit_contact_dialog::EditContactDialog,
    header::Header,
    notification_bar::NotificationBar,
    product_form_dialog::ProductFormDialog,
};
use crate::upload::read_image_preview;

const SAMPLE_DATA: &str = include_str!("../assets/sample.json");

fn load_dataset() -> Dataset {
    match Dataset::from_json_str(SAMPLE_DATA) {
        Ok(dataset) => dataset,
        Err(e) => {
            gloo::console::error!(format!("サンプルデータの読み込みに失敗: {}", e));
            Dataset::default()
        }
    }
}

/// 一定時間後にチケットを期限切れにする
fn arm_auto_hide<F>(ticket: HideTicket, expire: F)
where
    F: FnOnce(HideTicket) + 'static,
{
    Timeout::new(AUTO_HIDE_MS, move || expire(ticket)).forget();
}

/// 商品保存の結果を商品用の通知に出す
fn report_product_save(notification: &mut NotificationState, result: &Result<()>) -> HideTicket {
    match result {
        Ok(()) => notification.notify("商品を保存しました", Severity::Success),
        Err(err) => notification.notify(format!("保存に失敗しました: {}", err), Severity::Error),
    }
}

/// 一覧の行。IDのない商品もあるので位置をキーにする
fn product_rows(products: Vec<ProductRecord>) -> Vec<(usize, ProductRecord)> {
    products.into_iter().enumerate().collect()
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let dataset = load_dataset();
    let catalog_data = dataset.catalog();

    // アプリケーション状態
    let contacts = signal(dataset.contacts).0;
    let products = signal(dataset.products).0;
    let catalog = signal(catalog_data).0;
    let editor = RwSignal::new(ContactEditor::new());
    let product_notification = RwSignal::new(NotificationState::default());
    let product_form = RwSignal::new(ProductForm::new_record());
    let (product_open, set_product_open) = signal(false);

    let expire_contact_notice = move |ticket: HideTicket| {
        editor.update(|e| {
            e.notification.expire(ticket);
        });
    };
    let expire_product_notice = move |ticket: HideTicket| {
        product_notification.update(|n| {
            n.expire(ticket);
        });
    };

    let on_edit = move |record: ContactRecord| {
        editor.update(|e| e.begin_edit(&record));
    };

    let on_delete = move |id: RecordId| {
        editor.update(|e| e.request_delete(id));
    };

    // 連絡先保存ハンドラ（処理中は保存ボタン無効）
    let on_save_contact = move |_| {
        let Some(record) = editor.try_update(|e| e.save_edit()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = UnwiredStore.save_contact(&record).await;
            if let Some(ticket) = editor.try_update(|e| e.finish_save(&record.id, result)).flatten() {
                arm_auto_hide(ticket, expire_contact_notice);
            }
        });
    };

    // 連絡先削除ハンドラ（処理中は確定ボタン無効）
    let on_confirm_delete = move |_| {
        let Some(id) = editor.try_update(|e| e.confirm_delete()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = UnwiredStore.delete_contact(&id).await;
            if let Some(ticket) = editor.try_update(|e| e.finish_delete(&id, result)).flatten() {
                arm_auto_hide(ticket, expire_contact_notice);
            }
        });
    };

    let on_new_product = move |_| {
        product_form.set(ProductForm::new_record());
        set_product_open.set(true);
    };

    let on_edit_product = move |record: ProductRecord| {
        product_form.set(ProductForm::edit(record));
        set_product_open.set(true);
    };

    let on_image_upload = move |file: File| {
        read_image_preview(file, move |data_url| {
            product_form.update(|f| f.stage_image_preview(data_url));
        });
    };

    // 商品保存ハンドラ
    let on_save_product = move |_| {
        let record = product_form.get_untracked().into_record();
        spawn_local(async move {
            let result = UnwiredStore.save_product(&record).await;
            match &result {
                Ok(()) => set_product_open.set(false),
                Err(err) => {
                    gloo::console::warn!(format!("save product failed: {}", err));
                }
            }
            if let Some(ticket) = product_notification.try_update(|n| report_product_save(n, &result)) {
                arm_auto_hide(ticket, expire_product_notice);
            }
        });
    };

    let on_close_product = move |_| {
        set_product_open.set(false);
    };

    view! {
        <div class="container">
            <Header />

            <section class="panel">
                <h2>"連絡先"</h2>
                <ContactTable contacts=contacts on_edit=on_edit on_delete=on_delete />
            </section>

            <section class="panel">
                <h2>"商品"</h2>
                <button class="btn btn-primary" on:click=on_new_product>"商品を追加"</button>
                <ul class="product-list">
                    <For
                        each=move || product_rows(products.get())
                        key=|(index, _)| *index
                        children=move |(_, product)| {
                            let label = format!("{} ({})", product.product_name, product.serial_no);
                            view! {
                                <li>
                                    <span>{label}</span>
                                    <button
                                        class="btn btn-small btn-secondary"
                                        on:click=move |_| on_edit_product(product.clone())
                                    >
                                        "編集"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>

            <EditContactDialog editor=editor on_save=on_save_contact />
            <DeleteContactDialog editor=editor on_confirm=on_confirm_delete />

            <Show when=move || product_open.get()>
                <ProductFormDialog
                    form=product_form
                    catalog=catalog
                    on_image_upload=on_image_upload
                    on_save=on_save_product
                    on_close=on_close_product
                />
            </Show>

            <NotificationBar
                state=Signal::derive(move || editor.with(|e| e.notification.clone()))
                on_dismiss=move |reason| {
                    editor.update(|e| {
                        e.dismiss_notification(reason);
                    });
                }
            />
            <NotificationBar
                state=product_notification.into()
                on_dismiss=move |reason| {
                    product_notification.update(|n| {
                        n.dismiss(reason);
                    });
                }
            />
        </div>
    }
}
