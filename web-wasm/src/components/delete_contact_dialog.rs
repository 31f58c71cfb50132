//! 連絡先削除の確認ダイアログ

use leptos::prelude::*;
use inventory_common::ContactEditor;

#[component]
pub fn DeleteContactDialog<FC>(
    editor: RwSignal<ContactEditor>,
    on_confirm: FC,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let is_pending = move || editor.with(|e| e.is_delete_pending());

    view! {
        <Show when=move || editor.with(|e| e.is_delete_open())>
            <div class="modal-backdrop">
                <div class="modal modal-small" role="alertdialog">
                    <h2>"連絡先の削除"</h2>
                    <p>"この連絡先を削除しますか？"</p>
                    <div class="modal-actions">
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| editor.update(|e| e.cancel_delete())
                        >
                            "キャンセル"
                        </button>
                        <button
                            class="btn btn-danger"
                            disabled=is_pending
                            on:click={
                                let on_confirm = on_confirm.clone();
                                move |_| on_confirm(())
                            }
                        >
                            {move || if is_pending() { "削除中..." } else { "削除" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
