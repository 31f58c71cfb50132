//! 連絡先編集ダイアログ

use leptos::prelude::*;
use inventory_common::{ContactEditor, ContactField};

#[component]
pub fn EditContactDialog<FS>(
    editor: RwSignal<ContactEditor>,
    on_save: FS,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || editor.with(|e| e.is_edit_open())>
            <div class="modal-backdrop">
                <div class="modal" role="dialog">
                    <h2>"連絡先の編集"</h2>
                    {ContactField::ALL
                        .into_iter()
                        .map(|field| {
                            view! {
                                <div class="form-group">
                                    <label for=field.as_str()>{field.label()}</label>
                                    <input
                                        type="text"
                                        id=field.as_str()
                                        prop:value=move || editor.with(|e| e.buffer_value(field))
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            editor.update(|e| e.update_buffer_field(field, value));
                                        }
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="modal-actions">
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| editor.update(|e| e.cancel_edit())
                        >
                            "キャンセル"
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled=move || editor.with(|e| e.is_save_pending())
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
        </Show>
    }
}
