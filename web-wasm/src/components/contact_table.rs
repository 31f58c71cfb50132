//! 連絡先一覧テーブル

use leptos::prelude::*;
use inventory_common::{ContactField, ContactRecord, ContactRow, RecordId};

#[component]
pub fn ContactTable<FE, FD>(
    contacts: ReadSignal<Vec<ContactRecord>>,
    on_edit: FE,
    on_delete: FD,
) -> impl IntoView
where
    FE: Fn(ContactRecord) + 'static + Clone + Send + Sync,
    FD: Fn(RecordId) + 'static + Clone + Send + Sync,
{
    view! {
        <table class="contact-table">
            <thead>
                <tr>
                    {ContactField::ALL
                        .into_iter()
                        .map(|field| view! { <th>{field.label()}</th> })
                        .collect_view()}
                    <th>"操作"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || contacts.get()
                    key=|contact| contact.id.clone()
                    children=move |contact| {
                        let row = ContactRow::from_record(&contact);
                        let on_edit = on_edit.clone();
                        let on_delete = on_delete.clone();
                        view! {
                            <tr>
                                {row.cells
                                    .into_iter()
                                    .map(|cell| view! { <td>{cell}</td> })
                                    .collect_view()}
                                <td class="actions">
                                    <button
                                        class="btn btn-small btn-secondary"
                                        on:click=move |_| on_edit(contact.clone())
                                    >
                                        "編集"
                                    </button>
                                    <button
                                        class="btn btn-small btn-tertiary"
                                        on:click={
                                            let id = row.id.clone();
                                            move |_| on_delete(id.clone())
                                        }
                                    >
                                        "削除"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
