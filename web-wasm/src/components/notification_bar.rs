//! 通知バー（スナックバー）

use leptos::prelude::*;
use inventory_common::{DismissReason, NotificationState};

/// 通知状態を表示する。閉じる操作は on_dismiss に渡す。
#[component]
pub fn NotificationBar<FD>(state: Signal<NotificationState>, on_dismiss: FD) -> impl IntoView
where
    FD: Fn(DismissReason) + 'static + Copy + Send + Sync,
{
    view! {
        <Show when=move || state.with(|n| n.visible)>
            <div
                class=move || state.with(|n| format!("snackbar snackbar-{}", n.severity.as_str()))
                role="status"
            >
                <span class="snackbar-message">
                    {move || state.with(|n| n.message.clone())}
                </span>
                <button
                    class="snackbar-close"
                    aria-label="閉じる"
                    on:click=move |_| on_dismiss(DismissReason::CloseButton)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
