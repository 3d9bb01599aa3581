//! Toast stack rendered by the root layout.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.notice.kind.css_modifier());
                    view! {
                        <div class=class on:click=move |_| toasts.update(|s| s.dismiss(id))>
                            {toast.notice.description}
                        </div>
                    }
                }
            />
        </div>
    }
}
