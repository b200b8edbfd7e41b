use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Renders the current toast of the app context, if any
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.toast.get().map(|toast| {
            view! {
                <div class=toast.severity.css_class() role="alert">
                    <span class="toast__message">{toast.message}</span>
                    <button class="toast__close" title="Fermer" on:click=move |_| ctx.dismiss_toast()>
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
