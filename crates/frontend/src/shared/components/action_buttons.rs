use crate::shared::icons::icon;
use leptos::prelude::*;

const DELETE_CONFIRMATION: &str = "Êtes-vous sûr de vouloir supprimer cet élément ?";

/// Browser confirm dialog; a missing window counts as "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Edit / delete buttons of a details page. Delete asks first.
#[component]
pub fn ActionButtons(on_edit: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <div class="action-buttons">
            <button class="button button--icon button--primary" title="Modifier" on:click=move |_| on_edit.run(())>
                {icon("edit")}
            </button>
            <button
                class="button button--icon button--danger"
                title="Supprimer"
                on:click=move |_| {
                    if confirm(DELETE_CONFIRMATION) {
                        on_delete.run(());
                    }
                }
            >
                {icon("delete")}
            </button>
        </div>
    }
}
