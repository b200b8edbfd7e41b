use crate::domain::a002_category::api;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::domain::a002_category::CategoryDto;
use contracts::domain::common::FormErrors;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn CategoryForm() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let navigate = StoredValue::new_local(use_navigate());

    let form = RwSignal::new(CategoryDto::default());
    let errors = RwSignal::new(FormErrors::new());
    let is_edit = move || form.with(|f| f.id.is_some());

    if let Some(id) = params.with_untracked(|p| p.get("id")) {
        ctx.set_loading(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(category) => form.set(CategoryDto::from(category)),
                Err(e) => {
                    log::error!("Failed to load category {}: {}", id, e);
                    ctx.error(e);
                }
            }
            ctx.set_loading(false);
        });
    }

    let submit = move |_| {
        let current = form.get_untracked();
        let found = current.validate();
        if !found.is_valid() {
            errors.set(found);
            return;
        }
        errors.set(FormErrors::new());

        ctx.set_loading(true);
        wasm_bindgen_futures::spawn_local(async move {
            let editing = current.id.is_some();
            let result = match current.id.clone() {
                Some(id) => api::update(&id, &current).await.map(|_| id),
                None => api::create(&current).await,
            };
            match result {
                Ok(id) => {
                    ctx.success(if editing {
                        "La catégorie a bien été modifiée"
                    } else {
                        "La catégorie a bien été créée"
                    });
                    navigate.with_value(|nav| nav(&format!("/category/{}", id), Default::default()));
                }
                Err(e) => {
                    log::error!("Failed to save category: {}", e);
                    ctx.error(if editing {
                        "Une erreur est survenue lors de la modification"
                    } else {
                        "Une erreur est survenue lors de la création"
                    });
                }
            }
            ctx.set_loading(false);
        });
    };

    view! {
        <div class="page form-page">
            <h2 class="form-page__title">
                {move || if is_edit() { "Modifier la catégorie" } else { "Ajouter une catégorie" }}
            </h2>
            <fieldset class="form-section">
                <legend>"Informations de la catégorie"</legend>
                <div class="form-group">
                    <label for="name">"Nom de la catégorie"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    {move || {
                        errors
                            .with(|e| e.get("name").map(str::to_string))
                            .map(|e| view! { <span class="field-error">{e}</span> })
                    }}
                </div>
            </fieldset>
            <div class="form-actions">
                <button class="button button--primary" on:click=submit>
                    {icon("save")}
                    {move || if is_edit() { "Modifier" } else { "Ajouter" }}
                </button>
            </div>
        </div>
    }
}
