use crate::domain::a002_category::api;
use crate::domain::a003_product::ui::ScopedProducts;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ActionButtons;
use contracts::domain::a002_category::Category;
use contracts::domain::a003_product::ProductListQuery;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn CategoryDetails() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let navigate = StoredValue::new_local(use_navigate());
    let category = RwSignal::new(None::<Category>);

    let id = move || params.with(|p| p.get("id").unwrap_or_default());

    Effect::new(move |_| {
        let id = id();
        ctx.set_loading(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(result) => category.set(Some(result)),
                Err(e) => {
                    log::error!("Failed to load category {}: {}", id, e);
                    ctx.error(e);
                }
            }
            ctx.set_loading(false);
        });
    });

    let on_edit = Callback::new(move |_: ()| {
        navigate.with_value(|nav| nav(&format!("/category/edit/{}", id()), Default::default()))
    });

    let on_delete = Callback::new(move |_: ()| {
        let id = id();
        wasm_bindgen_futures::spawn_local(async move {
            match api::remove(&id).await {
                Ok(()) => {
                    ctx.success("La catégorie a bien été supprimée");
                    navigate.with_value(|nav| nav("/category", Default::default()));
                }
                Err(e) => {
                    log::error!("Failed to delete category {}: {}", id, e);
                    ctx.error("Une erreur est survenue lors de la suppression");
                }
            }
        });
    });

    view! {
        {move || {
            category.get()
                .map(|category| {
                    view! {
                        <div class="page details-page">
                            <ActionButtons on_edit=on_edit on_delete=on_delete />
                            <h1 class="details-page__title">{category.name.clone()}</h1>
                            <hr />
                            <h3>"Les produits :"</h3>
                            <ScopedProducts query=ProductListQuery::of_category(category.to_string_id(), 0) />
                        </div>
                    }
                })
        }}
    }
}
