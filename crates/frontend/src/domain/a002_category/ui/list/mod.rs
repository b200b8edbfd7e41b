use crate::domain::a002_category::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use contracts::domain::a002_category::Category;
use contracts::shared::pagination::{Page, PageRequest};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
fn CategoryCard(category: Category) -> impl IntoView {
    view! {
        <A href=format!("/category/{}", category.to_string_id())>
            <div class="card category-card">
                <h3 class="card__title">{category.name.clone()}</h3>
            </div>
        </A>
    }
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let request = RwSignal::new(PageRequest::default());
    let page = RwSignal::new(None::<Page<Category>>);

    Effect::new(move |_| {
        let current = request.get();
        ctx.set_loading(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_page(&current).await {
                Ok(result) => page.set(Some(result)),
                Err(e) => {
                    log::error!("Failed to load categories: {}", e);
                    ctx.error("Impossible de charger les catégories");
                }
            }
            ctx.set_loading(false);
        });
    });

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Les catégories"</h1>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| navigate("/category/create", Default::default())
                    >
                        {icon("plus")}
                        "Ajouter une catégorie"
                    </button>
                </div>
            </div>

            {move || {
                page.get()
                    .map(|p| {
                        if p.is_empty() {
                            view! { <p class="empty-state">"Aucune catégorie correspondante"</p> }
                                .into_any()
                        } else {
                            view! {
                                <div class="card-grid">
                                    {p.content
                                        .into_iter()
                                        .map(|category| view! { <CategoryCard category=category /> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}

            <PaginationControls
                current_page=Signal::derive(move || request.with(|r| r.page))
                total_pages=Signal::derive(move || page.with(|p| p.as_ref().map_or(0, |p| p.total_pages)))
                on_page_change=Callback::new(move |n: usize| request.update(|r| r.page = n))
            />
        </div>
    }
}
