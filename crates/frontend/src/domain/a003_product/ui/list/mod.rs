use crate::domain::a003_product::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use contracts::domain::a002_category::CategoryRef;
use contracts::domain::a003_product::{Product, ProductListQuery, NO_SHOP_LABEL};
use contracts::shared::format::format_price;
use contracts::shared::pagination::Page;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const NO_CATEGORY_LABEL: &str = "Aucune";

/// "a, b, c", or "Aucune" when empty
pub fn category_names(categories: &[CategoryRef]) -> String {
    if categories.is_empty() {
        return NO_CATEGORY_LABEL.to_string();
    }
    categories
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Card in the current locale; re-renders when the locale is switched
#[component]
fn ProductCard(product: Product, display_shop: bool) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let href = format!("/product/{}", product.to_string_id());
    let product = StoredValue::new(product);

    let text = move || {
        let locale = ctx.locale.get();
        product.with_value(|p| {
            p.localized_view(locale)
                .map(|l| (l.name.clone(), l.description.clone()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="card product-card" on:click=move |_| navigate(&href, Default::default())>
            <h3 class="card__title">{move || text().0}</h3>
            <p class="card__subtitle">
                {product.with_value(|p| format!("Prix : {}", format_price(p.price)))}
            </p>
            {move || {
                let description = text().1;
                (!description.is_empty())
                    .then(|| view! { <p class="card__description">{description}</p> })
            }}
            {display_shop
                .then(|| {
                    let shop = product.with_value(|p| {
                        p.shop.as_ref().map_or(NO_SHOP_LABEL.to_string(), |s| s.name.clone())
                    });
                    view! { <p class="card__meta">{format!("Boutique : {}", shop)}</p> }
                })}
            <p class="card__meta card__meta--italic">
                {product.with_value(|p| format!("Catégories : {}", category_names(&p.categories)))}
            </p>
        </div>
    }
}

/// Paginated product grid for one scope (all, one shop or one category)
#[component]
pub fn ScopedProducts(
    query: ProductListQuery,
    #[prop(optional)] display_shop: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let query = RwSignal::new(query);
    let page = RwSignal::new(None::<Page<Product>>);

    Effect::new(move |_| {
        let current = query.get();
        ctx.set_loading(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_page(&current).await {
                Ok(result) => page.set(Some(result)),
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    ctx.error("Impossible de charger les produits");
                }
            }
            ctx.set_loading(false);
        });
    });

    view! {
        {move || {
            page.get()
                .map(|p| {
                    if p.is_empty() {
                        view! { <p class="empty-state">"Aucun produit correspondant"</p> }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                {p.content
                                    .into_iter()
                                    .map(|product| {
                                        view! { <ProductCard product=product display_shop=display_shop /> }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                })
        }}
        <PaginationControls
            current_page=Signal::derive(move || query.with(|q| q.page))
            total_pages=Signal::derive(move || page.with(|p| p.as_ref().map_or(0, |p| p.total_pages)))
            on_page_change=Callback::new(move |n: usize| query.update(|q| q.page = n))
        />
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Les produits"</h1>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| navigate("/product/create", Default::default())
                    >
                        {icon("plus")}
                        "Ajouter un produit"
                    </button>
                </div>
            </div>
            <ScopedProducts query=ProductListQuery::default() display_shop=true />
        </div>
    }
}
