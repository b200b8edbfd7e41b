use crate::domain::a003_product::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ActionButtons;
use contracts::domain::a003_product::Product;
use contracts::shared::format::format_price;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
fn ProductInfo(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let product = StoredValue::new(product);
    let localized = move || {
        let locale = ctx.locale.get();
        product.with_value(|p| p.localized_view(locale).cloned())
    };

    view! {
        <h1 class="details-page__title">{move || localized().map(|l| l.name).unwrap_or_default()}</h1>
        <hr />
        <div class="details-grid">
            <div>
                <h4>"Prix"</h4>
                <p>{product.with_value(|p| format_price(p.price))}</p>
            </div>
            <div>
                <h4>"Boutique"</h4>
                <p>
                    {product.with_value(|p| match p.shop.clone() {
                        Some(shop) => view! { <A href=format!("/shop/{}", shop.id)>{shop.name}</A> }.into_any(),
                        None => view! { <span class="muted">"N'appartient à aucune boutique"</span> }.into_any(),
                    })}
                </p>
            </div>
            {move || {
                localized()
                    .map(|l| l.description)
                    .filter(|d| !d.is_empty())
                    .map(|description| {
                        view! {
                            <div class="details-grid__wide">
                                <h4>"Description"</h4>
                                <p class="muted">{description}</p>
                            </div>
                        }
                    })
            }}
            <div class="details-grid__wide">
                <h4>"Catégories"</h4>
                <p>
                    {product.with_value(|p| {
                        if p.categories.is_empty() {
                            view! { "Aucune" }.into_any()
                        } else {
                            let last = p.categories.len() - 1;
                            p.categories
                                .iter()
                                .enumerate()
                                .map(|(i, category)| {
                                    let href = format!("/category/{}", category.id);
                                    let name = category.name.clone();
                                    view! {
                                        <A href=href>{name}</A>
                                        {(i < last).then_some(", ")}
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    })}
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn ProductDetails() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let navigate = StoredValue::new_local(use_navigate());
    let product = RwSignal::new(None::<Product>);

    let id = move || params.with(|p| p.get("id").unwrap_or_default());

    Effect::new(move |_| {
        let id = id();
        ctx.set_loading(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(result) => product.set(Some(result)),
                Err(e) => {
                    log::error!("Failed to load product {}: {}", id, e);
                    ctx.error(e);
                }
            }
            ctx.set_loading(false);
        });
    });

    let on_edit = Callback::new(move |_: ()| {
        navigate.with_value(|nav| nav(&format!("/product/edit/{}", id()), Default::default()))
    });

    let on_delete = Callback::new(move |_: ()| {
        let id = id();
        wasm_bindgen_futures::spawn_local(async move {
            match api::remove(&id).await {
                Ok(()) => {
                    ctx.success("Le produit a bien été supprimé");
                    navigate.with_value(|nav| nav("/product", Default::default()));
                }
                Err(e) => {
                    log::error!("Failed to delete product {}: {}", id, e);
                    ctx.error("Une erreur est survenue lors de la suppression");
                }
            }
        });
    });

    view! {
        {move || {
            product.get()
                .map(|product| {
                    view! {
                        <div class="page details-page">
                            <ActionButtons on_edit=on_edit on_delete=on_delete />
                            <ProductInfo product=product />
                        </div>
                    }
                })
        }}
    }
}
