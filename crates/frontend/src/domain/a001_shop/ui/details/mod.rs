use crate::domain::a001_shop::api;
use crate::domain::a003_product::ui::ScopedProducts;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ActionButtons;
use contracts::domain::a001_shop::{day_label, Shop};
use contracts::domain::a003_product::ProductListQuery;
use contracts::shared::format::{format_date, pluralize};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

fn vacation_status(in_vacations: bool) -> &'static str {
    if in_vacations {
        "En congé actuellement"
    } else {
        "N'est pas en congé actuellement"
    }
}

#[component]
fn OpeningHoursTable(shop: Shop) -> impl IntoView {
    let rows = shop.opening_hours_by_day().into_inner();
    view! {
        <div class="opening-hours">
            <h3>"Horaires d'ouverture :"</h3>
            {if rows.is_empty() {
                view! { <p class="empty-state">"Aucun horaire renseigné"</p> }.into_any()
            } else {
                rows.into_iter()
                    .map(|interval| {
                        view! {
                            <div class="opening-hours__row">
                                <span>{day_label(interval.day)}</span>
                                <span>
                                    {format!(
                                        "{} - {}",
                                        interval.open_at.display_short(),
                                        interval.close_at.display_short(),
                                    )}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[component]
pub fn ShopDetails() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    // the router's navigate closure is kept local so callbacks stay Send
    let navigate = StoredValue::new_local(use_navigate());
    let shop = RwSignal::new(None::<Shop>);

    let id = move || params.with(|p| p.get("id").unwrap_or_default());

    Effect::new(move |_| {
        let id = id();
        ctx.set_loading(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(result) => shop.set(Some(result)),
                Err(e) => {
                    log::error!("Failed to load shop {}: {}", id, e);
                    ctx.error(e);
                }
            }
            ctx.set_loading(false);
        });
    });

    let on_edit = Callback::new(move |_: ()| {
        navigate.with_value(|nav| nav(&format!("/shop/edit/{}", id()), Default::default()))
    });

    let on_delete = Callback::new(move |_: ()| {
        let id = id();
        wasm_bindgen_futures::spawn_local(async move {
            match api::remove(&id).await {
                Ok(()) => {
                    ctx.success("La boutique a bien été supprimée");
                    navigate.with_value(|nav| nav("/", Default::default()));
                }
                Err(e) => {
                    log::error!("Failed to delete shop {}: {}", id, e);
                    ctx.error("Une erreur est survenue lors de la suppression");
                }
            }
        });
    });

    view! {
        {move || {
            shop.get()
                .map(|shop| {
                    let nb = shop.nb_products;
                    view! {
                        <div class="page details-page">
                            <ActionButtons on_edit=on_edit on_delete=on_delete />
                            <h1 class="details-page__title">{shop.name.clone()}</h1>
                            <p class="details-page__subtitle">
                                {format!("Cette boutique comporte {} {}", nb, pluralize("produit", nb))}
                            </p>
                            <p class="details-page__meta details-page__meta--italic">
                                {vacation_status(shop.in_vacations)}
                            </p>
                            <p class="details-page__meta">
                                {format!("Boutique créée le : {}", format_date(&shop.metadata.created_at))}
                            </p>
                            <hr />
                            <OpeningHoursTable shop=shop.clone() />
                            <hr />
                            <h3>"Les produits :"</h3>
                            <ScopedProducts query=ProductListQuery::of_shop(shop.to_string_id(), 0) />
                        </div>
                    }
                })
        }}
    }
}
