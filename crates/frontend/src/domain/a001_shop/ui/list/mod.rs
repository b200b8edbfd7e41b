use crate::domain::a001_shop::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::{PaginationControls, SearchInput};
use crate::shared::date_utils::{date_input_value, parse_date_input};
use crate::shared::icons::icon;
use contracts::domain::a001_shop::{Shop, ShopListQuery, ShopSort};
use contracts::shared::format::{format_date, pluralize};
use contracts::shared::pagination::Page;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
fn ShopCard(shop: Shop) -> impl IntoView {
    let navigate = use_navigate();
    let href = format!("/shop/{}", shop.to_string_id());
    let nb_products = shop.nb_products;

    view! {
        <div class="card shop-card" on:click=move |_| navigate(&href, Default::default())>
            <h3 class="card__title">{shop.name.clone()}</h3>
            <p class="card__subtitle">
                {format!("{} {}", nb_products, pluralize("produit", nb_products))}
            </p>
            <p class="card__meta">{format!("Créée le : {}", format_date(&shop.metadata.created_at))}</p>
            <p class="card__meta card__meta--italic">
                "En congé : " <strong>{if shop.in_vacations { "Oui" } else { "Non" }}</strong>
            </p>
        </div>
    }
}

/// Vacation filter select value: "" (any), "true" or "false"
fn vacations_value(value: Option<bool>) -> &'static str {
    match value {
        None => "",
        Some(true) => "true",
        Some(false) => "false",
    }
}

#[component]
fn ShopFilters(query: RwSignal<ShopListQuery>) -> impl IntoView {
    // Applying a filter clears the sort, the sort wins otherwise
    let edit = move |f: Box<dyn FnOnce(&mut ShopListQuery)>| {
        query.update(|q| {
            f(q);
            q.sort = None;
            q.page = 0;
        })
    };

    view! {
        <div class="filter-panel">
            <label>
                "En congé"
                <select
                    prop:value=move || vacations_value(query.with(|q| q.in_vacations))
                    on:change=move |ev| {
                        let value = event_target_value(&ev).parse::<bool>().ok();
                        edit(Box::new(move |q| q.in_vacations = value));
                    }
                >
                    <option value="">"Tous"</option>
                    <option value="true">"Oui"</option>
                    <option value="false">"Non"</option>
                </select>
            </label>
            <label>
                "Créée après le"
                <input
                    type="date"
                    prop:value=move || date_input_value(query.with(|q| q.created_after))
                    on:change=move |ev| {
                        let value = parse_date_input(&event_target_value(&ev));
                        edit(Box::new(move |q| q.created_after = value));
                    }
                />
            </label>
            <label>
                "Créée avant le"
                <input
                    type="date"
                    prop:value=move || date_input_value(query.with(|q| q.created_before))
                    on:change=move |ev| {
                        let value = parse_date_input(&event_target_value(&ev));
                        edit(Box::new(move |q| q.created_before = value));
                    }
                />
            </label>
            <button
                class="button button--secondary"
                on:click=move |_| query.update(|q| {
                    q.in_vacations = None;
                    q.created_after = None;
                    q.created_before = None;
                    q.page = 0;
                })
            >
                {icon("refresh")}
                "Réinitialiser"
            </button>
        </div>
    }
}

#[component]
pub fn ShopList() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let query = RwSignal::new(ShopListQuery::default());
    let page = RwSignal::new(None::<Page<Shop>>);

    Effect::new(move |_| {
        let current = query.get();
        ctx.set_loading(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_page(&current).await {
                Ok(result) => page.set(Some(result)),
                Err(e) => {
                    log::error!("Failed to load shops: {}", e);
                    ctx.error("Impossible de charger les boutiques");
                }
            }
            ctx.set_loading(false);
        });
    });

    let on_sort_change = move |ev| {
        let sort = ShopSort::from_str_opt(&event_target_value(&ev));
        query.update(|q| {
            q.sort = sort;
            q.page = 0;
        });
    };

    let on_search = Callback::new(move |text: String| {
        query.update(|q| {
            q.search = if text.trim().is_empty() { None } else { Some(text) };
            q.page = 0;
        })
    });

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Les boutiques"</h1>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| navigate("/shop/create", Default::default())
                    >
                        {icon("plus")}
                        "Ajouter une boutique"
                    </button>
                </div>
            </div>

            <div class="toolbar">
                <label>
                    "Trier par"
                    <select
                        prop:value=move || query.with(|q| q.sort.map(|s| s.as_str()).unwrap_or(""))
                        on:change=on_sort_change
                    >
                        <option value="">"Aucun"</option>
                        {ShopSort::ALL
                            .into_iter()
                            .map(|sort| view! { <option value=sort.as_str()>{sort.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <SearchInput
                    value=Signal::derive(move || query.with(|q| q.search.clone().unwrap_or_default()))
                    on_change=on_search
                    placeholder="Rechercher"
                />
                <ShopFilters query=query />
            </div>

            {move || {
                page.get()
                    .map(|p| {
                        if p.is_empty() {
                            view! { <p class="empty-state">"Aucune boutique correspondante"</p> }
                                .into_any()
                        } else {
                            view! {
                                <div class="card-grid">
                                    {p.content
                                        .into_iter()
                                        .map(|shop| view! { <ShopCard shop=shop /> })
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
        </div>
    }
}
