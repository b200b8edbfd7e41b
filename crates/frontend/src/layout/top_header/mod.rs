//! TopHeader component - application top navigation bar.
//!
//! Contains the brand, links to the three lists, the product locale switch
//! and the loading indicator.

use crate::layout::global_context::use_app_context;
use contracts::domain::a001_shop::Shop;
use contracts::domain::a002_category::Category;
use contracts::domain::a003_product::Product;
use contracts::domain::common::AggregateRoot;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("shop")}
                <span class="top-header__title">"Gestion de boutiques"</span>
            </div>

            <nav class="top-header__nav">
                <A href="/">{icon("shop")}{Shop::list_name()}</A>
                <A href="/product">{icon("products")}{Product::list_name()}</A>
                <A href="/category">{icon("category")}{Category::list_name()}</A>
            </nav>

            <div class="top-header__actions">
                <button
                    class="top-header__locale"
                    on:click=move |_| ctx.toggle_locale()
                    title="Langue des produits"
                >
                    {move || ctx.locale.get().as_str()}
                </button>
            </div>

            <Show when=move || ctx.loading.get()>
                <div class="top-header__loading" role="progressbar"></div>
            </Show>
        </div>
    }
}
