use crate::domain::a001_shop::ui::{ShopDetails, ShopForm, ShopList};
use crate::domain::a002_category::ui::{CategoryDetails, CategoryForm, CategoryList};
use crate::domain::a003_product::ui::{ProductDetails, ProductForm, ProductList};
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="not-found">"Page introuvable"</p> }>
                    <Route path=path!("/") view=ShopList />
                    <Route path=path!("/shop/create") view=ShopForm />
                    <Route path=path!("/shop/edit/:id") view=ShopForm />
                    <Route path=path!("/shop/:id") view=ShopDetails />
                    <Route path=path!("/product") view=ProductList />
                    <Route path=path!("/product/create") view=ProductForm />
                    <Route path=path!("/product/edit/:id") view=ProductForm />
                    <Route path=path!("/product/:id") view=ProductDetails />
                    <Route path=path!("/category") view=CategoryList />
                    <Route path=path!("/category/create") view=CategoryForm />
                    <Route path=path!("/category/edit/:id") view=CategoryForm />
                    <Route path=path!("/category/:id") view=CategoryDetails />
                </Routes>
            </Shell>
        </Router>
    }
}
