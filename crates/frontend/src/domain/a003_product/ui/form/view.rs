use super::view_model::ProductFormViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::domain::a003_product::{Locale, NO_SHOP_LABEL};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;

#[component]
fn FieldError(vm: ProductFormViewModel, field: &'static str) -> impl IntoView {
    move || vm.field_error(field).map(|e| view! { <span class="field-error">{e}</span> })
}

#[component]
pub fn ProductForm() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let navigate = use_navigate();

    let vm = ProductFormViewModel::new(ctx);
    vm.load(params.with_untracked(|p| p.get("id")));

    let on_saved: Rc<dyn Fn(String)> = Rc::new(move |id: String| {
        navigate(&format!("/product/{}", id), Default::default());
    });

    view! {
        <div class="page form-page">
            <h2 class="form-page__title">
                {move || if vm.is_edit_mode() { "Modifier le produit" } else { "Ajouter un produit" }}
            </h2>

            <fieldset class="form-section">
                <legend>"Nom du produit"</legend>
                <div class="form-row">
                    <div class="form-group">
                        <label for="name_fr">"Nom en français"</label>
                        <input
                            type="text"
                            id="name_fr"
                            prop:value=move || vm.form.with(|f| f.name_of(Locale::FR).to_string())
                            on:input=move |ev| vm.set_name(Locale::FR, event_target_value(&ev))
                        />
                        <FieldError vm=vm field="nameFr" />
                    </div>
                    <div class="form-group">
                        <label for="name_en">"Nom en anglais"</label>
                        <input
                            type="text"
                            id="name_en"
                            prop:value=move || vm.form.with(|f| f.name_of(Locale::EN).to_string())
                            on:input=move |ev| vm.set_name(Locale::EN, event_target_value(&ev))
                        />
                        <FieldError vm=vm field="nameEn" />
                    </div>
                </div>
            </fieldset>

            <fieldset class="form-section">
                <legend>"Description"</legend>
                <div class="form-row">
                    <div class="form-group">
                        <label for="description_fr">"Description en français"</label>
                        <textarea
                            id="description_fr"
                            rows="3"
                            prop:value=move || vm.form.with(|f| f.description_of(Locale::FR).to_string())
                            on:input=move |ev| vm.set_description(Locale::FR, event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="description_en">"Description en anglais"</label>
                        <textarea
                            id="description_en"
                            rows="3"
                            prop:value=move || vm.form.with(|f| f.description_of(Locale::EN).to_string())
                            on:input=move |ev| vm.set_description(Locale::EN, event_target_value(&ev))
                        ></textarea>
                    </div>
                </div>
            </fieldset>

            <fieldset class="form-section">
                <legend>"Informations supplémentaires"</legend>
                <div class="form-row">
                    <div class="form-group">
                        <label for="price">"Prix"</label>
                        <input
                            type="number"
                            id="price"
                            step="0.01"
                            prop:value=move || vm.price_input.get()
                            on:input=move |ev| vm.set_price(event_target_value(&ev))
                        />
                        <FieldError vm=vm field="price" />
                    </div>
                    <div class="form-group">
                        <label for="shop">"Boutique"</label>
                        <select id="shop" on:change=move |ev| vm.set_shop(&event_target_value(&ev))>
                            <option value="" selected=move || vm.form.with(|f| f.shop.is_none())>
                                {NO_SHOP_LABEL}
                            </option>
                            <For
                                each=move || vm.shops.get()
                                key=|shop| shop.id.clone()
                                children=move |shop| {
                                    let id = shop.id.clone();
                                    view! {
                                        <option
                                            value=shop.id.clone()
                                            selected=move || {
                                                vm.form.with(|f| f.shop.as_ref().is_some_and(|s| s.id == id))
                                            }
                                        >
                                            {shop.name}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                </div>
                <div class="form-group">
                    <span class="form-group__label">"Catégories"</span>
                    <div class="checkbox-list">
                        <For
                            each=move || vm.categories.get()
                            key=|category| category.id.clone()
                            children=move |category| {
                                let id = category.id.clone();
                                let name = category.name.clone();
                                view! {
                                    <label class="checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || vm.is_category_selected(&id)
                                            on:change=move |ev| vm.toggle_category(&category, event_target_checked(&ev))
                                        />
                                        {name}
                                    </label>
                                }
                            }
                        />
                    </div>
                </div>
            </fieldset>

            <div class="form-actions">
                <button
                    class="button button--primary"
                    disabled=move || vm.saving.get()
                    on:click={
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                >
                    {icon("save")}
                    "Valider"
                </button>
            </div>
        </div>
    }
}
