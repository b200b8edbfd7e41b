use crate::domain::a001_shop::api as shop_api;
use crate::domain::a002_category::api as category_api;
use crate::domain::a003_product::api;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_shop::ShopRef;
use contracts::domain::a002_category::CategoryRef;
use contracts::domain::a003_product::{Locale, ProductDto};
use contracts::domain::common::FormErrors;
use leptos::prelude::*;
use std::rc::Rc;

/// Selection after ticking or unticking one category; order of picking is kept
pub fn toggle_category(selected: &[CategoryRef], category: &CategoryRef, checked: bool) -> Vec<CategoryRef> {
    let mut next: Vec<CategoryRef> = selected
        .iter()
        .filter(|c| c.id != category.id)
        .cloned()
        .collect();
    if checked {
        next.push(category.clone());
    }
    next
}

/// Shop chosen in the picker; "" is the "Aucune" entry
pub fn pick_shop(shops: &[ShopRef], id: &str) -> Option<ShopRef> {
    shops.iter().find(|s| s.id == id).cloned()
}

#[derive(Clone, Copy)]
pub struct ProductFormViewModel {
    pub form: RwSignal<ProductDto>,
    pub errors: RwSignal<FormErrors>,
    /// Raw text of the price field, parsed on every keystroke
    pub price_input: RwSignal<String>,
    pub shops: RwSignal<Vec<ShopRef>>,
    pub categories: RwSignal<Vec<CategoryRef>>,
    pub saving: RwSignal<bool>,
    ctx: AppGlobalContext,
}

impl ProductFormViewModel {
    pub fn new(ctx: AppGlobalContext) -> Self {
        Self {
            form: RwSignal::new(ProductDto::default()),
            errors: RwSignal::new(FormErrors::new()),
            price_input: RwSignal::new(String::new()),
            shops: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
            ctx,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|e| e.get(field).map(str::to_string))
    }

    /// Pickers are always loaded; the product only when editing
    pub fn load(&self, id: Option<String>) {
        let shops = self.shops;
        let categories = self.categories;
        let ctx = self.ctx;
        wasm_bindgen_futures::spawn_local(async move {
            match shop_api::fetch_all().await {
                Ok(list) => shops.set(list.iter().map(ShopRef::from).collect()),
                Err(e) => log::error!("Failed to load shops: {}", e),
            }
            match category_api::fetch_all().await {
                Ok(list) => categories.set(list.iter().map(CategoryRef::from).collect()),
                Err(e) => log::error!("Failed to load categories: {}", e),
            }
        });

        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let price_input = self.price_input;
        ctx.set_loading(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(&existing_id).await {
                Ok(product) => {
                    price_input.set(product.price.to_string());
                    form.set(ProductDto::from(product));
                }
                Err(e) => {
                    log::error!("Failed to load product {}: {}", existing_id, e);
                    ctx.error(e);
                }
            }
            ctx.set_loading(false);
        });
    }

    pub fn set_name(&self, locale: Locale, value: String) {
        self.form.update(|f| f.set_name(locale, value));
    }

    pub fn set_description(&self, locale: Locale, value: String) {
        self.form.update(|f| f.set_description(locale, value));
    }

    pub fn set_price(&self, input: String) {
        self.form.update(|f| f.set_price_input(&input));
        self.price_input.set(input);
    }

    pub fn set_shop(&self, id: &str) {
        let shop = self.shops.with_untracked(|shops| pick_shop(shops, id));
        self.form.update(|f| f.set_shop(shop));
    }

    pub fn toggle_category(&self, category: &CategoryRef, checked: bool) {
        self.form
            .update(|f| f.categories = toggle_category(&f.categories, category, checked));
    }

    pub fn is_category_selected(&self, id: &str) -> bool {
        self.form.with(|f| f.categories.iter().any(|c| c.id == id))
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(String)>) {
        let current = self.form.get_untracked();
        let errors = current.validate();
        if !errors.is_valid() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(FormErrors::new());

        let ctx = self.ctx;
        let saving = self.saving;
        saving.set(true);
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
                        "Le produit a bien été modifié"
                    } else {
                        "Le produit a bien été créé"
                    });
                    on_saved(id);
                }
                Err(e) => {
                    log::error!("Failed to save product: {}", e);
                    ctx.error(if editing {
                        "Une erreur est survenue lors de la modification"
                    } else {
                        "Une erreur est survenue lors de la création"
                    });
                }
            }
            saving.set(false);
            ctx.set_loading(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str) -> CategoryRef {
        CategoryRef {
            id: id.into(),
            name: format!("Catégorie {}", id),
        }
    }

    #[test]
    fn test_toggle_category() {
        let picked = toggle_category(&[], &category("a"), true);
        let picked = toggle_category(&picked, &category("b"), true);
        // ticking twice does not duplicate
        let picked = toggle_category(&picked, &category("a"), true);
        assert_eq!(picked.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), ["b", "a"]);

        let picked = toggle_category(&picked, &category("b"), false);
        assert_eq!(picked, vec![category("a")]);
    }

    #[test]
    fn test_pick_shop_none_entry() {
        let shops = vec![ShopRef {
            id: "s1".into(),
            name: "Boulangerie".into(),
        }];
        assert_eq!(pick_shop(&shops, ""), None);
        assert_eq!(pick_shop(&shops, "s1").map(|s| s.name), Some("Boulangerie".to_string()));
    }
}
