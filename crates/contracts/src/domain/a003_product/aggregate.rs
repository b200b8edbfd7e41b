use crate::domain::a001_shop::ShopRef;
use crate::domain::a002_category::CategoryRef;
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata, FormErrors};
use crate::shared::format::round_price;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique product identifier
    ProductId
);

/// Label of the "no shop" entry of the shop picker
pub const NO_SHOP_LABEL: &str = "Aucune";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    FR,
    EN,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::FR => "FR",
            Locale::EN => "EN",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Locale::FR => Locale::EN,
            Locale::EN => Locale::FR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedProduct {
    pub locale: Locale,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl LocalizedProduct {
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            name: String::new(),
            description: String::new(),
        }
    }
}

/// Text for `locale`, else the French one, else whatever comes first
pub fn localized_view(entries: &[LocalizedProduct], locale: Locale) -> Option<&LocalizedProduct> {
    entries
        .iter()
        .find(|e| e.locale == locale)
        .or_else(|| entries.iter().find(|e| e.locale == Locale::FR))
        .or_else(|| entries.first())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub price: f64,
    pub localized_products: Vec<LocalizedProduct>,
    pub shop: Option<ShopRef>,
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Product {
    pub fn new_for_insert(dto: &ProductDto) -> Self {
        let dto = dto.formatted_for_submit();
        Self {
            id: ProductId::new_v4(),
            price: dto.price,
            localized_products: dto.localized_products,
            shop: dto.shop,
            categories: dto.categories,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn update(&mut self, dto: &ProductDto) {
        let dto = dto.formatted_for_submit();
        self.price = dto.price;
        self.localized_products = dto.localized_products;
        self.shop = dto.shop;
        self.categories = dto.categories;
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }

    pub fn localized_view(&self, locale: Locale) -> Option<&LocalizedProduct> {
        localized_view(&self.localized_products, locale)
    }

    /// Name in `locale`, with the usual fallback
    pub fn name(&self, locale: Locale) -> &str {
        self.localized_view(locale).map_or("", |e| e.name.as_str())
    }

    pub fn in_shop(&self, shop_id: &str) -> bool {
        self.shop.as_ref().is_some_and(|s| s.id == shop_id)
    }

    pub fn in_category(&self, category_id: &str) -> bool {
        self.categories.iter().any(|c| c.id == category_id)
    }
}

impl AggregateRoot for Product {
    fn display_name(&self) -> &str {
        self.name(Locale::FR)
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Produit"
    }

    fn list_name() -> &'static str {
        "Produits"
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Product form draft, also the create/update request body.
///
/// The form always works on an FR slot and an EN slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub localized_products: Vec<LocalizedProduct>,
    #[serde(default)]
    pub shop: Option<ShopRef>,
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            id: None,
            price: 0.0,
            localized_products: vec![
                LocalizedProduct::empty(Locale::FR),
                LocalizedProduct::empty(Locale::EN),
            ],
            shop: None,
            categories: Vec::new(),
        }
    }
}

impl ProductDto {
    pub fn localized(&self, locale: Locale) -> Option<&LocalizedProduct> {
        self.localized_products.iter().find(|e| e.locale == locale)
    }

    pub fn name_of(&self, locale: Locale) -> &str {
        self.localized(locale).map_or("", |e| e.name.as_str())
    }

    pub fn description_of(&self, locale: Locale) -> &str {
        self.localized(locale).map_or("", |e| e.description.as_str())
    }

    fn localized_mut(&mut self, locale: Locale) -> &mut LocalizedProduct {
        let position = self.localized_products.iter().position(|e| e.locale == locale);
        let index = match position {
            Some(index) => index,
            None => {
                self.localized_products.push(LocalizedProduct::empty(locale));
                self.localized_products.len() - 1
            }
        };
        &mut self.localized_products[index]
    }

    pub fn set_name(&mut self, locale: Locale, name: String) {
        self.localized_mut(locale).name = name;
    }

    pub fn set_description(&mut self, locale: Locale, description: String) {
        self.localized_mut(locale).description = description;
    }

    /// Price typed in the form; garbage becomes 0
    pub fn set_price_input(&mut self, input: &str) {
        self.price = crate::shared::format::parse_price(input);
    }

    /// Shop picked in the form; the "Aucune" entry carries no id and clears it
    pub fn set_shop(&mut self, shop: Option<ShopRef>) {
        self.shop = shop.filter(|s| !s.id.is_empty());
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();

        let name_fr = self.name_of(Locale::FR);
        errors.require("nameFr", name_fr);
        errors.max_length("nameFr", name_fr);
        errors.max_length("nameFr", self.description_of(Locale::FR));

        let name_en = self.name_of(Locale::EN);
        if name_en.trim().is_empty() && !self.description_of(Locale::EN).trim().is_empty() {
            errors.add(
                "nameEn",
                "Une description est fournie en anglais donc le nom est requis",
            );
        }
        errors.max_length("nameEn", name_en);
        errors.max_length("nameEn", self.description_of(Locale::EN));

        if self.price < 0.0 {
            errors.add("price", "Le prix ne peut pas être un nombre négatif");
        }
        errors
    }

    /// Body actually sent: entries without a name are dropped, price rounded
    pub fn formatted_for_submit(&self) -> Self {
        Self {
            id: self.id.clone(),
            price: round_price(self.price),
            localized_products: self
                .localized_products
                .iter()
                .filter(|e| !e.name.trim().is_empty())
                .cloned()
                .collect(),
            shop: self.shop.clone(),
            categories: self.categories.clone(),
        }
    }
}

impl From<Product> for ProductDto {
    /// Loads a stored product into the form, padding a missing EN slot
    fn from(product: Product) -> Self {
        let mut localized_products = product.localized_products;
        if localized_products.len() < 2 {
            localized_products.push(LocalizedProduct::empty(Locale::EN));
        }
        Self {
            id: Some(product.id.as_string()),
            price: product.price,
            localized_products,
            shop: product.shop,
            categories: product.categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::REQUIRED_MESSAGE;

    fn dto(name_fr: &str, name_en: &str, desc_en: &str, price: f64) -> ProductDto {
        let mut dto = ProductDto::default();
        dto.set_name(Locale::FR, name_fr.into());
        dto.set_name(Locale::EN, name_en.into());
        dto.set_description(Locale::EN, desc_en.into());
        dto.price = price;
        dto
    }

    #[test]
    fn test_schema_messages() {
        let errors = dto("", "", "A fine cheese", -1.0).validate();
        assert_eq!(errors.get("nameFr"), Some(REQUIRED_MESSAGE));
        assert_eq!(
            errors.get("nameEn"),
            Some("Une description est fournie en anglais donc le nom est requis")
        );
        assert_eq!(
            errors.get("price"),
            Some("Le prix ne peut pas être un nombre négatif")
        );

        assert!(dto("Fromage", "", "", 0.0).validate().is_valid());
        assert!(dto("Fromage", "Cheese", "A fine cheese", 4.5).validate().is_valid());
    }

    #[test]
    fn test_submit_drops_empty_slots_and_rounds() {
        let mut draft = dto("Fromage", "", "", 0.0);
        draft.price = 3.14159;
        let sent = draft.formatted_for_submit();
        assert_eq!(sent.localized_products.len(), 1);
        assert_eq!(sent.localized_products[0].locale, Locale::FR);
        assert_eq!(sent.price, 3.14);
    }

    #[test]
    fn test_load_pads_english_slot() {
        let product = Product::new_for_insert(&dto("Fromage", "", "", 2.0));
        assert_eq!(product.localized_products.len(), 1);

        let draft = ProductDto::from(product);
        assert_eq!(draft.localized_products.len(), 2);
        assert_eq!(draft.localized(Locale::EN), Some(&LocalizedProduct::empty(Locale::EN)));
    }

    #[test]
    fn test_price_input_and_shop_choice() {
        let mut draft = ProductDto::default();
        draft.set_price_input("abc");
        assert_eq!(draft.price, 0.0);
        draft.set_price_input("9.999");
        assert_eq!(draft.price, 10.0);

        draft.set_shop(Some(ShopRef {
            id: String::new(),
            name: NO_SHOP_LABEL.into(),
        }));
        assert_eq!(draft.shop, None);
        draft.set_shop(Some(ShopRef {
            id: "1".into(),
            name: "Chez Paul".into(),
        }));
        assert!(draft.shop.is_some());
    }

    #[test]
    fn test_shop_named_like_the_empty_entry_can_be_picked() {
        let mut draft = ProductDto::default();
        let shop = ShopRef {
            id: "abc".into(),
            name: NO_SHOP_LABEL.into(),
        };
        draft.set_shop(Some(shop.clone()));
        assert_eq!(draft.shop, Some(shop));

        draft.set_shop(None);
        assert_eq!(draft.shop, None);
    }

    #[test]
    fn test_localized_view_fallback() {
        let product = Product::new_for_insert(&dto("Fromage", "Cheese", "", 1.0));
        assert_eq!(product.name(Locale::EN), "Cheese");
        assert_eq!(product.name(Locale::FR), "Fromage");

        let only_en = vec![LocalizedProduct {
            locale: Locale::EN,
            name: "Cheese".into(),
            description: String::new(),
        }];
        assert_eq!(localized_view(&only_en, Locale::FR).unwrap().name, "Cheese");

        let only_fr = Product::new_for_insert(&dto("Fromage", "", "", 1.0));
        assert_eq!(only_fr.name(Locale::EN), "Fromage");
        assert_eq!(localized_view(&[], Locale::FR), None);
    }

    #[test]
    fn test_scoping_helpers() {
        let mut draft = dto("Fromage", "", "", 1.0);
        draft.shop = Some(ShopRef {
            id: "s1".into(),
            name: "Chez Paul".into(),
        });
        draft.categories = vec![CategoryRef {
            id: "c1".into(),
            name: "Crèmerie".into(),
        }];
        let product = Product::new_for_insert(&draft);
        assert!(product.in_shop("s1"));
        assert!(!product.in_shop("s2"));
        assert!(product.in_category("c1"));
        assert!(!product.in_category("c2"));
    }
}
