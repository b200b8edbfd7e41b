use super::aggregate::{Locale, Product};
use crate::shared::pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/products`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    #[serde(default)]
    pub page: usize,
    #[serde(default = "crate::shared::pagination::default_page_size")]
    pub size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            shop_id: None,
            category_id: None,
        }
    }
}

impl ProductListQuery {
    pub fn of_shop(shop_id: impl Into<String>, page: usize) -> Self {
        Self {
            page,
            shop_id: Some(shop_id.into()),
            ..Default::default()
        }
    }

    pub fn of_category(category_id: impl Into<String>, page: usize) -> Self {
        Self {
            page,
            category_id: Some(category_id.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.shop_id.as_deref().map_or(true, |id| product.in_shop(id))
            && self
                .category_id
                .as_deref()
                .map_or(true, |id| product.in_category(id))
    }

    /// Scope, order by French name and cut one page
    pub fn apply(&self, mut products: Vec<Product>) -> Page<Product> {
        products.retain(|p| self.matches(p));
        products.sort_by_key(|p| p.name(Locale::FR).to_lowercase());
        paginate(products, self.page, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_shop::ShopRef;
    use crate::domain::a002_category::CategoryRef;
    use crate::domain::a003_product::ProductDto;

    fn product(name: &str, shop: Option<&str>, category: Option<&str>) -> Product {
        let mut dto = ProductDto::default();
        dto.set_name(Locale::FR, name.into());
        dto.shop = shop.map(|id| ShopRef {
            id: id.into(),
            name: id.into(),
        });
        dto.categories = category
            .map(|id| CategoryRef {
                id: id.into(),
                name: id.into(),
            })
            .into_iter()
            .collect();
        Product::new_for_insert(&dto)
    }

    fn sample() -> Vec<Product> {
        vec![
            product("Pain", Some("s1"), Some("c1")),
            product("beurre", Some("s2"), Some("c1")),
            product("Cidre", Some("s1"), None),
            product("Amande", None, Some("c2")),
        ]
    }

    fn names(page: &Page<Product>) -> Vec<String> {
        page.content
            .iter()
            .map(|p| p.name(Locale::FR).to_string())
            .collect()
    }

    #[test]
    fn test_unscoped_list_is_ordered_by_name() {
        let page = ProductListQuery::default().apply(sample());
        assert_eq!(names(&page), vec!["Amande", "beurre", "Cidre", "Pain"]);
        assert_eq!(page.total_elements, 4);
    }

    #[test]
    fn test_scoping() {
        let page = ProductListQuery::of_shop("s1", 0).apply(sample());
        assert_eq!(names(&page), vec!["Cidre", "Pain"]);

        let page = ProductListQuery::of_category("c1", 0).apply(sample());
        assert_eq!(names(&page), vec!["beurre", "Pain"]);

        let both = ProductListQuery {
            shop_id: Some("s2".into()),
            category_id: Some("c2".into()),
            ..Default::default()
        };
        assert!(both.apply(sample()).is_empty());
    }

    #[test]
    fn test_wire_names() {
        let q: ProductListQuery = serde_json::from_str(r#"{"page":2,"shopId":"s1"}"#).unwrap();
        assert_eq!(q.page, 2);
        assert_eq!(q.size, DEFAULT_PAGE_SIZE);
        assert_eq!(q.shop_id.as_deref(), Some("s1"));
        assert_eq!(q.category_id, None);
    }
}
