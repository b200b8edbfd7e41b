use super::aggregate::Shop;
use crate::shared::pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopSort {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "nbProducts")]
    NbProducts,
}

impl ShopSort {
    pub const ALL: [ShopSort; 3] = [ShopSort::Name, ShopSort::CreatedAt, ShopSort::NbProducts];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShopSort::Name => "name",
            ShopSort::CreatedAt => "createdAt",
            ShopSort::NbProducts => "nbProducts",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.as_str() == value)
    }

    /// Label of the sort select
    pub fn label(&self) -> &'static str {
        match self {
            ShopSort::Name => "Nom",
            ShopSort::CreatedAt => "Date de création",
            ShopSort::NbProducts => "Nombre de produits",
        }
    }
}

/// Filter criteria of the shops page; dates are inclusive bounds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopFilters {
    pub in_vacations: Option<bool>,
    pub created_after: Option<NaiveDate>,
    pub created_before: Option<NaiveDate>,
}

impl ShopFilters {
    pub fn is_empty(&self) -> bool {
        self.in_vacations.is_none() && self.created_after.is_none() && self.created_before.is_none()
    }

    pub fn matches(&self, shop: &Shop) -> bool {
        let created = shop.metadata.created_at.date_naive();
        self.in_vacations.map_or(true, |v| shop.in_vacations == v)
            && self.created_after.map_or(true, |d| created >= d)
            && self.created_before.map_or(true, |d| created <= d)
    }
}

/// Which single criterion a list request applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopListMode {
    Search(String),
    Sorted(ShopSort),
    Filtered(ShopFilters),
    All,
}

/// Query string of `GET /api/shops`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopListQuery {
    #[serde(default)]
    pub page: usize,
    #[serde(default = "crate::shared::pagination::default_page_size")]
    pub size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<ShopSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_vacations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_after: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_before: Option<NaiveDate>,
}

impl Default for ShopListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
            search: None,
            in_vacations: None,
            created_after: None,
            created_before: None,
        }
    }
}

impl ShopListQuery {
    pub fn filters(&self) -> ShopFilters {
        ShopFilters {
            in_vacations: self.in_vacations,
            created_after: self.created_after,
            created_before: self.created_before,
        }
    }

    /// Search wins over sort, sort over filters
    pub fn mode(&self) -> ShopListMode {
        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                return ShopListMode::Search(search.to_string());
            }
        }
        if let Some(sort) = self.sort {
            return ShopListMode::Sorted(sort);
        }
        let filters = self.filters();
        if !filters.is_empty() {
            return ShopListMode::Filtered(filters);
        }
        ShopListMode::All
    }

    /// Select, order and cut one page out of the live shops
    pub fn apply(&self, mut shops: Vec<Shop>) -> Page<Shop> {
        match self.mode() {
            ShopListMode::Search(needle) => {
                let needle = needle.to_lowercase();
                shops.retain(|s| s.name.to_lowercase().contains(&needle));
            }
            ShopListMode::Sorted(sort) => sort_shops(&mut shops, sort),
            ShopListMode::Filtered(filters) => shops.retain(|s| filters.matches(s)),
            ShopListMode::All => {}
        }
        paginate(shops, self.page, self.size)
    }
}

fn sort_shops(shops: &mut [Shop], sort: ShopSort) {
    match sort {
        ShopSort::Name => shops.sort_by_key(|s| s.name.to_lowercase()),
        ShopSort::CreatedAt => shops.sort_by_key(|s| s.metadata.created_at),
        ShopSort::NbProducts => shops.sort_by(|a, b| b.nb_products.cmp(&a.nb_products)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_shop::aggregate::ShopDto;
    use chrono::{TimeZone, Utc};

    fn shop(name: &str, vacations: bool, products: u64, day: u32) -> Shop {
        let mut shop = Shop::new_for_insert(&ShopDto {
            name: name.to_string(),
            in_vacations: vacations,
            ..Default::default()
        });
        shop.nb_products = products;
        shop.metadata.created_at = Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap();
        shop
    }

    fn sample() -> Vec<Shop> {
        vec![
            shop("boulangerie", false, 3, 10),
            shop("Atelier", true, 12, 20),
            shop("Cave", false, 0, 5),
        ]
    }

    fn names(page: &Page<Shop>) -> Vec<&str> {
        page.content.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_mode_precedence() {
        let mut q = ShopListQuery {
            search: Some("ca".into()),
            sort: Some(ShopSort::Name),
            in_vacations: Some(true),
            ..Default::default()
        };
        assert_eq!(q.mode(), ShopListMode::Search("ca".into()));

        q.search = Some("   ".into());
        assert_eq!(q.mode(), ShopListMode::Sorted(ShopSort::Name));

        q.sort = None;
        assert!(matches!(q.mode(), ShopListMode::Filtered(_)));

        q.in_vacations = None;
        assert_eq!(q.mode(), ShopListMode::All);
    }

    #[test]
    fn test_sort_orders() {
        let by = |sort| {
            let q = ShopListQuery {
                sort: Some(sort),
                ..Default::default()
            };
            q.apply(sample())
        };
        assert_eq!(names(&by(ShopSort::Name)), vec!["Atelier", "boulangerie", "Cave"]);
        assert_eq!(names(&by(ShopSort::CreatedAt)), vec!["Cave", "boulangerie", "Atelier"]);
        assert_eq!(names(&by(ShopSort::NbProducts)), vec!["Atelier", "boulangerie", "Cave"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_ignores_filters() {
        let q = ShopListQuery {
            search: Some("AT".into()),
            in_vacations: Some(false),
            ..Default::default()
        };
        assert_eq!(names(&q.apply(sample())), vec!["Atelier"]);
    }

    #[test]
    fn test_filters_with_inclusive_dates() {
        let q = ShopListQuery {
            in_vacations: Some(false),
            created_after: NaiveDate::from_ymd_opt(2024, 1, 5),
            created_before: NaiveDate::from_ymd_opt(2024, 1, 9),
            ..Default::default()
        };
        assert_eq!(names(&q.apply(sample())), vec!["Cave"]);
    }

    #[test]
    fn test_apply_paginates() {
        let q = ShopListQuery {
            size: 2,
            page: 1,
            ..Default::default()
        };
        let page = q.apply(sample());
        assert_eq!(names(&page), vec!["Cave"]);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_elements, 3);
    }

    #[test]
    fn test_query_wire_names() {
        let q: ShopListQuery =
            serde_json::from_str(r#"{"sort":"nbProducts","inVacations":true,"createdAfter":"2024-01-02"}"#)
                .unwrap();
        assert_eq!(q.sort, Some(ShopSort::NbProducts));
        assert_eq!(q.size, DEFAULT_PAGE_SIZE);
        assert_eq!(q.created_after, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(ShopSort::from_str_opt("createdAt"), Some(ShopSort::CreatedAt));
        assert_eq!(ShopSort::from_str_opt("price"), None);
    }
}
