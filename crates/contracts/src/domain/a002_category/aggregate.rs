use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata, FormErrors};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique category identifier
    CategoryId
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Category {
    pub fn new_for_insert(dto: &CategoryDto) -> Self {
        Self {
            id: CategoryId::new_v4(),
            name: dto.name.trim().to_string(),
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn update(&mut self, dto: &CategoryDto) {
        self.name = dto.name.trim().to_string();
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

impl AggregateRoot for Category {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Catégorie"
    }

    fn list_name() -> &'static str {
        "Catégories"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

impl CategoryDto {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.require("name", &self.name);
        errors.max_length("name", &self.name);
        errors
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: Some(category.id.as_string()),
            name: category.name,
        }
    }
}

/// Category as embedded in a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

impl From<&Category> for CategoryRef {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.as_string(),
            name: category.name.clone(),
        }
    }
}

/// Alphabetical (case-insensitive) order of the categories page
pub fn sort_by_name(categories: &mut [Category]) {
    categories.sort_by_key(|c| c.name.to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::REQUIRED_MESSAGE;

    #[test]
    fn test_validate() {
        let dto = CategoryDto::default();
        assert_eq!(dto.validate().get("name"), Some(REQUIRED_MESSAGE));

        let dto = CategoryDto {
            id: None,
            name: "x".repeat(256),
        };
        assert!(dto.validate().get("name").is_some());

        let dto = CategoryDto {
            id: None,
            name: "Épicerie".into(),
        };
        assert!(dto.validate().is_valid());
    }

    #[test]
    fn test_sort_by_name() {
        let mut list: Vec<Category> = ["thé", "Café", "bière"]
            .iter()
            .map(|n| {
                Category::new_for_insert(&CategoryDto {
                    id: None,
                    name: n.to_string(),
                })
            })
            .collect();
        sort_by_name(&mut list);
        let names: Vec<_> = list.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["bière", "Café", "thé"]);
        assert_eq!(Category::full_name(), "a002_category");
        assert_eq!(list[0].display_name(), "bière");
    }
}
