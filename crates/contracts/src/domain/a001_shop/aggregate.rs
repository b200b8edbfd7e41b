use super::opening_hours::{OpeningHoursError, OpeningHoursSet};
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata, FormErrors};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_aggregate_id!(
    /// Unique shop identifier
    ShopId
);

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub in_vacations: bool,
    pub opening_hours: OpeningHoursSet,
    /// Number of live products attached to the shop, filled in on read
    #[serde(default)]
    pub nb_products: u64,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Shop {
    /// Build a new shop from a draft, ready for insertion
    pub fn new_for_insert(dto: &ShopDto) -> Self {
        Self {
            id: ShopId::new_v4(),
            name: dto.name.trim().to_string(),
            in_vacations: dto.in_vacations,
            opening_hours: dto.opening_hours.clone(),
            nb_products: 0,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Apply an edited draft
    pub fn update(&mut self, dto: &ShopDto) {
        self.name = dto.name.trim().to_string();
        self.in_vacations = dto.in_vacations;
        self.opening_hours = dto.opening_hours.clone();
    }

    pub fn validate(&self) -> Result<(), ShopValidationError> {
        ShopDto::from(self.clone()).check_submittable()
    }

    /// Hook before write
    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }

    /// Opening hours as the details page lists them
    pub fn opening_hours_by_day(&self) -> OpeningHoursSet {
        self.opening_hours.sorted_by_day()
    }
}

impl AggregateRoot for Shop {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "shop"
    }

    fn element_name() -> &'static str {
        "Boutique"
    }

    fn list_name() -> &'static str {
        "Boutiques"
    }
}

// ============================================================================
// Draft
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShopValidationError {
    #[error("{}", .0.summary())]
    Fields(FormErrors),
    #[error(transparent)]
    OpeningHours(#[from] OpeningHoursError),
}

/// Shop form draft, also the create/update request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub in_vacations: bool,
    #[serde(default)]
    pub opening_hours: OpeningHoursSet,
}

impl ShopDto {
    /// Field schema; opening-hour conflicts are checked separately
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.require("name", &self.name);
        errors.max_length("name", &self.name);
        if self.opening_hours.has_invalid_day() {
            errors.add("openingHours", "Jour invalide");
        }
        errors
    }

    /// Field schema first, then opening hours. Either failure blocks the save.
    pub fn check_submittable(&self) -> Result<(), ShopValidationError> {
        let errors = self.validate();
        if !errors.is_valid() {
            return Err(ShopValidationError::Fields(errors));
        }
        self.opening_hours.validate()?;
        Ok(())
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

impl From<Shop> for ShopDto {
    fn from(shop: Shop) -> Self {
        Self {
            id: Some(shop.id.as_string()),
            name: shop.name,
            in_vacations: shop.in_vacations,
            opening_hours: shop.opening_hours,
        }
    }
}

/// Lightweight reference used by products and pickers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopRef {
    pub id: String,
    pub name: String,
}

impl From<&Shop> for ShopRef {
    fn from(shop: &Shop) -> Self {
        Self {
            id: shop.id.as_string(),
            name: shop.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_shop::opening_hours::OpeningInterval;
    use crate::domain::common::REQUIRED_MESSAGE;

    fn interval(day: u8, open: &str, close: &str) -> OpeningInterval {
        OpeningInterval::new(day, open.parse().unwrap(), close.parse().unwrap())
    }

    fn draft(name: &str, hours: Vec<OpeningInterval>) -> ShopDto {
        ShopDto {
            id: None,
            name: name.to_string(),
            in_vacations: false,
            opening_hours: hours.into(),
        }
    }

    #[test]
    fn test_name_is_required() {
        let errors = draft("   ", vec![]).validate();
        assert_eq!(errors.get("name"), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_field_errors_take_precedence_over_conflicts() {
        let dto = draft(
            "",
            vec![interval(1, "09:00", "12:00"), interval(1, "11:00", "13:00")],
        );
        assert!(matches!(
            dto.check_submittable(),
            Err(ShopValidationError::Fields(_))
        ));
    }

    #[test]
    fn test_conflict_blocks_submission() {
        let dto = draft(
            "Chez Paul",
            vec![interval(1, "09:00", "12:00"), interval(1, "11:00", "13:00")],
        );
        let err = dto.check_submittable().unwrap_err();
        assert_eq!(
            err,
            ShopValidationError::OpeningHours(OpeningHoursError::ConflictDetected)
        );
        assert_eq!(err.to_string(), "Les horaires se chevauchent pour le même jour");
    }

    #[test]
    fn test_invalid_day_is_a_field_error() {
        let errors = draft("Chez Paul", vec![interval(9, "09:00", "12:00")]).validate();
        assert_eq!(errors.get("openingHours"), Some("Jour invalide"));
    }

    #[test]
    fn test_insert_and_update_roundtrip_through_draft() {
        let dto = draft("  Chez Paul ", vec![interval(2, "10:00", "18:00")]);
        let mut shop = Shop::new_for_insert(&dto);
        assert_eq!(shop.name, "Chez Paul");
        assert!(shop.validate().is_ok());

        let mut edited = ShopDto::from(shop.clone());
        assert_eq!(edited.id, Some(shop.to_string_id()));
        edited.in_vacations = true;
        edited.opening_hours = edited.opening_hours.with_appended();
        shop.update(&edited);
        assert!(shop.in_vacations);
        assert_eq!(shop.opening_hours.len(), 2);
    }

    #[test]
    fn test_json_shape() {
        let shop = Shop::new_for_insert(&draft("Chez Paul", vec![interval(1, "09:00", "18:00")]));
        let json = serde_json::to_value(&shop).unwrap();
        assert_eq!(json["name"], "Chez Paul");
        assert_eq!(json["inVacations"], false);
        assert_eq!(json["nbProducts"], 0);
        assert_eq!(json["openingHours"][0]["openAt"], "09:00:00");
        assert!(json["createdAt"].is_string());
        assert_eq!(Shop::full_name(), "a001_shop");
        assert_eq!(shop.display_name(), "Chez Paul");
        assert_eq!(Shop::list_name(), "Boutiques");
    }
}
