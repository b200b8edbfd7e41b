use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a001_shop::ShopValidationError;
use contracts::domain::common::AggregateRoot;
use serde_json::json;

/// Failures a service reports on purpose. Anything else reaching a handler
/// is treated as a storage failure.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} introuvable")]
    NotFound(&'static str),
}

impl ServiceError {
    pub fn not_found<A: AggregateRoot>() -> Self {
        ServiceError::NotFound(A::element_name())
    }
}

/// Error returned by every handler, rendered as `{"error": "..."}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Internal(anyhow::Error),
}

impl ApiError {
    /// 404 named after the aggregate, e.g. "Boutique introuvable"
    pub fn not_found<A: AggregateRoot>() -> Self {
        ApiError::NotFound(ServiceError::not_found::<A>().to_string())
    }

    pub fn invalid_id(id: &str) -> Self {
        ApiError::BadRequest(format!("Identifiant invalide: {}", id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<ServiceError>() {
            Ok(ServiceError::Validation(msg)) => return ApiError::BadRequest(msg),
            Ok(not_found @ ServiceError::NotFound(_)) => {
                return ApiError::NotFound(not_found.to_string())
            }
            Err(err) => err,
        };
        match err.downcast::<ShopValidationError>() {
            Ok(invalid) => ApiError::BadRequest(invalid.to_string()),
            Err(err) => ApiError::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                "Erreur interne du serveur".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub fn parse_id(id: &str) -> Result<uuid::Uuid, ApiError> {
    uuid::Uuid::parse_str(id).map_err(|_| ApiError::invalid_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_shop::{OpeningHoursError, Shop};
    use contracts::domain::a002_category::Category;
    use contracts::domain::a003_product::Product;

    #[test]
    fn test_service_errors_map_to_statuses() {
        let err: ApiError = anyhow::Error::new(ServiceError::Validation("nope".into())).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "nope");

        let err: ApiError = anyhow::Error::new(ServiceError::not_found::<Shop>()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Boutique introuvable");
    }

    #[test]
    fn test_not_found_is_named_after_the_aggregate() {
        let err = ApiError::not_found::<Category>();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Catégorie introuvable");
        assert_eq!(ApiError::not_found::<Product>().to_string(), "Produit introuvable");
        assert_eq!(
            ApiError::not_found::<Shop>().to_string(),
            format!("{} introuvable", Shop::element_name())
        );
    }

    #[test]
    fn test_opening_hours_conflict_is_bad_request() {
        let err: ApiError = anyhow::Error::new(ShopValidationError::from(
            OpeningHoursError::ConflictDetected,
        ))
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Les horaires se chevauchent pour le même jour"
        );
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err: ApiError = anyhow::anyhow!("disk on fire").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_parse_id() {
        assert!(parse_id("not-a-uuid").is_err());
        let id = uuid::Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
