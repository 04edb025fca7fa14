use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::PlaceOrderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Map the classified order-placement errors onto HTTP. Malformed baskets
/// and business-rule rejections are the client's fault; storage failures
/// stay generic so no internals leak into the response.
impl From<PlaceOrderError> for AppError {
    fn from(e: PlaceOrderError) -> Self {
        match e {
            PlaceOrderError::EmptyBasket => {
                AppError::BadRequest("Order must contain at least one item".to_string())
            }
            PlaceOrderError::InvalidQuantity { .. } => {
                AppError::BadRequest("Order contains item with invalid quantity".to_string())
            }
            PlaceOrderError::DuplicateItem { .. } => {
                AppError::BadRequest("Order contains duplicate items".to_string())
            }
            PlaceOrderError::ItemNotFound { .. } => AppError::BadRequest(
                "One or more items in the order were not found".to_string(),
            ),
            PlaceOrderError::InsufficientStock { .. } => AppError::BadRequest(
                "One or more items in the order have insufficient stock".to_string(),
            ),
            PlaceOrderError::Persistence(cause) => AppError::Internal(cause.to_string()),
        }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(e: diesel::result::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(e: r2d2::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": msg
            })),
            AppError::Internal(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    use crate::domain::errors::{PlaceOrderError, StorageError};

    #[test]
    fn bad_request_returns_400() {
        let resp = AppError::BadRequest("nope".to_string()).error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_errors_map_to_bad_request() {
        for e in [
            PlaceOrderError::EmptyBasket,
            PlaceOrderError::InvalidQuantity { item_id: 1 },
            PlaceOrderError::DuplicateItem { item_id: 1 },
        ] {
            assert!(matches!(AppError::from(e), AppError::BadRequest(_)));
        }
    }

    #[test]
    fn business_rejections_map_to_bad_request() {
        for e in [
            PlaceOrderError::ItemNotFound { item_id: 999 },
            PlaceOrderError::InsufficientStock { item_id: 1 },
        ] {
            assert!(matches!(AppError::from(e), AppError::BadRequest(_)));
        }
    }

    #[test]
    fn persistence_failures_map_to_internal() {
        let e = PlaceOrderError::Persistence(StorageError("deadlock detected".to_string()));
        assert!(matches!(AppError::from(e), AppError::Internal(_)));
    }

    #[test]
    fn empty_basket_message_matches_api_contract() {
        let AppError::BadRequest(msg) = AppError::from(PlaceOrderError::EmptyBasket) else {
            panic!("expected a bad request");
        };
        assert_eq!(msg, "Order must contain at least one item");
    }
}
