use std::time::Duration;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::OrderService;
use crate::domain::basket::RequestedItem;
use crate::domain::order::{PlacedOrder, ReservedLine};
use crate::errors::AppError;
use crate::infrastructure::DieselReservationStore;

/// Whole-orchestration deadline, validation through commit. Row-lock waits
/// longer than this abort the reservation transaction server-side.
const PLACE_ORDER_DEADLINE: Duration = Duration::from_secs(2);

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderItemRequest {
    pub id: i32,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub id: i32,
    pub price_cents: i64,
    pub vat_cents: i64,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrderResponse {
    pub id: i32,
    pub total_price_cents: i64,
    #[serde(rename = "totalVATCents")]
    pub total_vat_cents: i64,
    pub items: Vec<OrderLineResponse>,
}

impl From<ReservedLine> for OrderLineResponse {
    fn from(line: ReservedLine) -> Self {
        OrderLineResponse {
            id: line.item_id,
            price_cents: line.price_cents,
            vat_cents: line.vat_cents,
            quantity: line.quantity,
        }
    }
}

impl From<PlacedOrder> for PlacedOrderResponse {
    fn from(order: PlacedOrder) -> Self {
        PlacedOrderResponse {
            id: order.id,
            total_price_cents: order.total_price_cents,
            total_vat_cents: order.total_vat_cents,
            items: order.items.into_iter().map(Into::into).collect(),
        }
    }
}

// ── Handler ──────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Atomically reserves stock for every requested line and records the order.
/// The whole run executes inside one database transaction: on any rejection
/// the stock is left exactly as it was. Response lines keep the request
/// order.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = PlacedOrderResponse),
        (status = 400, description = "Malformed basket, unknown item or insufficient stock"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn place_order(
    service: web::Data<OrderService<DieselReservationStore>>,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let items: Vec<RequestedItem> = body
        .into_inner()
        .items
        .into_iter()
        .map(|i| RequestedItem {
            item_id: i.id,
            quantity: i.quantity,
        })
        .collect();

    let placed = tokio::time::timeout(
        PLACE_ORDER_DEADLINE,
        web::block(move || service.place_order(PLACE_ORDER_DEADLINE, items)),
    )
    .await
    .map_err(|_| {
        log::error!("failed to place order: deadline of {PLACE_ORDER_DEADLINE:?} exceeded");
        AppError::Internal("order placement timed out".to_string())
    })?
    .map_err(|e| AppError::Internal(e.to_string()))?
    .map_err(|e| {
        log::error!("failed to place order: {e}");
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(PlacedOrderResponse::from(placed)))
}
