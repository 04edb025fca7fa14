use actix_web::{web, HttpResponse};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::schema::{items, vat_categories};

const DEFAULT_PAGE_SIZE: i64 = 20;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListProductsParams {
    /// Page size. Defaults to 20.
    pub limit: Option<i64>,
    /// Opaque cursor returned with the previous page.
    pub cursor: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub quantity_in_stock: i32,
    pub price_cents: i64,
    #[serde(rename = "vatRate")]
    pub vat_rate: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductsPageResponse {
    pub products: Vec<ProductResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

// ── Cursor ───────────────────────────────────────────────────────────────────

/// Keyset cursor: the last item id of the page, wrapped in JSON and base64url
/// so clients treat it as opaque.
#[derive(Debug, Serialize, Deserialize)]
struct Cursor {
    id: i32,
}

fn encode_cursor(cursor: &Cursor) -> Result<String, AppError> {
    let json = serde_json::to_vec(cursor).map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

fn decode_cursor(encoded: &str) -> Option<Cursor> {
    let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    serde_json::from_slice(&bytes).ok()
}

// ── Handler ──────────────────────────────────────────────────────────────────

/// GET /products
///
/// Cursor-paginated catalog listing, ordered by item id. Purely a read: it
/// takes no row locks and never blocks in-flight order placements.
#[utoipa::path(
    get,
    path = "/products",
    params(
        ("limit" = Option<i64>, Query, description = "Page size (default 20)"),
        ("cursor" = Option<String>, Query, description = "Cursor from the previous page"),
    ),
    responses(
        (status = 200, description = "One page of products", body = ProductsPageResponse),
        (status = 400, description = "Invalid limit or cursor"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn list_products(
    pool: web::Data<DbPool>,
    query: web::Query<ListProductsParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();

    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    if limit <= 0 {
        return Err(AppError::BadRequest("Invalid limit".to_string()));
    }

    let after_id = match params.cursor.as_deref() {
        Some(encoded) => match decode_cursor(encoded) {
            Some(cursor) => Some(cursor.id),
            None => return Err(AppError::BadRequest("Invalid cursor".to_string())),
        },
        None => None,
    };

    let page = web::block(move || {
        let mut conn = pool.get()?;

        let mut query = items::table
            .inner_join(vat_categories::table)
            .select((
                items::id,
                items::name,
                items::quantity_in_stock,
                items::price_cents,
                vat_categories::rate,
            ))
            .order(items::id.asc())
            .limit(limit)
            .into_boxed();

        if let Some(after_id) = after_id {
            query = query.filter(items::id.gt(after_id));
        }

        let rows: Vec<(i32, String, i32, i64, i32)> = query.load(&mut conn)?;

        let products: Vec<ProductResponse> = rows
            .into_iter()
            .map(
                |(id, name, quantity_in_stock, price_cents, vat_rate)| ProductResponse {
                    id,
                    name,
                    quantity_in_stock,
                    price_cents,
                    vat_rate,
                },
            )
            .collect();

        // A partially filled page is the last one.
        let next_cursor = if products.len() as i64 == limit {
            products
                .last()
                .map(|last| encode_cursor(&Cursor { id: last.id }))
                .transpose()?
        } else {
            None
        };

        Ok::<_, AppError>(ProductsPageResponse {
            products,
            next_cursor,
        })
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_roundtrips_through_base64() {
        let encoded = encode_cursor(&Cursor { id: 42 }).expect("encode failed");
        let decoded = decode_cursor(&encoded).expect("decode failed");
        assert_eq!(decoded.id, 42);
    }

    #[test]
    fn garbage_cursor_is_rejected() {
        assert!(decode_cursor("not-a-cursor!").is_none());
        // Valid base64 but not a JSON cursor.
        assert!(decode_cursor(&URL_SAFE_NO_PAD.encode(b"[1,2,3]")).is_none());
    }
}
