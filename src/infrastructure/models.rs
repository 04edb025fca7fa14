use diesel::prelude::*;

use crate::schema::{items, order_items};

/// The stock columns read from `items` while the row is locked.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemStockRow {
    pub id: i32,
    pub quantity_in_stock: i32,
    pub price_cents: i64,
    pub vat_category_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow {
    pub order_id: i32,
    pub item_id: i32,
    pub quantity: i32,
    pub price_cents: i64,
    pub vat_cents: i64,
}
