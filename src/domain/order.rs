/// Snapshot of an item's stock row, read under an exclusive row lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockRecord {
    pub item_id: i32,
    pub quantity_in_stock: i32,
    pub price_cents: i64,
    pub vat_rate: i32,
}

/// A basket line after reservation. Price and per-unit VAT are the values
/// captured while the stock row was locked, so later catalog changes cannot
/// alter an order that is already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedLine {
    pub item_id: i32,
    pub price_cents: i64,
    pub vat_cents: i64,
    pub quantity: i32,
}

/// A committed order, as returned to the caller. Lines appear in the order
/// the items were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub id: i32,
    pub total_price_cents: i64,
    pub total_vat_cents: i64,
    pub items: Vec<ReservedLine>,
}
