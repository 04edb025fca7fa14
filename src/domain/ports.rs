use std::time::Duration;

use super::errors::{PlaceOrderError, StorageError};
use super::order::{ReservedLine, StockRecord};

/// Storage operations available while one reservation transaction is open.
///
/// `lock_and_read_stock` must take an exclusive lock on the item's stock row
/// that blocks competing reservations until the transaction ends, while
/// leaving plain readers unblocked. Stock decrements and order inserts become
/// visible to other transactions only at commit.
pub trait ReservationTx {
    /// Lock the item's stock row and return a snapshot of it, or `None` if
    /// no such item exists.
    fn lock_and_read_stock(&mut self, item_id: i32) -> Result<Option<StockRecord>, StorageError>;

    /// Decrement the locked row's stock. Availability has already been
    /// checked against the locked snapshot.
    fn decrement_stock(&mut self, item_id: i32, quantity: i32) -> Result<(), StorageError>;

    /// Insert an order header row and return its assigned id.
    fn insert_order(&mut self) -> Result<i32, StorageError>;

    fn insert_order_line(&mut self, order_id: i32, line: &ReservedLine)
        -> Result<(), StorageError>;
}

/// Transactional boundary the orchestrator drives.
///
/// Implementations run `body` inside a single transaction bounded by
/// `deadline`: an `Ok` return commits, any `Err` rolls back, and a commit
/// failure surfaces as `PlaceOrderError::Persistence`. Exceeding the
/// deadline aborts the transaction, so partial reservations never outlive
/// a timeout.
pub trait ReservationStore: Send + Sync + 'static {
    type Tx: ReservationTx;

    fn transaction<R, F>(&self, deadline: Duration, body: F) -> Result<R, PlaceOrderError>
    where
        F: FnOnce(&mut Self::Tx) -> Result<R, PlaceOrderError>;
}
