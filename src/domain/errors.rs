use thiserror::Error;

/// Rejections produced by basket validation. These are reported before any
/// transaction is opened, so they never have storage side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BasketError {
    #[error("order contains no items")]
    EmptyBasket,

    #[error("invalid quantity for item {item_id}")]
    InvalidQuantity { item_id: i32 },

    #[error("duplicate item {item_id} in order")]
    DuplicateItem { item_id: i32 },
}

/// Opaque storage-layer failure. The infrastructure converts its native
/// errors into this; the underlying message is kept for diagnostics and is
/// never exposed to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StorageError(pub String);

/// Everything that can stop an order from being placed, classified into
/// exactly one kind. Whenever one of these is returned, the reservation
/// transaction (if one was opened at all) has already been rolled back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceOrderError {
    #[error("order contains no items")]
    EmptyBasket,

    #[error("invalid quantity for item {item_id}")]
    InvalidQuantity { item_id: i32 },

    #[error("duplicate item {item_id} in order")]
    DuplicateItem { item_id: i32 },

    #[error("item {item_id} not found")]
    ItemNotFound { item_id: i32 },

    #[error("insufficient stock for item {item_id}")]
    InsufficientStock { item_id: i32 },

    #[error("failed to place order: {0}")]
    Persistence(#[from] StorageError),
}

impl From<BasketError> for PlaceOrderError {
    fn from(e: BasketError) -> Self {
        match e {
            BasketError::EmptyBasket => PlaceOrderError::EmptyBasket,
            BasketError::InvalidQuantity { item_id } => PlaceOrderError::InvalidQuantity { item_id },
            BasketError::DuplicateItem { item_id } => PlaceOrderError::DuplicateItem { item_id },
        }
    }
}
