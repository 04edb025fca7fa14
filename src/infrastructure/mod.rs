pub mod models;
pub mod reservation_store;

pub use reservation_store::DieselReservationStore;
