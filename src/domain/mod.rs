//! Domain records persisted by the service.

pub mod reservation;
pub mod wish;

pub use reservation::Reservations;
pub use wish::{generate_wish_id, ValidationError, Wish};
