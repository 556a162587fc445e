pub mod error;
pub mod reservation_service;
pub mod wish_service;

pub use error::{ServiceError, ServiceResult};
pub use reservation_service::ReservationService;
pub use wish_service::{extract_wish_id, WishService};
