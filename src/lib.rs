pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{ReservationService, ServiceError, WishService};
pub use domain::{Reservations, Wish};
pub use storage::{JsonFileStore, StoreError};
pub use transport::http::{create_router, AppState};
