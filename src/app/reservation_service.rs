use crate::app::error::ServiceResult;
use crate::domain::Reservations;
use crate::storage::JsonFileStore;
use std::path::{Path, PathBuf};

/// Reservation mapping operations. The mapping is only ever replaced as a whole.
pub struct ReservationService {
    store: JsonFileStore<Reservations>,
}

impl ReservationService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    pub async fn get(&self) -> ServiceResult<Reservations> {
        Ok(self.store.load().await?)
    }

    pub async fn replace(&self, reservations: Reservations) -> ServiceResult<Reservations> {
        self.store.store(&reservations).await?;
        tracing::info!(entries = reservations.len(), "reservations replaced");
        Ok(reservations)
    }
}
