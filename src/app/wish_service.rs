//! Wish collection operations.
//!
//! Every mutation runs inside a single `try_mutate` call so the load, the change and the
//! write happen under one hold of the store's lock.

use crate::app::error::{ServiceError, ServiceResult};
use crate::domain::{generate_wish_id, Wish};
use crate::storage::JsonFileStore;
use std::path::{Path, PathBuf};

pub struct WishService {
    store: JsonFileStore<Vec<Wish>>,
}

impl WishService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Snapshot of all wishes in stored order.
    pub async fn list(&self) -> ServiceResult<Vec<Wish>> {
        Ok(self.store.load().await?)
    }

    /// Appends a new wish, generating its id when the caller did not supply one.
    pub async fn create(&self, mut wish: Wish) -> ServiceResult<Wish> {
        wish.id = wish.id.trim().to_string();
        wish.normalize();
        wish.validate()?;
        let caller_id = !wish.id.is_empty();
        if !caller_id {
            wish.id = generate_wish_id(&wish.owner, &wish.title);
        }

        let created = self
            .store
            .try_mutate(|wishes| {
                if caller_id && wishes.iter().any(|w| w.id == wish.id) {
                    return Err(ServiceError::BadRequest("wish id already exists".to_string()));
                }
                wishes.push(wish.clone());
                Ok(wish)
            })
            .await?;

        tracing::info!(id = %created.id, owner = %created.owner, "wish created");
        Ok(created)
    }

    /// Replaces the wish at `id`, keeping its position. The body's id is ignored.
    pub async fn update(&self, id: &str, mut wish: Wish) -> ServiceResult<Wish> {
        let id = extract_wish_id(id)?;
        wish.id = id.to_string();
        wish.normalize();
        wish.validate()?;

        let updated = self
            .store
            .try_mutate(|wishes| {
                let slot = wishes
                    .iter_mut()
                    .find(|w| w.id == wish.id)
                    .ok_or_else(not_found)?;
                *slot = wish.clone();
                Ok::<_, ServiceError>(wish)
            })
            .await?;

        tracing::info!(id = %updated.id, "wish updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        let id = extract_wish_id(id)?;

        self.store
            .try_mutate(|wishes| {
                let index = wishes
                    .iter()
                    .position(|w| w.id == id)
                    .ok_or_else(not_found)?;
                wishes.remove(index);
                Ok::<_, ServiceError>(())
            })
            .await?;

        tracing::info!(id = %id, "wish deleted");
        Ok(())
    }
}

fn not_found() -> ServiceError {
    ServiceError::NotFound("wish not found".to_string())
}

/// Validates an id taken from a request path. Blank ids and ids spanning more than one
/// path segment are rejected. Accepted ids are used exactly as given.
pub fn extract_wish_id(raw: &str) -> ServiceResult<&str> {
    if raw.trim().is_empty() || raw.contains('/') {
        return Err(ServiceError::BadRequest("invalid wish id".to_string()));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use tempfile::tempdir;

    fn draft(title: &str, owner: &str) -> Wish {
        Wish {
            title: title.to_string(),
            url: format!("http://example.com/{}", title.to_lowercase()),
            owner: owner.to_string(),
            ..Wish::default()
        }
    }

    #[tokio::test]
    async fn create_normalizes_and_assigns_id() {
        let dir = tempdir().unwrap();
        let service = WishService::new(dir.path().join("wishes.json"));

        let created = service.create(draft(" Bike ", " Ann ")).await.unwrap();
        assert!(created.id.starts_with("ann-bike-"), "id {}", created.id);
        assert_eq!(created.owner, "ann");
        assert_eq!(created.title, "Bike");
        assert_eq!(service.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn create_keeps_caller_id_and_rejects_duplicates() {
        let dir = tempdir().unwrap();
        let service = WishService::new(dir.path().join("wishes.json"));

        let mut first = draft("Bike", "ann");
        first.id = "custom".to_string();
        service.create(first.clone()).await.unwrap();

        let err = service.create(first).await.unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(ref m) if m == "wish id already exists"));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn invalid_wish_is_not_stored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wishes.json");
        let service = WishService::new(&path);

        let err = service.create(draft("Bike", "  ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::MissingOwner)));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn update_takes_id_from_path_and_keeps_position() {
        let dir = tempdir().unwrap();
        let service = WishService::new(dir.path().join("wishes.json"));
        let a = service.create(draft("A", "ann")).await.unwrap();
        let b = service.create(draft("B", "ann")).await.unwrap();
        let c = service.create(draft("C", "ann")).await.unwrap();

        let mut body = draft("B2", "Bob");
        body.id = "something-else".to_string();
        let updated = service.update(&b.id, body).await.unwrap();

        assert_eq!(updated.id, b.id);
        assert_eq!(updated.owner, "bob");
        let ids: Vec<String> = service.list().await.unwrap().into_iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn update_does_not_trim_the_path_id() {
        let dir = tempdir().unwrap();
        let service = WishService::new(dir.path().join("wishes.json"));
        let mut first = draft("Bike", "ann");
        first.id = " w-1 ".to_string();
        let created = service.create(first).await.unwrap();
        assert_eq!(created.id, "w-1");

        let err = service.update("w-1 ", draft("Car", "ann")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(service.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn update_and_delete_unknown_ids_leave_file_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wishes.json");
        let service = WishService::new(&path);
        service.create(draft("A", "ann")).await.unwrap();
        let before = std::fs::read(&path).unwrap();

        let err = service.update("missing", draft("X", "ann")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let err = service.delete("missing").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn delete_preserves_order_of_the_rest() {
        let dir = tempdir().unwrap();
        let service = WishService::new(dir.path().join("wishes.json"));
        let a = service.create(draft("A", "ann")).await.unwrap();
        let b = service.create(draft("B", "ann")).await.unwrap();
        let c = service.create(draft("C", "ann")).await.unwrap();

        service.delete(&b.id).await.unwrap();
        assert_eq!(service.list().await.unwrap(), vec![a, c]);
    }

    #[test]
    fn path_ids_must_be_a_single_segment() {
        assert_eq!(extract_wish_id("ann-bike-1").unwrap(), "ann-bike-1");
        assert!(matches!(extract_wish_id(""), Err(ServiceError::BadRequest(_))));
        assert!(matches!(extract_wish_id(" "), Err(ServiceError::BadRequest(_))));
        assert_eq!(extract_wish_id("w-1 ").unwrap(), "w-1 ");
        assert!(matches!(extract_wish_id("a/b"), Err(ServiceError::BadRequest(_))));
    }
}
