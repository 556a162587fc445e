//! JSON-file-backed collection store.
//!
//! A `JsonFileStore` owns one file on disk and the mutex that serializes every access to it.
//! Mutations run load -> modify -> write while holding the lock for the whole span, so two
//! concurrent writers can never both start from the same prior state. Nothing is cached:
//! every call re-reads the file.

use crate::storage::error::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// A value that can be persisted as a whole in a single JSON file.
///
/// `Default` is the empty collection returned when the file is missing or empty.
pub trait Collection: Serialize + DeserializeOwned + Default + Send {
    /// Number of records, used for logging only.
    fn record_count(&self) -> usize;
}

impl<T> Collection for Vec<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    fn record_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V>
where
    K: Serialize + DeserializeOwned + Ord + Send,
    V: Serialize + DeserializeOwned + Send,
{
    fn record_count(&self) -> usize {
        self.len()
    }
}

pub struct JsonFileStore<C> {
    path: PathBuf,
    /// Guards every read and write of `path`.
    lock: Mutex<()>,
    _collection: PhantomData<fn() -> C>,
}

impl<C: Collection> JsonFileStore<C> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _collection: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current collection.
    ///
    /// A missing or empty file yields the empty collection. Malformed content is a
    /// `StoreError::Decode`.
    pub async fn load(&self) -> StoreResult<C> {
        let _guard = self.lock.lock().await;
        self.read_locked().await
    }

    /// Replaces the stored collection wholesale.
    pub async fn store(&self, collection: &C) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        self.write_locked(collection).await
    }

    /// Runs an infallible load-modify-store cycle under the lock.
    pub async fn mutate<R, F>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(&mut C) -> R,
    {
        self.try_mutate(|collection| Ok::<R, StoreError>(f(collection)))
            .await
    }

    /// Runs a load-modify-store cycle under the lock.
    ///
    /// If `f` fails the file is not written and the error is returned as-is.
    pub async fn try_mutate<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut C) -> Result<R, E>,
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().await;
        let mut collection = self.read_locked().await?;
        let out = f(&mut collection)?;
        self.write_locked(&collection).await?;
        Ok(out)
    }

    async fn read_locked(&self) -> StoreResult<C> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "collection file missing, using empty collection");
                return Ok(C::default());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(C::default());
        }

        let collection: C =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::decode(&self.path, e))?;
        tracing::debug!(
            path = %self.path.display(),
            records = collection.record_count(),
            "loaded collection"
        );
        Ok(collection)
    }

    /// Serializes first, then writes a sibling temp file and renames it over the target,
    /// so a failure at any step leaves the previous file in place.
    async fn write_locked(&self, collection: &C) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(collection).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::io(&self.path, e));
        }

        tracing::debug!(
            path = %self.path.display(),
            records = collection.record_count(),
            bytes = bytes.len(),
            "stored collection"
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("collection"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
