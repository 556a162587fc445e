//! On-disk persistence for the service's collections.

pub mod error;
pub mod json_file;

pub use error::{StoreError, StoreResult};
pub use json_file::{Collection, JsonFileStore};
