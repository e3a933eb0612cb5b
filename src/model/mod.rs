//! Models - keyed records held by the library store.
//!
//! Books and members are both models: each names the collection it lives in
//! and exposes the id it is keyed by. The store keeps one record per
//! `(collection, id)` pair; saving an existing id replaces the record.
//!
//! ## Example
//!
//! ```ignore
//! use circulation::{Book, InMemoryModelStore, ModelsExt};
//!
//! let store = InMemoryModelStore::new();
//! store.models::<Book>().save(&Book::new("B1", "Dune", "Herbert", 1))?;
//! let dune = store.models::<Book>().get("B1")?;
//! ```

mod in_memory;
mod model_repository;
mod store;

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Trait for types that can be stored as models.
pub trait Model: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this model type (e.g., "books", "members").
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this model instance.
    fn id(&self) -> &str;
}

/// A stored record together with the number of times its key has been written.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    pub data: T,
    pub version: u64,
}

/// Error type for model store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Serialization/deserialization error.
    Serde(String),
    /// Storage-level error.
    Storage(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Serde(msg) => write!(f, "model serialization error: {}", msg),
            ModelError::Storage(msg) => write!(f, "model storage error: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}

pub use in_memory::InMemoryModelStore;
pub use model_repository::{ModelRepository, ModelsExt};
pub use store::ModelStore;
