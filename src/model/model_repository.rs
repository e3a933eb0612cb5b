//! ModelRepository - Typed accessor for one collection of a store.

use std::marker::PhantomData;

use super::{Model, ModelError, ModelStore, Versioned};

/// Typed repository wrapper for accessing models of a specific type.
pub struct ModelRepository<'a, S, M> {
    store: &'a S,
    _marker: PhantomData<M>,
}

impl<'a, S: ModelStore, M: Model> ModelRepository<'a, S, M> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Get a model by ID, dropping the version.
    pub fn get(&self, id: &str) -> Result<Option<M>, ModelError> {
        Ok(self.store.get_model::<M>(id)?.map(|v| v.data))
    }

    /// Upsert a model.
    pub fn save(&self, model: &M) -> Result<Versioned<M>, ModelError> {
        self.store.save_model(model)
    }

    /// Every model in the collection, sorted by id.
    pub fn all(&self) -> Result<Vec<M>, ModelError> {
        let mut models: Vec<M> = self
            .store
            .find_models::<M>(&|_| true)?
            .into_iter()
            .map(|v| v.data)
            .collect();
        models.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(models)
    }
}

/// Extension trait for typed model access on any ModelStore.
pub trait ModelsExt: ModelStore + Sized {
    /// Get a typed model repository.
    fn models<M: Model>(&self) -> ModelRepository<'_, Self, M> {
        ModelRepository::new(self)
    }
}

impl<S: ModelStore> ModelsExt for S {}
