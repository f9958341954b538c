//! Generic persisted collection over one entity type.

use crate::model::HasId;
use crate::store::JsonFileStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};
use tracing::debug;

/**
A persisted, in-memory collection of records of one type.

The collection is loaded once when opened and rewritten through the
[`JsonFileStore`] on every mutation. Mutations run to completion on the
in-memory vector before the (best-effort) write happens, so readers always
observe the latest accepted mutation even when persistence fails. Insertion
order is preserved; `update` replaces in place without reordering.
*/
#[derive(Clone)]
pub struct Repository<T>
where
    T: Serialize + DeserializeOwned + Clone + HasId,
{
    store: JsonFileStore,
    key: &'static str,
    data: Arc<Mutex<Vec<T>>>,
}

impl<T> Repository<T>
where
    T: Serialize + DeserializeOwned + Clone + HasId,
{
    pub fn open(store: JsonFileStore, key: &'static str) -> Self {
        let data = store.load(key);
        Repository {
            store,
            key,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub fn list(&self) -> Vec<T> {
        let data = self.data.lock().unwrap();
        data.clone()
    }

    pub fn is_empty(&self) -> bool {
        let data = self.data.lock().unwrap();
        data.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<T> {
        let data = self.data.lock().unwrap();
        data.iter().find(|x| x.id() == id).cloned()
    }

    /// Assigns a fresh id (via the draft's `Into<T>` conversion), appends,
    /// persists, and returns the created record.
    pub fn add(&self, draft: impl Into<T>) -> T {
        let record = draft.into();
        let mut data = self.data.lock().unwrap();
        debug!(
            "Insert {} with id {}",
            std::any::type_name::<T>(),
            record.id()
        );
        data.push(record.clone());
        self.store.save(self.key, &data);
        record
    }

    /// Replaces the record with the same id at its current position.
    /// Unknown ids are a silent no-op.
    pub fn update(&self, record: T) {
        let mut data = self.data.lock().unwrap();
        let index = data.iter().position(|x| x.id() == record.id());
        if let Some(index) = index {
            debug!(
                "Update {} with id {}",
                std::any::type_name::<T>(),
                record.id()
            );
            data[index] = record;
            self.store.save(self.key, &data);
        } else {
            debug!(
                "Update skipped, no {} with id {}",
                std::any::type_name::<T>(),
                record.id()
            );
        }
    }

    /// Removes the record with the given id. Unknown ids are a no-op.
    pub fn remove(&self, id: &str) {
        let mut data = self.data.lock().unwrap();
        let before = data.len();
        data.retain(|x| x.id() != id);
        if data.len() != before {
            debug!("Remove {} with id {}", std::any::type_name::<T>(), id);
            self.store.save(self.key, &data);
        }
    }
}
