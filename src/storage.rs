use boing_core::{CounterStore, StoreError};
use web_sys as web;

/// Boing count kept in `localStorage` under a single key.
pub struct LocalCounterStore {
    storage: web::Storage,
    key: &'static str,
}

impl LocalCounterStore {
    pub fn open(key: &'static str) -> Result<Self, StoreError> {
        let storage = web::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(|e| StoreError::Access(format!("{:?}", e)))?
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { storage, key })
    }
}

impl CounterStore for LocalCounterStore {
    fn load(&self) -> Result<Option<u64>, StoreError> {
        let raw = self
            .storage
            .get_item(self.key)
            .map_err(|e| StoreError::Access(format!("{:?}", e)))?;
        match raw {
            None => Ok(None),
            Some(s) => match s.trim().parse::<u64>() {
                Ok(count) => Ok(Some(count)),
                Err(_) => Err(StoreError::Corrupt(s)),
            },
        }
    }

    fn save(&self, count: u64) -> Result<(), StoreError> {
        self.storage
            .set_item(self.key, &count.to_string())
            .map_err(|e| StoreError::Access(format!("{:?}", e)))
    }
}
