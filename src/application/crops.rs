use crate::domain::entities::crop::{Crop, NewCrop};
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::{OrderBy, RecordStore};
use std::sync::Arc;
use tracing::info;

pub struct CropsUseCase {
    store: Arc<dyn RecordStore<Crop>>,
}

impl CropsUseCase {
    pub fn new(store: Arc<dyn RecordStore<Crop>>) -> Self {
        Self { store }
    }

    pub fn add(&self, draft: NewCrop) -> Result<Crop, DomainError> {
        let crop = Crop::new(draft)?;
        let crop = self.store.create(&crop)?;
        info!(id = %crop.id, name = %crop.name, price = %crop.current_price, "crop added");
        Ok(crop)
    }

    pub fn list(&self, order_by: Option<&OrderBy>, limit: Option<usize>) -> Result<Vec<Crop>, DomainError> {
        self.store.list(order_by, limit)
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.store.delete(id)?;
        info!(id, "crop deleted");
        Ok(())
    }
}
