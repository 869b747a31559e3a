use crate::domain::entities::mandi::{Mandi, NewMandi};
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::{OrderBy, RecordStore};
use std::sync::Arc;
use tracing::info;

pub struct MandisUseCase {
    store: Arc<dyn RecordStore<Mandi>>,
}

impl MandisUseCase {
    pub fn new(store: Arc<dyn RecordStore<Mandi>>) -> Self {
        Self { store }
    }

    pub fn add(&self, draft: NewMandi) -> Result<Mandi, DomainError> {
        let mandi = self.store.create(&Mandi::new(draft)?)?;
        info!(id = %mandi.id, name = %mandi.name, "mandi added");
        Ok(mandi)
    }

    /// Mandis by name, narrowed to those whose name, location or district
    /// contains `term` (case-insensitive). A blank term keeps everything.
    pub fn search(&self, term: Option<&str>) -> Result<Vec<Mandi>, DomainError> {
        let mandis = self.store.list(Some(&OrderBy::asc("name")), None)?;
        Ok(match term.map(str::trim).filter(|t| !t.is_empty()) {
            Some(term) => mandis.into_iter().filter(|m| m.matches(term)).collect(),
            None => mandis,
        })
    }
}
