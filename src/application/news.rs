use crate::domain::entities::market_news::{MarketNews, NewMarketNews};
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::{FieldMatch, OrderBy, RecordStore};
use crate::domain::values::news_category::NewsCategory;
use std::sync::Arc;
use tracing::info;

pub struct NewsUseCase {
    store: Arc<dyn RecordStore<MarketNews>>,
}

impl NewsUseCase {
    pub fn new(store: Arc<dyn RecordStore<MarketNews>>) -> Self {
        Self { store }
    }

    pub fn add(&self, draft: NewMarketNews) -> Result<MarketNews, DomainError> {
        let news = self.store.create(&MarketNews::new(draft)?)?;
        info!(id = %news.id, category = %news.category, "news added");
        Ok(news)
    }

    /// Latest news first, optionally for one category.
    pub fn list(&self, category: Option<NewsCategory>, limit: Option<usize>) -> Result<Vec<MarketNews>, DomainError> {
        let mut items = match category {
            Some(cat) => self.store.filter(&[FieldMatch::new("category", cat.to_string())])?,
            None => self.store.list(Some(&OrderBy::desc("created_date")), None)?,
        };
        if let Some(limit) = limit {
            items.truncate(limit);
        }
        Ok(items)
    }
}
