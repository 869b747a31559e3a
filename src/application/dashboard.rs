use crate::domain::entities::crop::Crop;
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::{OrderBy, RecordStore};
use crate::domain::values::market_stats::{trending_crops, CropCard, MarketStats};
use crate::domain::values::sentiment::MarketSentiment;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Crops shown on the dashboard, highest price first.
pub const DASHBOARD_CROP_LIMIT: usize = 12;
pub const TRENDING_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub stats: MarketStats,
    pub sentiment: MarketSentiment,
    pub trending: Vec<CropCard>,
    pub crops: Vec<CropCard>,
}

pub struct DashboardUseCase {
    crops: Arc<dyn RecordStore<Crop>>,
}

impl DashboardUseCase {
    pub fn new(crops: Arc<dyn RecordStore<Crop>>) -> Self {
        Self { crops }
    }

    pub fn execute(&self) -> Result<Dashboard, DomainError> {
        let crops = self
            .crops
            .list(Some(&OrderBy::desc("current_price")), Some(DASHBOARD_CROP_LIMIT))?;

        Ok(Dashboard {
            generated_at: Utc::now(),
            stats: MarketStats::compute(&crops),
            sentiment: MarketSentiment::from_crops(&crops),
            trending: trending_crops(&crops, TRENDING_LIMIT),
            crops: crops.iter().map(CropCard::from_crop).collect(),
        })
    }

    /// Sentiment over every stored crop rather than the dashboard page.
    pub fn sentiment(&self) -> Result<MarketSentiment, DomainError> {
        let crops = self.crops.list(None, None)?;
        Ok(MarketSentiment::from_crops(&crops))
    }
}
