use crate::domain::entities::crop::Crop;
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::{OrderBy, RecordStore};
use crate::domain::values::market_stats::{price_comparison, MarketInsights, PriceComparison};
use crate::domain::values::price_history::{HistoricalSeriesSynthesizer, PriceSeries};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

pub const COMPARISON_LIMIT: usize = 8;
pub const INSIGHT_LIMIT: usize = 3;

/// Which series the analysis charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesSelection {
    AllCrops,
    Crop(String),
}

#[derive(Debug, Serialize)]
pub struct MarketAnalysis {
    /// Synthetic history; see `price_history` for what it is and is not.
    pub series: PriceSeries,
    pub comparison: Vec<PriceComparison>,
    pub insights: MarketInsights,
}

pub struct AnalysisUseCase {
    crops: Arc<dyn RecordStore<Crop>>,
}

impl AnalysisUseCase {
    pub fn new(crops: Arc<dyn RecordStore<Crop>>) -> Self {
        Self { crops }
    }

    pub fn execute(
        &self,
        selection: &SeriesSelection,
        seed: Option<u64>,
        today: NaiveDate,
    ) -> Result<MarketAnalysis, DomainError> {
        let crops = self.crops.list(Some(&OrderBy::desc("current_price")), None)?;

        let mut synth = match seed {
            Some(seed) => HistoricalSeriesSynthesizer::seeded(seed),
            None => HistoricalSeriesSynthesizer::from_entropy(),
        };

        let series = match selection {
            SeriesSelection::AllCrops => synth.synthesize_average(&crops, today),
            SeriesSelection::Crop(name) => match crops.iter().find(|c| &c.name == name) {
                Some(crop) => synth.synthesize(crop, today),
                None => {
                    debug!(crop = %name, "no crop to chart");
                    PriceSeries {
                        label: name.clone(),
                        points: Vec::new(),
                    }
                }
            },
        };

        Ok(MarketAnalysis {
            series,
            comparison: price_comparison(&crops, COMPARISON_LIMIT),
            insights: MarketInsights::compute(&crops, INSIGHT_LIMIT),
        })
    }
}
