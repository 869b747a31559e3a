//! Dashboard headline numbers, top movers and the price comparison table.

use crate::domain::entities::crop::Crop;
use crate::domain::values::demand::Demand;
use crate::domain::values::price_movement::PriceMovement;
use crate::domain::values::trend::Trend;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketStats {
    pub total_crops: usize,
    pub rising_crops: usize,
    /// Mean current price; zero for an empty snapshot.
    pub average_price: f64,
}

impl MarketStats {
    pub fn compute(crops: &[Crop]) -> Self {
        let total_crops = crops.len();
        let rising_crops = crops.iter().filter(|c| c.trend == Some(Trend::Rising)).count();
        let average_price = if total_crops > 0 {
            crops.iter().map(|c| c.current_price.value()).sum::<f64>() / total_crops as f64
        } else {
            0.0
        };

        Self {
            total_crops,
            rising_crops,
            average_price,
        }
    }
}

/// A crop paired with its derived movement, as shown on a price card.
#[derive(Debug, Clone, Serialize)]
pub struct CropCard {
    #[serde(flatten)]
    pub crop: Crop,
    pub movement: PriceMovement,
}

impl CropCard {
    pub fn from_crop(crop: &Crop) -> Self {
        Self {
            crop: crop.clone(),
            movement: PriceMovement::classify(crop),
        }
    }
}

/// Rising crops with the largest absolute price gain first.
pub fn trending_crops(crops: &[Crop], limit: usize) -> Vec<CropCard> {
    let mut rising: Vec<CropCard> = crops
        .iter()
        .filter(|c| c.trend == Some(Trend::Rising))
        .map(CropCard::from_crop)
        .collect();

    rising.sort_by(|a, b| {
        b.movement
            .price_change
            .partial_cmp(&a.movement.price_change)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rising.truncate(limit);
    rising
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceComparison {
    pub name: String,
    pub price: f64,
    pub trend: Option<Trend>,
    pub demand: Option<Demand>,
}

impl From<&Crop> for PriceComparison {
    fn from(c: &Crop) -> Self {
        Self {
            name: c.name.clone(),
            price: c.current_price.value(),
            trend: c.trend,
            demand: c.demand,
        }
    }
}

/// The first `limit` crops of the snapshot, in snapshot order.
pub fn price_comparison(crops: &[Crop], limit: usize) -> Vec<PriceComparison> {
    crops.iter().take(limit).map(PriceComparison::from).collect()
}

/// Rising crops in snapshot order, first `limit`.
pub fn best_performing(crops: &[Crop], limit: usize) -> Vec<PriceComparison> {
    crops
        .iter()
        .filter(|c| c.trend == Some(Trend::Rising))
        .take(limit)
        .map(PriceComparison::from)
        .collect()
}

/// High-demand crops in snapshot order, first `limit`.
pub fn high_demand(crops: &[Crop], limit: usize) -> Vec<PriceComparison> {
    crops
        .iter()
        .filter(|c| c.demand == Some(Demand::High))
        .take(limit)
        .map(PriceComparison::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketInsights {
    pub best_performing: Vec<PriceComparison>,
    pub high_demand: Vec<PriceComparison>,
}

impl MarketInsights {
    pub fn compute(crops: &[Crop], limit: usize) -> Self {
        Self {
            best_performing: best_performing(crops, limit),
            high_demand: high_demand(crops, limit),
        }
    }
}
