//! Synthetic trailing price history for charting.
//!
//! There is no real price-history feed behind this module. Every point is the
//! crop's current price perturbed by an independent uniform draw of up to ±5%,
//! so the output is a placeholder with the right shape, not market data. A
//! real history reader should replace it behind the same [`PriceSeries`]
//! contract. Seed the generator in tests.

use crate::domain::entities::crop::Crop;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Days of history before today; the series holds `HISTORY_DAYS + 1` points.
pub const HISTORY_DAYS: i64 = 30;

/// Maximum relative deviation of a synthesized point from the current price.
pub const MAX_VARIATION: f64 = 0.05;

pub const AVERAGE_LABEL: &str = "Average";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    /// Crop name, or "Average" for the cross-crop series.
    pub label: String,
    /// Oldest first.
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub struct HistoricalSeriesSynthesizer<R: Rng> {
    rng: R,
}

impl HistoricalSeriesSynthesizer<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> HistoricalSeriesSynthesizer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn synthesize(&mut self, crop: &Crop, today: NaiveDate) -> PriceSeries {
        let base = crop.current_price.value();
        let points = (0..=HISTORY_DAYS)
            .rev()
            .map(|days_ago| {
                let variation = self.rng.gen_range(-MAX_VARIATION..MAX_VARIATION);
                PricePoint {
                    date: today - Duration::days(days_ago),
                    price: base * (1.0 + variation),
                }
            })
            .collect();

        PriceSeries {
            label: crop.name.clone(),
            points,
        }
    }

    /// Synthesize each crop independently, then average point by point.
    ///
    /// The result inherits the noise of every input series and should not be
    /// read as a market trend line.
    pub fn synthesize_average(&mut self, crops: &[Crop], today: NaiveDate) -> PriceSeries {
        let series: Vec<PriceSeries> = crops
            .iter()
            .map(|crop| self.synthesize(crop, today))
            .collect();

        let Some(first) = series.first() else {
            return PriceSeries {
                label: AVERAGE_LABEL.to_string(),
                points: Vec::new(),
            };
        };

        let count = series.len() as f64;
        let points = first
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let sum: f64 = series.iter().map(|s| s.points[i].price).sum();
                PricePoint {
                    date: point.date,
                    price: sum / count,
                }
            })
            .collect();

        PriceSeries {
            label: AVERAGE_LABEL.to_string(),
            points,
        }
    }
}
