//! Per-crop price change derived from the current and previous observation.

use crate::domain::entities::crop::Crop;
use crate::domain::values::trend::Trend;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceMovement {
    /// `current_price - previous_price`; zero when there is no previous price.
    pub price_change: f64,
    /// Change relative to the previous price, rounded to one decimal.
    /// Zero when the previous price is absent or zero.
    pub percent_change: f64,
    /// The crop's own trend label. Not inferred from the prices.
    pub direction: Trend,
}

impl PriceMovement {
    pub fn classify(crop: &Crop) -> Self {
        let current = crop.current_price.value();
        let previous = crop.previous_price.map(|p| p.value());

        let price_change = current - previous.unwrap_or(current);
        let percent_change = match previous {
            Some(prev) if prev > 0.0 => round1(price_change / prev * 100.0),
            _ => 0.0,
        };

        Self {
            price_change,
            percent_change,
            direction: crop.direction(),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::crop::NewCrop;
    use crate::domain::values::price::Price;

    fn crop(current: f64, previous: Option<f64>, trend: Option<Trend>) -> Crop {
        Crop::new(NewCrop {
            name: "Wheat".into(),
            variety: None,
            current_price: Price::new(current).unwrap(),
            previous_price: previous.map(|p| Price::new(p).unwrap()),
            season: None,
            mandi_location: None,
            trend,
            demand: None,
        })
        .unwrap()
    }

    #[test]
    fn test_change_and_percent() {
        let m = PriceMovement::classify(&crop(2200.0, Some(2000.0), Some(Trend::Rising)));
        assert_eq!(m.price_change, 200.0);
        assert_eq!(m.percent_change, 10.0);
        assert_eq!(m.direction, Trend::Rising);
    }

    #[test]
    fn test_percent_rounds_to_one_decimal() {
        // 100 / 3000 = 3.333..%
        let m = PriceMovement::classify(&crop(3100.0, Some(3000.0), None));
        assert_eq!(m.percent_change, 3.3);

        let m = PriceMovement::classify(&crop(1950.0, Some(2100.0), Some(Trend::Falling)));
        assert_eq!(m.price_change, -150.0);
        assert_eq!(m.percent_change, -7.1);
    }

    #[test]
    fn test_missing_previous_price_is_flat() {
        let m = PriceMovement::classify(&crop(2500.0, None, None));
        assert_eq!(m.price_change, 0.0);
        assert_eq!(m.percent_change, 0.0);
        assert_eq!(m.direction, Trend::Stable);
    }

    #[test]
    fn test_zero_previous_price_never_nan() {
        let m = PriceMovement::classify(&crop(2500.0, Some(0.0), None));
        assert_eq!(m.price_change, 2500.0);
        assert_eq!(m.percent_change, 0.0);
        assert!(m.percent_change.is_finite());
    }

    #[test]
    fn test_direction_is_pass_through() {
        // Label wins even when it disagrees with the numbers.
        let m = PriceMovement::classify(&crop(1800.0, Some(2000.0), Some(Trend::Rising)));
        assert_eq!(m.direction, Trend::Rising);
    }
}
