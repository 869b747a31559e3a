//! Trigger evaluation of price alerts against a crop snapshot.
//!
//! Crops are matched to alerts by exact, case-sensitive name. When several
//! crops share a name the first one in snapshot order is used. An alert whose
//! crop is missing is reported unresolved (`current_price: None`) and never
//! triggers; this is not an error.
//!
//! Trigger state and `is_active` are independent. An inactive alert whose
//! price condition holds still reports `triggered: true`; use
//! [`AlertEvaluation::is_actionable`] when both must hold.

use crate::domain::entities::crop::Crop;
use crate::domain::entities::price_alert::PriceAlert;
use crate::domain::values::alert_type::AlertType;
use serde::Serialize;
use std::collections::HashMap;

/// Name lookup over a crop snapshot, first match wins.
pub struct CropIndex<'a> {
    by_name: HashMap<&'a str, &'a Crop>,
}

impl<'a> CropIndex<'a> {
    pub fn build(crops: &'a [Crop]) -> Self {
        let mut by_name = HashMap::with_capacity(crops.len());
        for crop in crops {
            by_name.entry(crop.name.as_str()).or_insert(crop);
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a Crop> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertEvaluation {
    pub alert_id: String,
    pub crop_name: String,
    pub alert_type: AlertType,
    pub target_price: f64,
    /// `None` when no crop carries the alert's name.
    pub current_price: Option<f64>,
    pub triggered: bool,
    pub is_active: bool,
}

impl AlertEvaluation {
    pub fn evaluate(alert: &PriceAlert, index: &CropIndex<'_>) -> Self {
        let target_price = alert.target_price.value();
        let current_price = index
            .get(&alert.crop_name)
            .map(|crop| crop.current_price.value());
        let triggered = current_price
            .map(|price| alert.alert_type.is_crossed(price, target_price))
            .unwrap_or(false);

        Self {
            alert_id: alert.id.clone(),
            crop_name: alert.crop_name.clone(),
            alert_type: alert.alert_type,
            target_price,
            current_price,
            triggered,
            is_active: alert.is_active,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.current_price.is_some()
    }

    /// Triggered and switched on.
    pub fn is_actionable(&self) -> bool {
        self.triggered && self.is_active
    }
}

/// Evaluate every alert against one snapshot, indexing crops once.
pub fn evaluate_all(alerts: &[PriceAlert], crops: &[Crop]) -> Vec<AlertEvaluation> {
    let index = CropIndex::build(crops);
    alerts
        .iter()
        .map(|alert| AlertEvaluation::evaluate(alert, &index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::crop::NewCrop;
    use crate::domain::entities::price_alert::NewPriceAlert;
    use crate::domain::values::price::Price;

    fn crop(name: &str, price: f64) -> Crop {
        Crop::new(NewCrop {
            name: name.into(),
            variety: None,
            current_price: Price::new(price).unwrap(),
            previous_price: None,
            season: None,
            mandi_location: None,
            trend: None,
            demand: None,
        })
        .unwrap()
    }

    fn alert(name: &str, target: f64, alert_type: AlertType, is_active: bool) -> PriceAlert {
        PriceAlert::new(
            NewPriceAlert {
                crop_name: name.into(),
                target_price: Price::new(target).unwrap(),
                alert_type,
                is_active,
            },
            "kisan@example.com".into(),
        )
        .unwrap()
    }

    #[test]
    fn test_above_is_inclusive() {
        let crops = vec![crop("Wheat", 2000.0)];
        let eval = &evaluate_all(&[alert("Wheat", 2000.0, AlertType::Above, true)], &crops)[0];
        assert!(eval.triggered);
        assert_eq!(eval.current_price, Some(2000.0));
    }

    #[test]
    fn test_below_just_above_target_not_triggered() {
        let crops = vec![crop("Rice", 1501.0)];
        let eval = &evaluate_all(&[alert("Rice", 1500.0, AlertType::Below, true)], &crops)[0];
        assert!(!eval.triggered);

        let crops = vec![crop("Rice", 1500.0)];
        let eval = &evaluate_all(&[alert("Rice", 1500.0, AlertType::Below, true)], &crops)[0];
        assert!(eval.triggered);
    }

    #[test]
    fn test_missing_crop_is_unresolved() {
        let crops = vec![crop("Wheat", 2000.0)];
        let eval = &evaluate_all(&[alert("Bajra", 100.0, AlertType::Above, true)], &crops)[0];
        assert!(!eval.triggered);
        assert_eq!(eval.current_price, None);
        assert!(!eval.is_resolved());
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let crops = vec![crop("wheat", 2500.0)];
        let eval = &evaluate_all(&[alert("Wheat", 2000.0, AlertType::Above, true)], &crops)[0];
        assert!(!eval.is_resolved());
    }

    #[test]
    fn test_first_match_wins() {
        let crops = vec![crop("Cotton", 6000.0), crop("Cotton", 7000.0)];
        let index = CropIndex::build(&crops);
        assert_eq!(index.len(), 1);
        let eval = AlertEvaluation::evaluate(&alert("Cotton", 6500.0, AlertType::Above, true), &index);
        assert_eq!(eval.current_price, Some(6000.0));
        assert!(!eval.triggered);
    }

    #[test]
    fn test_inactive_alert_still_triggers_but_not_actionable() {
        let crops = vec![crop("Maize", 1900.0)];
        let eval = &evaluate_all(&[alert("Maize", 1800.0, AlertType::Above, false)], &crops)[0];
        assert!(eval.triggered);
        assert!(!eval.is_active);
        assert!(!eval.is_actionable());
    }

    #[test]
    fn test_zero_price_compares_normally() {
        let crops = vec![crop("Onion", 0.0)];
        let eval = &evaluate_all(&[alert("Onion", 500.0, AlertType::Below, true)], &crops)[0];
        assert!(eval.triggered);
    }
}
