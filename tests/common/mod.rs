//! Shared test helpers.
#![allow(dead_code)]

use mandiwatch::domain::entities::crop::{Crop, NewCrop};
use mandiwatch::domain::entities::price_alert::{NewPriceAlert, PriceAlert};
use mandiwatch::domain::error::DomainError;
use mandiwatch::domain::ports::notifier::Notifier;
use mandiwatch::domain::values::alert_trigger::AlertEvaluation;
use mandiwatch::domain::values::alert_type::AlertType;
use mandiwatch::domain::values::price::Price;
use mandiwatch::domain::values::trend::Trend;
use mandiwatch::infrastructure::identity::env::EnvIdentity;
use mandiwatch::infrastructure::notify::log::LogNotifier;
use mandiwatch::MandiWatch;
use std::sync::{Arc, Mutex};

pub const FARMER: &str = "gurpreet@example.com";

pub fn setup() -> MandiWatch {
    setup_as(FARMER)
}

pub fn setup_as(email: &str) -> MandiWatch {
    MandiWatch::with_collaborators(":memory:", Arc::new(EnvIdentity::with_email(email)), Arc::new(LogNotifier)).unwrap()
}

pub fn new_crop(name: &str, current: f64, previous: Option<f64>, trend: Option<Trend>) -> NewCrop {
    NewCrop {
        name: name.to_string(),
        variety: None,
        current_price: Price::new(current).unwrap(),
        previous_price: previous.map(|p| Price::new(p).unwrap()),
        season: None,
        mandi_location: None,
        trend,
        demand: None,
    }
}

pub fn add_crop(mw: &MandiWatch, name: &str, current: f64, previous: Option<f64>, trend: Option<Trend>) -> Crop {
    mw.crop_add(new_crop(name, current, previous, trend)).unwrap()
}

pub fn new_alert(crop_name: &str, target: f64, alert_type: AlertType) -> NewPriceAlert {
    NewPriceAlert {
        crop_name: crop_name.to_string(),
        target_price: Price::new(target).unwrap(),
        alert_type,
        is_active: true,
    }
}

/// Notifier that remembers which alerts it was asked to send.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, alert: &PriceAlert, _evaluation: &AlertEvaluation) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(alert.id.clone());
        Ok(())
    }
}

pub struct FailingNotifier;

#[async_trait::async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _alert: &PriceAlert, _evaluation: &AlertEvaluation) -> Result<(), DomainError> {
        Err(DomainError::Notification("smtp unreachable".into()))
    }
}
