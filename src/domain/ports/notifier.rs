use crate::domain::entities::price_alert::PriceAlert;
use crate::domain::error::DomainError;
use crate::domain::values::alert_trigger::AlertEvaluation;

/// Delivers a message for an alert whose price condition holds.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, alert: &PriceAlert, evaluation: &AlertEvaluation) -> Result<(), DomainError>;
}
