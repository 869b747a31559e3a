use crate::domain::entities::price_alert::PriceAlert;
use crate::domain::error::DomainError;
use crate::domain::ports::notifier::Notifier;
use crate::domain::values::alert_trigger::AlertEvaluation;
use tracing::info;

/// Records triggered alerts in the log instead of sending mail.
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, alert: &PriceAlert, evaluation: &AlertEvaluation) -> Result<(), DomainError> {
        info!(
            alert_id = %alert.id,
            owner = %alert.owner_email,
            crop = %alert.crop_name,
            alert_type = %alert.alert_type,
            target_price = evaluation.target_price,
            current_price = ?evaluation.current_price,
            "price alert triggered"
        );
        Ok(())
    }
}
