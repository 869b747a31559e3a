use crate::domain::entities::crop::Crop;
use crate::domain::entities::price_alert::{NewPriceAlert, PriceAlert};
use crate::domain::error::DomainError;
use crate::domain::ports::identity::IdentityProvider;
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::record_store::{FieldMatch, OrderBy, RecordStore};
use crate::domain::values::alert_trigger::{evaluate_all, AlertEvaluation};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

pub struct AlertsUseCase {
    alerts: Arc<dyn RecordStore<PriceAlert>>,
    crops: Arc<dyn RecordStore<Crop>>,
    identity: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn Notifier>,
}

#[derive(Debug, Serialize)]
pub struct AlertView {
    #[serde(flatten)]
    pub alert: PriceAlert,
    pub evaluation: AlertEvaluation,
}

#[derive(Debug, Serialize)]
pub struct AlertBoard {
    pub checked_at: DateTime<Utc>,
    pub owner_email: String,
    pub total_alerts: usize,
    pub triggered_count: usize,
    pub alerts: Vec<AlertView>,
}

#[derive(Debug, Serialize)]
pub struct NotifyReport {
    pub checked: usize,
    pub sent: usize,
}

impl AlertsUseCase {
    pub fn new(
        alerts: Arc<dyn RecordStore<PriceAlert>>,
        crops: Arc<dyn RecordStore<Crop>>,
        identity: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            alerts,
            crops,
            identity,
            notifier,
        }
    }

    pub fn create(&self, draft: NewPriceAlert) -> Result<PriceAlert, DomainError> {
        let user = self.identity.current_user()?;
        let alert = PriceAlert::new(draft, user.email)?;
        let alert = self.alerts.create(&alert)?;
        info!(
            id = %alert.id,
            crop = %alert.crop_name,
            alert_type = %alert.alert_type,
            target_price = %alert.target_price,
            "price alert created"
        );
        Ok(alert)
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.alerts.delete(id)?;
        info!(id, "price alert deleted");
        Ok(())
    }

    /// The current user's alerts, newest first, each evaluated against the
    /// latest crop prices.
    pub fn list_mine(&self) -> Result<AlertBoard, DomainError> {
        let user = self.identity.current_user()?;
        let alerts = self
            .alerts
            .filter(&[FieldMatch::new("owner_email", user.email.clone())])?;
        let crops = self.crops.list(Some(&OrderBy::asc("name")), None)?;

        let evaluations = evaluate_all(&alerts, &crops);
        let unresolved = evaluations.iter().filter(|e| !e.is_resolved()).count();
        if unresolved > 0 {
            warn!(unresolved, "alerts reference crops with no current price");
        }

        let views: Vec<AlertView> = alerts
            .into_iter()
            .zip(evaluations)
            .map(|(alert, evaluation)| AlertView { alert, evaluation })
            .collect();

        Ok(AlertBoard {
            checked_at: Utc::now(),
            owner_email: user.email,
            total_alerts: views.len(),
            triggered_count: views.iter().filter(|v| v.evaluation.triggered).count(),
            alerts: views,
        })
    }

    /// Send every alert that is both triggered and active to the notifier.
    /// The first delivery failure aborts the run and is returned.
    pub async fn notify_triggered(&self) -> Result<NotifyReport, DomainError> {
        let board = self.list_mine()?;
        let mut sent = 0usize;
        for view in board.alerts.iter().filter(|v| v.evaluation.is_actionable()) {
            self.notifier.notify(&view.alert, &view.evaluation).await?;
            sent += 1;
        }
        info!(checked = board.total_alerts, sent, "alert notifications sent");
        Ok(NotifyReport {
            checked: board.total_alerts,
            sent,
        })
    }
}
