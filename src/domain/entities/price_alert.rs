use crate::domain::entities::{new_id, require_text, Entity};
use crate::domain::error::DomainError;
use crate::domain::values::alert_type::AlertType;
use crate::domain::values::price::Price;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A farmer's request to be told when a crop price crosses a target.
///
/// Alerts are immutable once created. `is_active` is a display flag set by
/// whoever created the alert: trigger computation ignores it and nothing in
/// the crate ever writes it. `target_price > 0` holds however the alert is
/// built, including when it is read back from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StoredPriceAlert")]
pub struct PriceAlert {
    pub id: String,
    pub crop_name: String,
    pub target_price: Price,
    pub alert_type: AlertType,
    pub is_active: bool,
    pub owner_email: String,
    pub created_date: DateTime<Utc>,
}

/// Wire shape of a stored alert, checked before it becomes a [`PriceAlert`].
#[derive(Deserialize)]
struct StoredPriceAlert {
    id: String,
    crop_name: String,
    target_price: Price,
    alert_type: AlertType,
    #[serde(default = "default_active")]
    is_active: bool,
    #[serde(alias = "farmer_email")]
    owner_email: String,
    created_date: DateTime<Utc>,
}

impl TryFrom<StoredPriceAlert> for PriceAlert {
    type Error = String;

    fn try_from(raw: StoredPriceAlert) -> Result<Self, Self::Error> {
        require_positive_target(raw.target_price)?;
        Ok(Self {
            id: raw.id,
            crop_name: raw.crop_name,
            target_price: raw.target_price,
            alert_type: raw.alert_type,
            is_active: raw.is_active,
            owner_email: raw.owner_email,
            created_date: raw.created_date,
        })
    }
}

/// Fields a farmer supplies when creating an alert.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPriceAlert {
    pub crop_name: String,
    pub target_price: Price,
    pub alert_type: AlertType,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

fn require_positive_target(target_price: Price) -> Result<(), String> {
    if target_price.value() <= 0.0 {
        return Err(format!(
            "target_price must be greater than zero, got {target_price}"
        ));
    }
    Ok(())
}

impl PriceAlert {
    pub fn new(draft: NewPriceAlert, owner_email: String) -> Result<Self, DomainError> {
        require_text("crop_name", &draft.crop_name).map_err(DomainError::Validation)?;
        require_text("owner_email", &owner_email).map_err(DomainError::Validation)?;
        require_positive_target(draft.target_price).map_err(DomainError::Validation)?;
        Ok(Self {
            id: new_id(),
            crop_name: draft.crop_name,
            target_price: draft.target_price,
            alert_type: draft.alert_type,
            is_active: draft.is_active,
            owner_email,
            created_date: Utc::now(),
        })
    }
}

impl NewPriceAlert {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Entity for PriceAlert {
    const NAME: &'static str = "PriceAlert";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_target_rejected() {
        let draft = NewPriceAlert::from_json(
            r#"{"crop_name": "Wheat", "target_price": 0, "alert_type": "above"}"#,
        )
        .unwrap();
        assert!(PriceAlert::new(draft, "kisan@example.com".into()).is_err());
    }

    #[test]
    fn test_active_by_default() {
        let draft = NewPriceAlert::from_json(
            r#"{"crop_name": "Wheat", "target_price": 2100, "alert_type": "below"}"#,
        )
        .unwrap();
        let alert = PriceAlert::new(draft, "kisan@example.com".into()).unwrap();
        assert!(alert.is_active);
        assert_eq!(alert.alert_type, AlertType::Below);
    }

    #[test]
    fn test_legacy_farmer_email_key() {
        let json = r#"{
            "id": "a1",
            "crop_name": "Rice",
            "target_price": 3000,
            "alert_type": "above",
            "farmer_email": "kisan@example.com",
            "created_date": "2026-10-01T06:00:00Z"
        }"#;
        let alert: PriceAlert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.owner_email, "kisan@example.com");
        assert!(alert.is_active);
    }

    #[test]
    fn test_stored_zero_target_rejected() {
        let json = r#"{
            "id": "a2",
            "crop_name": "Rice",
            "target_price": 0,
            "alert_type": "below",
            "owner_email": "kisan@example.com",
            "created_date": "2026-10-01T06:00:00Z"
        }"#;
        assert!(serde_json::from_str::<PriceAlert>(json).is_err());
    }

    #[test]
    fn test_stored_alert_round_trips() {
        let draft = NewPriceAlert::from_json(
            r#"{"crop_name": "Gram", "target_price": 5400, "alert_type": "above", "is_active": false}"#,
        )
        .unwrap();
        let alert = PriceAlert::new(draft, "kisan@example.com".into()).unwrap();
        let back: PriceAlert = serde_json::from_str(&serde_json::to_string(&alert).unwrap()).unwrap();
        assert_eq!(back.id, alert.id);
        assert_eq!(back.target_price, alert.target_price);
        assert!(!back.is_active);
    }

    #[test]
    fn test_draft_rejects_owner_fields() {
        for key in ["owner_email", "farmer_email"] {
            let json = format!(
                r#"{{"crop_name": "Wheat", "target_price": 2100, "alert_type": "above", "{key}": "x@example.com"}}"#
            );
            assert!(NewPriceAlert::from_json(&json).is_err());
        }
    }
}
