pub mod crop;
pub mod mandi;
pub mod market_news;
pub mod price_alert;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A named record type held by the record store.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Entity type name the store partitions records by.
    const NAME: &'static str;

    fn id(&self) -> &str;
    fn created_date(&self) -> DateTime<Utc>;
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("Missing required field: {field}"));
    }
    Ok(())
}
