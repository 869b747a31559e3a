use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of the target price fires an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Above,
    Below,
}

impl AlertType {
    /// Both bounds are inclusive: a price sitting exactly on the target fires.
    pub fn is_crossed(&self, current_price: f64, target_price: f64) -> bool {
        match self {
            AlertType::Above => current_price >= target_price,
            AlertType::Below => current_price <= target_price,
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertType::Above => write!(f, "above"),
            AlertType::Below => write!(f, "below"),
        }
    }
}

impl FromStr for AlertType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "above" => Ok(AlertType::Above),
            "below" => Ok(AlertType::Below),
            _ => Err(format!("Unknown alert type: {s}")),
        }
    }
}
