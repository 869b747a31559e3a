use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Demand {
    High,
    Medium,
    Low,
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Demand::High => write!(f, "high"),
            Demand::Medium => write!(f, "medium"),
            Demand::Low => write!(f, "low"),
        }
    }
}

impl FromStr for Demand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Demand::High),
            "medium" => Ok(Demand::Medium),
            "low" => Ok(Demand::Low),
            _ => Err(format!("Unknown demand level: {s}")),
        }
    }
}
