use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Indian cropping season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Kharif,
    Rabi,
    Summer,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Kharif => write!(f, "kharif"),
            Season::Rabi => write!(f, "rabi"),
            Season::Summer => write!(f, "summer"),
        }
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kharif" => Ok(Season::Kharif),
            "rabi" => Ok(Season::Rabi),
            "summer" => Ok(Season::Summer),
            _ => Err(format!("Unknown season: {s}")),
        }
    }
}
