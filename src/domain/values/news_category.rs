use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsCategory {
    PriceUpdate,
    Weather,
    GovernmentPolicy,
    FarmingTips,
    MarketAnalysis,
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsCategory::PriceUpdate => write!(f, "price_update"),
            NewsCategory::Weather => write!(f, "weather"),
            NewsCategory::GovernmentPolicy => write!(f, "government_policy"),
            NewsCategory::FarmingTips => write!(f, "farming_tips"),
            NewsCategory::MarketAnalysis => write!(f, "market_analysis"),
        }
    }
}

impl FromStr for NewsCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "price_update" => Ok(NewsCategory::PriceUpdate),
            "weather" => Ok(NewsCategory::Weather),
            "government_policy" => Ok(NewsCategory::GovernmentPolicy),
            "farming_tips" => Ok(NewsCategory::FarmingTips),
            "market_analysis" => Ok(NewsCategory::MarketAnalysis),
            _ => Err(format!("Unknown news category: {s}")),
        }
    }
}

/// Expected effect of a news item on farmers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Positive => write!(f, "positive"),
            Impact::Negative => write!(f, "negative"),
            Impact::Neutral => write!(f, "neutral"),
        }
    }
}

impl FromStr for Impact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Impact::Positive),
            "negative" => Ok(Impact::Negative),
            "neutral" => Ok(Impact::Neutral),
            _ => Err(format!("Unknown impact: {s}")),
        }
    }
}
