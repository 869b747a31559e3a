use crate::domain::entities::{new_id, require_text, Entity};
use crate::domain::error::DomainError;
use crate::domain::values::demand::Demand;
use crate::domain::values::price::Price;
use crate::domain::values::season::Season;
use crate::domain::values::trend::Trend;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A crop price observation at a mandi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crop {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub variety: Option<String>,
    pub current_price: Price,
    #[serde(default)]
    pub previous_price: Option<Price>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub mandi_location: Option<String>,
    #[serde(default)]
    pub trend: Option<Trend>,
    #[serde(default)]
    pub demand: Option<Demand>,
    pub created_date: DateTime<Utc>,
}

/// Fields accepted when creating a crop; identity and timestamps are assigned.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCrop {
    pub name: String,
    #[serde(default)]
    pub variety: Option<String>,
    pub current_price: Price,
    #[serde(default)]
    pub previous_price: Option<Price>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub mandi_location: Option<String>,
    #[serde(default)]
    pub trend: Option<Trend>,
    #[serde(default)]
    pub demand: Option<Demand>,
}

impl Crop {
    pub fn new(draft: NewCrop) -> Result<Self, DomainError> {
        require_text("name", &draft.name).map_err(DomainError::Validation)?;
        Ok(Self {
            id: new_id(),
            name: draft.name,
            variety: draft.variety,
            current_price: draft.current_price,
            previous_price: draft.previous_price,
            season: draft.season,
            mandi_location: draft.mandi_location,
            trend: draft.trend,
            demand: draft.demand,
            created_date: Utc::now(),
        })
    }

    /// Trend label with absence treated as stable.
    pub fn direction(&self) -> Trend {
        self.trend.unwrap_or_default()
    }
}

impl NewCrop {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Entity for Crop {
    const NAME: &'static str = "Crop";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }
}
