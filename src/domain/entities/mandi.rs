use crate::domain::entities::{new_id, require_text, Entity};
use crate::domain::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A regulated wholesale market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mandi {
    pub id: String,
    pub name: String,
    pub location: String,
    pub district: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub market_days: Option<String>,
    #[serde(default)]
    pub specialization: Vec<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewMandi {
    pub name: String,
    pub location: String,
    pub district: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub market_days: Option<String>,
    #[serde(default)]
    pub specialization: Vec<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
}

impl Mandi {
    pub fn new(draft: NewMandi) -> Result<Self, DomainError> {
        for (field, value) in [
            ("name", &draft.name),
            ("location", &draft.location),
            ("district", &draft.district),
        ] {
            require_text(field, value).map_err(DomainError::Validation)?;
        }
        Ok(Self {
            id: new_id(),
            name: draft.name,
            location: draft.location,
            district: draft.district,
            contact_number: draft.contact_number,
            market_days: draft.market_days,
            specialization: draft.specialization,
            facilities: draft.facilities,
            created_date: Utc::now(),
        })
    }

    /// Case-insensitive match of `term` against name, location or district.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        [&self.name, &self.location, &self.district]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl NewMandi {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Entity for Mandi {
    const NAME: &'static str = "Mandi";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }
}
