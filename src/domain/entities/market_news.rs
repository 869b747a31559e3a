use crate::domain::entities::{new_id, require_text, Entity};
use crate::domain::error::DomainError;
use crate::domain::values::news_category::{Impact, NewsCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketNews {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: NewsCategory,
    #[serde(default)]
    pub impact: Option<Impact>,
    #[serde(default)]
    pub relevant_crops: Vec<String>,
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewMarketNews {
    pub title: String,
    pub content: String,
    pub category: NewsCategory,
    #[serde(default)]
    pub impact: Option<Impact>,
    #[serde(default)]
    pub relevant_crops: Vec<String>,
}

impl MarketNews {
    pub fn new(draft: NewMarketNews) -> Result<Self, DomainError> {
        require_text("title", &draft.title).map_err(DomainError::Validation)?;
        require_text("content", &draft.content).map_err(DomainError::Validation)?;
        Ok(Self {
            id: new_id(),
            title: draft.title,
            content: draft.content,
            category: draft.category,
            impact: draft.impact,
            relevant_crops: draft.relevant_crops,
            created_date: Utc::now(),
        })
    }
}

impl NewMarketNews {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Entity for MarketNews {
    const NAME: &'static str = "MarketNews";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }
}
