pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::alerts::{AlertBoard, AlertsUseCase, NotifyReport};
use crate::application::analysis::{AnalysisUseCase, MarketAnalysis, SeriesSelection};
use crate::application::crops::CropsUseCase;
use crate::application::dashboard::{Dashboard, DashboardUseCase};
use crate::application::mandis::MandisUseCase;
use crate::application::news::NewsUseCase;
use crate::config::Config;
use crate::domain::entities::crop::{Crop, NewCrop};
use crate::domain::entities::mandi::{Mandi, NewMandi};
use crate::domain::entities::market_news::{MarketNews, NewMarketNews};
use crate::domain::entities::price_alert::{NewPriceAlert, PriceAlert};
use crate::domain::error::DomainError;
use crate::domain::ports::identity::IdentityProvider;
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::record_store::{OrderBy, RecordStore};
use crate::domain::values::news_category::NewsCategory;
use crate::domain::values::sentiment::MarketSentiment;
use crate::infrastructure::identity::env::EnvIdentity;
use crate::infrastructure::notify::log::LogNotifier;
use crate::infrastructure::sqlite::open_database;
use crate::infrastructure::sqlite::record_store::SqliteRecordStore;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct MandiWatch {
    crops_uc: CropsUseCase,
    dashboard_uc: DashboardUseCase,
    analysis_uc: AnalysisUseCase,
    alerts_uc: AlertsUseCase,
    mandis_uc: MandisUseCase,
    news_uc: NewsUseCase,
}

impl MandiWatch {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let identity: Arc<dyn IdentityProvider> = Arc::new(EnvIdentity::new(
            config.user_email.clone(),
            config.user_name.clone(),
        ));
        Self::with_collaborators(&config.db_path, identity, Arc::new(LogNotifier))
    }

    pub fn with_collaborators(
        db_path: &str,
        identity: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, DomainError> {
        let conn = open_database(db_path)?;

        let crops: Arc<dyn RecordStore<Crop>> = Arc::new(SqliteRecordStore::<Crop>::new(conn.clone()));
        let alerts: Arc<dyn RecordStore<PriceAlert>> = Arc::new(SqliteRecordStore::<PriceAlert>::new(conn.clone()));
        let mandis: Arc<dyn RecordStore<Mandi>> = Arc::new(SqliteRecordStore::<Mandi>::new(conn.clone()));
        let news: Arc<dyn RecordStore<MarketNews>> = Arc::new(SqliteRecordStore::<MarketNews>::new(conn));

        Ok(Self {
            crops_uc: CropsUseCase::new(crops.clone()),
            dashboard_uc: DashboardUseCase::new(crops.clone()),
            analysis_uc: AnalysisUseCase::new(crops.clone()),
            alerts_uc: AlertsUseCase::new(alerts, crops, identity, notifier),
            mandis_uc: MandisUseCase::new(mandis),
            news_uc: NewsUseCase::new(news),
        })
    }

    // Delegating methods
    pub fn crop_add(&self, draft: NewCrop) -> Result<Crop, DomainError> {
        self.crops_uc.add(draft)
    }

    pub fn crops(&self, order_by: Option<&OrderBy>, limit: Option<usize>) -> Result<Vec<Crop>, DomainError> {
        self.crops_uc.list(order_by, limit)
    }

    pub fn crop_delete(&self, id: &str) -> Result<(), DomainError> {
        self.crops_uc.delete(id)
    }

    pub fn dashboard(&self) -> Result<Dashboard, DomainError> {
        self.dashboard_uc.execute()
    }

    pub fn sentiment(&self) -> Result<MarketSentiment, DomainError> {
        self.dashboard_uc.sentiment()
    }

    pub fn analysis(
        &self,
        selection: &SeriesSelection,
        seed: Option<u64>,
        today: NaiveDate,
    ) -> Result<MarketAnalysis, DomainError> {
        self.analysis_uc.execute(selection, seed, today)
    }

    pub fn alert_add(&self, draft: NewPriceAlert) -> Result<PriceAlert, DomainError> {
        self.alerts_uc.create(draft)
    }

    pub fn alert_delete(&self, id: &str) -> Result<(), DomainError> {
        self.alerts_uc.delete(id)
    }

    pub fn alerts(&self) -> Result<AlertBoard, DomainError> {
        self.alerts_uc.list_mine()
    }

    pub async fn alerts_notify(&self) -> Result<NotifyReport, DomainError> {
        self.alerts_uc.notify_triggered().await
    }

    pub fn mandi_add(&self, draft: NewMandi) -> Result<Mandi, DomainError> {
        self.mandis_uc.add(draft)
    }

    pub fn mandis(&self, term: Option<&str>) -> Result<Vec<Mandi>, DomainError> {
        self.mandis_uc.search(term)
    }

    pub fn news_add(&self, draft: NewMarketNews) -> Result<MarketNews, DomainError> {
        self.news_uc.add(draft)
    }

    pub fn news(&self, category: Option<NewsCategory>, limit: Option<usize>) -> Result<Vec<MarketNews>, DomainError> {
        self.news_uc.list(category, limit)
    }
}
