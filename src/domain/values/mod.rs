pub mod alert_trigger;
pub mod alert_type;
pub mod demand;
pub mod market_stats;
pub mod news_category;
pub mod price;
pub mod price_history;
pub mod price_movement;
pub mod season;
pub mod sentiment;
pub mod trend;
