use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mandiwatch", about = "Crop prices, market sentiment and price alerts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a crop price observation
    CropAdd {
        /// JSON with name, current_price, previous_price, variety, season, mandi_location, trend, demand
        json: String,
    },
    /// List crops
    Crops {
        /// Sort field, prefix with '-' for descending (e.g. -current_price)
        #[arg(long, default_value = "name", allow_hyphen_values = true)]
        order: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Delete a crop
    CropDelete {
        /// Crop ID
        id: String,
    },
    /// Headline stats, sentiment, trending crops and price cards
    Dashboard,
    /// Market sentiment over all crops
    Sentiment,
    /// 30-day price history (simulated) and price comparison
    Analysis {
        /// Crop name; omit for the all-crops average
        #[arg(long)]
        crop: Option<String>,
        /// Seed for the simulated history (overrides MANDIWATCH_HISTORY_SEED)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Create a price alert for the current user
    AlertAdd {
        /// JSON with crop_name, target_price, alert_type (above, below), is_active
        json: String,
    },
    /// Delete a price alert
    AlertDelete {
        /// Alert ID
        id: String,
    },
    /// Show the current user's alerts with trigger state
    Alerts,
    /// Notify for every active, triggered alert
    AlertsNotify,
    /// Add a mandi
    MandiAdd {
        /// JSON with name, location, district, contact_number, market_days, specialization, facilities
        json: String,
    },
    /// List mandis, optionally matching a search term
    Mandis {
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a news item
    NewsAdd {
        /// JSON with title, content, category, impact, relevant_crops
        json: String,
    },
    /// List news, latest first
    News {
        /// Category (price_update, weather, government_policy, farming_tips, market_analysis)
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}
