use clap::Parser;
use mandiwatch::application::analysis::SeriesSelection;
use mandiwatch::cli::commands::{Cli, Commands};
use mandiwatch::config::Config;
use mandiwatch::domain::entities::crop::NewCrop;
use mandiwatch::domain::entities::mandi::NewMandi;
use mandiwatch::domain::entities::market_news::NewMarketNews;
use mandiwatch::domain::entities::price_alert::NewPriceAlert;
use mandiwatch::domain::ports::record_store::OrderBy;
use mandiwatch::domain::values::news_category::NewsCategory;
use mandiwatch::MandiWatch;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading configuration: {e}");
            std::process::exit(1);
        }
    };

    let mw = match MandiWatch::new(&config) {
        Ok(mw) => mw,
        Err(e) => {
            eprintln!("Error initializing MandiWatch: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(mw, &config, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_command(mw: MandiWatch, config: &Config, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::CropAdd { json } => {
            let crop = mw.crop_add(NewCrop::from_json(&json)?)?;
            print_json(&crop)?;
        }
        Commands::Crops { order, limit } => {
            let order: OrderBy = order.parse()?;
            print_json(&mw.crops(Some(&order), limit)?)?;
        }
        Commands::CropDelete { id } => {
            mw.crop_delete(&id)?;
            println!("Crop {id} deleted");
        }
        Commands::Dashboard => {
            print_json(&mw.dashboard()?)?;
        }
        Commands::Sentiment => {
            print_json(&mw.sentiment()?)?;
        }
        Commands::Analysis { crop, seed } => {
            let selection = match crop {
                Some(name) => SeriesSelection::Crop(name),
                None => SeriesSelection::AllCrops,
            };
            let today = chrono::Local::now().date_naive();
            let analysis = mw.analysis(&selection, seed.or(config.history_seed), today)?;
            print_json(&analysis)?;
        }
        Commands::AlertAdd { json } => {
            let alert = mw.alert_add(NewPriceAlert::from_json(&json)?)?;
            print_json(&alert)?;
        }
        Commands::AlertDelete { id } => {
            mw.alert_delete(&id)?;
            println!("Alert {id} deleted");
        }
        Commands::Alerts => {
            print_json(&mw.alerts()?)?;
        }
        Commands::AlertsNotify => {
            print_json(&mw.alerts_notify().await?)?;
        }
        Commands::MandiAdd { json } => {
            let mandi = mw.mandi_add(NewMandi::from_json(&json)?)?;
            print_json(&mandi)?;
        }
        Commands::Mandis { search } => {
            print_json(&mw.mandis(search.as_deref())?)?;
        }
        Commands::NewsAdd { json } => {
            let news = mw.news_add(NewMarketNews::from_json(&json)?)?;
            print_json(&news)?;
        }
        Commands::News { category, limit } => {
            let cat: Option<NewsCategory> = category
                .map(|c| c.parse())
                .transpose()
                .map_err(|e: String| e)?;
            print_json(&mw.news(cat, Some(limit))?)?;
        }
    }
    Ok(())
}
