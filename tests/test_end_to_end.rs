//! Full flow through a file-backed store: ingest prices, set alerts, reopen,
//! evaluate.

mod common;

use common::{add_crop, new_alert, FARMER};
use mandiwatch::config::Config;
use mandiwatch::domain::values::alert_type::AlertType;
use mandiwatch::domain::values::sentiment::SentimentStatus;
use mandiwatch::domain::values::trend::Trend;
use mandiwatch::MandiWatch;

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        db_path: dir.path().join("mandiwatch.db").to_str().unwrap().to_string(),
        user_email: Some(FARMER.to_string()),
        ..Default::default()
    };

    {
        let mw = MandiWatch::new(&config).unwrap();
        add_crop(&mw, "Wheat", 2275.0, Some(2125.0), Some(Trend::Rising));
        add_crop(&mw, "Paddy", 2320.0, Some(2183.0), Some(Trend::Rising));
        add_crop(&mw, "Cotton", 6620.0, Some(7020.0), Some(Trend::Falling));
        mw.alert_add(new_alert("Cotton", 6800.0, AlertType::Below)).unwrap();
        mw.alert_add(new_alert("Wheat", 2500.0, AlertType::Above)).unwrap();
    }

    let mw = MandiWatch::new(&config).unwrap();
    assert_eq!(mw.crops(None, None).unwrap().len(), 3);
    assert_eq!(mw.sentiment().unwrap().status, SentimentStatus::Bullish);

    let board = mw.alerts().unwrap();
    assert_eq!(board.total_alerts, 2);
    assert_eq!(board.triggered_count, 1);

    let report = mw.alerts_notify().await.unwrap();
    assert_eq!(report.sent, 1);
}
