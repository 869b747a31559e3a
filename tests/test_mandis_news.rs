mod common;

use common::setup;
use mandiwatch::domain::entities::mandi::NewMandi;
use mandiwatch::domain::entities::market_news::NewMarketNews;
use mandiwatch::domain::values::news_category::NewsCategory;

fn add_mandi(mw: &mandiwatch::MandiWatch, name: &str, location: &str, district: &str) {
    let json = format!(r#"{{"name": "{name}", "location": "{location}", "district": "{district}"}}"#);
    mw.mandi_add(NewMandi::from_json(&json).unwrap()).unwrap();
}

#[test]
fn test_mandis_sorted_and_searchable() {
    let mw = setup();
    add_mandi(&mw, "Khanna Grain Market", "Khanna", "Ludhiana");
    add_mandi(&mw, "Abohar Mandi", "Abohar", "Fazilka");
    add_mandi(&mw, "Rajpura Mandi", "Rajpura", "Patiala");

    let all: Vec<String> = mw.mandis(None).unwrap().into_iter().map(|m| m.name).collect();
    assert_eq!(all, vec!["Abohar Mandi", "Khanna Grain Market", "Rajpura Mandi"]);

    let hits = mw.mandis(Some("LUDHI")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].location, "Khanna");

    assert_eq!(mw.mandis(Some("mandi")).unwrap().len(), 2);
    assert_eq!(mw.mandis(Some("   ")).unwrap().len(), 3);
}

#[test]
fn test_mandi_requires_district() {
    assert!(NewMandi::from_json(r#"{"name": "X", "location": "Y"}"#).is_err());
}

#[test]
fn test_news_by_category() {
    let mw = setup();
    let items = [
        r#"{"title": "MSP for wheat raised", "content": "Rs 2425 per quintal", "category": "government_policy", "impact": "positive", "relevant_crops": ["Wheat"]}"#,
        r#"{"title": "Heavy rain expected", "content": "Harvest may be delayed", "category": "weather", "impact": "negative"}"#,
        r#"{"title": "Paddy procurement begins", "content": "Mandis open from 1 October", "category": "government_policy"}"#,
    ];
    for json in items {
        mw.news_add(NewMarketNews::from_json(json).unwrap()).unwrap();
    }

    let all = mw.news(None, None).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].title, "Paddy procurement begins");

    let policy = mw.news(Some(NewsCategory::GovernmentPolicy), None).unwrap();
    assert_eq!(policy.len(), 2);
    assert!(policy.iter().all(|n| n.category == NewsCategory::GovernmentPolicy));

    assert_eq!(mw.news(None, Some(1)).unwrap().len(), 1);
}

#[test]
fn test_news_rejects_unknown_category() {
    assert!(NewMarketNews::from_json(r#"{"title": "t", "content": "c", "category": "gossip"}"#).is_err());
    assert!("gossip".parse::<NewsCategory>().is_err());
}
