mod common;

use alphastream::core::{AssetClass, PriceType, Range};
use alphastream::requests::{
    GetAlphaById, GetAlphaErrors, GetAlphaInsights, GetAlphaList, GetAlphaPrices, SearchAlphas,
};
use alphastream::{collect_pages, Executor};
use common::{client_for, TEST_ALPHA_ID, TEST_AUTHOR_ID};
use httpmock::prelude::*;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_gets_alpha_by_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/alpha/{}", TEST_ALPHA_ID))
            .header_exists("authorization")
            .header_exists("timestamp");
        then.status(200).json_body(serde_json::json!({
            "id": TEST_ALPHA_ID,
            "name": "Crypto Momentum",
            "assetClasses": ["crypto"],
            "sharpeRatio": 1.42,
            "listed": 1_546_300_800,
            "author": { "id": TEST_AUTHOR_ID, "language": "C#" }
        }));
    });

    let client = client_for(&server);
    let alpha = client.execute(&GetAlphaById::new(TEST_ALPHA_ID)).await.unwrap();

    mock.assert();
    assert_eq!(alpha.id, TEST_ALPHA_ID);
    assert_eq!(alpha.asset_classes, vec![AssetClass::Crypto]);
    assert_eq!(alpha.author.unwrap().id, TEST_AUTHOR_ID);
    assert!(alpha.listed.is_some());
}

#[tokio::test]
async fn test_get_alpha_insights() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/alpha/{}/insights", TEST_ALPHA_ID))
            .query_param("start", "0");
        then.status(200).json_body(serde_json::json!([
            {
                "id": "c4f4a6e1",
                "type": "price",
                "direction": "up",
                "ticker": "BTCUSD",
                "period": 86400.0,
                "confidence": 0.7,
                "generatedTime": 1_546_300_800
            },
            { "id": "c4f4a6e2", "type": "volatility", "direction": "flat" }
        ]));
    });

    let client = client_for(&server);
    let insights = client
        .execute(&GetAlphaInsights::new(TEST_ALPHA_ID))
        .await
        .unwrap();

    mock.assert();
    assert!(!insights.is_empty());
    assert_eq!(insights[0].ticker.as_deref(), Some("BTCUSD"));
    assert_eq!(insights[0].period, Some(86400.0));
}

#[tokio::test]
async fn test_collects_all_insight_pages() {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/alpha/{}/insights", TEST_ALPHA_ID))
            .query_param("start", "0");
        then.status(200).json_body(serde_json::json!([
            { "id": "i1", "type": "price", "direction": "up" },
            { "id": "i2", "type": "price", "direction": "down" }
        ]));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/alpha/{}/insights", TEST_ALPHA_ID))
            .query_param("start", "2");
        then.status(200).json_body(serde_json::json!([
            { "id": "i3", "type": "price", "direction": "flat" }
        ]));
    });
    let last = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/alpha/{}/insights", TEST_ALPHA_ID))
            .query_param("start", "3");
        then.status(200).json_body(serde_json::json!([]));
    });

    let client = client_for(&server);
    let insights = collect_pages(&client, GetAlphaInsights::new(TEST_ALPHA_ID))
        .await
        .unwrap();

    first.assert();
    second.assert();
    last.assert();
    let ids: Vec<_> = insights.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["i1", "i2", "i3"]);
}

#[tokio::test]
async fn test_get_alpha_prices() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/alpha/{}/prices", TEST_ALPHA_ID));
        then.status(200).json_body(serde_json::json!([
            { "priceType": "ask", "sharedPrice": 39, "exclusivePrice": null, "time": 1_546_300_800 },
            { "priceType": "bid", "sharedPrice": 25.5, "goodUntil": 1_546_387_200 }
        ]));
    });

    let client = client_for(&server);
    let prices = client
        .execute(&GetAlphaPrices::new(TEST_ALPHA_ID))
        .await
        .unwrap();

    mock.assert();
    assert!(!prices.is_empty());
    let first = prices.first().unwrap();
    assert_eq!(first.price_type, PriceType::Ask);
    assert_eq!(first.shared_price, Some(dec!(39)));
    assert_eq!(first.exclusive_price, None);
}

#[tokio::test]
async fn test_get_alpha_errors() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/alpha/{}/errors", TEST_AUTHOR_ID));
        then.status(200).json_body(serde_json::json!([
            {
                "time": 1_546_300_800,
                "error": "Test Error: division by zero in OnData",
                "stackTrace": "Test stack trace: at Algorithm.OnData(Slice)"
            }
        ]));
    });

    let client = client_for(&server);
    let errors = client
        .execute(&GetAlphaErrors::new(TEST_AUTHOR_ID))
        .await
        .unwrap();

    mock.assert();
    assert!(!errors.is_empty());
    let first = errors.first().unwrap();
    assert_eq!(&first.error[..10], "Test Error");
    assert_eq!(&first.stack_trace[..10], "Test stack");
}

#[tokio::test]
async fn test_get_alpha_list() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/alpha/list");
        then.status(200)
            .json_body(serde_json::json!([TEST_ALPHA_ID, "118d1cbc375709792ea4d823a"]));
    });

    let client = client_for(&server);
    let ids = client.execute(&GetAlphaList).await.unwrap();

    mock.assert();
    assert!(!ids.is_empty());
    assert!(ids.contains(&TEST_ALPHA_ID.to_string()));
}

#[tokio::test]
async fn test_search_alphas() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/alpha/search")
            .query_param("author", TEST_AUTHOR_ID)
            .query_param("asset-classes", "crypto")
            .query_param("symbols", "BTCUSD XJ")
            .query_param("accuracy-minimum", "0.0")
            .query_param("accuracy-maximum", "1.0")
            .query_param("sharpe-minimum", "0.0")
            .query_param("shared-fee-minimum", "0")
            .query_param("shared-fee-maximum", "999999999")
            .query_param("exclusive-fee-maximum", "999999999")
            .query_param("uniqueness-maximum", "100.0");
        then.status(200).json_body(serde_json::json!([
            { "id": TEST_ALPHA_ID, "assetClasses": ["crypto"] }
        ]));
    });

    let request = SearchAlphas {
        author: Some(TEST_AUTHOR_ID.to_string()),
        asset_classes: vec![AssetClass::Crypto],
        accuracy: Some(Range::new(0.0, 1.0)),
        shared_fee: Some(Range::new(dec!(0), dec!(999999999))),
        exclusive_fee: Some(Range::new(dec!(0), dec!(999999999))),
        sharpe: Some(Range::create(Some(0.0), None)),
        symbols: vec!["BTCUSD XJ".to_string()],
        uniqueness: Some(Range::new(0.0, 100.0)),
        ..Default::default()
    };

    let client = client_for(&server);
    let alphas = client.execute(&request).await.unwrap();

    mock.assert();
    assert!(!alphas.is_empty());
    assert_eq!(alphas[0].id, TEST_ALPHA_ID);
}
