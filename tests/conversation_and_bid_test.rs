mod common;

use alphastream::core::PriceType;
use alphastream::requests::{CreateBidPrice, CreateConversation, GetAlphaPrices};
use alphastream::Executor;
use chrono::{Duration, Utc};
use common::{client_for, TEST_ALPHA_ID};
use httpmock::prelude::*;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_create_conversation() {
    let conversation_alpha = "118d1cbc375709792ea4d823a";

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/alpha/{}/conversations/create", conversation_alpha))
            .json_body(serde_json::json!({
                "from": "support@quantconnect.com",
                "subject": "Alpha Conversation",
                "message": "Hello World!",
                "cc": "support@quantconnect.com"
            }));
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "messages": []
        }));
    });

    let request = CreateConversation {
        id: conversation_alpha.to_string(),
        from: "support@quantconnect.com".to_string(),
        message: "Hello World!".to_string(),
        subject: "Alpha Conversation".to_string(),
        cc: Some("support@quantconnect.com".to_string()),
    };

    let client = client_for(&server);
    let response = client.execute(&request).await.unwrap();

    mock.assert();
    assert!(response.success);
}

#[tokio::test]
async fn test_create_bid_then_read_prices() {
    let good_until = Utc::now() + Duration::days(1);

    let server = MockServer::start();
    let bid_mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/alpha/{}/prices/bids/create", TEST_ALPHA_ID))
            .json_body(serde_json::json!({
                "shared": 7,
                "good-until": good_until.timestamp()
            }));
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "messages": ["Bid placed"]
        }));
    });
    let prices_mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/alpha/{}/prices", TEST_ALPHA_ID));
        then.status(200).json_body(serde_json::json!([
            { "priceType": "ask", "sharedPrice": 39 },
            {
                "priceType": "bid",
                "sharedPrice": 6.99,
                "goodUntil": good_until.timestamp()
            }
        ]));
    });

    let client = client_for(&server);
    let created = client
        .execute(&CreateBidPrice::shared(TEST_ALPHA_ID, dec!(7), good_until))
        .await
        .unwrap();
    assert!(created.success);

    let prices = client
        .execute(&GetAlphaPrices::new(TEST_ALPHA_ID))
        .await
        .unwrap();

    bid_mock.assert();
    prices_mock.assert();
    assert!(!prices.is_empty());
    let last = prices.last().unwrap();
    assert_eq!(last.price_type, PriceType::Bid);
    assert_eq!(last.shared_price, Some(dec!(6.99)));
    assert!(last.is_valid_at(Utc::now()));
}
