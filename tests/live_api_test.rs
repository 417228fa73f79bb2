use alphastream::requests::{GetAlphaById, GetAlphaList, GetAuthorById};
use alphastream::{AlphaStreamClient, ClientSettings, Credentials, Executor};

const TEST_ALPHA_ID: &str = "5443d94e213604f4fefbab185";
const TEST_AUTHOR_ID: &str = "1f48359f6c6cbad65b091232eaae73ce";

/// 需要真實帳號：設定 ALPHASTREAM_CLIENT_ID / ALPHASTREAM_API_TOKEN 後執行
/// `cargo test --test live_api_test -- --ignored`
fn live_client() -> AlphaStreamClient {
    let credentials = Credentials::from_env()
        .unwrap()
        .expect("ALPHASTREAM_CLIENT_ID and ALPHASTREAM_API_TOKEN must be set");
    let settings = ClientSettings::default().with_credentials(credentials);
    AlphaStreamClient::new(&settings).unwrap()
}

#[tokio::test]
#[ignore] // hits the hosted API
async fn test_live_alpha_by_id() {
    let client = live_client();
    let alpha = client.execute(&GetAlphaById::new(TEST_ALPHA_ID)).await.unwrap();
    assert_eq!(alpha.id, TEST_ALPHA_ID);
}

#[tokio::test]
#[ignore] // hits the hosted API
async fn test_live_author_by_id() {
    let client = live_client();
    let author = client
        .execute(&GetAuthorById::new(TEST_AUTHOR_ID))
        .await
        .unwrap();
    assert_eq!(author.id, TEST_AUTHOR_ID);
}

#[tokio::test]
#[ignore] // hits the hosted API
async fn test_live_alpha_list() {
    let client = live_client();
    let ids = client.execute(&GetAlphaList).await.unwrap();
    assert!(!ids.is_empty());
}
