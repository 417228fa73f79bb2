mod common;

use alphastream::core::Range;
use alphastream::requests::{GetAuthorById, SearchAuthors};
use alphastream::Executor;
use chrono::{TimeZone, Utc};
use common::{client_for, TEST_AUTHOR_ID};
use httpmock::prelude::*;

#[tokio::test]
async fn test_get_author_by_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/alpha/author/{}", TEST_AUTHOR_ID));
        then.status(200).json_body(serde_json::json!({
            "id": TEST_AUTHOR_ID,
            "biography": "QuantConnect team member",
            "language": "C#",
            "location": "Seattle",
            "signedUp": 1_420_070_400,
            "lastLogin": 1_546_300_800,
            "alphasListed": 3,
            "forumComments": 120,
            "forumDiscussions": 14,
            "projects": 87
        }));
    });

    let client = client_for(&server);
    let author = client
        .execute(&GetAuthorById::new(TEST_AUTHOR_ID))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(author.id, TEST_AUTHOR_ID);
    assert_eq!(author.language.as_deref(), Some("C#"));
    assert_eq!(author.projects, 87);
    assert_eq!(
        author.signed_up,
        Some(Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap())
    );
}

#[tokio::test]
async fn test_search_authors() {
    let today = Utc::now();
    let epoch = Utc.timestamp_opt(0, 0).unwrap();
    let max = i32::MAX as i64;

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/alpha/author/search")
            .query_param("biography", "QuantConnect")
            .query_param("languages", "C#")
            .query_param("signed-up-minimum", "0")
            .query_param("signed-up-maximum", today.timestamp().to_string())
            .query_param("alphas-listed-maximum", max.to_string())
            .query_param("projects-minimum", "0")
            .query_param("start", "0");
        then.status(200).json_body(serde_json::json!([
            { "id": TEST_AUTHOR_ID, "language": "C#", "biography": "QuantConnect" }
        ]));
    });

    let request = SearchAuthors {
        biography: Some("QuantConnect".to_string()),
        languages: vec!["C#".to_string()],
        signed_up: Some(Range::new(epoch, today)),
        alphas_listed: Some(Range::new(0, max)),
        forum_comments: Some(Range::new(0, max)),
        forum_discussions: Some(Range::new(0, max)),
        last_login: Some(Range::new(epoch, today)),
        projects: Some(Range::new(0, max)),
        ..Default::default()
    };

    let client = client_for(&server);
    let authors = client.execute(&request).await.unwrap();

    mock.assert();
    assert!(!authors.is_empty());
    assert_eq!(authors[0].id, TEST_AUTHOR_ID);
}
