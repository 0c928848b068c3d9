use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn pictures(server: &MockServer) -> ProviderPictures {
    ProviderPictures::with_endpoints(
        reqwest::Client::new(),
        &format!("{}/people", server.uri()),
        &format!("{}/userinfo", server.uri()),
    )
}

#[tokio::test]
async fn empty_token_skips_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    assert_eq!(pictures(&server).lookup("  ").await, None);
}

#[tokio::test]
async fn people_photo_wins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people"))
        .and(header("Authorization", "Bearer ya29"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "photos": [{ "url": "https://lh3/people.jpg" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "picture": "https://lh3/info.jpg" })))
        .expect(0)
        .mount(&server)
        .await;

    assert_eq!(pictures(&server).lookup("ya29").await.as_deref(), Some("https://lh3/people.jpg"));
}

#[tokio::test]
async fn falls_back_to_userinfo_picture() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "picture": "https://lh3/info.jpg" })))
        .mount(&server)
        .await;

    assert_eq!(pictures(&server).lookup("ya29").await.as_deref(), Some("https://lh3/info.jpg"));
}

#[tokio::test]
async fn no_picture_anywhere_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "photos": [] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert_eq!(pictures(&server).lookup("ya29").await, None);
}
