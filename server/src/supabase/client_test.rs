use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::config::Timeouts;

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let client = SupabaseClient::with_http(reqwest::Client::new(), "https://abc.supabase.co//", "k");
    assert_eq!(client.base_url(), "https://abc.supabase.co");
    assert_eq!(client.endpoint("/rest/v1/trips"), "https://abc.supabase.co/rest/v1/trips");
}

#[test]
fn new_builds_from_config() {
    let config = SupabaseConfig {
        url: "https://abc.supabase.co".to_owned(),
        anon_key: "anon".to_owned(),
        users_table: "profiles".to_owned(),
        trips_table: "trips".to_owned(),
        timeouts: Timeouts { request_secs: 5, connect_secs: 1 },
    };
    let client = SupabaseClient::new(&config).unwrap();
    assert_eq!(client.base_url(), "https://abc.supabase.co");
}

#[tokio::test]
async fn anonymous_calls_use_anon_key_as_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("apikey", "anon"))
        .and(header("Authorization", "Bearer anon"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = SupabaseClient::with_http(reqwest::Client::new(), &server.uri(), "anon");
    let resp = client
        .authorized(client.http().get(client.endpoint("/ping")), None)
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
}
