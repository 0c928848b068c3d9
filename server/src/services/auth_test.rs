use super::*;
use crate::state::test_helpers::{MockBackend, auth_user, now_unix, seed_session, session_tokens, test_app_state};
use crate::supabase::types::RefreshedSession;

// =============================================================================
// providers
// =============================================================================

#[test]
fn provider_parsing() {
    assert_eq!("google".parse::<OAuthProvider>().unwrap(), OAuthProvider::Google);
    assert_eq!(" GitHub ".parse::<OAuthProvider>().unwrap(), OAuthProvider::Github);
    assert!(matches!("myspace".parse::<OAuthProvider>(), Err(ServiceError::UnknownProvider(p)) if p == "myspace"));
}

#[test]
fn sign_in_url_targets_callback_with_offline_consent() {
    let (state, _) = test_app_state(MockBackend::new());
    let url = sign_in_url(&state, "google").unwrap();
    assert!(url.starts_with("https://project.supabase.test/auth/v1/authorize?provider=google"));
    assert!(url.contains("redirect_to=http%3A%2F%2Flocalhost%3A3000%2Fauth-callback"));
    assert!(url.ends_with("&access_type=offline&prompt=consent"));
}

#[test]
fn current_user_uses_email_local_part_without_metadata() {
    let user = current_user(&auth_user("u-1", "ada@example.com"));
    assert_eq!(user.name.as_deref(), Some("ada"));
    assert_eq!(user.avatar_url, None);
}

// =============================================================================
// establish_session
// =============================================================================

#[tokio::test]
async fn establish_session_stores_tokens() {
    let (state, _) = test_app_state(MockBackend::new().with_user("good", auth_user("u-1", "ada@example.com")));

    let (token, user) = establish_session(&state, &session_tokens("good"), now_unix())
        .await
        .unwrap();
    assert_eq!(user.id, "u-1");
    let stored = state.sessions.get(&token).await.unwrap();
    assert_eq!(stored.access_token, "good");
    assert_eq!(stored.refresh_token, "good-refresh");
}

#[tokio::test]
async fn establish_session_rejects_bad_tokens() {
    let (state, _) = test_app_state(MockBackend::new());

    let err = establish_session(&state, &session_tokens("forged"), now_unix())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));

    let blank = SessionTokens { access_token: "a".to_owned(), ..SessionTokens::default() };
    let err = establish_session(&state, &blank, now_unix()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(state.sessions.session_count().await, 0);
}

// =============================================================================
// resolve_session
// =============================================================================

#[tokio::test]
async fn resolve_session_passes_fresh_tokens_through() {
    let (state, _) = test_app_state(MockBackend::new());
    let token = seed_session(&state, "u-1", "fresh").await;

    let active = resolve_session(&state, &token, now_unix()).await.unwrap().unwrap();
    assert_eq!(active.access_token(), "fresh");
    assert!(resolve_session(&state, "unknown", now_unix()).await.unwrap().is_none());
}

#[tokio::test]
async fn resolve_session_refreshes_expiring_tokens() {
    let backend = MockBackend::new();
    backend.refreshes.lock().unwrap().insert(
        "old-refresh".to_owned(),
        RefreshedSession {
            access_token: "new".to_owned(),
            refresh_token: "new-refresh".to_owned(),
            expires_in: Some(3600),
            expires_at: None,
        },
    );
    let (state, _) = test_app_state(backend);
    let token = seed_session(&state, "u-1", "old").await;

    let later = now_unix() + 3600;
    let active = resolve_session(&state, &token, later).await.unwrap().unwrap();
    assert_eq!(active.access_token(), "new");
    assert_eq!(active.session.refresh_token, "new-refresh");
    assert_eq!(active.session.expires_at, Some(later + 3600));
}

#[tokio::test]
async fn rejected_refresh_drops_session() {
    let (state, _) = test_app_state(MockBackend::new());
    let token = seed_session(&state, "u-1", "old").await;

    let resolved = resolve_session(&state, &token, now_unix() + 7200).await.unwrap();
    assert!(resolved.is_none());
    assert!(state.sessions.get(&token).await.is_none());
}

// =============================================================================
// get_current_user / logout_user
// =============================================================================

#[tokio::test]
async fn revoked_access_token_ends_session() {
    let (state, _) = test_app_state(MockBackend::new());
    let token = seed_session(&state, "u-1", "revoked").await;
    let active = resolve_session(&state, &token, now_unix()).await.unwrap().unwrap();

    assert!(get_current_user(&state, &active).await.unwrap().is_none());
    assert!(state.sessions.get(&token).await.is_none());
}

#[tokio::test]
async fn logout_revokes_upstream_and_forgets_session() {
    let (state, backend) = test_app_state(MockBackend::new());
    let token = seed_session(&state, "u-1", "live").await;

    assert!(logout_user(&state, Some(&token)).await);
    assert_eq!(*backend.signed_out.lock().unwrap(), vec!["live".to_owned()]);
    assert!(state.sessions.get(&token).await.is_none());

    assert!(!logout_user(&state, Some(&token)).await);
    assert!(!logout_user(&state, None).await);
}
