use time::macros::datetime;

use super::*;
use crate::services::auth::resolve_session;
use crate::state::test_helpers::{MockBackend, auth_user, now_unix, profile, seed_session, test_app_state};

const NOW: OffsetDateTime = datetime!(2025-03-15 12:00:00 UTC);

async fn active(state: &AppState, user_id: &str, access_token: &str) -> ActiveSession {
    let token = seed_session(state, user_id, access_token).await;
    resolve_session(state, &token, now_unix()).await.unwrap().unwrap()
}

#[tokio::test]
async fn no_session_goes_to_sign_in() {
    let (state, _) = test_app_state(MockBackend::new());
    assert_eq!(run_bootstrap(&state, None, NOW).await, redirect("/sign-in"));
}

#[tokio::test]
async fn revoked_session_goes_to_sign_in() {
    let (state, _) = test_app_state(MockBackend::new());
    let active = active(&state, "u-1", "revoked").await;
    assert_eq!(run_bootstrap(&state, Some(&active), NOW).await, redirect("/sign-in"));
}

#[tokio::test]
async fn user_role_goes_to_landing() {
    let backend = MockBackend::new()
        .with_user("tok", auth_user("u-1", "u1@example.com"))
        .with_profile(profile("u-1", ProfileStatus::User));
    let (state, _) = test_app_state(backend);
    let active = active(&state, "u-1", "tok").await;
    assert_eq!(run_bootstrap(&state, Some(&active), NOW).await, redirect("/"));
}

#[tokio::test]
async fn admin_profile_is_ready() {
    let admin = profile("u-1", ProfileStatus::Admin);
    let backend = MockBackend::new()
        .with_user("tok", auth_user("u-1", "u1@example.com"))
        .with_profile(admin.clone());
    let (state, _) = test_app_state(backend);
    let active = active(&state, "u-1", "tok").await;
    assert_eq!(run_bootstrap(&state, Some(&active), NOW).await, BootstrapOutcome::Ready { profile: admin });
}

#[tokio::test]
async fn missing_profile_is_created_as_admin() {
    let backend = MockBackend::new().with_user("tok", auth_user("u-7", "new.admin@example.com"));
    let (state, mock) = test_app_state(backend);
    let active = active(&state, "u-7", "tok").await;

    let BootstrapOutcome::Ready { profile } = run_bootstrap(&state, Some(&active), NOW).await else {
        panic!("expected ready");
    };
    assert_eq!(profile.id, "u-7");
    assert_eq!(profile.name, "new.admin");
    assert_eq!(profile.status, ProfileStatus::Admin);
    assert_eq!(mock.profiles.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn failed_creation_reports_message() {
    let backend = MockBackend::new().with_user("tok", auth_user("u-7", "x@example.com"));
    backend.fail_inserts_with("23503");
    let (state, _) = test_app_state(backend);
    let active = active(&state, "u-7", "tok").await;

    assert_eq!(
        run_bootstrap(&state, Some(&active), NOW).await,
        BootstrapOutcome::Failed { message: PROFILE_CREATION_FAILED.to_owned() }
    );
}
