use super::*;
use crate::net::types::Profile;

// =============================================================
// guard_redirect
// =============================================================

#[test]
fn anonymous_dashboard_visit_redirects_to_sign_in() {
    assert_eq!(guard_redirect("/dashboard", false), Some("/sign-in"));
    assert_eq!(guard_redirect("/dashboard/all-users", false), Some("/sign-in"));
    assert_eq!(guard_redirect("/dashboard/trips/create", false), Some("/sign-in"));
}

#[test]
fn signed_in_dashboard_visit_is_allowed() {
    assert_eq!(guard_redirect("/dashboard", true), None);
    assert_eq!(guard_redirect("/dashboard/trips", true), None);
}

#[test]
fn signed_in_sign_in_visit_redirects_to_dashboard() {
    assert_eq!(guard_redirect("/sign-in", true), Some("/dashboard"));
    assert_eq!(guard_redirect("/sign-in", false), None);
}

#[test]
fn callback_is_never_redirected() {
    assert_eq!(guard_redirect("/auth-callback", false), None);
    assert_eq!(guard_redirect("/auth-callback", true), None);
}

#[test]
fn guard_ignores_query_and_trailing_slash() {
    assert_eq!(guard_redirect("/dashboard/?page=2", false), Some("/sign-in"));
    assert_eq!(guard_redirect("/sign-in?error=x", true), Some("/dashboard"));
}

#[test]
fn guard_does_not_match_lookalike_prefix() {
    assert_eq!(guard_redirect("/dashboards", false), None);
    assert_eq!(guard_redirect("/", false), None);
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(Profile { name: "Ada".to_owned(), ..Profile::default() }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

// =============================================================
// auth_after_failure
// =============================================================

#[test]
fn lost_session_clears_profile_and_triggers_redirect() {
    let next = auth_after_failure(crate::net::api::SESSION_LOST).unwrap();
    assert!(next.user.is_none());
    assert!(!next.loading);
    assert!(should_redirect_unauth(&next));
}

#[test]
fn other_failures_leave_auth_untouched() {
    assert!(auth_after_failure("table API error 500: boom").is_none());
    assert!(auth_after_failure("").is_none());
}

// =============================================================
// parse_callback_fragment
// =============================================================

#[test]
fn parses_implicit_flow_fragment() {
    let fragment = "#access_token=eyJ.a.b&expires_at=1760000000&expires_in=3600\
                    &provider_token=ya29.x&refresh_token=r-123&token_type=bearer&type=signup";
    let tokens = parse_callback_fragment(fragment).unwrap().unwrap();
    assert_eq!(tokens.access_token, "eyJ.a.b");
    assert_eq!(tokens.refresh_token, "r-123");
    assert_eq!(tokens.expires_in, Some(3600));
    assert_eq!(tokens.expires_at, Some(1_760_000_000));
    assert_eq!(tokens.provider_token.as_deref(), Some("ya29.x"));
}

#[test]
fn empty_fragment_has_no_tokens() {
    assert_eq!(parse_callback_fragment(""), Ok(None));
    assert_eq!(parse_callback_fragment("#"), Ok(None));
    assert_eq!(parse_callback_fragment("#type=recovery"), Ok(None));
}

#[test]
fn provider_error_is_decoded() {
    let fragment = "#error=access_denied&error_code=403&error_description=User+denied%20access";
    assert_eq!(parse_callback_fragment(fragment), Err("User denied access".to_owned()));
}

#[test]
fn incomplete_token_pair_is_an_error() {
    assert_eq!(
        parse_callback_fragment("#access_token=abc"),
        Err("missing refresh token".to_owned())
    );
    assert_eq!(
        parse_callback_fragment("#refresh_token=abc"),
        Err("missing access token".to_owned())
    );
}

#[test]
fn blank_provider_token_is_dropped() {
    let tokens = parse_callback_fragment("access_token=a&refresh_token=b&provider_token=")
        .unwrap()
        .unwrap();
    assert!(tokens.provider_token.is_none());
}
