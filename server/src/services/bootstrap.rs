//! Admin layout loader: session check, profile lookup, profile creation,
//! role-based redirect.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod tests;

use time::OffsetDateTime;
use tourvisto_ui::net::types::{BootstrapOutcome, ProfileStatus};
use tourvisto_ui::util::auth::SIGN_IN_PATH;

use super::auth::{ActiveSession, get_current_user};
use super::profiles::{get_existing_user, store_user_data};
use crate::state::AppState;

/// Where signed-in users without admin access land.
pub const NON_ADMIN_LANDING: &str = "/";

pub const PROFILE_CREATION_FAILED: &str = "Could not create a profile for this account";

fn redirect(to: &str) -> BootstrapOutcome {
    BootstrapOutcome::Redirect { to: to.to_owned() }
}

/// Decide what the admin layout renders for this request.
pub async fn run_bootstrap(state: &AppState, active: Option<&ActiveSession>, now: OffsetDateTime) -> BootstrapOutcome {
    let Some(active) = active else {
        return redirect(SIGN_IN_PATH);
    };

    let user = match get_current_user(state, active).await {
        Ok(Some(user)) => user,
        Ok(None) => return redirect(SIGN_IN_PATH),
        Err(e) => {
            tracing::error!(error = %e, "session check failed during bootstrap");
            return redirect(SIGN_IN_PATH);
        }
    };

    let backend = state.backend.as_ref();
    let access_token = active.access_token();

    if let Some(profile) = get_existing_user(backend, access_token, &user.id).await {
        if profile.status == ProfileStatus::User {
            tracing::debug!(user_id = %user.id, "non-admin profile redirected");
            return redirect(NON_ADMIN_LANDING);
        }
        return BootstrapOutcome::Ready { profile };
    }

    let provider_token = active.session.provider_token.as_deref();
    match store_user_data(backend, access_token, &user, provider_token, now).await {
        Some(profile) => BootstrapOutcome::Ready { profile },
        None => BootstrapOutcome::Failed { message: PROFILE_CREATION_FAILED.to_owned() },
    }
}
