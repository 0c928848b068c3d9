//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin layout fills this from the bootstrap loader; navigation and the
//! dashboard greeting read it from context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Profile;

/// Authentication state tracking the signed-in profile and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<Profile>,
    pub loading: bool,
}

impl AuthState {
    /// Name for greetings; `"Guest"` until a profile is loaded.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|p| p.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or("Guest")
            .to_owned()
    }
}
