//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its loader (a `Loadable` signal filled after hydration) and
//! delegates rendering details to `components`.

pub mod admin_layout;
pub mod all_users;
pub mod auth_callback;
pub mod create_trip;
pub mod dashboard;
pub mod home;
pub mod sign_in;
pub mod trips;
