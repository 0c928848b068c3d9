//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` carries the signed-in profile through the admin layout; `loader`
//! models the lifecycle every data page goes through after hydration.

pub mod auth;
pub mod loader;
