//! Pure helpers shared by pages, components, and the server.

pub mod auth;
pub mod format;
pub mod paging;
pub mod trip_form;
