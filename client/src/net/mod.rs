//! Networking modules for the browser/server boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's JSON routes for page loaders, and `types` defines
//! the shared wire schema that the server also uses for backend rows.

pub mod api;
pub mod types;
