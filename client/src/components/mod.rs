//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render admin chrome (navigation, headers, cards, the users
//! grid) and the skeletons shown while a page's loader is still running.

pub mod banner;
pub mod header;
pub mod mobile_sidebar;
pub mod nav_items;
pub mod pager;
pub mod skeletons;
pub mod stats_card;
pub mod trip_card;
pub mod users_grid;
