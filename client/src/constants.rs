//! Static navigation entries and page sizes.

pub const APP_NAME: &str = "Tourvisto";
pub const LOGO_URL: &str = "/assets/icons/logo.svg";

/// Picture shown in the sidebar footer before the profile has loaded.
pub const NAV_FALLBACK_AVATAR: &str = crate::net::types::DEFAULT_AVATAR_URL;

pub const USERS_PAGE_SIZE: u32 = 10;
pub const TRIPS_PAGE_SIZE: u32 = 8;

/// One sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: u8,
    pub href: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

pub const SIDEBAR_ITEMS: &[NavItem] = &[
    NavItem { id: 1, href: "/dashboard", icon: "/assets/icons/home.svg", label: "Dashboard" },
    NavItem { id: 2, href: "/dashboard/all-users", icon: "/assets/icons/users.svg", label: "All Users" },
    NavItem { id: 3, href: "/dashboard/trips", icon: "/assets/icons/itinerary.svg", label: "AI Trips" },
];
