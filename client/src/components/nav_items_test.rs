use super::*;

#[test]
fn dashboard_root_matches_exactly() {
    assert!(is_nav_active("/dashboard", "/dashboard"));
    assert!(is_nav_active("/dashboard/", "/dashboard"));
    assert!(!is_nav_active("/dashboard/all-users", "/dashboard"));
}

#[test]
fn section_links_match_sub_pages() {
    assert!(is_nav_active("/dashboard/trips", "/dashboard/trips"));
    assert!(is_nav_active("/dashboard/trips/create", "/dashboard/trips"));
    assert!(!is_nav_active("/dashboard/tripsy", "/dashboard/trips"));
}

#[test]
fn every_sidebar_item_is_active_on_its_own_page() {
    for item in SIDEBAR_ITEMS {
        let active: Vec<_> = SIDEBAR_ITEMS
            .iter()
            .filter(|other| is_nav_active(item.href, other.href))
            .map(|other| other.id)
            .collect();
        assert_eq!(active, vec![item.id], "{}", item.href);
    }
}
