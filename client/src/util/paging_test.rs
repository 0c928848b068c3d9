use super::*;

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(17, 8), 3);
}

#[test]
fn zero_page_size_is_one_page() {
    assert_eq!(page_count(50, 0), 1);
}

#[test]
fn offsets_and_labels() {
    assert_eq!(page_offset(0, 10), 0);
    assert_eq!(page_offset(3, 8), 24);
    assert_eq!(page_label(1, 25, 10), "Page 2 of 3");
}

#[test]
fn next_page_stops_at_last_page() {
    assert!(has_next_page(0, 11, 10));
    assert!(!has_next_page(1, 11, 10));
    assert!(!has_next_page(0, 0, 10));
}
