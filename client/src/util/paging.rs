//! Offset paging arithmetic for the users and trips lists.

#[cfg(test)]
#[path = "paging_test.rs"]
mod paging_test;

/// Number of pages needed for `total` rows; at least one.
#[must_use]
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(page_size)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Row offset of the zero-based `page`.
#[must_use]
pub fn page_offset(page: u32, page_size: u32) -> u32 {
    page.saturating_mul(page_size)
}

/// `"Page 2 of 5"`, one-based for display.
#[must_use]
pub fn page_label(page: u32, total: u64, page_size: u32) -> String {
    format!("Page {} of {}", page.saturating_add(1), page_count(total, page_size))
}

#[must_use]
pub fn has_next_page(page: u32, total: u64, page_size: u32) -> bool {
    page.saturating_add(1) < page_count(total, page_size)
}
