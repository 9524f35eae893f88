use leptos::*;

pub const PAGE_SIZE: usize = 10;

/// Returns the 1-based `page` of `items`. Pages outside the list (including
/// page 0) come back empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 || len == 0 {
        1
    } else {
        len.div_ceil(page_size)
    }
}

/// Pulls `page` back into range after the list has shrunk.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(len, page_size))
}

/// Writes back the clamped page only when it moved.
pub fn keep_page_in_range(page: RwSignal<usize>, len: usize) {
    let current = page.get_untracked();
    let clamped = clamp_page(current, len, PAGE_SIZE);
    if clamped != current {
        page.set(clamped);
    }
}
