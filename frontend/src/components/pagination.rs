use leptos::*;

/// Previous / next pager. `page` is 1-based and kept within `1..=total_pages`.
#[component]
pub fn Pagination(page: RwSignal<usize>, total_pages: Signal<usize>) -> impl IntoView {
    let at_first = move || page.get() <= 1;
    let at_last = move || page.get() >= total_pages.get();
    view! {
        <div class="flex items-center justify-between px-4 py-3">
            <button
                type="button"
                class="px-3 py-1 rounded border border-gray-300 text-sm disabled:opacity-50"
                disabled=at_first
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="text-sm text-gray-600">
                "Page " {move || page.get()} " of " {move || total_pages.get()}
            </span>
            <button
                type="button"
                class="px-3 py-1 rounded border border-gray-300 text-sm disabled:opacity-50"
                disabled=at_last
                on:click=move |_| {
                    let last = total_pages.get_untracked();
                    page.update(|p| *p = (*p + 1).min(last));
                }
            >
                "Next"
            </button>
        </div>
    }
}
