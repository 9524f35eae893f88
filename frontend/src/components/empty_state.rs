use leptos::*;

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-gray-300 bg-white">
            <i class="fas fa-inbox text-3xl text-gray-400" aria-hidden="true"></i>
            <p class="mt-2 text-sm font-semibold text-gray-600">{message}</p>
        </div>
    }
}
