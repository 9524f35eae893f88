use leptos::ev::KeyboardEvent;
use leptos::*;

/// Overlay dialog hosting a request form. Backdrop, header button and Escape
/// all route through `on_close`; the caller decides whether closing is allowed.
#[component]
pub fn FormModal(
    is_open: Signal<bool>,
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = store_value(title);
    let children = store_value(children);
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-40 flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-50 w-full max-w-lg rounded-lg bg-white shadow-xl p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-gray-900">{title.get_value()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-gray-500 hover:text-gray-800"
                            on:click=move |_| on_close.call(())
                        >
                            <i class="fas fa-xmark" aria-hidden="true"></i>
                        </button>
                    </div>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
