use leptos::*;

/// Which request page the shell is wrapping. The sidebar links to the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ReturnRequests,
    ServiceRequests,
}

impl Section {
    fn sibling(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Section::ReturnRequests => ("/ServiceRequest", "Services", "fas fa-screwdriver-wrench"),
            Section::ServiceRequests => ("/ReturnRequest", "Return Request", "fas fa-rotate-left"),
        }
    }
}

const NAV_LINK_CLASS: &str =
    "flex items-center gap-3 px-4 py-2 rounded-md text-sm font-medium text-slate-200 hover:bg-slate-700 hover:text-white";

#[component]
pub fn Sidebar(section: Section) -> impl IntoView {
    let (sibling_href, sibling_label, sibling_icon) = section.sibling();
    view! {
        <aside class="w-64 shrink-0 min-h-screen bg-slate-800 text-white">
            <div class="px-6 py-5 border-b border-slate-700">
                <h2 class="text-lg font-semibold">"Asset Management"</h2>
            </div>
            <nav class="px-2 py-4 space-y-1">
                <a href="/dashboard" class=NAV_LINK_CLASS>
                    <i class="fas fa-gauge" aria-hidden="true"></i>
                    "Dashboard"
                </a>
                <a href=sibling_href class=NAV_LINK_CLASS>
                    <i class=sibling_icon aria-hidden="true"></i>
                    {sibling_label}
                </a>
                <a href="/Asset" class=NAV_LINK_CLASS>
                    <i class="fas fa-laptop" aria-hidden="true"></i>
                    "Assets"
                </a>
            </nav>
        </aside>
    }
}

#[component]
pub fn PageShell(section: Section, children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen bg-gray-50">
            <Sidebar section=section />
            <main class="flex-1 px-6 py-8 space-y-6">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4" role="alert">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

/// Floating confirmation shown after a successful submission.
#[component]
pub fn SuccessToast(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="fixed top-4 right-4 z-50 bg-green-600 text-white px-4 py-3 rounded shadow-lg" role="status">
                <i class="fas fa-check-circle mr-2" aria-hidden="true"></i>
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Shows `message` in `toast` and clears it again after `SUCCESS_TOAST_MS`.
pub fn flash_toast(toast: RwSignal<Option<String>>, message: impl Into<String>) {
    let message = message.into();
    toast.set(Some(message.clone()));
    #[cfg(target_arch = "wasm32")]
    gloo_timers::callback::Timeout::new(crate::state::submission::SUCCESS_TOAST_MS, move || {
        // a newer toast owns the slot now
        let _ = toast.try_update(|current| {
            if current.as_deref() == Some(message.as_str()) {
                *current = None;
            }
        });
    })
    .forget();
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
