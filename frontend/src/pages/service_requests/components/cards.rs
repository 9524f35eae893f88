use crate::api::ServiceRequestRecord;
use crate::components::{
    empty_state::EmptyState, layout::LoadingSpinner, pagination::Pagination,
    status_badge::StatusBadge,
};
use crate::pages::service_requests::{
    labels::{IssueType, ServiceStatus},
    view_model::ServiceRequestsViewModel,
};
use crate::utils::time::format_display_date;
use leptos::*;

/// Asset name shown on a card; blank or missing names read "N/A".
pub fn card_title(record: &ServiceRequestRecord) -> String {
    record
        .asset_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("N/A")
        .to_string()
}

#[component]
fn ServiceRequestCard(record: ServiceRequestRecord) -> impl IntoView {
    let title = card_title(&record);
    let issue = IssueType::from_value(record.issue_type.as_ref()).label();
    let status = ServiceStatus::from_value(record.service_req_status.as_ref()).status_label();
    view! {
        <div class="p-6 bg-indigo-50 rounded-lg shadow-md border border-gray-200">
            <h2 class="text-xl font-bold mb-2">{title}</h2>
            <p class="text-gray-700 mb-1">
                <strong>"Service ID: "</strong>{record.service_id.to_string()}
            </p>
            <p class="text-gray-700 mb-1">
                <strong>"Request Date: "</strong>
                {format_display_date(record.service_request_date.as_deref())}
            </p>
            <p class="text-gray-700 mb-1">
                <strong>"Issue: "</strong>{issue}
            </p>
            <p class="text-gray-700 mb-1">
                <strong>"Status: "</strong><StatusBadge label=status />
            </p>
            <p class="text-gray-700">
                <strong>"Description: "</strong>
                {record.service_description.clone().unwrap_or_default()}
            </p>
        </div>
    }
}

#[component]
pub fn ServiceRequestCards(vm: ServiceRequestsViewModel) -> impl IntoView {
    let loading = vm.loading();
    let requests = vm.requests();
    let visible = vm.visible_requests();
    view! {
        <section class="bg-white p-6 shadow rounded-lg">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <LoadingSpinner />
                    <p class="text-center text-gray-600">"Loading service requests..."</p>
                }
            >
                <Show
                    when=move || !requests.with(|view| view.is_empty())
                    fallback=|| view! { <EmptyState message="No Service Requests Sent." /> }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || visible.get()
                            key=|record| record.service_id.clone()
                            children=|record| view! { <ServiceRequestCard record=record /> }
                        />
                    </div>
                </Show>
            </Show>
        </section>
        <Pagination page=vm.page total_pages=vm.total_pages() />
    }
}
