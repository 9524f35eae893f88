use crate::api::ReturnRequestRecord;
use crate::components::{
    empty_state::EmptyState, layout::LoadingSpinner, pagination::Pagination,
    status_badge::StatusBadge,
};
use crate::pages::return_requests::{
    labels::{AssetCondition, ReturnStatus},
    view_model::ReturnRequestsViewModel,
};
use crate::utils::time::format_display_date;
use leptos::*;

const HEADERS: [&str; 6] = [
    "Return Id",
    "Asset Id",
    "Return Date",
    "Reason",
    "Condition",
    "Request Status",
];

#[component]
fn ReturnRequestRow(record: ReturnRequestRecord) -> impl IntoView {
    let asset_id = record
        .asset_id
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".into());
    let condition = AssetCondition::from_value(record.condition.as_ref()).label();
    let status = ReturnStatus::from_value(record.return_status.as_ref()).status_label();
    view! {
        <tr class="border-b text-gray-900">
            <td class="px-4 py-2">{record.return_id.to_string()}</td>
            <td class="px-4 py-2">{asset_id}</td>
            <td class="px-4 py-2">{format_display_date(record.return_date.as_deref())}</td>
            <td class="px-4 py-2">{record.reason.clone().unwrap_or_default()}</td>
            <td class="px-4 py-2">{condition}</td>
            <td class="px-4 py-2"><StatusBadge label=status /></td>
        </tr>
    }
}

#[component]
pub fn ReturnRequestsTable(vm: ReturnRequestsViewModel) -> impl IntoView {
    let loading = vm.loading();
    let requests = vm.requests();
    let visible = vm.visible_requests();
    view! {
        <section class="bg-white p-6 shadow rounded-lg">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <LoadingSpinner />
                    <p class="text-center text-gray-600">"Loading return requests..."</p>
                }
            >
                <Show
                    when=move || !requests.with(|view| view.is_empty())
                    fallback=|| view! { <EmptyState message="No Return Requests Sent." /> }
                >
                    <div class="overflow-x-auto">
                        <table class="w-full text-left table-auto border-collapse">
                            <thead>
                                <tr class="text-sm font-medium text-gray-700 border-b">
                                    {HEADERS
                                        .iter()
                                        .map(|header| view! { <th class="px-4 py-2">{*header}</th> })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || visible.get()
                                    key=|record| record.return_id.clone()
                                    children=|record| view! { <ReturnRequestRow record=record /> }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
        </section>
        <Pagination page=vm.page total_pages=vm.total_pages() />
    }
}
