use crate::components::{common::Button, error::InlineErrorMessage, modal::FormModal};
use crate::pages::service_requests::{labels::IssueType, view_model::ServiceRequestsViewModel};
use leptos::*;

const FIELD_CLASS: &str =
    "p-3 border-2 bg-white border-slate-200 rounded w-full text-gray-900 focus:outline-none";
const LABEL_CLASS: &str = "block text-sm font-semibold text-slate-500 mb-1";

#[component]
pub fn ServiceRequestForm(vm: ServiceRequestsViewModel) -> impl IntoView {
    let draft = vm.form.draft();
    let allocations = vm.allocations();
    let is_open = Signal::derive(move || vm.submission.phase.get().is_open());
    let submitting = Signal::derive(move || vm.submission.phase.get().is_submitting());

    view! {
        <FormModal
            is_open=is_open
            title="Service Request"
            on_close=Callback::new(move |_| vm.close_form())
        >
            <form
                class="flex flex-col space-y-4 mt-2"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <div>
                    <label class=LABEL_CLASS>"User ID"</label>
                    <input type="text" class=FIELD_CLASS readonly prop:value=move || draft.get().user_id />
                </div>
                <div>
                    <label class=LABEL_CLASS>"Asset Name"</label>
                    <select
                        class=FIELD_CLASS
                        prop:value=move || draft.get().asset_name
                        on:change=move |ev| vm.select_asset(&event_target_value(&ev))
                    >
                        <option value="" disabled selected=move || draft.get().asset_name.is_empty()>
                            "Select an Asset"
                        </option>
                        {move || {
                            allocations
                                .get()
                                .items
                                .into_iter()
                                .map(|allocation| {
                                    let name = allocation.asset_name;
                                    view! { <option value=name.clone()>{name}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div>
                    <label class=LABEL_CLASS>"Issue Type"</label>
                    <select
                        class=FIELD_CLASS
                        on:change=move |ev| vm.form.set_issue_type(&event_target_value(&ev))
                    >
                        <option value="" disabled selected=move || draft.get().issue_type.is_none()>
                            "Select Issue Type"
                        </option>
                        {IssueType::SELECTABLE
                            .into_iter()
                            .filter_map(|issue| issue.code().map(|code| (issue, code)))
                            .map(|(issue, code)| {
                                view! {
                                    <option
                                        value=code.to_string()
                                        selected=move || draft.get().issue_type == Some(issue)
                                    >
                                        {issue.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label class=LABEL_CLASS>"Service Description"</label>
                    <textarea
                        class=FIELD_CLASS
                        rows="4"
                        placeholder="Describe the issue"
                        prop:value=move || draft.get().description
                        on:input=move |ev| vm.form.set_description(event_target_value(&ev))
                    ></textarea>
                </div>
                <InlineErrorMessage error=vm.submission.form_error.into() />
                <Button button_type="submit" loading=submitting>
                    "Submit Request"
                </Button>
            </form>
        </FormModal>
    }
}
