use crate::components::{
    common::Button,
    layout::{ErrorMessage, PageShell, Section, SuccessToast},
};
use crate::pages::return_requests::{
    components::{form::ReturnRequestForm, table::ReturnRequestsTable},
    view_model::ReturnRequestsViewModel,
};
use crate::state::session::{read_session, Session};
use leptos::*;

#[component]
pub fn ReturnRequestsPage() -> impl IntoView {
    let content = match read_session() {
        Ok(session) => view! { <ReturnRequestsContent session=session /> }.into_view(),
        Err(err) => {
            log::error!("Cannot load return requests: {}", err);
            view! { <ErrorMessage message=err.to_string() /> }.into_view()
        }
    };
    view! {
        <PageShell section=Section::ReturnRequests>
            {content}
        </PageShell>
    }
}

#[component]
fn ReturnRequestsContent(session: Session) -> impl IntoView {
    let vm = ReturnRequestsViewModel::new(session);
    view! { <ReturnRequestsView vm=vm /> }
}

#[component]
pub fn ReturnRequestsView(vm: ReturnRequestsViewModel) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center">
            <h1 class="text-3xl font-bold text-gray-900">"Return Requests"</h1>
            <Button on_click=Callback::new(move |_| vm.open_form())>
                "+ New Return Request"
            </Button>
        </div>
        <ReturnRequestsTable vm=vm />
        <SuccessToast message=vm.submission.toast.into() />
        <ReturnRequestForm vm=vm />
    }
}
