use crate::components::{
    common::Button,
    layout::{ErrorMessage, PageShell, Section, SuccessToast},
};
use crate::pages::service_requests::{
    components::{cards::ServiceRequestCards, form::ServiceRequestForm},
    view_model::ServiceRequestsViewModel,
};
use crate::state::session::{read_session, Session};
use leptos::*;

#[component]
pub fn ServiceRequestsPage() -> impl IntoView {
    let content = match read_session() {
        Ok(session) => view! { <ServiceRequestsContent session=session /> }.into_view(),
        Err(err) => {
            log::error!("Cannot load service requests: {}", err);
            view! { <ErrorMessage message=err.to_string() /> }.into_view()
        }
    };
    view! {
        <PageShell section=Section::ServiceRequests>
            {content}
        </PageShell>
    }
}

#[component]
fn ServiceRequestsContent(session: Session) -> impl IntoView {
    let vm = ServiceRequestsViewModel::new(session);
    view! { <ServiceRequestsView vm=vm /> }
}

#[component]
pub fn ServiceRequestsView(vm: ServiceRequestsViewModel) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center">
            <h1 class="text-3xl font-bold text-gray-900">"Service Requests"</h1>
            <Button on_click=Callback::new(move |_| vm.open_form())>
                "+ New Service Request"
            </Button>
        </div>
        <ServiceRequestCards vm=vm />
        <SuccessToast message=vm.submission.toast.into() />
        <ServiceRequestForm vm=vm />
    }
}
