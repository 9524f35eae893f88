use crate::api::{ApiClient, ApiError, AssetAllocation, CreateServiceRequest, ServiceRequestRecord};
use crate::pages::service_requests::{repository::ServiceRequestsRepository, utils::ServiceFormState};
use crate::state::{
    collection::{collection_signal, fetched_len, loading_until_both, CollectionView},
    session::Session,
    submission::SubmitSignals,
};
use crate::utils::pagination::{keep_page_in_range, paginate, total_pages, PAGE_SIZE};
use leptos::*;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Service request sent successfully!";

#[derive(Clone, Copy)]
pub struct ServiceRequestsViewModel {
    pub session: StoredValue<Session>,
    pub form: ServiceFormState,
    pub submission: SubmitSignals,
    pub page: RwSignal<usize>,
    pub requests_resource: Resource<u32, Result<Vec<ServiceRequestRecord>, ApiError>>,
    pub allocations_resource: Resource<(), Result<Vec<AssetAllocation>, ApiError>>,
    pub submit_action: Action<CreateServiceRequest, Result<(), ApiError>>,
}

impl ServiceRequestsViewModel {
    pub fn new(session: Session) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(ServiceRequestsRepository::new(api));
        let form = ServiceFormState::new(&session.user_id);
        let session = store_value(session);
        let submission = SubmitSignals::new();
        let page = create_rw_signal(1usize);
        let reload = submission.reload;

        let requests_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                let session = session.get_value();
                async move { repo.list_requests(&session).await }
            },
        );
        let allocations_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                let session = session.get_value();
                async move { repo.list_allocations(&session).await }
            },
        );

        let submit_action = create_action(move |payload: &CreateServiceRequest| {
            let repo = repository.get_value();
            let session = session.get_value();
            let payload = payload.clone();
            async move { repo.submit(&session, payload).await }
        });

        create_effect(move |_| {
            submission.settle(
                submit_action.value().get(),
                "service request",
                SUBMIT_SUCCESS_MESSAGE,
                || form.reset(),
            );
        });

        create_effect(move |_| {
            keep_page_in_range(page, fetched_len(requests_resource));
        });

        Self {
            session,
            form,
            submission,
            page,
            requests_resource,
            allocations_resource,
            submit_action,
        }
    }

    pub fn requests(&self) -> Signal<CollectionView<ServiceRequestRecord>> {
        collection_signal(self.requests_resource)
    }

    pub fn allocations(&self) -> Signal<CollectionView<AssetAllocation>> {
        collection_signal(self.allocations_resource)
    }

    pub fn loading(&self) -> Signal<bool> {
        loading_until_both(self.requests_resource, self.allocations_resource)
    }

    pub fn total_pages(&self) -> Signal<usize> {
        let resource = self.requests_resource;
        Signal::derive(move || total_pages(fetched_len(resource), PAGE_SIZE))
    }

    pub fn visible_requests(&self) -> Signal<Vec<ServiceRequestRecord>> {
        let requests = self.requests();
        let page = self.page;
        Signal::derive(move || {
            requests.with(|view| paginate(&view.items, page.get(), PAGE_SIZE).to_vec())
        })
    }

    pub fn open_form(&self) {
        self.submission.open();
    }

    pub fn close_form(&self) {
        self.submission.close();
    }

    pub fn select_asset(&self, name: &str) {
        let allocations = self.allocations().get_untracked();
        self.form.select_asset(name, &allocations.items);
    }

    pub fn submit(&self) {
        self.submission
            .dispatch(self.form.to_payload(), self.submit_action);
    }

    pub fn apply_submit_result(&self, result: Option<Result<(), ApiError>>) {
        let form = self.form;
        self.submission.settle(
            result,
            "service request",
            SUBMIT_SUCCESS_MESSAGE,
            || form.reset(),
        );
    }
}

/// `create_effect` does not run under SSR, so these tests call
/// `keep_page_in_range` and `apply_submit_result` directly instead of going
/// through the effects wired in `new`.
#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::submission::FormPhase;
    use crate::api::test_support::mock::*;
    use crate::api::RecordId;
    use crate::state::session::{decode_session, test_tokens::token_for};
    use crate::test_support::ssr::{wait_until, with_local_runtime_async, with_runtime};
    use serde_json::json;

    fn session() -> Session {
        decode_session(&token_for("42")).unwrap()
    }

    fn record(id: i64) -> ServiceRequestRecord {
        ServiceRequestRecord {
            service_id: RecordId::Number(id),
            asset_id: Some(RecordId::Number(7)),
            asset_name: Some("Laptop-1".into()),
            user_id: None,
            service_request_date: Some("2024-10-02".into()),
            issue_type: Some(json!(1)),
            service_description: Some("Screen flicker".into()),
            service_req_status: Some(json!(0)),
        }
    }

    fn allocations() -> Vec<AssetAllocation> {
        vec![AssetAllocation {
            asset_id: RecordId::Number(7),
            asset_name: "Laptop-1".into(),
            category_id: None,
            user_id: None,
        }]
    }

    #[test]
    fn shrinking_list_pulls_page_back() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = ServiceRequestsViewModel::new(session());
            vm.requests_resource.set(Ok((1..=12).map(record).collect()));
            vm.allocations_resource.set(Ok(allocations()));
            vm.page.set(2);
            assert_eq!(vm.visible_requests().get().len(), 2);

            vm.requests_resource.set(Ok((1..=4).map(record).collect()));
            assert!(vm.visible_requests().get().is_empty());
            keep_page_in_range(vm.page, 4);
            assert_eq!(vm.page.get(), 1);
            assert_eq!(vm.visible_requests().get().len(), 4);
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn missing_issue_type_blocks_submission() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let server = MockServer::start();
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = ServiceRequestsViewModel::new(session());
            vm.allocations_resource.set(Ok(allocations()));

            vm.open_form();
            vm.select_asset("Laptop-1");
            vm.form.set_description("Screen flicker".into());
            vm.submit();

            assert_eq!(vm.submission.phase.get(), FormPhase::Editing);
            assert!(vm.submission.form_error.get().is_some());
            assert!(server.received().is_empty());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn submit_posts_issue_code() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            leptos_reactive::suppress_resource_load(true);
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(POST).path("/api/ServiceRequests");
                then.status(200).json_body(json!({ "serviceId": 13 }));
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = ServiceRequestsViewModel::new(session());
            vm.allocations_resource.set(Ok(allocations()));
            // actions do not spawn while resource loading is suppressed
            leptos_reactive::suppress_resource_load(false);

            vm.open_form();
            vm.select_asset("Laptop-1");
            vm.form.set_issue_type("2");
            vm.form.set_description("Hinge loose".into());
            vm.submit();

            assert!(
                wait_until(|| vm.submit_action.value().get().is_some()).await,
                "submit action should complete"
            );
            assert!(matches!(vm.submit_action.value().get(), Some(Ok(()))));
            let body = server.received()[0].body.clone().unwrap();
            assert_eq!(body["issue_Type"], json!(2));
            assert_eq!(body["serviceId"], json!(0));
            assert_eq!(body["serviceReqStatus"], json!(0));
            assert_eq!(body["userId"], json!("42"));
            runtime.dispose();
        });
    }

    #[test]
    fn failed_submission_keeps_draft_and_shows_error() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = ServiceRequestsViewModel::new(session());
            vm.allocations_resource.set(Ok(allocations()));
            vm.open_form();
            vm.select_asset("Laptop-1");
            vm.form.set_issue_type("1");
            vm.form.set_description("Screen flicker".into());
            vm.submission.phase.set(FormPhase::Submitting);

            vm.apply_submit_result(Some(Err(ApiError::from_response_body(
                500,
                None,
                "Error submitting service request",
            ))));
            assert_eq!(vm.submission.phase.get(), FormPhase::Editing);
            assert!(vm.form.to_payload().is_ok());
            assert_eq!(
                vm.submission.form_error.get().map(|e| e.error),
                Some("Error submitting service request".into())
            );
            assert!(vm.submission.toast.get().is_none());

            vm.submission.phase.set(FormPhase::Submitting);
            vm.apply_submit_result(Some(Ok(())));
            assert!(!vm.submission.phase.get().is_open());
            assert_eq!(vm.submission.toast.get().as_deref(), Some(SUBMIT_SUCCESS_MESSAGE));
            assert_eq!(vm.submission.reload.get(), 1);
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
