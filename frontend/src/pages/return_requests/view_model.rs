use crate::api::{ApiClient, ApiError, AssetAllocation, CreateReturnRequest, ReturnRequestRecord};
use crate::pages::return_requests::{repository::ReturnRequestsRepository, utils::ReturnFormState};
use crate::state::{
    collection::{collection_signal, fetched_len, loading_until_both, CollectionView},
    session::Session,
    submission::SubmitSignals,
};
use crate::utils::pagination::{keep_page_in_range, paginate, total_pages, PAGE_SIZE};
use leptos::*;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Return request sent successfully!";

#[derive(Clone, Copy)]
pub struct ReturnRequestsViewModel {
    pub session: StoredValue<Session>,
    pub form: ReturnFormState,
    pub submission: SubmitSignals,
    pub page: RwSignal<usize>,
    pub requests_resource: Resource<u32, Result<Vec<ReturnRequestRecord>, ApiError>>,
    pub allocations_resource: Resource<(), Result<Vec<AssetAllocation>, ApiError>>,
    pub submit_action: Action<CreateReturnRequest, Result<(), ApiError>>,
}

impl ReturnRequestsViewModel {
    pub fn new(session: Session) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(ReturnRequestsRepository::new(api));
        let form = ReturnFormState::new(&session.user_id);
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

        let submit_action = create_action(move |payload: &CreateReturnRequest| {
            let repo = repository.get_value();
            let session = session.get_value();
            let payload = payload.clone();
            async move { repo.submit(&session, payload).await }
        });

        create_effect(move |_| {
            submission.settle(
                submit_action.value().get(),
                "return request",
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

    pub fn requests(&self) -> Signal<CollectionView<ReturnRequestRecord>> {
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

    pub fn visible_requests(&self) -> Signal<Vec<ReturnRequestRecord>> {
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
            "return request",
            SUBMIT_SUCCESS_MESSAGE,
            || form.reset(),
        );
    }
}
