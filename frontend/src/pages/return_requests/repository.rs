use crate::api::{
    ApiClient, ApiError, AssetAllocation, CreateReturnRequest, ReturnRequestRecord,
};
use crate::state::session::Session;
use std::rc::Rc;

#[derive(Clone)]
pub struct ReturnRequestsRepository {
    client: Rc<ApiClient>,
}

impl ReturnRequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_requests(
        &self,
        session: &Session,
    ) -> Result<Vec<ReturnRequestRecord>, ApiError> {
        self.client
            .list_return_requests(session)
            .await
            .inspect_err(|err| log::warn!("Error fetching return requests: {}", err))
    }

    pub async fn list_allocations(
        &self,
        session: &Session,
    ) -> Result<Vec<AssetAllocation>, ApiError> {
        self.client
            .list_user_allocations(session)
            .await
            .inspect_err(|err| log::warn!("Error fetching asset allocations: {}", err))
    }

    pub async fn submit(
        &self,
        session: &Session,
        payload: CreateReturnRequest,
    ) -> Result<(), ApiError> {
        self.client.create_return_request(session, &payload).await
    }
}
