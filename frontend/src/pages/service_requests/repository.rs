use crate::api::{
    ApiClient, ApiError, AssetAllocation, CreateServiceRequest, ServiceRequestRecord,
};
use crate::state::session::Session;
use std::rc::Rc;

#[derive(Clone)]
pub struct ServiceRequestsRepository {
    client: Rc<ApiClient>,
}

impl ServiceRequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_requests(
        &self,
        session: &Session,
    ) -> Result<Vec<ServiceRequestRecord>, ApiError> {
        self.client
            .list_service_requests(session)
            .await
            .inspect_err(|err| log::warn!("Error fetching service requests: {}", err))
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
        payload: CreateServiceRequest,
    ) -> Result<(), ApiError> {
        self.client.create_service_request(session, &payload).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::session::{decode_session, test_tokens::token_for};
    use serde_json::json;

    #[tokio::test]
    async fn empty_requests_and_populated_allocations() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/ServiceRequests");
            then.status(200).json_body(json!({ "$id": "1", "$values": [] }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/AssetAllocations/user/42");
            then.status(200).json_body(json!({ "$values": [
                { "assetId": 7, "assetName": "Laptop-1" },
                { "assetId": 8, "assetName": "Monitor" }
            ]}));
        });

        let repo =
            ServiceRequestsRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        let session = decode_session(&token_for("42")).unwrap();
        let (requests, allocations) =
            futures::join!(repo.list_requests(&session), repo.list_allocations(&session));
        assert!(requests.unwrap().is_empty());
        assert_eq!(allocations.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn non_array_envelope_is_an_empty_list() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/ServiceRequests");
            then.status(200).json_body(json!({ "$values": "nope" }));
        });

        let repo =
            ServiceRequestsRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        let session = decode_session(&token_for("42")).unwrap();
        assert!(repo.list_requests(&session).await.unwrap().is_empty());
    }
}
