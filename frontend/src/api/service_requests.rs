use super::{
    client::ApiClient,
    envelope::unwrap_collection,
    types::{ApiError, CreateServiceRequest, ServiceRequestRecord},
};
use crate::state::session::Session;

impl ApiClient {
    pub async fn list_service_requests(
        &self,
        session: &Session,
    ) -> Result<Vec<ServiceRequestRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::authorized(
            self.http_client()
                .get(format!("{}/ServiceRequests", base_url)),
            session,
        );
        let response = self.send(request).await?;
        let payload = self
            .map_json_response(response, "Error fetching data")
            .await?;
        unwrap_collection(payload)
    }

    pub async fn create_service_request(
        &self,
        session: &Session,
        payload: &CreateServiceRequest,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::authorized(
            self.http_client()
                .post(format!("{}/ServiceRequests", base_url))
                .json(payload),
            session,
        );
        let response = self.send(request).await?;
        self.map_json_response(response, "Error submitting service request")
            .await
            .map(|_| ())
    }
}
