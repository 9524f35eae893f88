use super::{
    client::ApiClient,
    envelope::unwrap_collection,
    types::{ApiError, CreateReturnRequest, ReturnRequestRecord},
};
use crate::state::session::Session;

impl ApiClient {
    pub async fn list_return_requests(
        &self,
        session: &Session,
    ) -> Result<Vec<ReturnRequestRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::authorized(
            self.http_client()
                .get(format!("{}/ReturnRequests", base_url)),
            session,
        );
        let response = self.send(request).await?;
        let payload = self
            .map_json_response(response, "Error fetching return requests")
            .await?;
        unwrap_collection(payload)
    }

    pub async fn create_return_request(
        &self,
        session: &Session,
        payload: &CreateReturnRequest,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::authorized(
            self.http_client()
                .post(format!("{}/ReturnRequests", base_url))
                .json(payload),
            session,
        );
        let response = self.send(request).await?;
        self.map_json_response(response, "Error submitting return request")
            .await
            .map(|_| ())
    }
}
