use super::{
    client::ApiClient,
    types::{ApiError, RegisterRequest},
};

pub const REGISTRATION_FALLBACK_MESSAGE: &str = "Registration failed";

impl ApiClient {
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let builder = self
            .http_client()
            .post(format!("{}/Auth/register", base_url))
            .json(request);
        let response = self
            .send(builder)
            .await
            .map_err(|_| ApiError::request_failed(REGISTRATION_FALLBACK_MESSAGE))?;
        self.map_json_response(response, REGISTRATION_FALLBACK_MESSAGE)
            .await
            .map(|_| ())
    }
}
