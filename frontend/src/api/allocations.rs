use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    envelope::unwrap_collection,
    types::{ApiError, AssetAllocation},
};
use crate::state::session::Session;

fn allocations_path(user_id: &str) -> String {
    format!(
        "/AssetAllocations/user/{}",
        utf8_percent_encode(user_id, NON_ALPHANUMERIC)
    )
}

impl ApiClient {
    /// Assets currently allocated to the session's user.
    pub async fn list_user_allocations(
        &self,
        session: &Session,
    ) -> Result<Vec<AssetAllocation>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::authorized(
            self.http_client()
                .get(format!("{}{}", base_url, allocations_path(&session.user_id))),
            session,
        );
        let response = self.send(request).await?;
        let payload = self
            .map_json_response(response, "Error fetching asset allocations")
            .await?;
        unwrap_collection(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocations_path_escapes_user_id() {
        assert_eq!(allocations_path("42"), "/AssetAllocations/user/42");
        assert_eq!(allocations_path("a/b c"), "/AssetAllocations/user/a%2Fb%20c");
    }
}
