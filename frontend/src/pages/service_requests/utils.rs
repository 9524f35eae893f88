use crate::api::{ApiError, AssetAllocation, CreateServiceRequest, RecordId};
use crate::utils::assets::resolve_asset;
use chrono::NaiveDate;
use leptos::*;

use super::labels::IssueType;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRequestDraft {
    pub user_id: String,
    pub asset_name: String,
    pub asset_id: Option<RecordId>,
    pub request_date: NaiveDate,
    pub issue_type: Option<IssueType>,
    pub description: String,
}

impl ServiceRequestDraft {
    pub fn new(user_id: impl Into<String>, request_date: NaiveDate) -> Self {
        Self {
            user_id: user_id.into(),
            asset_name: String::new(),
            asset_id: None,
            request_date,
            issue_type: None,
            description: String::new(),
        }
    }

    pub fn select_asset(&mut self, name: &str, allocations: &[AssetAllocation]) {
        self.asset_name = name.trim().to_string();
        self.asset_id = resolve_asset(name, allocations).map(|allocation| allocation.asset_id.clone());
    }

    /// Accepts the numeric option value posted by the issue select.
    pub fn set_issue_type(&mut self, raw: &str) {
        let issue = IssueType::from_code(raw.trim().parse::<i64>().ok());
        self.issue_type = issue.code().map(|_| issue);
    }

    pub fn validate(&self) -> Result<CreateServiceRequest, ApiError> {
        let asset_id = self
            .asset_id
            .clone()
            .ok_or_else(|| ApiError::validation("Please select an asset."))?;
        let issue_type = self
            .issue_type
            .and_then(IssueType::code)
            .ok_or_else(|| ApiError::validation("Please select the issue type."))?;
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ApiError::validation("Please describe the issue."));
        }
        Ok(CreateServiceRequest {
            service_id: 0,
            user_id: self.user_id.clone(),
            asset_name: self.asset_name.clone(),
            asset_id,
            service_request_date: self.request_date,
            issue_type,
            service_description: description.to_string(),
            service_req_status: 0,
        })
    }
}

#[derive(Clone, Copy)]
pub struct ServiceFormState {
    draft: RwSignal<ServiceRequestDraft>,
}

impl ServiceFormState {
    pub fn new(user_id: &str) -> Self {
        Self {
            draft: create_rw_signal(ServiceRequestDraft::new(
                user_id,
                crate::utils::time::today(),
            )),
        }
    }

    pub fn draft(&self) -> Signal<ServiceRequestDraft> {
        self.draft.into()
    }

    pub fn select_asset(&self, name: &str, allocations: &[AssetAllocation]) {
        self.draft.update(|draft| draft.select_asset(name, allocations));
    }

    pub fn set_issue_type(&self, raw: &str) {
        self.draft.update(|draft| draft.set_issue_type(raw));
    }

    pub fn set_description(&self, description: String) {
        self.draft.update(|draft| draft.description = description);
    }

    pub fn reset(&self) {
        self.draft.update(|draft| {
            *draft = ServiceRequestDraft::new(draft.user_id.clone(), crate::utils::time::today());
        });
    }

    pub fn to_payload(&self) -> Result<CreateServiceRequest, ApiError> {
        self.draft.with_untracked(ServiceRequestDraft::validate)
    }
}
