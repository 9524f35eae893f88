use crate::api::{ApiError, AssetAllocation, CreateReturnRequest, RecordId};
use crate::utils::assets::resolve_asset;
use chrono::NaiveDate;
use leptos::*;

use super::labels::AssetCondition;

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnRequestDraft {
    pub user_id: String,
    pub asset_name: String,
    pub asset_id: Option<RecordId>,
    pub category_id: Option<RecordId>,
    pub return_date: NaiveDate,
    pub condition: Option<AssetCondition>,
    pub reason: String,
}

impl ReturnRequestDraft {
    pub fn new(user_id: impl Into<String>, return_date: NaiveDate) -> Self {
        Self {
            user_id: user_id.into(),
            asset_name: String::new(),
            asset_id: None,
            category_id: None,
            return_date,
            condition: None,
            reason: String::new(),
        }
    }

    /// Keeps the typed name and copies ids from the matching allocation, or
    /// clears them when nothing matches.
    pub fn select_asset(&mut self, name: &str, allocations: &[AssetAllocation]) {
        self.asset_name = name.trim().to_string();
        match resolve_asset(name, allocations) {
            Some(allocation) => {
                self.asset_id = Some(allocation.asset_id.clone());
                self.category_id = allocation.category_id.clone();
            }
            None => {
                self.asset_id = None;
                self.category_id = None;
            }
        }
    }

    pub fn set_condition(&mut self, label: &str) {
        self.condition = match AssetCondition::from_label(label) {
            AssetCondition::Unknown => None,
            condition => Some(condition),
        };
    }

    pub fn validate(&self) -> Result<CreateReturnRequest, ApiError> {
        let asset_id = self
            .asset_id
            .clone()
            .ok_or_else(|| ApiError::validation("Please select an asset."))?;
        let condition = self
            .condition
            .ok_or_else(|| ApiError::validation("Please select the asset condition."))?;
        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(ApiError::validation("Please describe the reason for the return."));
        }
        Ok(CreateReturnRequest {
            asset_id,
            user_id: self.user_id.clone(),
            asset_name: self.asset_name.clone(),
            category_id: self.category_id.clone(),
            return_date: self.return_date,
            condition: condition.label().to_string(),
            reason: reason.to_string(),
            return_status: 0,
        })
    }
}

#[derive(Clone, Copy)]
pub struct ReturnFormState {
    draft: RwSignal<ReturnRequestDraft>,
}

impl ReturnFormState {
    pub fn new(user_id: &str) -> Self {
        Self {
            draft: create_rw_signal(ReturnRequestDraft::new(
                user_id,
                crate::utils::time::today(),
            )),
        }
    }

    pub fn draft(&self) -> Signal<ReturnRequestDraft> {
        self.draft.into()
    }

    pub fn select_asset(&self, name: &str, allocations: &[AssetAllocation]) {
        self.draft.update(|draft| draft.select_asset(name, allocations));
    }

    pub fn set_condition(&self, label: &str) {
        self.draft.update(|draft| draft.set_condition(label));
    }

    pub fn set_reason(&self, reason: String) {
        self.draft.update(|draft| draft.reason = reason);
    }

    pub fn reset(&self) {
        self.draft.update(|draft| {
            *draft = ReturnRequestDraft::new(draft.user_id.clone(), crate::utils::time::today());
        });
    }

    pub fn to_payload(&self) -> Result<CreateReturnRequest, ApiError> {
        self.draft.with_untracked(ReturnRequestDraft::validate)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    fn allocations() -> Vec<AssetAllocation> {
        vec![
            AssetAllocation {
                asset_id: RecordId::Number(7),
                asset_name: "Laptop-1".into(),
                category_id: Some(RecordId::Number(3)),
                user_id: Some(RecordId::from("42")),
            },
            AssetAllocation {
                asset_id: RecordId::from("a-9"),
                asset_name: "Monitor".into(),
                category_id: None,
                user_id: Some(RecordId::from("42")),
            },
        ]
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
    }

    #[test]
    fn select_asset_copies_ids_or_clears_them() {
        let mut draft = ReturnRequestDraft::new("42", date());
        draft.select_asset(" laptop-1 ", &allocations());
        assert_eq!(draft.asset_name, "laptop-1");
        assert_eq!(draft.asset_id, Some(RecordId::Number(7)));
        assert_eq!(draft.category_id, Some(RecordId::Number(3)));

        draft.select_asset("Keyboard", &allocations());
        assert_eq!(draft.asset_name, "Keyboard");
        assert!(draft.asset_id.is_none());
        assert!(draft.category_id.is_none());
    }

    #[test]
    fn validate_requires_asset_condition_and_reason() {
        let mut draft = ReturnRequestDraft::new("42", date());
        assert_eq!(draft.validate().unwrap_err().code, "VALIDATION_ERROR");

        draft.select_asset("Laptop-1", &allocations());
        assert!(draft.validate().is_err());

        draft.set_condition("Damaged");
        draft.reason = "   ".into();
        assert!(draft.validate().is_err());

        draft.reason = " Cracked screen ".into();
        let payload = draft.validate().unwrap();
        assert_eq!(payload.condition, "Damaged");
        assert_eq!(payload.reason, "Cracked screen");
        assert_eq!(payload.return_status, 0);
        assert_eq!(payload.user_id, "42");
        assert_eq!(payload.return_date, date());
    }

    #[test]
    fn unknown_condition_label_is_unset() {
        let mut draft = ReturnRequestDraft::new("42", date());
        draft.set_condition("Broken");
        assert_eq!(draft.condition, Some(AssetCondition::Broken));
        draft.set_condition("");
        assert!(draft.condition.is_none());
    }

    #[test]
    fn form_state_reset_keeps_user() {
        with_runtime(|| {
            let state = ReturnFormState::new("42");
            state.select_asset("Monitor", &allocations());
            state.set_condition("Working");
            state.set_reason("Upgrade".into());
            assert!(state.to_payload().is_ok());

            state.reset();
            let draft = state.draft().get();
            assert_eq!(draft.user_id, "42");
            assert!(draft.asset_name.is_empty());
            assert!(draft.condition.is_none());
            assert!(state.to_payload().is_err());
        });
    }
}
