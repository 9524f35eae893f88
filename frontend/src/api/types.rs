use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier as issued by the backend. Older endpoints emit numeric keys,
/// newer ones strings; both round-trip in their original shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(value) => write!(f, "{}", value),
            RecordId::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub asset_id: RecordId,
    #[serde(default)]
    pub asset_name: String,
    #[serde(default)]
    pub category_id: Option<RecordId>,
    #[serde(default)]
    pub user_id: Option<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequestRecord {
    pub return_id: RecordId,
    #[serde(default)]
    pub asset_id: Option<RecordId>,
    #[serde(default)]
    pub user_id: Option<RecordId>,
    #[serde(default)]
    pub return_date: Option<String>,
    /// Either a condition code or its label, depending on who wrote the row.
    #[serde(default)]
    pub condition: Option<Value>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub return_status: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestRecord {
    pub service_id: RecordId,
    #[serde(default)]
    pub asset_id: Option<RecordId>,
    #[serde(default)]
    pub asset_name: Option<String>,
    #[serde(default)]
    pub user_id: Option<RecordId>,
    #[serde(default)]
    pub service_request_date: Option<String>,
    #[serde(default, rename = "issue_Type")]
    pub issue_type: Option<Value>,
    #[serde(default)]
    pub service_description: Option<String>,
    #[serde(default)]
    pub service_req_status: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReturnRequest {
    pub asset_id: RecordId,
    pub user_id: String,
    pub asset_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<RecordId>,
    pub return_date: chrono::NaiveDate,
    pub condition: String,
    pub reason: String,
    pub return_status: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub service_id: i64,
    pub user_id: String,
    pub asset_name: String,
    pub asset_id: RecordId,
    pub service_request_date: chrono::NaiveDate,
    #[serde(rename = "issue_Type")]
    pub issue_type: i64,
    pub service_description: String,
    pub service_req_status: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub user_mail: String,
    pub gender: String,
    pub phone_number: String,
    pub password: String,
    #[serde(rename = "user_Type")]
    pub user_type: String,
    pub branch: String,
    pub dept: String,
    pub designation: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    /// Builds an error from a non-success response body. The backend reports
    /// failures under `message`; `fallback` covers every other body.
    pub fn from_response_body(status: u16, body: Option<Value>, fallback: &str) -> Self {
        let message = body
            .as_ref()
            .and_then(|value| value.get("message"))
            .and_then(|v| v.as_str())
            .filter(|msg| !msg.trim().is_empty())
            .map(str::to_string);
        Self {
            error: message.unwrap_or_else(|| fallback.to_string()),
            code: format!("HTTP_{}", status),
            details: body,
        }
    }
}
