use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::ApiError;

/// Key under which the backend's reference-preserving serializer nests lists.
pub const ENVELOPE_KEY: &str = "$values";

/// Normalizes a collection payload: a bare array, or an object carrying the
/// array under [`ENVELOPE_KEY`]. Any other shape is an empty collection.
pub fn unwrap_collection<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>, ApiError> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(ENVELOPE_KEY) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{AssetAllocation, RecordId};
    use serde_json::json;

    fn allocations() -> Value {
        json!([
            { "assetId": 1, "assetName": "Laptop-1", "userId": "u1" },
            { "assetId": 2, "assetName": "Monitor", "userId": "u1" }
        ])
    }

    #[test]
    fn bare_and_wrapped_payloads_normalize_identically() {
        let bare: Vec<AssetAllocation> = unwrap_collection(allocations()).unwrap();
        let wrapped: Vec<AssetAllocation> =
            unwrap_collection(json!({ "$id": "1", "$values": allocations() })).unwrap();
        assert_eq!(bare.len(), 2);
        assert_eq!(bare, wrapped);
        assert_eq!(bare[0].asset_id, RecordId::Number(1));
        assert_eq!(bare[1].asset_name, "Monitor");
    }

    #[test]
    fn missing_or_non_array_envelope_is_empty() {
        let missing: Vec<AssetAllocation> = unwrap_collection(json!({ "$id": "1" })).unwrap();
        let scalar: Vec<AssetAllocation> =
            unwrap_collection(json!({ "$values": "oops" })).unwrap();
        let null: Vec<AssetAllocation> = unwrap_collection(Value::Null).unwrap();
        assert!(missing.is_empty());
        assert!(scalar.is_empty());
        assert!(null.is_empty());
    }

    #[test]
    fn malformed_elements_fail_the_collection() {
        let result: Result<Vec<AssetAllocation>, _> =
            unwrap_collection(json!({ "$values": [{ "assetName": "no id" }] }));
        let error = result.unwrap_err();
        assert_eq!(error.code, "UNKNOWN");
        assert!(error.error.contains("Failed to parse response"));
    }
}
