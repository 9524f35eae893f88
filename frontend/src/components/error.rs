use crate::api::ApiError;
use leptos::*;
use serde_json::Value;

/// Field messages from an ASP.NET validation problem body:
/// `{ "errors": { "Reason": ["The Reason field is required."] } }`.
fn field_messages(details: Option<&Value>) -> Vec<String> {
    details
        .and_then(|details| details.get("errors"))
        .and_then(Value::as_object)
        .map(|fields| {
            fields
                .values()
                .filter_map(Value::as_array)
                .flatten()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-semibold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let messages = error.with(|e| field_messages(e.as_ref().and_then(|e| e.details.as_ref())));
                    (!messages.is_empty()).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {messages.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                        </ul>
                    })
                }}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_messages_flatten_problem_details() {
        let details = json!({
            "title": "One or more validation errors occurred.",
            "errors": {
                "Reason": ["The Reason field is required."],
                "AssetId": ["The AssetId field is required."]
            }
        });
        let messages = field_messages(Some(&details));
        assert_eq!(messages.len(), 2);
        assert!(messages.contains(&"The Reason field is required.".to_string()));
    }

    #[test]
    fn field_messages_ignore_other_shapes() {
        assert!(field_messages(None).is_empty());
        assert!(field_messages(Some(&json!({ "errors": ["flat"] }))).is_empty());
    }
}
