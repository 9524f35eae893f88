/// Looks up `name` in a raw `document.cookie` string.
pub fn parse_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(target_arch = "wasm32")]
pub fn read_cookie(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let raw = html.cookie().ok()?;
    parse_cookie(&raw, name)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_cookie(_name: &str) -> Option<String> {
    None
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn read_cookie_returns_none_for_unknown_name() {
        assert!(read_cookie("asset-portal-missing-cookie").is_none());
    }
}
