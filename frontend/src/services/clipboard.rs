use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("ブラウザのウィンドウにアクセスできません")]
    WindowUnavailable,

    /// `navigator.clipboard` is missing, typically outside a secure context.
    #[error("この環境ではクリップボードを利用できません")]
    ApiUnavailable,

    #[error("クリップボードへの書き込みが拒否されました: {0}")]
    Rejected(String),
}

/// Write `text` to the system clipboard.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::WindowUnavailable)?;
    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::ApiUnavailable);
    }

    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| ClipboardError::Rejected(describe_js_error(&e)))?;
    Ok(())
}

fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_rejected_message_includes_reason() {
        let message = ClipboardError::Rejected("denied".to_string()).to_string();
        assert!(message.ends_with("denied"));
    }

    // These build real JS values and only run under the wasm test runner.
    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen_test]
    fn test_describe_js_error_uses_message() {
        let error = js_sys::Error::new("Document is not focused.");
        assert_eq!(describe_js_error(&error.into()), "Document is not focused.");
    }

    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen_test]
    fn test_describe_js_error_plain_string() {
        assert_eq!(describe_js_error(&JsValue::from_str("denied")), "denied");
    }
}
