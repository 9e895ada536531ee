//! Google 登录弹窗
//!
//! 由 `js/google_popup.js` 调用 Google Identity Services 的 token client，
//! 拿到 access token 后交给 `FirebaseAuth` 换取 Firebase 会话。

use async_trait::async_trait;
use dietchef::firebase::CredentialSource;
use dietchef::{OnboardError, OnboardResult};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/google_popup.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = requestGoogleAccessToken)]
    async fn request_google_access_token(client_id: &str) -> Result<JsValue, JsValue>;
}

/// 读取 JS 错误对象上的字符串属性
fn js_field(value: &JsValue, name: &str) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.as_string())
}

fn popup_error(err: JsValue) -> OnboardError {
    let kind = js_field(&err, "type").unwrap_or_default();
    let message = js_field(&err, "message")
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    let error = match kind.as_str() {
        "popup_closed" | "popup_failed_to_open" => OnboardError::popup_closed(message),
        "network" => OnboardError::network(message),
        _ => OnboardError::provider(message),
    };
    error.in_op_with("popup.google", kind)
}

pub struct GooglePopup {
    client_id: Option<String>,
}

impl GooglePopup {
    pub fn new(client_id: Option<String>) -> Self {
        Self { client_id }
    }
}

#[async_trait(?Send)]
impl CredentialSource for GooglePopup {
    async fn google_access_token(&self) -> OnboardResult<String> {
        let client_id = self.client_id.as_deref().ok_or_else(|| {
            OnboardError::invalid_input("Google client id is not configured")
                .in_op_with("popup.google", dietchef::config::KEY_GOOGLE_CLIENT_ID)
        })?;

        let token = request_google_access_token(client_id)
            .await
            .map_err(popup_error)?;

        token.as_string().ok_or_else(|| {
            OnboardError::provider("popup returned no access token").in_op("popup.google")
        })
    }
}
