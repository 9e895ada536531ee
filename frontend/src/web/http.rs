//! HTTP 请求封装模块
//!
//! 用 `web_sys::fetch` 实现引擎的 `HttpClient`。

use async_trait::async_trait;
use dietchef::{HttpClient, HttpRequest, HttpResponse, OnboardError, OnboardResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

fn network(op: &'static str, e: JsValue) -> OnboardError {
    OnboardError::network(format!("{:?}", e)).in_op(op)
}

impl FetchClient {
    fn build(req: &HttpRequest) -> OnboardResult<Request> {
        let headers = Headers::new().map_err(|e| network("fetch.headers", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| network("fetch.headers", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts).map_err(|e| network("fetch.request", e))
    }
}

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> OnboardResult<HttpResponse> {
        let request = Self::build(&req)?;

        let window = web_sys::window()
            .ok_or_else(|| OnboardError::network("no window object").in_op("fetch.send"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| network("fetch.send", e))?;
        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| network("fetch.send", e))?;

        let promise = response.text().map_err(|e| network("fetch.body", e))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| network("fetch.body", e))?;

        Ok(HttpResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
