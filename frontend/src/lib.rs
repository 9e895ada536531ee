//! DietChef 前端应用
//!
//! - `auth`: 持有引导引擎，把会话与步骤同步到信号
//! - `web::router`: 路由服务，每次导航都询问路由守卫
//! - `components`: 页面组件

mod auth;
mod components {
    mod account_actions;
    pub mod complete_profile;
    pub mod diet;
    mod icons;
    pub mod marketing;
    pub mod my_page;
    pub mod survey;
    mod survey_form;
}
mod config;

use crate::auth::{AuthContext, build_engine};
use crate::components::complete_profile::CompleteProfilePage;
use crate::components::diet::DietPage;
use crate::components::marketing::MarketingPage;
use crate::components::survey::SurveyPage;

use dietchef_shared::AppRoute;
use leptos::prelude::*;

// 原生 Web API 封装模块
pub(crate) mod web {
    mod console;
    mod http;
    mod popup;
    pub mod router;
    mod storage;

    pub use console::init_logging;
    pub use http::FetchClient;
    pub use popup::GooglePopup;
    pub use storage::{EntryPassStore, RefreshTokenStore};
}

pub use web::init_logging;

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 只会收到守卫放行的页面；`/success` 与未知路径总是先被重定向。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::CompleteProfile => view! { <CompleteProfilePage /> }.into_any(),
        AppRoute::Survey => view! { <SurveyPage /> }.into_any(),
        AppRoute::Diet => view! { <DietPage /> }.into_any(),
        AppRoute::Marketing | AppRoute::Success | AppRoute::NotFound => view! { <MarketingPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取编译期配置
    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid Firebase configuration");
            return view! {
                <div class="flex items-center justify-center min-h-screen bg-base-200">
                    <div role="alert" class="alert alert-error max-w-md">
                        <span>{format!("DietChef is not configured: {}", e.message())}</span>
                    </div>
                </div>
            }
            .into_any();
        }
    };

    // 2. 创建认证上下文并开始解析会话
    let auth_ctx = AuthContext::new(build_engine(&config));
    provide_context(auth_ctx);
    auth_ctx.start();

    view! {
        // 3. 路由器组件：每次导航都经过守卫
        <Router auth=auth_ctx>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
    .into_any()
}
