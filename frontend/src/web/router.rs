//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程: 请求 -> 守卫判定 -> (重定向 | 加载占位 | 渲染)。
//! 会话或步骤变化时，对最近一次请求的页面重新判定。

use dietchef_shared::{AppRoute, GuardDecision};
use leptos::prelude::*;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

use crate::auth::AuthContext;

/// 单次导航允许的最大重定向次数
const MAX_REDIRECTS: usize = 4;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn history() -> Option<web_sys::History> {
    web_sys::window()?.history().ok()
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(history) = history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(history) = history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// 路由器服务
///
/// `requested` 是用户最后请求的页面；`displayed` 是守卫放行后实际渲染的页面，
/// 为 `None` 时显示加载占位。
#[derive(Clone, Copy)]
pub struct RouterService {
    requested: RwSignal<AppRoute>,
    displayed: RwSignal<Option<AppRoute>>,
    auth: AuthContext,
}

impl RouterService {
    fn new(auth: AuthContext) -> Self {
        Self {
            requested: RwSignal::new(AppRoute::from_path(&current_path())),
            displayed: RwSignal::new(None),
            auth,
        }
    }

    /// 当前渲染的页面
    pub fn displayed(&self) -> RwSignal<Option<AppRoute>> {
        self.displayed
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        push_history_state(path);
        self.apply(AppRoute::from_path(path));
    }

    /// 对请求的页面执行守卫，重定向使用 replaceState
    fn apply(&self, route: AppRoute) {
        let mut target = route;
        for _ in 0..MAX_REDIRECTS {
            match self.auth.resolve(target) {
                GuardDecision::Loading => {
                    self.show(target, None);
                    return;
                }
                GuardDecision::Render => {
                    self.show(target, Some(target));
                    return;
                }
                GuardDecision::Redirect(next) => {
                    info!(from = %target, to = %next, "[Router] redirect");
                    replace_history_state(next.to_path());
                    target = next;
                }
            }
        }

        warn!(route = %target, "[Router] too many redirects, rendering last target");
        self.show(target, Some(target));
    }

    fn show(&self, requested: AppRoute, displayed: Option<AppRoute>) {
        if self.requested.get_untracked() != requested {
            self.requested.set(requested);
        }
        if self.displayed.get_untracked() != displayed {
            self.displayed.set(displayed);
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            router.apply(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话或步骤变化时重新判定
    fn setup_auth_redirect(&self) {
        let router = *self;
        Effect::new(move |_| {
            router.auth.state.track();
            router.apply(router.requested.get_untracked());
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(auth: AuthContext) -> RouterService {
    let router = RouterService::new(auth);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证上下文，守卫判定由它完成
    auth: AuthContext,
    children: Children,
) -> impl IntoView {
    provide_router(auth);

    children()
}

/// 路由出口组件
///
/// 守卫尚未得出结论时显示加载占位，不提前渲染或重定向。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || match router.displayed().get() {
        Some(route) => matcher(route),
        None => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}
