//! 认证模块
//!
//! 持有引导引擎，并把会话与当前步骤同步到响应式信号。
//! 路由服务通过 `AuthContext` 询问守卫，页面通过它提交表单。

use std::rc::Rc;

use dietchef::firebase::{FirebaseAuth, RealtimeDb, TokenSlot};
use dietchef::{AccountSettings, AuthHint, AuthIntent, AuthOutcome, FirebaseConfig, OnboardResult, Onboarding};
use dietchef_shared::{AppRoute, GuardDecision, OnboardingStep, ProfileForm, Session, SurveyForm};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crate::web::{EntryPassStore, FetchClient, GooglePopup, RefreshTokenStore};

pub type Engine = Onboarding<FirebaseAuth<FetchClient, GooglePopup, RefreshTokenStore>, RealtimeDb<FetchClient>>;

/// 组装浏览器环境下的引擎
///
/// 身份客户端与数据库共享同一个 token 槽位；通行证保存在 sessionStorage。
pub fn build_engine(config: &FirebaseConfig) -> Engine {
    let token = TokenSlot::new();
    let identity = FirebaseAuth::new(
        FetchClient,
        GooglePopup::new(config.google_client_id.clone()),
        RefreshTokenStore,
        config,
        token.clone(),
    );
    let storage = RealtimeDb::new(FetchClient, config, token);
    Onboarding::new(identity, storage).with_pass_store(EntryPassStore)
}

/// 认证状态（引擎缓存的快照）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    /// `None` 表示会话尚未解析
    pub session: Option<Session>,
    /// `None` 表示仍在加载
    pub step: Option<OnboardingStep>,
    /// 引擎保留的最近一次提示（登录结果或需要重新登录）
    pub hint: AuthHint,
}

impl AuthState {
    pub fn email(&self) -> Option<String> {
        self.session.as_ref().and_then(|s| s.email()).map(str::to_string)
    }
}

/// 认证上下文
///
/// 引擎是单线程的 `Rc`，存放在本地 arena 中；`state` 驱动界面更新。
#[derive(Clone, Copy)]
pub struct AuthContext {
    engine: StoredValue<Rc<Engine>, LocalStorage>,
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: StoredValue::new_local(Rc::new(engine)),
            state: RwSignal::new(AuthState::default()),
        }
    }

    fn engine(&self) -> Rc<Engine> {
        self.engine.get_value()
    }

    /// 把引擎缓存同步到信号，未变化时不触发更新
    fn sync(&self) {
        let engine = self.engine();
        let current = self.state.get_untracked();
        let next = AuthState {
            session: engine.session(),
            step: engine.current_step(),
            hint: engine.hint(),
        };
        if next != current {
            tracing::debug!(step = ?next.step, "auth state changed");
            self.state.set(next);
        }
    }

    /// 订阅会话并解析初始状态
    ///
    /// 全局只有这一个订阅者，订阅句柄随页面存活。
    pub fn start(&self) {
        let ctx = *self;
        let subscription = self.engine().observe_session(move |session| {
            let session = session.clone();
            spawn_local(async move {
                ctx.engine().on_session_change(session).await;
                ctx.sync();
            });
        });
        std::mem::forget(subscription);

        spawn_local(async move {
            let step = ctx.engine().start().await;
            tracing::info!(?step, "session resolved");
            ctx.sync();
        });
    }

    pub fn resolve(&self, route: AppRoute) -> GuardDecision {
        self.engine().resolve(route)
    }

    pub fn continue_onboarding(&self) -> Option<AppRoute> {
        self.engine().continue_onboarding()
    }

    pub async fn authenticate(&self, intent: AuthIntent) -> OnboardResult<AuthOutcome> {
        let result = self.engine().authenticate(intent).await;
        self.sync();
        result
    }

    pub async fn sign_out(&self) -> OnboardResult<()> {
        let result = self.engine().sign_out().await;
        self.sync();
        result
    }

    pub async fn delete_account(&self) -> OnboardResult<()> {
        let result = self.engine().delete_account().await;
        self.sync();
        result
    }

    pub async fn submit_profile(&self, form: ProfileForm) -> OnboardResult<AppRoute> {
        let result = self.engine().submit_profile(&form).await;
        self.sync();
        result
    }

    pub async fn submit_survey(&self, form: SurveyForm) -> OnboardResult<AppRoute> {
        let result = self.engine().submit_survey(&form).await;
        self.sync();
        result
    }

    pub async fn load_settings(&self) -> OnboardResult<AccountSettings> {
        self.engine().load_account_settings().await
    }

    pub async fn save_settings(&self, settings: AccountSettings) -> OnboardResult<AccountSettings> {
        let result = self.engine().save_account_settings(&settings).await;
        self.sync();
        result
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
