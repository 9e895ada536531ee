//! 引导页面共用的账户操作
//!
//! 删除账户需要重新登录时，文档可能已被删除，页面会换成资料填写页；
//! 提示由引擎保留，这里负责展示并提供重新登录与登出。

use crate::auth::use_auth;
use crate::components::icons::LogOut;
use crate::web::router::use_router;
use dietchef::{AuthHint, AuthIntent, ErrorStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SignOutButton() -> impl IntoView {
    let auth = use_auth();
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 登出后路由服务会监听认证状态变化并自动重定向
    let on_click = move |_| {
        spawn_local(async move {
            if let Err(e) = auth.sign_out().await {
                set_error_msg.set(Some(e.user_message().to_string()));
            }
        });
    };

    view! {
        <button type="button" class="btn btn-ghost btn-sm gap-2" on:click=on_click>
            <LogOut attr:class="h-4 w-4" /> "Sign out"
        </button>
        <Show when=move || error_msg.get().is_some()>
            <p class="text-error text-sm">{move || error_msg.get().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
pub fn ReauthNotice() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let (busy, set_busy) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_reauth = move |_| {
        set_busy.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match auth.authenticate(AuthIntent::SignIn).await {
                Ok(outcome) => router.navigate(outcome.redirect.to_path()),
                Err(e) if e.status == ErrorStatus::PopupClosed => {}
                Err(e) => set_error_msg.set(Some(e.user_message().to_string())),
            }
            set_busy.set(false);
        });
    };

    view! {
        <Show when=move || auth.state.get().hint == AuthHint::ReauthRequired>
            <div role="alert" class="alert alert-warning text-sm flex-col items-start gap-2">
                <span>
                    "For your security, deleting your account requires a recent sign-in. "
                    "Sign in again, then delete your account from My page."
                </span>
                <Show when=move || error_msg.get().is_some()>
                    <span class="text-error">{move || error_msg.get().unwrap_or_default()}</span>
                </Show>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="btn btn-sm btn-warning"
                        disabled=move || busy.get()
                        on:click=on_reauth
                    >
                        "Sign in again"
                    </button>
                    <SignOutButton />
                </div>
            </div>
        </Show>
    }
}
