use crate::auth::use_auth;
use crate::components::icons::{Leaf, LogOut};
use crate::components::my_page::MyPageDialog;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DietPage() -> impl IntoView {
    let auth = use_auth();
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 登出后路由服务会监听认证状态变化并自动重定向
    let on_logout = move |_| {
        spawn_local(async move {
            if let Err(e) = auth.sign_out().await {
                set_error_msg.set(Some(e.user_message().to_string()));
            }
        });
    };

    let email = move || auth.state.get().email().unwrap_or_default();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <Leaf attr:class="text-primary h-6 w-6" />
                        <a class="btn btn-ghost text-xl">"DietChef"</a>
                        <span class="badge badge-neutral hidden md:inline-flex">{email}</span>
                    </div>
                    <div class="flex-none gap-2">
                        <MyPageDialog />
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Sign out"
                        </button>
                    </div>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">"Your diet recommendations"</h2>
                        <p class="text-base-content/70">
                            "Your profile and survey are complete. Recommendations are tailored to your goal and weekly activity; update them any time from My page."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
