use crate::auth::use_auth;
use crate::components::account_actions::{ReauthNotice, SignOutButton};
use crate::components::icons::Leaf;
use crate::web::router::use_router;
use dietchef_shared::{AppRoute, OnboardingStep};
use dietchef::{AuthHint, AuthIntent, ErrorStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn MarketingPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (busy, set_busy) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let run = move |intent: AuthIntent| {
        set_busy.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match auth.authenticate(intent).await {
                Ok(outcome) => router.navigate(outcome.redirect.to_path()),
                // 用户主动关闭弹窗不算错误
                Err(e) if e.status == ErrorStatus::PopupClosed => {}
                Err(e) => set_error_msg.set(Some(e.user_message().to_string())),
            }
            set_busy.set(false);
        });
    };

    let hint = move || auth.state.get().hint;
    let signed_in = move || auth.state.get().session.is_some_and(|s| s.is_authenticated());
    let is_ready = move || auth.state.get().step == Some(OnboardingStep::Ready);
    let on_continue = move |_| {
        let target = auth.continue_onboarding().or_else(|| is_ready().then_some(AppRoute::Diet));
        if let Some(route) = target {
            router.navigate(route.to_path());
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md text-center">
                <div class="flex flex-col items-center gap-2 mb-4">
                    <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                        <Leaf attr:class="h-8 w-8" />
                    </div>
                    <h1 class="text-4xl font-bold">"DietChef"</h1>
                    <p class="text-base-content/70">
                        "Personal diet recommendations based on your body and your goals."
                    </p>
                </div>

                <Show when=move || hint() == AuthHint::AlreadyRegistered>
                    <div role="alert" class="alert alert-info text-sm py-2">
                        <span>"This account is already registered. You are signed in."</span>
                    </div>
                </Show>
                <ReauthNotice />
                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="card w-full shadow-2xl bg-base-100">
                    <div class="card-body gap-3">
                        <Show
                            when=signed_in
                            fallback=move || view! {
                                <button
                                    class="btn btn-primary"
                                    disabled=move || busy.get()
                                    on:click=move |_| run(AuthIntent::SignUp)
                                >
                                    "Sign up with Google"
                                </button>
                                <button
                                    class="btn btn-outline"
                                    disabled=move || busy.get()
                                    on:click=move |_| run(AuthIntent::SignIn)
                                >
                                    "Sign in with Google"
                                </button>
                            }
                        >
                            <button class="btn btn-primary" on:click=on_continue>
                                {move || if is_ready() { "Go to my diet" } else { "Continue setup" }}
                            </button>
                            <Show when=move || hint() != AuthHint::ReauthRequired>
                                <SignOutButton />
                            </Show>
                        </Show>
                        <Show when=move || busy.get()>
                            <span class="loading loading-spinner mx-auto"></span>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
