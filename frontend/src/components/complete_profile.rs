use crate::auth::use_auth;
use crate::components::account_actions::{ReauthNotice, SignOutButton};
use crate::components::icons::UserRound;
use crate::web::router::use_router;
use dietchef::AuthHint;
use dietchef_shared::ProfileForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CompleteProfilePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (full_name, set_full_name) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let form = ProfileForm::new(full_name.get());
        spawn_local(async move {
            match auth.submit_profile(form).await {
                Ok(next) => router.navigate(next.to_path()),
                Err(e) if e.status == dietchef::ErrorStatus::InvalidInput => {
                    set_error_msg.set(Some(e.message().to_string()))
                }
                Err(e) => set_error_msg.set(Some(e.user_message().to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <UserRound attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Complete your profile"</h1>
                        <Show when=move || auth.state.get().hint == AuthHint::NewAccount>
                            <p class="text-base-content/70">
                                "Welcome! We created a new account for you."
                            </p>
                        </Show>
                    </div>
                </div>

                <ReauthNotice />

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="full_name">
                                <span class="label-text">"Full name"</span>
                            </label>
                            <input
                                id="full_name"
                                type="text"
                                placeholder="Ada Lovelace"
                                on:input=move |ev| set_full_name.set(event_target_value(&ev))
                                prop:value=full_name
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                } else {
                                    "Next".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>

                <Show when=move || auth.state.get().hint != AuthHint::ReauthRequired>
                    <div class="flex justify-center">
                        <SignOutButton />
                    </div>
                </Show>
            </div>
        </div>
    }
}
