use crate::auth::use_auth;
use crate::components::survey_form::{SurveyFields, SurveyState};
use crate::web::router::use_router;
use dietchef::ErrorStatus;
use dietchef_shared::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SurveyPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let state = SurveyState::new();
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let can_submit = move || !is_submitting.get() && state.to_form().all_filled();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let form = state.to_form();
        spawn_local(async move {
            match auth.submit_survey(form).await {
                Ok(next) => router.navigate(next.to_path()),
                Err(e) if e.status == ErrorStatus::InvalidInput => {
                    set_error_msg.set(Some(e.message().to_string()))
                }
                Err(e) => set_error_msg.set(Some(e.user_message().to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-xl mx-auto">
                <div class="card w-full shadow-2xl bg-base-100">
                    <form class="card-body space-y-2" on:submit=on_submit>
                        <h1 class="card-title text-2xl">"Tell us about yourself"</h1>
                        <p class="text-base-content/70">
                            "We use these answers to tailor your diet recommendations."
                        </p>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <SurveyFields state=state />

                        <div class="card-actions justify-between mt-6">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| router.navigate(AppRoute::CompleteProfile.to_path())
                            >
                                "Back to profile"
                            </button>
                            <button class="btn btn-primary" disabled=move || !can_submit()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                } else {
                                    "Submit".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
