//! 账户设置对话框
//!
//! 编辑姓名与问卷、登出、删除账户。保存使用读取时的 `updatedAt`
//! 做乐观检查，冲突时提示并重新加载。

use crate::auth::use_auth;
use crate::components::icons::{Trash, UserRound};
use crate::components::survey_form::{SurveyFields, SurveyState};
use dietchef_shared::ProfileForm;
use dietchef::{AccountSettings, ErrorStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 通知: (消息内容, 是否出错)
type Notice = Option<(String, bool)>;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn MyPageDialog() -> impl IntoView {
    let auth = use_auth();

    let (open, set_open) = signal(false);
    let (loading, set_loading) = signal(false);
    let (notification, set_notification) = signal(Notice::None);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let full_name = RwSignal::new(String::new());
    let survey = SurveyState::new();
    // 读取时的设置快照，保存时携带其 version
    let loaded = RwSignal::new(AccountSettings::default());

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match auth.load_settings().await {
                Ok(settings) => {
                    full_name.set(settings.profile.full_name.clone());
                    survey.fill(&settings.survey);
                    loaded.set(settings);
                }
                Err(e) => set_notification.set(Some((e.user_message().to_string(), true))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_open = move |_| {
        set_notification.set(None);
        set_open.set(true);
        load();
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);
        set_notification.set(None);

        let settings = AccountSettings {
            profile: ProfileForm::new(full_name.get()),
            survey: survey.to_form(),
            ..loaded.get()
        };
        spawn_local(async move {
            match auth.save_settings(settings).await {
                Ok(saved) => {
                    loaded.set(saved);
                    set_notification.set(Some(("Your information has been saved.".to_string(), false)));
                }
                Err(e) if e.status == ErrorStatus::Conflict => {
                    set_notification.set(Some((e.user_message().to_string(), true)));
                    load();
                    return;
                }
                Err(e) if e.status == ErrorStatus::InvalidInput => {
                    set_notification.set(Some((e.message().to_string(), true)));
                }
                Err(e) => set_notification.set(Some((e.user_message().to_string(), true))),
            }
            set_loading.set(false);
        });
    };

    let on_delete = move |_| {
        if !confirm("Delete your account and all saved information? This cannot be undone.") {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match auth.delete_account().await {
                Ok(()) => set_open.set(false),
                Err(e) if e.status == ErrorStatus::RequiresRecentLogin => {
                    set_notification.set(Some((e.user_message().to_string(), true)));
                }
                Err(_) => set_notification.set(Some((
                    "Could not delete your account. Please try again.".to_string(),
                    true,
                ))),
            }
            set_loading.set(false);
        });
    };

    view! {
        <button class="btn btn-ghost gap-2" on:click=on_open>
            <UserRound attr:class="h-4 w-4" /> "My page"
        </button>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"My page"</h3>
                <p class="py-2 text-base-content/70">{move || loaded.get().email.unwrap_or_default()}</p>

                <Show when=move || notification.get().is_some()>
                    <div class=move || {
                        let is_err = notification.get().is_some_and(|(_, e)| e);
                        if is_err { "alert alert-error text-sm py-2" } else { "alert alert-success text-sm py-2" }
                    }>
                        <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                    </div>
                </Show>

                <form on:submit=on_submit class="space-y-4">
                    <div class="form-control">
                        <label for="settings_full_name" class="label">
                            <span class="label-text">"Full name"</span>
                        </label>
                        <input
                            id="settings_full_name"
                            type="text"
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                            prop:value=full_name
                            class="input input-bordered w-full"
                            required
                        />
                    </div>

                    <SurveyFields state=survey />

                    <div class="modal-action justify-between">
                        <button type="button" class="btn btn-outline btn-error gap-2" disabled=move || loading.get() on:click=on_delete>
                            <Trash attr:class="h-4 w-4" /> "Delete account"
                        </button>
                        <div class="flex gap-2">
                            <button type="button" class="btn" on:click=move |_| set_open.set(false)>"Close"</button>
                            <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                                {move || if loading.get() {
                                    view! { <span class="loading loading-spinner"></span> }.into_any()
                                } else {
                                    "Save".into_any()
                                }}
                            </button>
                        </div>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
