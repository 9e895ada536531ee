//! 问卷表单状态与字段
//!
//! 问卷页和账户设置共用。字段保存原始字符串，校验交给引擎。

use dietchef_shared::SurveyForm;
use leptos::prelude::*;

/// 表单状态结构体
#[derive(Clone, Copy)]
pub struct SurveyState {
    pub birthday: RwSignal<String>,
    pub gender: RwSignal<String>,
    pub height: RwSignal<String>,
    pub weight: RwSignal<String>,
    pub diet_goal: RwSignal<String>,
    pub exercise_hours: RwSignal<String>,
}

impl SurveyState {
    pub fn new() -> Self {
        Self::from_form(&SurveyForm::default())
    }

    pub fn from_form(form: &SurveyForm) -> Self {
        Self {
            birthday: RwSignal::new(form.birthday.clone()),
            gender: RwSignal::new(form.gender.clone()),
            height: RwSignal::new(form.height.clone()),
            weight: RwSignal::new(form.weight.clone()),
            diet_goal: RwSignal::new(form.diet_goal.clone()),
            exercise_hours: RwSignal::new(form.exercise_hours.clone()),
        }
    }

    /// 用已保存的问卷覆盖当前输入
    pub fn fill(&self, form: &SurveyForm) {
        self.birthday.set(form.birthday.clone());
        self.gender.set(form.gender.clone());
        self.height.set(form.height.clone());
        self.weight.set(form.weight.clone());
        self.diet_goal.set(form.diet_goal.clone());
        self.exercise_hours.set(form.exercise_hours.clone());
    }

    pub fn to_form(&self) -> SurveyForm {
        SurveyForm {
            birthday: self.birthday.get(),
            gender: self.gender.get(),
            height: self.height.get(),
            weight: self.weight.get(),
            diet_goal: self.diet_goal.get(),
            exercise_hours: self.exercise_hours.get(),
        }
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=input_type
                min=if input_type == "number" { Some("0") } else { None }
                step=if input_type == "number" { Some("any") } else { None }
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered w-full"
                required
            />
        </div>
    }
}

#[component]
fn SelectField(
    id: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <select
                id=id
                class="select select-bordered w-full"
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="" disabled selected=move || value.get().is_empty()>"Select..."</option>
                {options
                    .iter()
                    .map(|&(key, text)| {
                        view! {
                            <option value=key selected=move || value.get() == key>{text}</option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

const GENDERS: &[(&str, &str)] = &[("female", "Female"), ("male", "Male"), ("other", "Other")];
const DIET_GOALS: &[(&str, &str)] = &[
    ("loss", "Lose weight"),
    ("maintain", "Maintain weight"),
    ("gain", "Gain weight"),
];

/// 问卷的全部输入字段
#[component]
pub fn SurveyFields(state: SurveyState) -> impl IntoView {
    view! {
        <TextField id="birthday" label="Birthday" input_type="date" value=state.birthday />
        <SelectField id="gender" label="Gender" options=GENDERS value=state.gender />
        <div class="grid grid-cols-2 gap-4">
            <TextField id="height" label="Height (cm)" input_type="number" value=state.height />
            <TextField id="weight" label="Weight (kg)" input_type="number" value=state.weight />
        </div>
        <SelectField id="diet_goal" label="Diet goal" options=DIET_GOALS value=state.diet_goal />
        <TextField
            id="exercise_hours"
            label="Exercise hours per week"
            input_type="number"
            value=state.exercise_hours
        />
    }
}
