use chrono::NaiveDate;
use leptos::prelude::*;
use report_browser::form::{DraftField, FormMode, FormState, Submission};
use wasm_bindgen::JsValue;

/// The report modal: four fields validated against the draft rules, with
/// inline errors surfacing only for touched fields. Generate finalizes
/// the draft and hands the submission to the shell; Cancel (overlay or
/// close button) discards it.
#[component]
pub fn ReportFormModal(
    form: RwSignal<FormState>,
    open: RwSignal<bool>,
    on_submit: Callback<Submission>,
) -> impl IntoView {
    let title = move || {
        form.with(|f| match f.mode {
            FormMode::Create => "New Report",
            FormMode::Edit { .. } => "Edit Report",
        })
    };

    let generate = move |_| {
        if let Some(submission) = form.try_update(|state| state.submit()).flatten() {
            log_submission(&submission);
            on_submit.run(submission);
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">{title}</h2>
                        <button class="modal-close" on:click=move |_| open.set(false)>"×"</button>
                    </div>

                    <div class="field">
                        <input
                            class=move || field_class(form, DraftField::Name)
                            type="text"
                            placeholder="Report name"
                            prop:value=move || form.with(|f| f.draft.name.clone())
                            on:input=move |ev| form.update(|f| f.draft.name = event_target_value(&ev))
                            on:blur=move |_| form.update(|f| f.touch(DraftField::Name))
                        />
                        <ErrorHint form=form field=DraftField::Name />
                    </div>

                    <div class="field">
                        <input
                            class=move || field_class(form, DraftField::Scenario)
                            type="text"
                            placeholder="Simulation Scenario"
                            prop:value=move || form.with(|f| f.draft.scenario.clone())
                            on:input=move |ev| form.update(|f| f.draft.scenario = event_target_value(&ev))
                            on:blur=move |_| form.update(|f| f.touch(DraftField::Scenario))
                        />
                        <ErrorHint form=form field=DraftField::Scenario />
                    </div>

                    <label class="field-label">"Select range date:"</label>
                    <div class="field">
                        <input
                            class=move || field_class(form, DraftField::StartDate)
                            type="date"
                            prop:value=move || form.with(|f| date_value(f.draft.start_date))
                            on:change=move |ev| form.update(|f| {
                                f.draft.start_date = parse_date(&event_target_value(&ev));
                                f.touch(DraftField::StartDate);
                            })
                        />
                        <ErrorHint form=form field=DraftField::StartDate />
                    </div>

                    <div class="field">
                        <input
                            class=move || field_class(form, DraftField::EndDate)
                            type="date"
                            prop:value=move || form.with(|f| date_value(f.draft.end_date))
                            on:change=move |ev| form.update(|f| {
                                f.draft.end_date = parse_date(&event_target_value(&ev));
                                f.touch(DraftField::EndDate);
                            })
                        />
                        <ErrorHint form=form field=DraftField::EndDate />
                    </div>

                    <button class="btn btn-primary btn-block" on:click=generate>
                        "Generate"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Inline message beneath a field; empty until the field is touched.
#[component]
fn ErrorHint(form: RwSignal<FormState>, field: DraftField) -> impl IntoView {
    view! {
        <div class="field-error">
            {move || form.with(|f| f.visible_error(field).map(|e| e.to_string()))}
        </div>
    }
}

fn field_class(form: RwSignal<FormState>, field: DraftField) -> &'static str {
    if form.with(|f| f.visible_error(field).is_some()) {
        "field-input invalid"
    } else {
        "field-input"
    }
}

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

// The picker hands us "YYYY-MM-DD"; anything else reads as unset and the
// required rule takes over.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn log_submission(submission: &Submission) {
    if let Ok(json) = serde_json::to_string(submission) {
        web_sys::console::log_2(
            &JsValue::from_str("report submitted:"),
            &JsValue::from_str(&json),
        );
    }
}
