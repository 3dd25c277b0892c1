use leptos::prelude::*;
use report_browser::Report;

/// Read-only detail view for a single report, opened from the row action
/// menu. Shows every field, including ones the table truncates or omits.
#[component]
pub fn PreviewModal(preview: RwSignal<Option<Report>>) -> impl IntoView {
    view! {
        <Show when=move || preview.get().is_some()>
            <div class="modal-overlay" on:click=move |_| preview.set(None)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">"Report Preview"</h2>
                        <button class="modal-close" on:click=move |_| preview.set(None)>"×"</button>
                    </div>
                    {move || preview.get().map(|row| view! {
                        <dl class="preview-fields">
                            <dt>"Name"</dt>
                            <dd class="cell-name">{row.name.clone()}</dd>
                            <dt>"Tags"</dt>
                            <dd>
                                {if row.tags.is_empty() {
                                    "—".to_string()
                                } else {
                                    row.tags.join(", ")
                                }}
                            </dd>
                            <dt>"Contain"</dt>
                            <dd>{row.contain.clone()}</dd>
                            <dt>"Level"</dt>
                            <dd>{row.level.clone()}</dd>
                            <dt>"Date"</dt>
                            <dd>{row.date.format("%Y-%m-%d").to_string()}</dd>
                            <dt>"Scenario"</dt>
                            <dd>{row.scenario.clone()}</dd>
                        </dl>
                    })}
                </div>
            </div>
        </Show>
    }
}
