use leptos::prelude::*;
use report_browser::sort::{cycle, SortColumn, SortDirection, SortState};
use report_browser::{tag_tone, Report, TagTone};

/// The report table: sortable Name/Date headers, tone-colored tag chips,
/// and a per-row action menu (Edit / Preview).
#[component]
pub fn ReportTable(
    rows: Memo<Vec<Report>>,
    sort: RwSignal<SortState>,
    on_edit: Callback<Report>,
    on_preview: Callback<Report>,
) -> impl IntoView {
    view! {
        <table class="report-table">
            <thead>
                <tr>
                    <SortHeader label="Name" column=SortColumn::Name sort=sort />
                    <th>"Tags"</th>
                    <th>"Contain"</th>
                    <th>"Level"</th>
                    <SortHeader label="Date" column=SortColumn::Date sort=sort />
                    <th class="col-actions"></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|row| view! { <ReportRow row=row on_edit=on_edit on_preview=on_preview /> })
                        .collect_view()
                }}
            </tbody>
        </table>
        <Show when=move || rows.get().is_empty()>
            <p class="muted">"No reports match the active filters"</p>
        </Show>
    }
}

/// Header cell cycling ascending -> descending -> unsorted on click.
#[component]
fn SortHeader(label: &'static str, column: SortColumn, sort: RwSignal<SortState>) -> impl IntoView {
    let indicator = move || match sort.get() {
        Some((col, SortDirection::Ascending)) if col == column => "▲",
        Some((col, SortDirection::Descending)) if col == column => "▼",
        _ => "",
    };
    view! {
        <th class="sortable" on:click=move |_| sort.update(|s| *s = cycle(*s, column))>
            {label}
            <span class="sort-indicator">{indicator}</span>
        </th>
    }
}

#[component]
fn ReportRow(row: Report, on_edit: Callback<Report>, on_preview: Callback<Report>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let edit_row = row.clone();
    let preview_row = row.clone();

    view! {
        <tr>
            <td class="cell-name">{row.name.clone()}</td>
            <td class="cell-tags">
                {row.tags.iter().map(|tag| view! { <TagChip tag=tag.clone() /> }).collect_view()}
            </td>
            <td>{row.contain.clone()}</td>
            <td>{row.level.clone()}</td>
            <td class="cell-date">{row.date.format("%Y-%m-%d").to_string()}</td>
            <td class="cell-actions">
                <button
                    class="action-trigger"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    "⋯"
                </button>
                <div class=move || if menu_open.get() { "action-menu open" } else { "action-menu" }>
                    <button on:click=move |_| {
                        set_menu_open.set(false);
                        on_edit.run(edit_row.clone());
                    }>"Edit"</button>
                    <button on:click=move |_| {
                        set_menu_open.set(false);
                        on_preview.run(preview_row.clone());
                    }>"Preview"</button>
                </div>
            </td>
        </tr>
    }
}

#[component]
fn TagChip(tag: String) -> impl IntoView {
    let class = match tag_tone(&tag) {
        TagTone::Amber => "chip chip-amber",
        TagTone::Violet => "chip chip-violet",
        TagTone::Blue => "chip chip-blue",
    };
    view! { <span class=class>{tag}</span> }
}
