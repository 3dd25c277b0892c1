//! Application shell: state ownership and component wiring.
//!
//! All mutable state lives here as signals over the `report-browser`
//! value types; components receive signals and callbacks, never owned
//! copies of the controller.

use leptos::prelude::*;
use report_browser::form::{FormMode, FormState, Submission};
use report_browser::sort::{sort_rows, SortState};
use report_browser::view::{DataView, PAGE_SIZE};
use report_browser::{seed_reports, Report};

use crate::components::{
    Pagination, PreviewModal, ReportFormModal, ReportTable, SearchInput, TagMenu, APP_CSS,
};

#[component]
pub fn App() -> impl IntoView {
    let data = RwSignal::new(DataView::new(seed_reports()));
    let sort: RwSignal<SortState> = RwSignal::new(None);
    let form = RwSignal::new(FormState::create());
    let form_open = RwSignal::new(false);
    let preview = RwSignal::new(None::<Report>);

    // visible subset -> sorted copy -> current page window
    let sorted_visible = Memo::new(move |_| {
        let mut rows = data.with(|d| d.visible_rows());
        sort_rows(&mut rows, sort.get());
        rows
    });
    let page_rows = Memo::new(move |_| {
        let rows = sorted_visible.get();
        data.with(|d| d.page_slice(&rows))
    });
    let total = Memo::new(move |_| data.with(|d| d.total()));
    let current_page = Memo::new(move |_| data.with(|d| d.current_page()));

    let on_search = Callback::new(move |text: String| data.update(|d| d.set_search_text(text)));
    let on_page = Callback::new(move |page: usize| data.update(|d| d.set_page(page)));

    let open_create = move |_| {
        form.set(FormState::create());
        form_open.set(true);
    };
    let on_edit = Callback::new(move |row: Report| {
        form.set(FormState::edit(&row));
        form_open.set(true);
    });
    let on_preview = Callback::new(move |row: Report| preview.set(Some(row)));

    let on_submit = Callback::new(move |submission: Submission| {
        match form.with_untracked(|f| f.mode.clone()) {
            FormMode::Create => data.update(|d| d.add_row(&submission)),
            FormMode::Edit { key } => data.update(|d| d.apply_edit(&key, &submission)),
        }
        form_open.set(false);
    });

    view! {
        <style>{APP_CSS}</style>
        <div class="page">
            <header class="page-header">
                <h1 class="page-title">"Threat Reports"</h1>
                <button class="btn btn-primary" on:click=open_create>"New Report"</button>
            </header>

            <TagMenu data=data />
            <SearchInput on_search=on_search />
            <ReportTable rows=page_rows sort=sort on_edit=on_edit on_preview=on_preview />
            <Pagination current=current_page total=total page_size=PAGE_SIZE on_change=on_page />

            <ReportFormModal form=form open=form_open on_submit=on_submit />
            <PreviewModal preview=preview />
        </div>
    }
}
