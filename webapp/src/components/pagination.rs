use leptos::prelude::*;

/// Stateless pagination strip: previous/next steps plus one pill per page.
/// A pure function of `(current, page_size, total)`; selecting a page
/// invokes `on_change` and nothing else.
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    page_size: usize,
    on_change: Callback<usize>,
) -> impl IntoView {
    let page_count = move || total.get().div_ceil(page_size).max(1);

    view! {
        <nav class="pagination">
            <button
                class="page-step"
                disabled=move || current.get() <= 1
                on:click=move |_| {
                    let page = current.get();
                    if page > 1 {
                        on_change.run(page - 1);
                    }
                }
            >
                "‹"
            </button>
            {move || {
                (1..=page_count())
                    .map(|page| {
                        view! {
                            <button
                                class=move || if page == current.get() { "page-pill active" } else { "page-pill" }
                                on:click=move |_| on_change.run(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="page-step"
                disabled=move || current.get() >= page_count()
                on:click=move |_| {
                    let page = current.get();
                    if page < page_count() {
                        on_change.run(page + 1);
                    }
                }
            >
                "›"
            </button>
        </nav>
    }
}
