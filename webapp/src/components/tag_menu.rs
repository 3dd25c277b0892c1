use leptos::prelude::*;
use report_browser::view::DataView;
use report_browser::TAG_OPTIONS;

/// "Tags" dropdown plus the row of closable chips for the current
/// selection. Toggling an option in the menu and closing a chip go
/// through the same controller operation.
#[component]
pub fn TagMenu(data: RwSignal<DataView>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <div class="tag-menu">
            <button
                class=move || if menu_open.get() { "btn btn-primary active" } else { "btn btn-primary" }
                on:click=move |_| set_menu_open.update(|o| *o = !*o)
            >
                "Tags " <span class="caret">"▾"</span>
            </button>
            <div class=move || if menu_open.get() { "tag-menu-list open" } else { "tag-menu-list" }>
                {TAG_OPTIONS.iter().map(|tag| {
                    let tag = *tag;
                    view! {
                        <button
                            class=move || data.with(|d| {
                                if d.selected_tags().iter().any(|t| t == tag) {
                                    "tag-option selected"
                                } else {
                                    "tag-option"
                                }
                            })
                            on:click=move |_| data.update(|d| d.toggle_tag(tag))
                        >
                            {tag}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>

        <div class="selected-tags">
            {move || data.with(|d| d.selected_tags().to_vec()).into_iter().map(|tag| {
                let label = tag.clone();
                view! {
                    <span class="chip chip-selected">
                        {label}
                        <button
                            class="chip-close"
                            on:click=move |_| data.update(|d| d.toggle_tag(&tag))
                        >
                            "×"
                        </button>
                    </span>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
