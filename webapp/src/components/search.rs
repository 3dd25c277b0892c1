use leptos::prelude::*;

/// Free-text search over report names. Emits on every keystroke; the
/// controller treats the empty string as "match everything".
#[component]
pub fn SearchInput(on_search: Callback<String>) -> impl IntoView {
    view! {
        <div class="search-box">
            <span class="search-icon">
                <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" fill="currentColor" viewBox="0 0 256 256">
                    <path d="M229.66,218.34l-50.07-50.06a88.11,88.11,0,1,0-11.31,11.31l50.06,50.07a8,8,0,0,0,11.32-11.32ZM40,112a72,72,0,1,1,72,72A72.08,72.08,0,0,1,40,112Z"></path>
                </svg>
            </span>
            <input
                class="search-input"
                type="text"
                placeholder="Search text"
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
        </div>
    }
}
