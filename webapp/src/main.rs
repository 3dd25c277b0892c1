// Phishdeck report browser — Leptos 0.8 CSR app

mod app;
mod components;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}
