// CyberMonitor landing page, Leptos 0.8 CSR edition
// (c)2025 CyberMonitor

mod captcha;
mod formspree;
mod pages;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use wasm_bindgen::JsValue;

use pages::{ContactPage, HomePage};
use sections::{Footer, Nav, VERSION};

fn main() {
    console_error_panic_hook::set_once();
    boot_banner();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

/// One-line version stamp in the browser console.
fn boot_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%cCyberMonitor {VERSION}")),
        &JsValue::from_str("color: #00a8ff; font-weight: bold;"),
    );
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav />
            <main class="page-main">
                // Two addressable surfaces; anything else falls back to home.
                <Routes fallback=|| view! { <HomePage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
