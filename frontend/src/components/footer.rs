//! Footer component

use leptos::*;

use crate::config::{APP_NAME, BACKEND_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>{APP_NAME} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <span class="footer-link">"Backend: " {BACKEND_URL}</span>
            </div>
        </footer>
    }
}
