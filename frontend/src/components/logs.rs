//! Activity log panel.
//!
//! Displays the entries recorded through [`AppContext::log`] with
//! auto-scroll to the newest entry.
//!
//! [`AppContext::log`]: crate::context::AppContext::log

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app;

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(f);
    if window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

#[component]
pub fn LogsPanel() -> impl IntoView {
    let app = use_app();
    let logs = app.logs;

    // Reference to the logs content div for auto-scroll
    let logs_container = create_node_ref::<leptos::html::Div>();

    create_effect(move |_| {
        let _ = logs.get();
        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <Show when=move || logs.with(|l| !l.is_empty()) fallback=|| view! { }>
            <div class="logs-panel">
                <div class="logs-header">
                    <span class="logs-title">"📋 Activity"</span>
                    <button class="logs-clear" on:click=move |_| app.clear_logs()>
                        "Clear"
                    </button>
                </div>
                <div class="logs-content" node_ref=logs_container>
                    <For
                        each=move || logs.get().into_iter().enumerate()
                        key=|(i, entry)| (*i, entry.timestamp.clone(), entry.message.clone())
                        children=move |(_, entry)| {
                            view! {
                                <div class=format!("log-entry {}", entry.level.css_class())>
                                    <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                    {entry.message.clone()}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
