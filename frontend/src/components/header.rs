//! Navigation bar listing the workflow steps.

use leptos::*;
use leptos_router::A;

use crate::config::APP_NAME;
use crate::context::use_app;
use crate::state::Stage;

#[component]
pub fn Header() -> impl IntoView {
    let app = use_app();

    let nav_item = move |stage: Stage| {
        let reachable = move || app.pipeline.with(|p| p.is_reachable(stage));
        let href = move || app.pipeline.with(|p| p.href(stage));
        view! {
            <Show
                when=reachable
                fallback=move || view! {
                    <span class="nav-link disabled" title="Complete the previous step first">
                        {stage.title()}
                    </span>
                }
            >
                <A href=href class="nav-link" exact=true>{stage.title()}</A>
            </Show>
        }
    };

    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">{APP_NAME}</A>
            </div>
            <nav class="header-right">
                {Stage::ALL.into_iter().map(nav_item).collect_view()}
            </nav>
        </header>
    }
}
