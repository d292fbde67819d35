//! Server-paginated table of dissected test cases.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::{DownloadLink, Notice, NoticeKind, PageControls, PageHeader, TestCaseTable};
use crate::context::{on_route_query, use_app};
use crate::state::{DissectListing, PageRequest, Stage};
use crate::types::{AppError, LogLevel};

#[component]
pub fn DissectPage() -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();
    let listing = create_rw_signal(DissectListing::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    // Every call is a fresh request; earlier pages are not kept.
    let fetch = move |request: PageRequest| {
        let Some(file) = app.pipeline.with_untracked(|p| p.file_url.clone()) else {
            let e = AppError::MissingInput("Please upload a test-case file first.".to_string());
            set_error.set(Some(e.to_string()));
            return;
        };

        set_loading.set(true);
        spawn_local(async move {
            match app.api().dissect(&file, request).await {
                Ok(response) => {
                    let count = response.data.len();
                    set_error.set(None);
                    listing.update(|l| l.apply(response));
                    if let Some(dissected) = listing.with_untracked(|l| l.processed_file_url().cloned()) {
                        app.pipeline.update(|p| p.dissected_file_url = Some(dissected));
                    }
                    app.log(LogLevel::Info, format!("Fetched {} dissected test cases", count));
                }
                Err(e) => {
                    app.log_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    on_route_query(app, Stage::Dissect, move || {
        if let Some(request) = listing.try_update(|l| l.open()) {
            fetch(request);
        }
    });

    let on_toggle = move |_| {
        if let Some(request) = listing.try_update(|l| l.toggle_show_all()) {
            fetch(request);
        }
    };

    let on_page = move |page: usize| {
        if let Some(request) = listing.try_update(|l| l.go_to(page)).flatten() {
            fetch(request);
        }
    };

    let on_continue = move |_| {
        let href = app.pipeline.with_untracked(|p| p.href(Stage::Analyse));
        navigate(&href, Default::default());
    };

    view! {
        <PageHeader title="Processed Test Cases"/>
        <Notice kind=NoticeKind::Error message=error/>

        <div class="toolbar">
            <button class="btn btn-secondary" on:click=on_toggle>
                {move || if listing.with(|l| l.show_all()) { "Show Paginated" } else { "Show All" }}
            </button>
        </div>

        <Show when=move || loading.get() fallback=|| view! { }>
            <p class="loading">"⏳ Loading test cases..."</p>
        </Show>

        <TestCaseTable rows=Signal::derive(move || listing.with(|l| l.rows().to_vec()))/>

        <Show when=move || listing.with(|l| l.shows_pagination()) fallback=|| view! { }>
            <PageControls
                pagination=Signal::derive(move || listing.with(|l| *l.pagination()))
                on_page=on_page
                first_last=true
            />
        </Show>

        {move || {
            listing
                .with(|l| l.processed_file_url().cloned())
                .map(|file| view! { <DownloadLink file=file/> })
        }}

        <div class="actions">
            <button class="btn btn-primary" on:click=on_continue>
                "Continue to Analyse Transaction"
            </button>
        </div>
    }
}
