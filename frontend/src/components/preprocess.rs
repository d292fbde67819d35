//! Pre-processing of mapped or unmapped transactions, with a locally
//! paginated preview of the result.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::{DownloadLink, Notice, NoticeKind, PageControls, PageHeader, TestCaseTable};
use crate::config::PREPROCESS_RESULTS_PER_PAGE;
use crate::context::{on_route_query, use_app};
use crate::state::{PaginationState, Stage};
use crate::types::{FileReference, LogLevel, TestCaseRow, TransactionType};

#[component]
pub fn PreProcessPage() -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();
    on_route_query(app, Stage::PreProcess, || {});

    let (message, set_message) = create_signal(None::<String>);
    let (error, set_error) = create_signal(None::<String>);
    let (show_results, set_show_results) = create_signal(false);
    let results = create_rw_signal(Vec::<TestCaseRow>::new());
    let pagination = create_rw_signal(PaginationState::new(PREPROCESS_RESULTS_PER_PAGE));

    let processed = create_memo(move |_| app.pipeline.with(|p| p.preprocessed_file_url.clone()));

    let run = move |transaction_type: TransactionType| {
        set_error.set(None);
        spawn_local(async move {
            match app.api().pre_process(transaction_type).await {
                Ok(response) => {
                    app.log(
                        LogLevel::Success,
                        format!("✅ Pre-processed {} transactions", transaction_type.label().to_lowercase()),
                    );
                    set_message.set(Some(response.message));
                    let file = response.processed_file_url.and_then(FileReference::non_empty);
                    app.pipeline.update(|p| p.preprocessed_file_url = file);
                    set_show_results.set(false);
                    results.set(Vec::new());
                }
                Err(e) => {
                    app.log_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let on_show_results = move |_| {
        set_show_results.set(true);
        let Some(file) = processed.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match app.api().processed_test_cases(&file).await {
                Ok(rows) => {
                    app.log(LogLevel::Info, format!("Fetched {} processed test cases", rows.len()));
                    pagination.set(PaginationState::for_items(rows.len(), PREPROCESS_RESULTS_PER_PAGE));
                    results.set(rows);
                }
                Err(e) => {
                    app.log_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let on_page = move |page: usize| {
        pagination.update(|p| {
            p.go_to(page);
        });
    };

    let on_compare = move |_| {
        let href = app.pipeline.with_untracked(|p| p.href(Stage::Compare));
        navigate(&href, Default::default());
    };

    let page_rows = Signal::derive(move || pagination.with(|p| results.with(|rows| p.page_of(rows).to_vec())));

    view! {
        <PageHeader title="Pre-Processing Test Cases"/>
        <Notice kind=NoticeKind::Error message=error/>
        <Notice kind=NoticeKind::Success message=message/>

        <div class="toolbar">
            <button class="btn btn-primary" on:click=move |_| run(TransactionType::Mapped)>
                "Process Mapped Transactions"
            </button>
            <button class="btn btn-primary" on:click=move |_| run(TransactionType::Unmapped)>
                "Process Unmapped Transactions"
            </button>
        </div>

        {move || processed.get().map(|file| view! {
            <section class="card">
                <p>"Download Processed File:"</p>
                <DownloadLink file=file label="Download Processed Test Cases"/>
                <div class="actions">
                    <button class="btn btn-secondary" on:click=on_show_results>"Show Results"</button>
                </div>
            </section>
        })}

        <Show
            when=move || show_results.get() && results.with(|r| !r.is_empty())
            fallback=|| view! { }
        >
            <section class="card">
                <h3>"Processed Test Cases"</h3>
                <TestCaseTable rows=page_rows/>
                <PageControls pagination=pagination on_page=on_page/>
            </section>
        </Show>

        <Show when=move || processed.with(|p| p.is_some()) fallback=|| view! { }>
            <div class="actions">
                <button class="btn btn-primary" on:click=on_compare.clone()>"Compare Test Cases"</button>
            </div>
        </Show>
    }
}
