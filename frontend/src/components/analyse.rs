//! Label processing step.
//!
//! Picks the dissected file (the one carried over from the previous step or
//! a freshly uploaded one), uploads the metadata file, runs label processing
//! and then opens the summary editor on the result.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::{DownloadLink, FileUploadForm, Notice, NoticeKind, PageHeader, TransactionSummaryEditor};
use crate::context::{on_route_query, use_app};
use crate::services::UploadKind;
use crate::state::Stage;
use crate::types::{AppError, FileReference, LogLevel};

#[component]
pub fn AnalysePage() -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();
    on_route_query(app, Stage::Analyse, || {});

    let (use_auto_file, set_use_auto_file) = create_signal(true);
    let (manual_file, set_manual_file) = create_signal(None::<FileReference>);
    let (is_processing, set_is_processing) = create_signal(false);
    let (message, set_message) = create_signal(None::<String>);
    let (error, set_error) = create_signal(None::<String>);

    let auto_file = create_memo(move |_| {
        app.pipeline
            .with(|p| p.continue_reference(Stage::Dissect).cloned())
    });
    let metadata = create_memo(move |_| app.pipeline.with(|p| p.metadata_url.clone()));
    let labelled = create_memo(move |_| app.pipeline.with(|p| p.labelled_file_url.clone()));

    let on_metadata_uploaded = move |reference: FileReference| {
        set_error.set(None);
        app.pipeline.update(|p| p.metadata_url = Some(reference));
    };

    let on_dissected_uploaded = move |reference: FileReference| {
        set_error.set(None);
        set_manual_file.set(Some(reference));
    };

    let on_process = move |_| {
        let Some(metadata_url) = metadata.get_untracked() else {
            set_error.set(Some(
                AppError::MissingInput("Please upload a metadata file first.".to_string()).to_string(),
            ));
            return;
        };
        let source = if use_auto_file.get_untracked() {
            auto_file.get_untracked()
        } else {
            manual_file.get_untracked()
        };
        let Some(source) = source else {
            set_error.set(Some(
                AppError::MissingInput(
                    "Please upload a dissected file or use the auto-populated file.".to_string(),
                )
                .to_string(),
            ));
            return;
        };

        set_is_processing.set(true);
        set_error.set(None);
        set_message.set(None);
        app.log(LogLevel::Info, format!("🏷️ Processing labels for {} with {}", source, metadata_url));

        spawn_local(async move {
            match app.api().process_labels(&source, &metadata_url).await {
                Ok(response) => {
                    let text = if response.message.is_empty() {
                        "Labels processed successfully".to_string()
                    } else {
                        response.message
                    };
                    app.log(LogLevel::Success, format!("✅ {}", text));
                    set_message.set(Some(text));
                    let processed = response.processed_file_url.and_then(FileReference::non_empty);
                    app.pipeline.update(|p| {
                        p.dissected_file_url = Some(source);
                        p.labelled_file_url = processed;
                    });
                }
                Err(e) => {
                    app.log_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_processing.set(false);
        });
    };

    let on_continue = move |_| {
        let href = app.pipeline.with_untracked(|p| p.href(Stage::PreProcess));
        navigate(&href, Default::default());
    };

    view! {
        <PageHeader
            title="Analyse Transaction"
            subtitle="Upload metadata and analyse transactions from your dissected test cases."
        />
        <Notice kind=NoticeKind::Error message=error/>

        <section class="card">
            <h2>"Dissected File"</h2>
            <label class="radio">
                <input
                    type="radio"
                    name="dissected-file-option"
                    prop:checked=move || use_auto_file.get()
                    on:change=move |_| set_use_auto_file.set(true)
                />
                "Use Auto-populated File "
                <span class="hint">
                    "(" {move || auto_file.get().map(|f| f.to_string()).unwrap_or_default()} ")"
                </span>
            </label>
            <label class="radio">
                <input
                    type="radio"
                    name="dissected-file-option"
                    prop:checked=move || !use_auto_file.get()
                    on:change=move |_| {
                        set_use_auto_file.set(false);
                        set_manual_file.set(None);
                    }
                />
                "Upload New Dissected File"
            </label>
            <Show when=move || !use_auto_file.get() fallback=|| view! { }>
                <FileUploadForm kind=UploadKind::TestCases on_uploaded=on_dissected_uploaded/>
                {move || manual_file.get().map(|f| view! { <p class="hint">"Using " {f.to_string()}</p> })}
            </Show>
        </section>

        <section class="card">
            <h2>"Upload Metadata File"</h2>
            <FileUploadForm
                kind=UploadKind::Metadata
                on_uploaded=on_metadata_uploaded
                button_label="Upload Metadata"
            />
            <Show when=move || metadata.with(|m| m.is_some()) fallback=|| view! { }>
                <p class="success-message">"✓ Metadata file uploaded successfully"</p>
            </Show>
        </section>

        <section class="card">
            <button
                class="btn btn-primary"
                on:click=on_process
                disabled=move || metadata.with(|m| m.is_none()) || is_processing.get()
            >
                {move || if is_processing.get() { "Processing Labels..." } else { "Process Labels" }}
            </button>
            <Notice kind=NoticeKind::Success message=message/>
        </section>

        {move || labelled.get().map(|file| view! {
            <section class="card">
                <p>"Download the processed summary:"</p>
                <DownloadLink file=file label="Download Results"/>
            </section>
        })}

        <Show when=move || labelled.with(|l| l.is_some()) fallback=|| view! { }>
            <TransactionSummaryEditor/>
            <div class="actions">
                <button class="btn btn-primary" on:click=on_continue.clone()>"Continue"</button>
            </div>
        </Show>
    }
}
