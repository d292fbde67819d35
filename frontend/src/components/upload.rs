//! File upload form and the upload step of the pipeline.
//!
//! Handles file selection, multipart upload to the backend, and hands the
//! returned reference to the caller.

use leptos::*;
use leptos_router::use_navigate;
use leptos::ev::SubmitEvent;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::{Notice, NoticeKind, PageHeader};
use crate::config::ACCEPTED_FILE_TYPES;
use crate::context::use_app;
use crate::services::UploadKind;
use crate::state::Stage;
use crate::types::{FileReference, LogLevel};

/// One file picker plus submit button bound to an upload endpoint.
///
/// `on_uploaded` receives the reference exactly as the server returned it.
#[component]
pub fn FileUploadForm(
    kind: UploadKind,
    #[prop(into)] on_uploaded: Callback<FileReference>,
    #[prop(default = "Upload")] button_label: &'static str,
) -> impl IntoView {
    let app = use_app();
    let (file, set_file) = create_signal(None::<File>);
    let (status, set_status) = create_signal(None::<String>);
    let (is_error, set_is_error) = create_signal(false);
    let (is_uploading, set_is_uploading) = create_signal(false);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        set_file.set(input.files().and_then(|files| files.get(0)));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let selected = match kind.require_file(file.get_untracked()) {
            Ok(selected) => selected,
            Err(e) => {
                set_is_error.set(true);
                set_status.set(Some(e.to_string()));
                return;
            }
        };

        set_is_error.set(false);
        set_status.set(Some("Uploading...".to_string()));
        set_is_uploading.set(true);

        spawn_local(async move {
            match app.api().upload(kind, &selected).await {
                Ok(reference) => {
                    app.log(
                        LogLevel::Success,
                        format!("✅ Uploaded {} as {}", selected.name(), reference),
                    );
                    set_status.set(Some("Upload successful!".to_string()));
                    on_uploaded.call(reference);
                }
                Err(e) => {
                    app.log_error(&e);
                    set_is_error.set(true);
                    set_status.set(Some(e.to_string()));
                }
            }
            set_is_uploading.set(false);
        });
    };

    let error = Signal::derive(move || status.get().filter(|_| is_error.get()));
    let info = Signal::derive(move || status.get().filter(|_| !is_error.get()));

    view! {
        <form class="upload-form" on:submit=on_submit>
            <input type="file" accept=ACCEPTED_FILE_TYPES on:change=on_file_change/>
            <button type="submit" class="btn btn-primary" disabled=move || is_uploading.get()>
                {button_label}
            </button>
            <Notice kind=NoticeKind::Error message=error/>
            <Notice kind=NoticeKind::Info message=info/>
        </form>
    }
}

/// First pipeline step: upload the test-case file, then open its dissection.
#[component]
pub fn UploadPage() -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();

    let on_uploaded = move |reference: FileReference| {
        app.pipeline.update(|pipeline| pipeline.start_over(reference));
        let href = app.pipeline.with_untracked(|pipeline| pipeline.href(Stage::Dissect));
        navigate(&href, Default::default());
    };

    view! {
        <PageHeader
            title="Test Case Upload"
            subtitle="Upload a CSV or Excel file of test cases to dissect them into individual transactions."
        />
        <section class="card">
            <FileUploadForm kind=UploadKind::TestCases on_uploaded=on_uploaded/>
        </section>
    }
}
