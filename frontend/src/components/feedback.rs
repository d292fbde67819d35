//! Feedback grid: upload a feedback file, edit its rows in place, save them back.

use leptos::*;
use web_sys::{File, HtmlInputElement};

use crate::components::{Notice, NoticeKind, PageHeader};
use crate::config::ACCEPTED_FILE_TYPES;
use crate::context::use_app;
use crate::services::UploadKind;
use crate::state::FeedbackGrid;
use crate::types::LogLevel;

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let app = use_app();
    let grid = create_rw_signal(FeedbackGrid::default());
    let (file, set_file) = create_signal(None::<File>);
    let (error, set_error) = create_signal(None::<String>);
    let (status, set_status) = create_signal(None::<String>);
    let (busy, set_busy) = create_signal(false);

    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        set_file.set(input.files().and_then(|files| files.get(0)));
    };

    let on_upload = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let selected = match UploadKind::Feedback.require_file(file.get_untracked()) {
            Ok(selected) => selected,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_error.set(None);
        set_status.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match app.api().upload_feedback(&selected).await {
                Ok(rows) => {
                    app.log(
                        LogLevel::Success,
                        format!("✅ Loaded {} feedback rows from {}", rows.len(), selected.name()),
                    );
                    grid.set(FeedbackGrid::new(rows));
                }
                Err(e) => {
                    app.log_error(&e);
                    grid.set(FeedbackGrid::default());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    let on_save = move |_| {
        let rows = grid.with_untracked(|g| g.rows().to_vec());
        set_error.set(None);
        set_status.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match app.api().save_feedback(&rows).await {
                Ok(ack) => {
                    let text = ack.message_or("Feedback saved successfully.");
                    app.log(LogLevel::Success, format!("✅ {}", text));
                    set_status.set(Some(text));
                }
                Err(e) => {
                    app.log_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    let columns = create_memo(move |_| grid.with(|g| g.columns()));
    let row_count = create_memo(move |_| grid.with(|g| g.rows().len()));

    let cell_input = move |row: usize, column: String| {
        let value = {
            let column = column.clone();
            move || grid.with(|g| g.cell(row, &column))
        };
        let on_input = move |ev: ev::Event| {
            let text = event_target_value(&ev);
            grid.update(|g| {
                g.set_cell(row, &column, text);
            });
        };
        view! { <td><input type="text" prop:value=value on:input=on_input/></td> }
    };

    view! {
        <PageHeader title="Feedback" subtitle="Upload a feedback file, edit the rows and save them."/>
        <Notice kind=NoticeKind::Error message=error/>
        <Notice kind=NoticeKind::Success message=status/>

        <section class="card">
            <form class="upload-form" on:submit=on_upload>
                <input type="file" accept=ACCEPTED_FILE_TYPES on:change=on_file_change/>
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    "Upload Feedback"
                </button>
            </form>
        </section>

        <Show when={move || row_count.get() > 0} fallback=|| view! { }>
            <section class="card">
                <table class="data-table feedback-grid">
                    <thead>
                        <tr>
                            {move || columns.get().into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each={move || (0..row_count.get()).map(|row| (row, columns.get())).collect::<Vec<_>>()}
                            key=|(row, columns)| (*row, columns.join("\u{1f}"))
                            children=move |(row, columns)| {
                                view! {
                                    <tr>
                                        {columns
                                            .into_iter()
                                            .map(|column| cell_input(row, column))
                                            .collect_view()}
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>
        </Show>

        <div class="actions">
            <button class="btn btn-primary" on:click=on_save disabled=move || busy.get()>
                "Save Feedback"
            </button>
        </div>
    }
}
