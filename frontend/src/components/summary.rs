//! Transaction summary editor.
//!
//! Lets the user pick a baseline target for every mapped and unmapped
//! transaction, then saves the whole mapping as one synonym list.

use leptos::*;

use crate::components::{DownloadLink, Notice, NoticeKind};
use crate::context::use_app;
use crate::state::{MappingGroup, Stage, SummaryEditor};
use crate::types::{AppError, FileReference, LogLevel};

#[component]
pub fn TransactionSummaryEditor() -> impl IntoView {
    let app = use_app();
    let editor = create_rw_signal(SummaryEditor::default());
    let (error, set_error) = create_signal(None::<String>);
    let (message, set_message) = create_signal(None::<String>);
    let (updated_csv, set_updated_csv) = create_signal(None::<FileReference>);
    let (summary_file, set_summary_file) = create_signal(None::<FileReference>);

    let fetch_summary = move |metadata: FileReference, processed: FileReference| {
        set_error.set(None);
        spawn_local(async move {
            match app.api().transaction_summary(&metadata, &processed).await {
                Ok(summary) => {
                    app.log(
                        LogLevel::Info,
                        format!(
                            "Loaded summary: {} mapped, {} unmapped",
                            summary.mapped.len(),
                            summary.unmapped.len()
                        ),
                    );
                    editor.set(SummaryEditor::from(summary));
                }
                Err(e) => {
                    app.log_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let summary_keys = create_memo(move |_| {
        app.pipeline
            .with(|p| (p.metadata_url.clone(), p.labelled_file_url.clone()))
    });

    create_effect(move |_| {
        if let (Some(metadata), Some(processed)) = summary_keys.get() {
            fetch_summary(metadata, processed);
        }
    });

    let on_save = move |_| {
        let (csv_file, metadata, processed) = app.pipeline.with_untracked(|p| {
            (
                p.continue_reference(Stage::Dissect).cloned(),
                p.metadata_url.clone(),
                p.labelled_file_url.clone(),
            )
        });
        let (Some(csv_file), Some(metadata)) = (csv_file, metadata) else {
            let e = AppError::MissingInput("Both a dissected file and a metadata file are required.".to_string());
            set_error.set(Some(e.to_string()));
            return;
        };
        let synonyms = editor.with_untracked(|e| e.synonyms());

        set_error.set(None);
        spawn_local(async move {
            let count = synonyms.len();
            match app.api().update_transaction_summary(&csv_file, &metadata, synonyms).await {
                Ok(response) => {
                    app.log(LogLevel::Success, format!("✅ Saved {} transaction mappings", count));
                    let text = if response.message.is_empty() {
                        "Summary updated successfully.".to_string()
                    } else {
                        response.message
                    };
                    set_message.set(Some(text));
                    set_updated_csv.set(response.updated_csv.and_then(FileReference::non_empty));
                    set_summary_file.set(response.processed_file_url.and_then(FileReference::non_empty));
                    if let Some(processed) = processed {
                        fetch_summary(metadata, processed);
                    }
                }
                Err(e) => {
                    app.log_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let group_table = move |group: MappingGroup| {
        let has_rows = move || editor.with(|e| !e.entries(group).is_empty());
        view! {
            <div class="mapping-group">
                <h3>{group.label()} " Transactions"</h3>
                <Show
                    when=has_rows
                    fallback=move || view! {
                        <p>"No " {group.label().to_lowercase()} " transactions available."</p>
                    }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Transaction"</th>
                                <th>"Count"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || {
                                    editor.with(|e| e.entries(group).iter().cloned().enumerate().collect::<Vec<_>>())
                                }
                                key=|(idx, entry)| (*idx, entry.transaction.clone())
                                children=move |(idx, entry)| {
                                    let selected = move || {
                                        editor.with(|e| {
                                            e.entries(group)
                                                .get(idx)
                                                .map(|row| row.effective_target().to_string())
                                                .unwrap_or_default()
                                        })
                                    };
                                    let on_change = move |ev: ev::Event| {
                                        let target = event_target_value(&ev);
                                        editor.update(|e| {
                                            e.select_target(group, idx, target);
                                        });
                                    };
                                    view! {
                                        <tr>
                                            <td>{entry.transaction.clone()}</td>
                                            <td>{entry.count}</td>
                                            <td>
                                                <select prop:value=selected on:change=on_change>
                                                    <option value="">"-- Select Transaction --"</option>
                                                    {move || {
                                                        editor
                                                            .with(|e| e.baselined().to_vec())
                                                            .into_iter()
                                                            .map(|name| {
                                                                let value = name.clone();
                                                                let is_selected = move || selected() == value;
                                                                view! {
                                                                    <option value=name.clone() prop:selected=is_selected>
                                                                        {name}
                                                                    </option>
                                                                }
                                                            })
                                                            .collect_view()
                                                    }}
                                                </select>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>
        }
    };

    view! {
        <section class="card summary-editor">
            <h2>"Transaction Summary Editor"</h2>
            <Notice kind=NoticeKind::Error message=error/>
            <Notice kind=NoticeKind::Success message=message/>

            {MappingGroup::ALL.into_iter().map(group_table).collect_view()}

            <div class="actions">
                <button class="btn btn-primary" on:click=on_save>"Save Updated Summary"</button>
            </div>

            {move || updated_csv.get().map(|file| view! {
                <DownloadLink file=file label="Download Updated CSV"/>
            })}
            {move || summary_file.get().map(|file| view! {
                <DownloadLink file=file label="Download Summary File"/>
            })}
        </section>
    }
}
