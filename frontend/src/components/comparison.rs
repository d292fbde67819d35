//! Comparison of processed test cases: search, facet and paging happen
//! in memory over one fetched result set.

use leptos::*;

use crate::components::{DownloadLink, Notice, NoticeKind, PageControls, PageHeader};
use crate::context::{on_route_query, use_app};
use crate::state::{ComparisonBrowser, Stage};
use crate::types::{display_value, AppError, FileReference, LogLevel};

#[component]
pub fn ComparisonPage() -> impl IntoView {
    let app = use_app();
    let browser = create_rw_signal(ComparisonBrowser::default());
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (excel_path, set_excel_path) = create_signal(None::<String>);
    let (results_file, set_results_file) = create_signal(None::<FileReference>);

    let fetch = move || {
        let Some(file) = app.pipeline.with_untracked(|p| p.preprocessed_file_url.clone()) else {
            let e = AppError::MissingInput("No pre-processed file to compare.".to_string());
            set_error.set(Some(e.to_string()));
            return;
        };

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match app.api().compare(&file).await {
                Ok(response) => {
                    let results = response.comparison_results.unwrap_or_default();
                    app.log(LogLevel::Info, format!("Loaded {} comparison results", results.len()));
                    browser.update(|b| b.set_results(results));
                    set_excel_path.set(response.excel_output_path.filter(|p| !p.is_empty()));
                    set_results_file.set(response.comparison_results_file.and_then(FileReference::non_empty));
                }
                Err(e) => {
                    app.log_error(&e);
                    browser.update(|b| b.set_results(Vec::new()));
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    on_route_query(app, Stage::Compare, fetch);

    let on_search = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        browser.update(|b| b.set_search(text));
    };

    let on_type = move |ev: ev::Event| {
        let kind = event_target_value(&ev);
        browser.update(|b| b.set_transaction_type(Some(kind)));
    };

    let on_page = move |page: usize| {
        browser.update(|b| {
            b.go_to(page);
        });
    };

    let extra_columns = create_memo(move |_| browser.with(|b| b.extra_columns()));

    let rows = move || {
        let extra = extra_columns.get();
        browser.with(|b| {
            b.page()
                .into_iter()
                .map(|result| {
                    let cells = extra
                        .iter()
                        .map(|column| {
                            let text = result.extra.get(column).map(display_value).unwrap_or_default();
                            view! { <td>{text}</td> }
                        })
                        .collect_view();
                    view! {
                        <tr>
                            <td>{result.transaction_type.clone()}</td>
                            <td>{result.test_case_1.clone()}</td>
                            <td>{result.test_case_2.clone()}</td>
                            <td class="differences">{result.differences.clone()}</td>
                            {cells}
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <PageHeader title="Test Case Comparison"/>
        <Notice kind=NoticeKind::Error message=error/>

        <Show when=move || loading.get() fallback=|| view! { }>
            <p class="loading">"⏳ Loading comparison results..."</p>
        </Show>

        <div class="toolbar">
            <input
                type="text"
                class="search"
                placeholder="Search test cases..."
                prop:value=move || browser.with(|b| b.filter().search.clone())
                on:input=on_search
            />
            <select on:change=on_type>
                <option value="">"All Transaction Types"</option>
                {move || {
                    let current = browser.with(|b| b.filter().transaction_type.clone());
                    browser
                        .with(|b| b.transaction_types())
                        .into_iter()
                        .map(|kind| {
                            let selected = current.as_deref() == Some(kind.as_str());
                            view! { <option value=kind.clone() prop:selected=selected>{kind}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>

        <Show
            when=move || browser.with(|b| !b.filtered().is_empty())
            fallback=move || view! {
                <Show when=move || !loading.get() fallback=|| view! { }>
                    <p class="empty">"No comparison results found."</p>
                </Show>
            }
        >
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Transaction Type"</th>
                        <th>"Test Case 1"</th>
                        <th>"Test Case 2"</th>
                        <th>"Differences"</th>
                        {move || extra_columns.get().into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <PageControls
                pagination=Signal::derive(move || browser.with(|b| *b.pagination()))
                on_page=on_page
            />
        </Show>

        <div class="downloads">
            {move || excel_path.get().map(|path| {
                let href = app.api().media_url(&path);
                view! { <a class="download-link" href=href download="">"Download Excel Report"</a> }
            })}
            {move || results_file.get().map(|file| view! {
                <DownloadLink file=file label="Download Comparison Results"/>
            })}
        </div>
    }
}
