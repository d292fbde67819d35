//! Test-case table and page navigation shared by the listing views.

use leptos::*;

use crate::state::PaginationState;
use crate::types::TestCaseRow;

/// Read-only table of test cases.
#[component]
pub fn TestCaseTable(#[prop(into)] rows: Signal<Vec<TestCaseRow>>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Test ID"</th>
                    <th>"Description"</th>
                    <th>"Transaction"</th>
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! { <tr><td colspan="3">"No records found."</td></tr> }
                >
                    <For
                        each=move || rows.get().into_iter().enumerate()
                        key=|(idx, row)| (*idx, row.test_case_id.clone())
                        children=move |(_, row)| {
                            view! {
                                <tr>
                                    <td>{row.test_case_id}</td>
                                    <td>{row.description}</td>
                                    <td>{row.transactions}</td>
                                </tr>
                            }
                        }
                    />
                </Show>
            </tbody>
        </table>
    }
}

/// Page navigation. `on_page` receives the requested page; range checks
/// are left to the caller's [`PaginationState`].
#[component]
pub fn PageControls(
    #[prop(into)] pagination: Signal<PaginationState>,
    #[prop(into)] on_page: Callback<usize>,
    /// Also show First/Last buttons
    #[prop(optional)]
    first_last: bool,
) -> impl IntoView {
    let current = move || pagination.with(|p| p.current_page());
    let is_first = move || pagination.with(|p| p.is_first());
    let is_last = move || pagination.with(|p| p.is_last());

    view! {
        <div class="pagination">
            <Show when=move || first_last fallback=|| view! { }>
                <button on:click=move |_| on_page.call(1) disabled=is_first>"First"</button>
            </Show>
            <button on:click=move |_| on_page.call(current().saturating_sub(1)) disabled=is_first>
                "Previous"
            </button>
            <span class="page-label">{move || pagination.with(|p| p.label())}</span>
            <button on:click=move |_| on_page.call(current() + 1) disabled=is_last>
                "Next"
            </button>
            <Show when=move || first_last fallback=|| view! { }>
                <button
                    on:click=move |_| on_page.call(pagination.with(|p| p.total_pages()))
                    disabled=is_last
                >
                    "Last"
                </button>
            </Show>
        </div>
    }
}
