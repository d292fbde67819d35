//! Application Context
//!
//! Shared state provided once by [`crate::App`] via the Leptos Context API.

use leptos::*;
use leptos_router::use_query_map;

use crate::config::MAX_LOG_ENTRIES;
use crate::services::ApiClient;
use crate::state::activity::{echo_to_console, push_capped};
use crate::state::{PipelineContext, Stage};
use crate::types::{AppError, LogEntry, LogLevel};

/// App-wide signals provided via context.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// References passed between workflow steps
    pub pipeline: RwSignal<PipelineContext>,
    /// Activity log entries, oldest first
    pub logs: RwSignal<Vec<LogEntry>>,
    api: StoredValue<ApiClient>,
}

impl AppContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            pipeline: create_rw_signal(PipelineContext::default()),
            logs: create_rw_signal(Vec::new()),
            api: store_value(api),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Record an activity log entry and echo it to the console.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        let entry = LogEntry::now(level, message);
        echo_to_console(&entry);
        self.logs.update(|logs| push_capped(logs, entry, MAX_LOG_ENTRIES));
    }

    pub fn log_error(&self, error: &AppError) {
        self.log(LogLevel::Error, error.to_string());
    }

    pub fn clear_logs(&self) {
        self.logs.set(Vec::new());
    }
}

/// The context provided by `App`.
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// Merge the route query into the pipeline context for `stage`, then run
/// `on_change`. Runs on mount and again whenever the query changes.
///
/// Must be called from a component body.
pub fn on_route_query<F>(app: AppContext, stage: Stage, on_change: F)
where
    F: Fn() + 'static,
{
    let query = use_query_map();
    create_effect(move |_| {
        let params = query.get();
        app.pipeline
            .update(|pipeline| pipeline.absorb_query(stage, |key| params.get(key).cloned()));
        on_change();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_records_in_activity_panel() {
        let runtime = create_runtime();
        let app = AppContext::new(ApiClient::default());

        app.log(LogLevel::Info, "🏷️ Processing labels for /media/a.csv with /media/meta.xlsx");
        app.log_error(&AppError::NoData("processed data".to_string()));

        app.logs.with_untracked(|logs| {
            assert_eq!(logs.len(), 2);
            assert_eq!(logs[0].level, LogLevel::Info);
            assert!(logs[0].message.starts_with("🏷️ Processing labels"));
            assert_eq!(logs[1].message, "No processed data found.");
        });

        app.clear_logs();
        assert!(app.logs.with_untracked(|logs| logs.is_empty()));
        runtime.dispose();
    }
}
