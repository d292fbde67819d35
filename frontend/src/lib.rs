//! Caseflow - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend driving a test-case analysis backend through a
//! six step workflow: upload, dissect, analyse, pre-process, compare and
//! feedback.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (workflow navigation)                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /                        UploadPage                    │
//! │  ├── /dissect-test-cases      DissectPage                   │
//! │  ├── /analyse-transaction     AnalysePage                   │
//! │  ├── /preprocess-test-cases   PreProcessPage                │
//! │  ├── /compare-test-cases      ComparisonPage                │
//! │  └── /feedback                FeedbackPage                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LogsPanel · Footer                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Domain and API types, errors
//! - [`state`] - DOM-independent view state (pagination, filters, pipeline)
//! - [`context`] - App-wide signals shared through the Context API
//! - [`components`] - UI components and pages
//! - [`services`] - Backend communication (JSON endpoints, uploads)

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod context;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // References
    FileReference,
    // Rows
    ComparisonResult, FeedbackRow, TestCaseRow, TransactionMappingEntry,
    // Logs
    LogEntry, LogLevel,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::{ApiClient, UploadKind};

// State
pub use context::AppContext;
pub use state::{PipelineContext, Stage};

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppContext::new(ApiClient::default()));

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route path=Stage::Upload.path() view=UploadPage/>
                    <Route path=Stage::Dissect.path() view=DissectPage/>
                    <Route path=Stage::Analyse.path() view=AnalysePage/>
                    <Route path=Stage::PreProcess.path() view=PreProcessPage/>
                    <Route path=Stage::Compare.path() view=ComparisonPage/>
                    <Route path=Stage::Feedback.path() view=FeedbackPage/>
                </Routes>
                <LogsPanel/>
            </main>
        </Router>
        <Footer/>
    }
}
