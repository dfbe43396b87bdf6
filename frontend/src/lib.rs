//! Resume Extractor - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a résumé to the extraction API and
//! shows the extracted fields next to the history of past uploads.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (file picker, upload button)             │
//! │  ├── LatestResult (after a successful upload)               │
//! │  └── HistorySection (collapsible past uploads)              │
//! └─────────────────────────────────────────────────────────────┘
//!          │ events                         ▲ signal
//!          ▼                                │
//!     controller ──▶ ResumeApi (gloo-net) ──┘ AppState
//! ```
//!
//! # Modules
//!
//! - [`config`] - API base URL and endpoint paths
//! - [`types`] - ExtractionResult, FileInfo, AppError
//! - [`state`] - Page state and its update functions
//! - [`controller`] - Upload and history orchestration
//! - [`diagnostics`] - Structured failure reports
//! - [`render`] - Display model for results
//! - [`components`] - UI components
//! - [`services`] - Backend communication and alerts

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod diagnostics;
pub mod controller;
pub mod render;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::ApiConfig;

// Types
pub use types::{
    // API
    ExtractionResult,
    // Files
    FileInfo,
    // Errors
    AppError, AppResult, ResponseDetails,
};

// State
pub use state::{AppState, PageState, SelectedFile, StateStore, UploadPhase};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Set up logging and mount the application.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("📄 Resume Skill Extractor - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Resume Skill Extractor"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let state: PageState = create_rw_signal(AppState::new());
    let api = HttpResumeApi::new(ApiConfig::from_env());

    log::info!("API base URL: {}", api.config().api_base());

    // Load past uploads once on mount
    {
        let api = api.clone();
        spawn_local(async move {
            controller::fetch_history(&api, &state).await;
        });
    }

    view! {
        <div class="container">
            <Hero/>
            <UploadSection state=state api=api/>
            <LatestResult state=state/>
            <HistorySection state=state/>
        </div>
    }
}
