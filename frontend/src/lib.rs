//! Legal Docs - Frontend Rust/Leptos Widgets
//!
//! Two leaf components for a legal document application, plus the page
//! that composes them:
//!
//! - [`DocumentUpload`] accepts a file by drag & drop or file picker and
//!   hands it to the caller.
//! - [`DocumentPreviewModal`] shows a document in an overlay with
//!   download, open-in-new-tab and close controls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App                                                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero                                                        │
//! │  MainContent                                                 │
//! │  ├── DocumentUpload        (is_analyzing owned here)        │
//! │  └── LegalDisclaimer ──▶ DocumentPreviewModal (is_open)     │
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Presentation state, document reference, errors
//! - [`components`] - UI components
//! - [`services`] - Browser capabilities (download, new tab)

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Upload
    UploadVisual, DocumentKind, DragEventKind,
    // Documents
    DocumentReference,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 Legal Docs - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
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
    // Flags owned here, only read by the widgets
    let (uploaded_name, set_uploaded_name) = create_signal(None::<String>);
    let (is_analyzing, set_is_analyzing) = create_signal(false);
    let (preview_open, set_preview_open) = create_signal(false);
    let (preview_doc, set_preview_doc) = create_signal(DocumentReference::new("", ""));

    let on_upload = move |file: File| {
        set_uploaded_name.set(Some(file.name()));
        set_is_analyzing.set(true);

        // Stand-in for the real analysis
        spawn_local(async move {
            TimeoutFuture::new(ANALYSIS_SIMULATION_MS).await;
            set_is_analyzing.set(false);
            log::info!("✅ Analysis finished");
        });
    };

    let on_open_document = move |doc: DocumentReference| {
        log::info!("📖 Previewing {}", doc.title);
        set_preview_doc.set(doc);
        set_preview_open.set(true);
    };

    view! {
        <Hero/>

        <div class="container">
            <section class="upload-section">
                <h2>"Upload Your Legal Document"</h2>
                <p class="section-hint">
                    "Start by uploading any legal document to get instant AI-powered analysis"
                </p>
                <DocumentUpload on_upload=on_upload is_analyzing=is_analyzing/>

                <Show
                    when=move || uploaded_name.get().is_some()
                    fallback=|| view! { }
                >
                    <p class="upload-summary">
                        {move || if is_analyzing.get() { "Analyzing " } else { "Analyzed " }}
                        <strong>{move || uploaded_name.get().unwrap_or_default()}</strong>
                    </p>
                </Show>
            </section>

            <LegalDisclaimer on_open_document=on_open_document/>
        </div>

        <DocumentPreviewModal
            is_open=preview_open
            on_close=move |_: ()| set_preview_open.set(false)
            title=Signal::derive(move || preview_doc.with(|d| d.title.clone()))
            pdf_url=Signal::derive(move || preview_doc.with(|d| d.pdf_url.clone()))
        />

        <Footer/>
    }
}
