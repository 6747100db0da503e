//! Legal disclaimer with links to the policy documents.

use leptos::*;

use crate::config::{PRIVACY_POLICY_URL, TERMS_OF_SERVICE_URL};
use crate::DocumentReference;

#[component]
pub fn LegalDisclaimer(
    /// Called with the document a link points to
    #[prop(into)]
    on_open_document: Callback<DocumentReference>,
) -> impl IntoView {
    let links = [
        ("Privacy Policy", PRIVACY_POLICY_URL),
        ("Terms of Service", TERMS_OF_SERVICE_URL),
    ];

    view! {
        <div class="disclaimer">
            <div class="disclaimer-alert">
                "⚠️ "
                <strong>"Important Legal Disclaimer:"</strong>
                " This AI assistant provides informational analysis only and does not constitute legal advice. "
                "Always consult with a qualified attorney for legal decisions."
            </div>
            <div class="disclaimer-links">
                {links
                    .into_iter()
                    .map(move |(title, url)| view! {
                        <button
                            class="btn-link"
                            on:click=move |_| on_open_document.call(DocumentReference::new(title, url))
                        >
                            {title} " ↗"
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
